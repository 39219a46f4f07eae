//! Test fixtures
//!
//! Factory functions for events and payloads with sensible defaults.

use crate::domain::entities::{ReviewRequest, ReviewState, ReviewSubmission, ReviewTarget};

/// Review request targeting a single reviewer
pub fn review_request_for_reviewer(author: &str, reviewer: &str) -> ReviewRequest {
    ReviewRequest {
        title: "Fix bug".to_string(),
        url: "https://x/1".to_string(),
        organization: "acme".to_string(),
        requester: author.to_string(),
        target: ReviewTarget::Reviewer(reviewer.to_string()),
    }
}

/// Review request targeting a team in the "acme" organization
pub fn review_request_for_team(author: &str, slug: &str) -> ReviewRequest {
    ReviewRequest {
        title: "Fix bug".to_string(),
        url: "https://x/1".to_string(),
        organization: "acme".to_string(),
        requester: author.to_string(),
        target: ReviewTarget::Team(slug.to_string()),
    }
}

/// Submitted review on the default PR
pub fn review_submission(owner: &str, reviewer: &str, state: ReviewState) -> ReviewSubmission {
    ReviewSubmission {
        title: "Fix bug".to_string(),
        url: "https://x/1".to_string(),
        organization: "acme".to_string(),
        pr_owner: owner.to_string(),
        reviewer: reviewer.to_string(),
        state,
    }
}

/// Raw review-requested payload JSON, as the trigger delivers it
pub fn review_requested_payload(author: &str, reviewer: &str) -> String {
    serde_json::json!({
        "action": "review_requested",
        "pull_request": {
            "title": "Fix bug",
            "html_url": "https://x/1",
            "user": { "login": author }
        },
        "requested_reviewer": { "login": reviewer },
        "organization": { "login": "acme" }
    })
    .to_string()
}

/// Raw team review-requested payload JSON
pub fn team_review_requested_payload(author: &str, slug: &str) -> String {
    serde_json::json!({
        "action": "review_requested",
        "pull_request": {
            "title": "Fix bug",
            "html_url": "https://x/1",
            "user": { "login": author }
        },
        "requested_team": { "slug": slug },
        "organization": { "login": "acme" }
    })
    .to_string()
}

/// Raw review-submitted payload JSON
pub fn review_submitted_payload(owner: &str, reviewer: &str, state: &str) -> String {
    serde_json::json!({
        "action": "submitted",
        "pull_request": {
            "title": "Fix bug",
            "html_url": "https://x/1",
            "user": { "login": owner }
        },
        "review": {
            "user": { "login": reviewer },
            "state": state
        },
        "organization": { "login": "acme" }
    })
    .to_string()
}
