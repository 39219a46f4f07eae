//! Event classification
//!
//! Parses the trigger's raw payload and selects which handling routine
//! runs. Unsupported event/action pairs are ignored; a matched pair with
//! missing required fields aborts the invocation up front instead of
//! failing deep inside handler logic.

use serde::Deserialize;

use crate::domain::entities::{Event, ReviewRequest, ReviewState, ReviewSubmission, ReviewTarget};
use crate::error::NotifyError;

/// Raw trigger payload
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
    #[serde(default)]
    pub requested_reviewer: Option<User>,
    #[serde(default)]
    pub requested_team: Option<Team>,
    #[serde(default)]
    pub review: Option<Review>,
    #[serde(default)]
    pub organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Team {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Organization {
    pub login: String,
}

/// Classify an event name/action pair and its payload.
pub fn classify(event_name: &str, payload: &EventPayload) -> Result<Event, NotifyError> {
    match (event_name, payload.action.as_deref()) {
        ("pull_request", Some("review_requested")) => {
            review_requested(payload).map(Event::ReviewRequested)
        }
        ("pull_request_review", Some("submitted")) => {
            review_submitted(payload).map(Event::ReviewSubmitted)
        }
        _ => {
            tracing::debug!(
                event = %event_name,
                action = ?payload.action,
                "unhandled event/action pair"
            );
            Ok(Event::Ignored)
        }
    }
}

fn shape(field: &str) -> NotifyError {
    NotifyError::PayloadShape(field.to_string())
}

fn pull_request_fields(payload: &EventPayload) -> Result<(String, String, String), NotifyError> {
    let pr = payload.pull_request.as_ref().ok_or_else(|| shape("pull_request"))?;
    let title = pr.title.clone().ok_or_else(|| shape("pull_request.title"))?;
    let url = pr
        .html_url
        .clone()
        .ok_or_else(|| shape("pull_request.html_url"))?;
    let author = pr
        .user
        .as_ref()
        .map(|u| u.login.clone())
        .ok_or_else(|| shape("pull_request.user.login"))?;
    Ok((title, url, author))
}

fn organization(payload: &EventPayload) -> Result<String, NotifyError> {
    payload
        .organization
        .as_ref()
        .map(|o| o.login.clone())
        .ok_or_else(|| shape("organization.login"))
}

fn review_requested(payload: &EventPayload) -> Result<ReviewRequest, NotifyError> {
    let (title, url, requester) = pull_request_fields(payload)?;
    let organization = organization(payload)?;

    let target = if let Some(reviewer) = &payload.requested_reviewer {
        ReviewTarget::Reviewer(reviewer.login.clone())
    } else if let Some(team) = &payload.requested_team {
        ReviewTarget::Team(team.slug.clone())
    } else {
        return Err(shape("requested_reviewer or requested_team"));
    };

    Ok(ReviewRequest {
        title,
        url,
        organization,
        requester,
        target,
    })
}

fn review_submitted(payload: &EventPayload) -> Result<ReviewSubmission, NotifyError> {
    let (title, url, pr_owner) = pull_request_fields(payload)?;
    let organization = organization(payload)?;

    let review = payload.review.as_ref().ok_or_else(|| shape("review"))?;
    let reviewer = review
        .user
        .as_ref()
        .map(|u| u.login.clone())
        .ok_or_else(|| shape("review.user.login"))?;
    let state = review
        .state
        .as_deref()
        .map(ReviewState::parse)
        .ok_or_else(|| shape("review.state"))?;

    Ok(ReviewSubmission {
        title,
        url,
        organization,
        pr_owner,
        reviewer,
        state,
    })
}
