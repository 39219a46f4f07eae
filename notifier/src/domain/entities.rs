//! Domain entities
//!
//! Everything here is built from a single event payload and discarded once
//! the invocation finishes.

/// A classified pull-request lifecycle event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ReviewRequested(ReviewRequest),
    ReviewSubmitted(ReviewSubmission),
    /// Event/action combinations the notifier does not handle.
    Ignored,
}

/// Who a review was requested from
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewTarget {
    /// A single named reviewer login.
    Reviewer(String),
    /// A team slug to be expanded into individual members.
    Team(String),
}

/// A review-requested event, validated but not yet expanded
///
/// `requester` is the PR author's login; it doubles as the exclusion key
/// during team expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub title: String,
    pub url: String,
    pub organization: String,
    pub requester: String,
    pub target: ReviewTarget,
}

/// A submitted review on a pull request
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub title: String,
    pub url: String,
    pub organization: String,
    pub pr_owner: String,
    pub reviewer: String,
    pub state: ReviewState,
}

/// Review verdict, normalized from the raw payload string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    /// Anything the platform sends that we do not recognize.
    Other,
}

impl ReviewState {
    /// Parse a raw review-state string, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "approved" => ReviewState::Approved,
            "changes_requested" => ReviewState::ChangesRequested,
            "commented" => ReviewState::Commented,
            _ => ReviewState::Other,
        }
    }

    /// Verb phrase for the message header. Total over all states.
    pub fn verb(&self) -> &'static str {
        match self {
            ReviewState::Approved => "has approved",
            ReviewState::ChangesRequested => "has requested changes on",
            ReviewState::Commented | ReviewState::Other => "has commented on",
        }
    }
}

/// Outcome of a display-name resolution
///
/// A directory or chat lookup miss degrades to the raw source-control
/// handle instead of blocking the message, so the fallback is a modeled
/// outcome rather than a swallowed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayName {
    Resolved(String),
    Fallback(String),
}

impl DisplayName {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayName::Resolved(name) => name,
            DisplayName::Fallback(handle) => handle,
        }
    }
}
