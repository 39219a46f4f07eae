//! Error types for the notifier
//!
//! One enum per external client plus the pipeline-level taxonomy:
//! - `DirectoryError`: Okta directory client errors
//! - `ChatError`: Slack client errors
//! - `TeamError`: GitHub team-membership client errors
//! - `IdentityError`: either stage of a single identity resolution
//! - `NotifyError`: pipeline errors surfaced to the invoking process

use thiserror::Error;

/// Identity-directory (Okta) client errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no directory profile matches handle: {0}")]
    ProfileNotFound(String),

    #[error("directory profile for {0} has no email address")]
    MissingEmail(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Messaging-platform (Slack) client errors
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("no chat user found for email: {0}")]
    UserNotFound(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Team-membership (GitHub) client errors
#[derive(Debug, Error)]
pub enum TeamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("team not found: {org}/{slug}")]
    TeamNotFound { org: String, slug: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Failure in either stage of an identity resolution
///
/// Stage one hits the directory, stage two the chat platform; the caller
/// decides whether the failure is fatal or degrades to a fallback.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Chat(#[from] ChatError),
}

/// Pipeline errors surfaced to the invoking process
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Required event fields missing; aborts before any external call.
    #[error("malformed event payload: missing {0}")]
    PayloadShape(String),

    /// Team membership query failed; fatal for review-requested handling.
    #[error("team expansion failed: {0}")]
    TeamExpansion(#[from] TeamError),

    /// No usable delivery address for a required recipient.
    #[error("could not resolve a delivery address for {handle}: {source}")]
    IdentityResolution {
        handle: String,
        #[source]
        source: IdentityError,
    },

    /// The chat platform rejected the send for one recipient.
    #[error("failed to deliver message to {recipient}: {source}")]
    Delivery {
        recipient: String,
        #[source]
        source: ChatError,
    },
}
