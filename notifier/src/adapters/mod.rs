//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod okta;
pub mod slack;

pub use github::GithubClientImpl;
pub use okta::OktaClientImpl;
pub use slack::SlackClientImpl;
