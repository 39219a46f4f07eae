//! Application layer
//!
//! Pipeline services: identity resolution, recipient expansion, message
//! composition, dispatch, and the orchestration that ties them together.

pub mod dispatch;
pub mod identity;
pub mod message;
pub mod notify;
pub mod recipients;

pub use dispatch::{aggregate, DispatchOutcome, Dispatcher};
pub use identity::IdentityService;
pub use notify::NotifyService;
pub use recipients::RecipientExpander;
