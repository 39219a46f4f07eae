//! Team-membership port trait

use async_trait::async_trait;

use crate::error::TeamError;

/// A member of a source-control team; only the login is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub login: String,
}

/// Port trait for querying organization team membership
#[async_trait]
pub trait TeamClient: Send + Sync {
    /// List the members of team `slug` within `org`, in the service's
    /// return order.
    async fn team_members(&self, org: &str, slug: &str) -> Result<Vec<TeamMember>, TeamError>;
}
