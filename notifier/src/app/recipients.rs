//! Recipient expansion
//!
//! Turns a review-request target into a concrete list of handles. Teams
//! are expanded through the membership service; the PR author is always
//! excluded (case-sensitive exact match) and duplicates are dropped while
//! preserving the service's return order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{ReviewRequest, ReviewTarget};
use crate::domain::ports::TeamClient;
use crate::error::NotifyError;

/// Service expanding review-request targets into recipient handles
pub struct RecipientExpander<T>
where
    T: TeamClient,
{
    teams: Arc<T>,
}

impl<T> RecipientExpander<T>
where
    T: TeamClient,
{
    pub fn new(teams: Arc<T>) -> Self {
        Self { teams }
    }

    /// Expand the request's target into recipient handles.
    ///
    /// A failed membership query is fatal for the whole review-requested
    /// handling; no partial expansion is attempted.
    pub async fn expand(&self, request: &ReviewRequest) -> Result<Vec<String>, NotifyError> {
        let handles = match &request.target {
            ReviewTarget::Reviewer(login) => vec![login.clone()],
            ReviewTarget::Team(slug) => {
                let members = self
                    .teams
                    .team_members(&request.organization, slug)
                    .await?;

                tracing::debug!(
                    org = %request.organization,
                    team = %slug,
                    members = members.len(),
                    "expanded team membership"
                );

                members.into_iter().map(|m| m.login).collect()
            }
        };

        let mut seen = HashSet::new();
        Ok(handles
            .into_iter()
            .filter(|h| h != &request.requester && seen.insert(h.clone()))
            .collect())
    }
}
