//! Pipeline orchestration
//!
//! Routes a classified event through expansion, resolution, composition
//! and dispatch. Validation and expansion errors abort before any send;
//! per-recipient errors are isolated by the dispatcher and aggregated
//! after all attempts complete.

use std::sync::Arc;

use crate::app::dispatch::{aggregate, Dispatcher};
use crate::app::identity::IdentityService;
use crate::app::message;
use crate::app::recipients::RecipientExpander;
use crate::domain::entities::{Event, ReviewRequest, ReviewSubmission};
use crate::domain::ports::{ChatClient, DirectoryClient, TeamClient};
use crate::error::NotifyError;

/// The notification pipeline
pub struct NotifyService<D, C, T>
where
    D: DirectoryClient,
    C: ChatClient,
    T: TeamClient,
{
    identity: Arc<IdentityService<D, C>>,
    expander: RecipientExpander<T>,
    dispatcher: Dispatcher<D, C>,
}

impl<D, C, T> NotifyService<D, C, T>
where
    D: DirectoryClient,
    C: ChatClient,
    T: TeamClient,
{
    pub fn new(
        identity: Arc<IdentityService<D, C>>,
        expander: RecipientExpander<T>,
        dispatcher: Dispatcher<D, C>,
    ) -> Self {
        Self {
            identity,
            expander,
            dispatcher,
        }
    }

    /// Run one classified event to completion.
    pub async fn run(&self, event: Event) -> Result<(), NotifyError> {
        match event {
            Event::ReviewRequested(request) => self.handle_review_requested(request).await,
            Event::ReviewSubmitted(submission) => self.handle_review_submitted(submission).await,
            Event::Ignored => {
                tracing::debug!("event not handled by the notifier, nothing to do");
                Ok(())
            }
        }
    }

    async fn handle_review_requested(&self, request: ReviewRequest) -> Result<(), NotifyError> {
        let recipients = self.expander.expand(&request).await?;

        if recipients.is_empty() {
            tracing::info!(
                pr = %request.url,
                "no recipients left after exclusion, nothing to send"
            );
            return Ok(());
        }

        let requester = self.identity.display_name(&request.requester).await;
        let blocks = message::review_requested(requester.as_str(), &request.title, &request.url);

        tracing::info!(
            pr = %request.url,
            requester = %request.requester,
            recipients = recipients.len(),
            "dispatching review-request notifications"
        );

        let outcomes = self.dispatcher.send_to_all(&recipients, &blocks).await;
        aggregate(outcomes).map(|_| ())
    }

    async fn handle_review_submitted(
        &self,
        submission: ReviewSubmission,
    ) -> Result<(), NotifyError> {
        // Self-reviews are not notified.
        if submission.reviewer == submission.pr_owner {
            tracing::info!(
                pr = %submission.url,
                reviewer = %submission.reviewer,
                "reviewer is the PR owner, nothing to send"
            );
            return Ok(());
        }

        let reviewer = self.identity.display_name(&submission.reviewer).await;
        let blocks = message::review_submitted(
            reviewer.as_str(),
            submission.state,
            &submission.title,
            &submission.url,
        );

        tracing::info!(
            pr = %submission.url,
            org = %submission.organization,
            reviewer = %submission.reviewer,
            owner = %submission.pr_owner,
            "dispatching review-submitted notification"
        );

        let recipients = vec![submission.pr_owner.clone()];
        let outcomes = self.dispatcher.send_to_all(&recipients, &blocks).await;
        aggregate(outcomes).map(|_| ())
    }
}
