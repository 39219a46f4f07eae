//! Multi-recipient dispatch
//!
//! Each recipient gets its own resolve-then-send pipeline; pipelines run
//! concurrently and a failure in one never stops the others. Aggregation
//! is a pure reduction over the completed outcomes.

use std::sync::Arc;

use futures::future::join_all;

use crate::app::identity::IdentityService;
use crate::domain::ports::{Block, ChatClient, Delivery, DirectoryClient};
use crate::error::NotifyError;

/// Per-recipient result of a dispatch
#[derive(Debug)]
pub struct DispatchOutcome {
    pub recipient: String,
    pub result: Result<Delivery, NotifyError>,
}

/// Service sending one composed message to one or more recipients
pub struct Dispatcher<D, C>
where
    D: DirectoryClient,
    C: ChatClient,
{
    identity: Arc<IdentityService<D, C>>,
    chat: Arc<C>,
}

impl<D, C> Dispatcher<D, C>
where
    D: DirectoryClient,
    C: ChatClient,
{
    pub fn new(identity: Arc<IdentityService<D, C>>, chat: Arc<C>) -> Self {
        Self { identity, chat }
    }

    /// Send `blocks` to every recipient handle.
    ///
    /// Every send is attempted regardless of sibling failures; the
    /// returned outcomes are in recipient order.
    pub async fn send_to_all(&self, recipients: &[String], blocks: &[Block]) -> Vec<DispatchOutcome> {
        let sends = recipients.iter().map(|handle| self.send_one(handle, blocks));
        join_all(sends).await
    }

    async fn send_one(&self, handle: &str, blocks: &[Block]) -> DispatchOutcome {
        let result = async {
            let address = self.identity.delivery_address(handle).await?;
            self.chat
                .post_message(&address, blocks)
                .await
                .map_err(|source| NotifyError::Delivery {
                    recipient: handle.to_string(),
                    source,
                })
        }
        .await;

        match &result {
            Ok(delivery) => {
                tracing::info!(
                    recipient = %handle,
                    channel = %delivery.channel,
                    ts = %delivery.ts,
                    sent_at = %delivery.sent_at,
                    "message sent"
                );
            }
            Err(e) => {
                tracing::warn!(recipient = %handle, error = %e, "message not delivered");
            }
        }

        DispatchOutcome {
            recipient: handle.to_string(),
            result,
        }
    }
}

/// Reduce completed outcomes into the invocation result.
///
/// Runs only after every attempt has finished: full success yields the
/// deliveries, otherwise the first failure in recipient order is reported
/// for the whole invocation (sends that succeeded have still taken effect
/// on the platform).
pub fn aggregate(outcomes: Vec<DispatchOutcome>) -> Result<Vec<Delivery>, NotifyError> {
    let mut deliveries = Vec::with_capacity(outcomes.len());
    let mut first_failure = None;

    for outcome in outcomes {
        match outcome.result {
            Ok(delivery) => deliveries.push(delivery),
            Err(e) => {
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(deliveries),
    }
}
