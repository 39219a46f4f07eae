//! Identity resolution
//!
//! Maps a source-control handle to a messaging-platform identity in two
//! stages: directory profile by handle, then chat user by the profile's
//! verified email. The two public operations share the stages but differ
//! in failure policy: a missing delivery address is fatal, a missing
//! display name degrades to the raw handle.

use std::sync::Arc;

use crate::domain::entities::DisplayName;
use crate::domain::ports::{ChatClient, ChatUser, DirectoryClient};
use crate::error::{DirectoryError, IdentityError, NotifyError};

/// Service resolving source-control handles to chat identities
pub struct IdentityService<D, C>
where
    D: DirectoryClient,
    C: ChatClient,
{
    directory: Arc<D>,
    chat: Arc<C>,
}

impl<D, C> IdentityService<D, C>
where
    D: DirectoryClient,
    C: ChatClient,
{
    pub fn new(directory: Arc<D>, chat: Arc<C>) -> Self {
        Self { directory, chat }
    }

    /// Resolve the deliverable chat address for `handle`.
    ///
    /// Both stages must succeed; there is no usable fallback for a send
    /// target.
    pub async fn delivery_address(&self, handle: &str) -> Result<String, NotifyError> {
        match self.lookup(handle).await {
            Ok(user) => Ok(user.id),
            Err(source) => Err(NotifyError::IdentityResolution {
                handle: handle.to_string(),
                source,
            }),
        }
    }

    /// Resolve the display name for `handle`, falling back to the raw
    /// handle on any failure so attribution text is never blocked by a
    /// directory miss.
    pub async fn display_name(&self, handle: &str) -> DisplayName {
        match self.lookup(handle).await {
            Ok(user) => DisplayName::Resolved(user.name),
            Err(e) => {
                tracing::warn!(
                    handle = %handle,
                    error = %e,
                    "display-name resolution failed, falling back to handle"
                );
                DisplayName::Fallback(handle.to_string())
            }
        }
    }

    async fn lookup(&self, handle: &str) -> Result<ChatUser, IdentityError> {
        let profile = self
            .directory
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| DirectoryError::ProfileNotFound(handle.to_string()))?;

        tracing::debug!(handle = %handle, profile = %profile.id, "directory profile matched");

        Ok(self.chat.user_by_email(&profile.email).await?)
    }
}
