//! Identity-directory port trait
//!
//! The directory maps a company identity profile (including a
//! source-control handle field and a verified email) to employee records.

use async_trait::async_trait;

use crate::error::DirectoryError;

/// A directory profile matched by source-control handle
///
/// Only the verified email is consumed downstream; the id is kept for
/// log correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryProfile {
    pub id: String,
    pub email: String,
}

/// Port trait for the identity-directory service
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Search for the profile whose configured source-control field matches
    /// `handle`. Directory data is inconsistent about the leading "@", so
    /// implementations query both forms and take the first of at most one
    /// result.
    async fn find_by_handle(&self, handle: &str)
        -> Result<Option<DirectoryProfile>, DirectoryError>;
}
