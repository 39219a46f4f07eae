//! Okta API client implementation
//!
//! Searches user profiles by the configured source-control handle field.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{DirectoryClient, DirectoryProfile};
use crate::error::DirectoryError;

/// Implementation of the identity-directory client backed by Okta
pub struct OktaClientImpl {
    http: Client,
    base_url: String,
    api_token: String,
    /// Profile field holding the source-control handle, e.g. "github_user".
    handle_field: String,
}

impl OktaClientImpl {
    pub fn new(base_url: String, api_token: String, handle_field: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            handle_field,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, DirectoryError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| DirectoryError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Directory data is inconsistent about the leading "@", so the search is a
/// boolean OR over both forms of the handle.
fn search_filter(field: &str, handle: &str) -> String {
    format!(
        r#"profile.{field} eq "@{handle}" or profile.{field} eq "{handle}""#,
        field = field,
        handle = handle
    )
}

#[derive(Deserialize)]
struct OktaUserResponse {
    id: String,
    profile: OktaProfileResponse,
}

#[derive(Deserialize)]
struct OktaProfileResponse {
    #[serde(default)]
    email: Option<String>,
}

#[async_trait]
impl DirectoryClient for OktaClientImpl {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<DirectoryProfile>, DirectoryError> {
        let resp = self
            .http
            .get(self.api_url("/users"))
            .header("Authorization", format!("SSWS {}", self.api_token))
            .query(&[
                ("search", search_filter(&self.handle_field, handle).as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let users: Vec<OktaUserResponse> = self.handle_response(resp).await?;

        // At most one match expected; take the first result.
        let Some(user) = users.into_iter().next() else {
            return Ok(None);
        };

        let email = user
            .profile
            .email
            .ok_or_else(|| DirectoryError::MissingEmail(handle.to_string()))?;

        Ok(Some(DirectoryProfile { id: user.id, email }))
    }
}
