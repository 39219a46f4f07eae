//! GitHub API client implementation
//!
//! Only the team-membership listing is needed; the event payload itself
//! arrives through the trigger, not this client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{TeamClient, TeamMember};
use crate::error::TeamError;

const USER_AGENT: &str = concat!("reviewping-notifier/", env!("CARGO_PKG_VERSION"));

/// Implementation of the team-membership client backed by the GitHub API
pub struct GithubClientImpl {
    http: Client,
    base_url: String,
    token: String,
}

impl GithubClientImpl {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TeamError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TeamError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TeamError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[derive(Deserialize)]
struct MemberResponse {
    login: String,
}

#[async_trait]
impl TeamClient for GithubClientImpl {
    async fn team_members(&self, org: &str, slug: &str) -> Result<Vec<TeamMember>, TeamError> {
        let resp = self
            .http
            .get(format!(
                "{}/orgs/{}/teams/{}/members",
                self.base_url, org, slug
            ))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(TeamError::TeamNotFound {
                org: org.to_string(),
                slug: slug.to_string(),
            });
        }

        let members: Vec<MemberResponse> = self.handle_response(resp).await?;
        Ok(members
            .into_iter()
            .map(|m| TeamMember { login: m.login })
            .collect())
    }
}
