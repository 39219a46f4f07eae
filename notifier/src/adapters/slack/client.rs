//! Slack Web API client implementation
//!
//! Slack reports most failures as HTTP 200 with `{"ok": false, "error": ...}`,
//! so every call checks the envelope flag after the HTTP status.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{Block, ChatClient, ChatUser, Delivery};
use crate::error::ChatError;

/// Implementation of the messaging-platform client backed by Slack
pub struct SlackClientImpl {
    http: Client,
    base_url: String,
    bot_token: String,
}

impl SlackClientImpl {
    pub fn new(base_url: String, bot_token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ChatError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ChatError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ChatError::Api(format!("{} - {}", status.as_u16(), message)))
        }
    }
}

#[derive(Deserialize)]
struct LookupByEmailResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    user: Option<SlackUserResponse>,
}

#[derive(Deserialize)]
struct SlackUserResponse {
    id: String,
    name: String,
}

#[derive(Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    blocks: &'a [Block],
}

#[derive(Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    channel: Option<String>,
}

#[async_trait]
impl ChatClient for SlackClientImpl {
    async fn user_by_email(&self, email: &str) -> Result<ChatUser, ChatError> {
        let resp = self
            .http
            .get(self.api_url("users.lookupByEmail"))
            .bearer_auth(&self.bot_token)
            .query(&[("email", email)])
            .send()
            .await?;

        let lookup: LookupByEmailResponse = self.handle_response(resp).await?;

        if !lookup.ok {
            let error = lookup.error.unwrap_or_else(|| "unknown_error".to_string());
            if error == "users_not_found" {
                return Err(ChatError::UserNotFound(email.to_string()));
            }
            return Err(ChatError::Api(error));
        }

        let user = lookup
            .user
            .ok_or_else(|| ChatError::Deserialization("missing user in response".to_string()))?;

        Ok(ChatUser {
            id: user.id,
            name: user.name,
        })
    }

    async fn post_message(&self, target: &str, blocks: &[Block]) -> Result<Delivery, ChatError> {
        let resp = self
            .http
            .post(self.api_url("chat.postMessage"))
            .bearer_auth(&self.bot_token)
            .json(&PostMessageRequest {
                channel: target,
                blocks,
            })
            .send()
            .await?;

        let posted: PostMessageResponse = self.handle_response(resp).await?;

        if !posted.ok {
            return Err(ChatError::Api(
                posted.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        Ok(Delivery {
            channel: posted.channel.unwrap_or_else(|| target.to_string()),
            ts: posted
                .ts
                .ok_or_else(|| ChatError::Deserialization("missing ts in response".to_string()))?,
            sent_at: Utc::now(),
        })
    }
}
