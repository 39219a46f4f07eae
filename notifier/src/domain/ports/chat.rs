//! Messaging-platform port trait and message model
//!
//! The message body is a sectioned Block Kit document; the port accepts it
//! together with a target identifier (user or channel id).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ChatError;

/// A chat user resolved from a directory email
///
/// `id` is the deliverable address, `name` the attribution text. They are
/// independent resolutions of the same handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: String,
    pub name: String,
}

/// A successful delivery, identified by the platform's message timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub channel: String,
    pub ts: String,
    pub sent_at: DateTime<Utc>,
}

/// One block of a sectioned message body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        text: Text,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
    Divider,
}

/// Text object inside a block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    Mrkdwn { text: String },
    PlainText { text: String },
}

/// Interactive element attached to a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[allow(dead_code)]
pub enum Accessory {
    Button { text: Text, url: String },
    Image { image_url: String, alt_text: String },
}

/// Port trait for the messaging platform
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Look up a chat user by their verified email address.
    async fn user_by_email(&self, email: &str) -> Result<ChatUser, ChatError>;

    /// Post a block message to a user or channel identifier.
    async fn post_message(&self, target: &str, blocks: &[Block]) -> Result<Delivery, ChatError>;
}
