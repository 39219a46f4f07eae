//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test. The chat
//! mock records every send attempt so tests can verify fan-out behavior.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    Block, ChatClient, ChatUser, Delivery, DirectoryClient, DirectoryProfile, TeamClient,
    TeamMember,
};
use crate::error::{ChatError, DirectoryError, TeamError};

// ============================================================================
// In-Memory Directory Client
// ============================================================================

#[derive(Default)]
pub struct InMemoryDirectoryClient {
    profiles: HashMap<String, DirectoryProfile>,
    failing: bool,
}

impl InMemoryDirectoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a profile for a source-control handle.
    pub fn with_profile(mut self, handle: &str, email: &str) -> Self {
        self.profiles.insert(
            handle.to_string(),
            DirectoryProfile {
                id: format!("00u-{}", handle),
                email: email.to_string(),
            },
        );
        self
    }

    /// Make every lookup fail with an API error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

#[async_trait]
impl DirectoryClient for InMemoryDirectoryClient {
    async fn find_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<DirectoryProfile>, DirectoryError> {
        if self.failing {
            return Err(DirectoryError::Api {
                status: 500,
                message: "directory unavailable".to_string(),
            });
        }
        Ok(self.profiles.get(handle).cloned())
    }
}

// ============================================================================
// In-Memory Chat Client
// ============================================================================

/// One recorded send attempt
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub target: String,
    pub blocks: Vec<Block>,
}

#[derive(Default)]
pub struct InMemoryChatClient {
    users: HashMap<String, ChatUser>,
    failing_targets: HashSet<String>,
    sent: Arc<RwLock<Vec<SentMessage>>>,
    ts_counter: AtomicUsize,
}

impl InMemoryChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a chat user reachable by email.
    pub fn with_user(mut self, email: &str, id: &str, name: &str) -> Self {
        self.users.insert(
            email.to_string(),
            ChatUser {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    /// Make sends to this target id fail.
    pub fn failing_target(mut self, target: &str) -> Self {
        self.failing_targets.insert(target.to_string());
        self
    }

    /// All send attempts so far, in attempt order, including failed ones.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for InMemoryChatClient {
    async fn user_by_email(&self, email: &str) -> Result<ChatUser, ChatError> {
        self.users
            .get(email)
            .cloned()
            .ok_or_else(|| ChatError::UserNotFound(email.to_string()))
    }

    async fn post_message(&self, target: &str, blocks: &[Block]) -> Result<Delivery, ChatError> {
        self.sent.write().unwrap().push(SentMessage {
            target: target.to_string(),
            blocks: blocks.to_vec(),
        });

        if self.failing_targets.contains(target) {
            return Err(ChatError::Api("channel_not_found".to_string()));
        }

        let n = self.ts_counter.fetch_add(1, Ordering::SeqCst);
        Ok(Delivery {
            channel: target.to_string(),
            ts: format!("1700000000.{:06}", n),
            sent_at: Utc::now(),
        })
    }
}

// ============================================================================
// In-Memory Team Client
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamClient {
    teams: HashMap<(String, String), Vec<TeamMember>>,
    failing: bool,
}

impl InMemoryTeamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a team's membership, in return order.
    pub fn with_team(mut self, org: &str, slug: &str, logins: &[&str]) -> Self {
        self.teams.insert(
            (org.to_string(), slug.to_string()),
            logins
                .iter()
                .map(|l| TeamMember {
                    login: l.to_string(),
                })
                .collect(),
        );
        self
    }

    /// Make every membership query fail with an API error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

#[async_trait]
impl TeamClient for InMemoryTeamClient {
    async fn team_members(&self, org: &str, slug: &str) -> Result<Vec<TeamMember>, TeamError> {
        if self.failing {
            return Err(TeamError::Api {
                status: 500,
                message: "membership service unavailable".to_string(),
            });
        }
        self.teams
            .get(&(org.to_string(), slug.to_string()))
            .cloned()
            .ok_or_else(|| TeamError::TeamNotFound {
                org: org.to_string(),
                slug: slug.to_string(),
            })
    }
}
