//! Slack messaging adapter

mod client;

pub use client::SlackClientImpl;
