//! GitHub team-membership adapter

mod client;

pub use client::GithubClientImpl;
