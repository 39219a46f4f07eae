//! Okta directory adapter

mod client;

pub use client::OktaClientImpl;
