use std::env;

#[derive(Clone)]
pub struct Config {
    pub okta_org_url: String,
    pub okta_api_token: String,
    /// Okta profile field holding the source-control handle.
    pub okta_handle_field: String,
    pub slack_bot_token: String,
    /// Base URL of the Slack Web API (overridable for testing).
    pub slack_api_url: String,
    pub github_api_url: String,
    /// Token able to read org team membership; only team flows need it.
    pub github_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            okta_org_url: env::var("OKTA_ORG_URL").expect("OKTA_ORG_URL must be set"),
            okta_api_token: env::var("OKTA_API_TOKEN").expect("OKTA_API_TOKEN must be set"),
            okta_handle_field: env::var("OKTA_GITHUB_FIELD")
                .unwrap_or_else(|_| "github_user".to_string()),
            slack_bot_token: env::var("SLACK_BOT_TOKEN").expect("SLACK_BOT_TOKEN must be set"),
            slack_api_url: env::var("SLACK_API_URL")
                .unwrap_or_else(|_| "https://slack.com/api".to_string()),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            github_token: env::var("GITHUB_TOKEN").unwrap_or_default(),
        }
    }
}
