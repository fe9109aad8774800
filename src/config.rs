//! Configuration sourced from the environment, as supplied to a GitHub Action.

use crate::slack::{api::API_BASE, auth::SlackAccessToken};
use std::{env, fmt};

pub const TITLE_VAR: &str = "INPUT_TITLE";
pub const TEXT_VAR: &str = "INPUT_TEXT";
pub const TOKEN_VAR: &str = "INPUT_SLACK_TOKEN";
pub const CHANNEL_VAR: &str = "INPUT_SLACK_CHANNEL";

/// Optional override of [API_BASE], handy for pointing at a proxy.
pub const API_BASE_VAR: &str = "SLACK_API_BASE";

/// Everything needed to send one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub text: String,
    pub token: SlackAccessToken,
    pub channel: String,
    pub api_base: String,
}

/// Required variables which were unset or empty, in declaration order.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(Vec<&'static str>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(xs) => write!(
                f,
                "Missing required environment variables: {}",
                xs.join(", ")
            ),
        }
    }
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Read from any key-value source. An empty value counts as missing,
    /// since that's what Actions passes for an input that wasn't given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |k: &'static str| match lookup(k).filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                missing.push(k);
                String::new()
            }
        };

        let title = required(TITLE_VAR);
        let text = required(TEXT_VAR);
        let token = required(TOKEN_VAR);
        let channel = required(CHANNEL_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let api_base = lookup(API_BASE_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| API_BASE.to_owned());

        Ok(Config {
            title,
            text,
            token: SlackAccessToken(token),
            channel,
            api_base,
        })
    }
}
