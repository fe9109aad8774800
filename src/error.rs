use crate::{config::ConfigError, slack::SlackError};
use std::fmt;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug)]
pub enum Failure {
    Config(ConfigError),
    Slack(SlackError),
}

impl From<ConfigError> for Failure {
    fn from(e: ConfigError) -> Self {
        Failure::Config(e)
    }
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Slack(e)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Config(e) => write!(f, "{}", e),
            Failure::Slack(e) => write!(f, "error while sending message to slack: {}", e),
        }
    }
}
