//! Post a notification to Slack, configured by environment variables.
//!
//! Intended to run as a CI step. See [slack_notify::config] for the variables
//! read. Exits non-zero if configuration is missing or Slack rejects the
//! message.

use dotenvy::dotenv;
use slack_notify::{
    config::Config,
    error::Failure,
    notify::notify,
    slack::{api::SlackClient, transport::Ack},
};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Application entrypoint. Initialises tracing, reads configuration, and sends
/// the message.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        debug!("No .env found");
    }

    match run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read configuration and post the message to Slack.
async fn run() -> Result<Ack, Failure> {
    let config = Config::from_env()?;
    let client = SlackClient::new(config.api_base.to_owned(), config.token.clone());

    notify(&client, &config).await
}
