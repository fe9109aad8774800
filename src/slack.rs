//! Supports posting a structured message to any Slack channel.
//!
//! See [message::build] for the message shape and [transport::Transport] for
//! delivery.

pub mod api;
pub mod auth;
pub mod block;
pub mod channel;
pub mod error;
pub mod message;
#[cfg(test)]
pub mod mock;
pub mod transport;

pub use error::SlackError;
