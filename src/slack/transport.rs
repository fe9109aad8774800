//! The seam between building a message and delivering it.

use super::{channel::ChannelName, message::Message, SlackError};
use async_trait::async_trait;
use std::fmt;

/// Slack's acknowledgement of a delivered message. Opaque to us; for the real
/// API it's the message timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack(pub String);

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can deliver a [Message] to a channel.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, channel: &ChannelName, msg: &Message) -> Result<Ack, SlackError>;
}
