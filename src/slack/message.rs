//! Build the structured messages we post to Slack.

use super::{block::*, channel::ChannelName};
use serde::Serialize;

/// A single outbound notification: a header above a mrkdwn body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub channel: ChannelName,
    pub blocks: Vec<Block>,
}

/// Put together a [Message] with a plaintext header of `title` followed by a
/// mrkdwn section of `text`.
///
/// Nothing is validated or escaped, every input is carried through as is.
///
/// ```
/// use slack_notify::slack::{block::Block, message::build};
///
/// let msg = build("Deployment Status", "*Bold* and _italic_", "deployments");
///
/// assert_eq!(msg.channel.0, "deployments");
/// assert_eq!(
///     msg.blocks,
///     vec![
///         Block::header("Deployment Status"),
///         Block::section("*Bold* and _italic_"),
///     ]
/// );
/// ```
pub fn build<A, B, C>(title: A, text: B, channel: C) -> Message
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
{
    Message {
        channel: ChannelName(channel.into()),
        blocks: vec![Block::header(title), Block::section(text)],
    }
}

impl Message {
    /// Slack wants a plain string alongside `blocks` for notifications, which
    /// we take from the header.
    pub fn notif_text(&self) -> String {
        self.blocks
            .iter()
            .find(|b| b.kind == BlockKind::Header)
            .and_then(|b| b.text.as_ref())
            .map(|t| t.content.to_owned())
            .unwrap_or_default()
    }
}
