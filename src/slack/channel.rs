//! Slack channel identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The longest channel name Slack allows.
const MAX_CHANNEL_LEN: usize = 80;

/// A channel name or ID as supplied by the caller. Slack accepts either in
/// `chat.postMessage`, so we don't resolve one to the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(pub String);

/// Format without the surrounding newtype wrapper.
///
/// ```
/// use slack_notify::slack::channel::ChannelName;
///
/// let x = ChannelName("deployments".into());
/// assert_eq!(format!("{}", x), "deployments");
/// ```
impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that a channel name looks like one Slack would accept, without
/// asking Slack.
///
/// Names are supplied without the leading hash the UI shows, may only contain
/// ASCII letters, digits, hyphens and underscores, and are at most 80
/// characters long.
///
/// ```
/// use slack_notify::slack::channel::validate_channel;
///
/// assert!(validate_channel("team-updates"));
/// assert!(!validate_channel("#general"));
/// ```
pub fn validate_channel(channel: &str) -> bool {
    if channel.is_empty() || channel.starts_with('#') {
        return false;
    }

    let mut len = 0;
    for c in channel.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return false;
        }
        len += 1;
    }

    len <= MAX_CHANNEL_LEN
}
