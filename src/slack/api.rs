//! Type definitions and helpers for the Slack API.

use super::{
    auth::*,
    block::Block,
    channel::ChannelName,
    message::Message,
    transport::{Ack, Transport},
    SlackError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// Delivers messages via Slack's Web API.
pub struct SlackClient {
    base: String,
    token: SlackAccessToken,
    /// Holds a connection pool internally, as per [reqwest::Client].
    http: reqwest::Client,
}

impl SlackClient {
    /// `base` may or may not end in a slash.
    pub fn new(base: String, token: SlackAccessToken) -> Self {
        SlackClient {
            base: base.trim_end_matches('/').to_owned(),
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Create a POST request to any Slack API endpoint, handling authentication.
    fn post<T: ToString>(&self, path: T) -> reqwest::RequestBuilder {
        self.http
            .post(self.base.to_owned() + &path.to_string())
            .header(
                reqwest::header::AUTHORIZATION,
                to_auth_header_val(&self.token),
            )
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "ts": "1503435956.000247"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is checked here and on success responses so that the
// untagged enum can't confuse one for the other.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelName,
    blocks: &'a [Block],
    // Used for notifications in the presence of `blocks`.
    text: String,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    ts: String,
}

#[async_trait]
impl Transport for SlackClient {
    async fn send(&self, channel: &ChannelName, msg: &Message) -> Result<Ack, SlackError> {
        debug!(%channel, blocks = msg.blocks.len(), "Posting message");

        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage")
            .json(&MessageRequest {
                channel,
                blocks: &msg.blocks,
                text: msg.notif_text(),
            })
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(Ack(res.ts)),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
