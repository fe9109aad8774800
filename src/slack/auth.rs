//! Helpers around Slack's use of OAuth Bearer Authentication.

use std::fmt;

/// Prefixes of bot and user tokens respectively.
const TOKEN_PREFIXES: [&str; 2] = ["xoxb-", "xoxp-"];

/// A newtype wrapper around Slack access tokens.
#[derive(PartialEq, Eq, Clone)]
pub struct SlackAccessToken(pub String);

/// Tokens are secrets, keep them out of logs.
impl fmt::Debug for SlackAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlackAccessToken(<redacted>)")
    }
}

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// use slack_notify::slack::auth::{to_auth_header_val, SlackAccessToken};
///
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

/// Check that a token is shaped like a bot or user token. Slack isn't
/// consulted, so a revoked token will still pass.
///
/// ```
/// use slack_notify::slack::auth::validate_token;
///
/// assert!(validate_token("xoxb-aaaaaa"));
/// assert!(!validate_token("xoxb-12345"));
/// ```
pub fn validate_token(token: &str) -> bool {
    TOKEN_PREFIXES.iter().any(|p| token.starts_with(p)) && token.chars().count() > 10
}
