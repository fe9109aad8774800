//! Post a titled notification to a Slack channel.
//!
//! The message is always a plaintext header above a mrkdwn body, see
//! [slack::message::build]. Delivery goes through a [slack::transport::Transport]
//! so that callers choose where messages actually end up.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod config;
mod de;
pub mod error;
pub mod notify;
pub mod slack;
