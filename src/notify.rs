//! Glue between configuration, message building, and delivery.

use crate::{
    config::Config,
    error::Failure,
    slack::{
        message::build,
        transport::{Ack, Transport},
    },
};
use tracing::info;

/// Build the configured message and hand it to `transport`. Neither the token
/// nor the channel is validated first.
pub async fn notify<T>(transport: &T, config: &Config) -> Result<Ack, Failure>
where
    T: Transport + ?Sized,
{
    let msg = build(
        config.title.as_str(),
        config.text.as_str(),
        config.channel.as_str(),
    );

    let ack = transport.send(&msg.channel, &msg).await?;

    info!(channel = %msg.channel, %ack, "Message sent");
    Ok(ack)
}
