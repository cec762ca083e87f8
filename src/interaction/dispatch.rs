//! Classifies inbound Slack events.
//!
//! This is a pure function of the payload and the configured command; posting the reply is
//! left to the caller so the decision can be tested without a chat client.

use tracing::debug;

use crate::base::{
    config::Config,
    types::{Dispatch, InboundEvent, OutboundReply},
};

/// Decide what to do with an inbound event.
///
/// The first matching rule wins:
/// 1. A `challenge` is a URL verification handshake and is echoed back.
/// 2. Anything carrying a `bot_id` is ignored, so the bot never answers itself.
/// 3. A `message` whose text equals the command (ignoring case) gets the configured reply.
/// 4. Everything else, including payloads missing a field, is a no-op.
pub fn dispatch(payload: &InboundEvent, config: &Config) -> Dispatch {
    if let Some(challenge) = &payload.challenge {
        return Dispatch::Challenge(challenge.clone());
    }

    let Some(event) = &payload.event else {
        return Dispatch::NoAction;
    };

    if event.bot_id.is_some() {
        debug!("Ignoring bot-authored event.");
        return Dispatch::Ignored;
    }

    if event.event_type.as_deref() != Some("message") {
        return Dispatch::NoAction;
    }

    let (Some(text), Some(channel)) = (&event.text, &event.channel) else {
        return Dispatch::NoAction;
    };

    if text.to_lowercase() != config.write_command.to_lowercase() {
        return Dispatch::NoAction;
    }

    Dispatch::Reply(OutboundReply {
        channel: channel.clone(),
        text: config.write_command_reply.clone(),
    })
}
