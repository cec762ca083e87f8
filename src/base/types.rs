//! Shared result aliases and the event types flowing through the webhook.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};

/// Application error type.
pub type Err = anyhow::Error;
/// Application result type.
pub type Res<T> = Result<T, Err>;
/// Application result with no value.
pub type Void = Res<()>;

/// The decoded body of a Slack Events API callback.
///
/// Only the fields the dispatcher looks at are decoded; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundEvent {
    /// Set only during the URL verification handshake; echoed back verbatim.
    #[serde(default, deserialize_with = "present")]
    pub challenge: Option<Value>,
    /// The wrapped platform event, if it is an object.
    #[serde(default, deserialize_with = "object_only")]
    pub event: Option<PlatformEvent>,
}

impl InboundEvent {
    /// Decode a callback body.
    ///
    /// The body must be a JSON object; serde would otherwise map array items onto fields by position.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;

        if !value.is_object() {
            return Err(serde_json::Error::custom("event payload must be a JSON object"));
        }

        serde_json::from_value(value)
    }
}

/// A single platform event nested inside an [`InboundEvent`].
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformEvent {
    /// Event type tag, e.g. `message`.
    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    /// Message text.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub text: Option<String>,
    /// Channel the event happened in.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub channel: Option<String>,
    /// Present whenever the key is present, whatever its value.
    #[serde(default, deserialize_with = "present_as_string")]
    pub bot_id: Option<String>,
}

/// A message the bot wants to post in reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    /// Channel to post into.
    pub channel: String,
    /// Message body.
    pub text: String,
}

/// The outcome of classifying an [`InboundEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// URL verification handshake; the value is returned as-is.
    Challenge(Value),
    /// Authored by a bot (possibly ourselves), so never answered.
    Ignored,
    /// A recognized command that needs a reply.
    Reply(OutboundReply),
    /// Nothing to do.
    NoAction,
}

/// The JSON body returned to Slack for an accepted callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventResponse {
    /// `{"challenge": ...}`
    Challenge {
        /// The handshake value, unchanged.
        challenge: Value,
    },
    /// `{"status": ...}`
    Status {
        /// `ok` or `ignored`.
        status: &'static str,
    },
}

impl EventResponse {
    /// `{"status": "ok"}`
    pub fn ok() -> Self {
        Self::Status { status: "ok" }
    }

    /// `{"status": "ignored"}`
    pub fn ignored() -> Self {
        Self::Status { status: "ignored" }
    }
}

impl From<&Dispatch> for EventResponse {
    fn from(dispatch: &Dispatch) -> Self {
        match dispatch {
            Dispatch::Challenge(challenge) => Self::Challenge { challenge: challenge.clone() },
            Dispatch::Ignored => Self::ignored(),
            Dispatch::Reply(_) | Dispatch::NoAction => Self::ok(),
        }
    }
}

// Field helpers.

/// Marks a key as present even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Keeps `event` only when it is an object whose fields decode.
fn object_only<'de, D>(deserializer: D) -> Result<Option<PlatformEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    if !value.is_object() {
        return Ok(None);
    }

    Ok(PlatformEvent::deserialize(value).ok())
}

fn present_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    Ok(Some(match value {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_challenge_still_counts_as_present() {
        let event: InboundEvent = serde_json::from_value(json!({ "challenge": null })).unwrap();
        assert_eq!(event.challenge, Some(Value::Null));
    }

    #[test]
    fn test_non_object_event_is_dropped() {
        let event: InboundEvent = serde_json::from_value(json!({ "event": "nope" })).unwrap();
        assert!(event.event.is_none());
    }

    #[test]
    fn test_array_event_is_dropped() {
        let event: InboundEvent = serde_json::from_value(json!({ "event": ["message", "/write", "C1"] })).unwrap();
        assert!(event.event.is_none());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(InboundEvent::from_slice(b"[]").is_err());
        assert!(InboundEvent::from_slice(br#"["abc123"]"#).is_err());
        assert!(InboundEvent::from_slice(br#"[null, {"type":"message","text":"/write","channel":"C1"}]"#).is_err());
        assert!(InboundEvent::from_slice(br#""str""#).is_err());
        assert!(InboundEvent::from_slice(b"42").is_err());
        assert!(InboundEvent::from_slice(b"null").is_err());
    }

    #[test]
    fn test_object_body_decodes() {
        let event = InboundEvent::from_slice(br#"{"challenge":"abc123"}"#).unwrap();
        assert_eq!(event.challenge, Some(json!("abc123")));
    }

    #[test]
    fn test_mistyped_fields_are_treated_as_absent() {
        let event: InboundEvent = serde_json::from_value(json!({
            "event": { "type": 7, "text": ["/write"], "channel": "C1" }
        }))
        .unwrap();

        let inner = event.event.unwrap();
        assert_eq!(inner.event_type, None);
        assert_eq!(inner.text, None);
        assert_eq!(inner.channel.as_deref(), Some("C1"));
    }

    #[test]
    fn test_non_string_bot_id_is_kept() {
        let event: InboundEvent = serde_json::from_value(json!({ "event": { "bot_id": 42 } })).unwrap();
        assert_eq!(event.event.unwrap().bot_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(serde_json::to_value(EventResponse::ok()).unwrap(), json!({ "status": "ok" }));
        assert_eq!(serde_json::to_value(EventResponse::ignored()).unwrap(), json!({ "status": "ignored" }));
        assert_eq!(
            serde_json::to_value(EventResponse::from(&Dispatch::Challenge(json!("abc123")))).unwrap(),
            json!({ "challenge": "abc123" })
        );
    }
}
