//! The Slack Events API endpoint.
//!
//! Every callback runs through the same pipeline: signature check on the raw body, JSON
//! decode, [`dispatch`], an optional reply through the chat client, then a JSON answer.
//! Only authentication and undecodable bodies produce a non-2xx status; a failed reply is
//! logged and swallowed so Slack does not redeliver the event.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    base::signature::{self, AuthError, SIGNATURE_HEADER, TIMESTAMP_HEADER},
    interaction::dispatch::dispatch,
    prelude::*,
    runtime::Runtime,
};

/// Build the router serving the events endpoint.
///
/// Slack is pointed at `/slack/events`; `/events` is an alias.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route("/slack/events", post(handle_events))
        .route("/events", post(handle_events))
        .with_state(runtime)
}

/// Handles a single Slack Events API callback.
#[instrument(skip_all)]
pub async fn handle_events(State(runtime): State<Runtime>, headers: HeaderMap, body: Bytes) -> Response {
    if let Err(err) = authenticate(&runtime, &headers, &body) {
        warn!("Rejecting event callback: {}", err);
        return reject(err.to_string());
    }

    let payload = match InboundEvent::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Rejecting undecodable event payload: {}", err);
            return reject("Invalid event payload".to_string());
        }
    };

    let action = dispatch(&payload, &runtime.config);

    if let Dispatch::Reply(reply) = &action {
        info!("Replying to command in channel {} ...", reply.channel);

        if let Err(err) = runtime.chat.post_message(&reply.channel, &reply.text).await {
            error!("Error posting message: {}", err);
        }
    }

    Json(EventResponse::from(&action)).into_response()
}

/// Check the request signature, unless verification is switched off.
fn authenticate(runtime: &Runtime, headers: &HeaderMap, body: &[u8]) -> Result<(), AuthError> {
    let config = &runtime.config;

    if config.skip_signature_verification {
        return Ok(());
    }

    let timestamp = header(headers, TIMESTAMP_HEADER);
    let supplied = header(headers, SIGNATURE_HEADER);

    signature::verify(body, timestamp, supplied, config.slack_signing_secret.as_bytes())?;

    if config.signature_max_age_secs > 0
        && let Some(timestamp) = timestamp
    {
        signature::check_timestamp(timestamp, Utc::now(), config.signature_max_age_secs)?;
    }

    Ok(())
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn reject(detail: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "detail": detail }))).into_response()
}
