//! Slack implementation of the outbound chat client.
//!
//! Wraps a slack-morphism client over hyper + rustls and posts replies with the bot token.

use crate::base::{config::Config, types::Res};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::{errors::SlackClientError, prelude::*};
use tracing::instrument;

use std::sync::Arc;

use super::{ChatClient, GenericChatClient, OutboundDeliveryError};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub fn slack(config: &Config) -> Res<Self> {
        let client = SlackChatClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Structs.

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    bot_token: SlackApiToken,
    client: Arc<FullClient>,
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    fn new(config: &Config) -> Res<Self> {
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        Ok(Self { bot_token, client })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    #[instrument(skip(self, text))]
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), OutboundDeliveryError> {
        let message = SlackMessageContent::new().with_text(text.to_string());
        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), message);

        let session = self.client.open_session(&self.bot_token);

        session.chat_post_message(&request).await.map_err(delivery_error)?;

        Ok(())
    }
}

fn delivery_error(err: SlackClientError) -> OutboundDeliveryError {
    match err {
        SlackClientError::ApiError(api) => OutboundDeliveryError::Api { code: api.code },
        other => OutboundDeliveryError::Transport(other.to_string()),
    }
}
