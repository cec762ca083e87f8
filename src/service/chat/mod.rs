//! Outbound chat capability used to post replies.

pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

// Errors.

/// Why posting a reply failed.
///
/// These never reach the inbound caller; the handler logs them and still answers `200`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutboundDeliveryError {
    /// The chat platform rejected the call (e.g. `channel_not_found`, `not_in_channel`).
    #[error("chat API error: {code}")]
    Api {
        /// The platform's error code.
        code: String,
    },
    /// The call never produced an API response.
    #[error("chat transport error: {0}")]
    Transport(String),
}

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This is the only outbound capability the webhook needs. Implementing this trait
/// allows the handler to be exercised without a live chat platform.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Post a top-level message to a channel.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), OutboundDeliveryError>;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    /// Wrap any chat client implementation.
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
