//! Runtime services and shared state for the write-bot.

use axum::Router;
use tokio::net::TcpListener;

use crate::{interaction, prelude::*, service::chat::ChatClient};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the chat client and configuration, both fixed at startup.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the slack client.
        let chat = ChatClient::slack(&config)?;

        Ok(Self { config, chat })
    }

    /// The HTTP routes served by this runtime.
    pub fn router(&self) -> Router {
        interaction::events::router(self.clone())
    }

    /// Serve the webhook until Ctrl-C.
    pub async fn start(&self) -> Void {
        if self.config.skip_signature_verification {
            warn!("Signature verification is disabled; do not run this configuration in production.");
        }

        let listener = TcpListener::bind(&self.config.listen_address).await?;

        info!("Listening for Slack events on {} ...", listener.local_addr()?);

        axum::serve(listener, self.router()).with_graceful_shutdown(shutdown_signal()).await?;

        info!("Shut down.");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
    }
}
