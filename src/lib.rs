//! Library root for `write-bot`.
//!
//! Write-bot is a Slack Events API webhook designed to:
//! - Answer Slack's URL verification handshake
//! - Authenticate every callback against the app's signing secret
//! - Reply to the `/write` command with a writing prompt
//! - Stay quiet on its own (and any other bot's) messages
//!
//! The outbound Slack client sits behind a trait so the handler can be
//! exercised without a live workspace.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
#[deny(missing_docs)]
pub mod service;

use prelude::*;
use rustls::crypto;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the write-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with the Slack client
/// - Serves the events endpoint until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting write-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install the default crypto provider."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
