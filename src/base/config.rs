//! Load configuration via `config` crate with env-override support.

use std::{fmt, ops::Deref, sync::Arc};

use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default address the webhook listens on.
fn default_listen_address() -> String {
    "0.0.0.0:8000".to_string()
}

/// Default allowed clock skew for signed requests, in seconds.
fn default_signature_max_age_secs() -> u64 {
    300
}

/// Default command token.
fn default_write_command() -> String {
    prompts::WRITE_COMMAND.to_string()
}

/// Default reply to the command token.
fn default_write_command_reply() -> String {
    prompts::WRITE_COMMAND_REPLY.to_string()
}

/// Configuration for the write-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The shared settings.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The settings themselves, as read from the environment and config file.
#[derive(Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack bot token (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Slack signing secret (`SLACK_SIGNING_SECRET`).
    #[serde(default)]
    pub slack_signing_secret: String,
    /// Socket address to bind the HTTP listener to (`LISTEN_ADDRESS`).
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    /// Accept unsigned requests (`SKIP_SIGNATURE_VERIFICATION`).
    /// Only meant for local development against a tunnel or a replayed payload.
    #[serde(default)]
    pub skip_signature_verification: bool,
    /// Maximum age of a signed request (`SIGNATURE_MAX_AGE_SECS`).
    /// Zero disables the replay check.
    #[serde(default = "default_signature_max_age_secs")]
    pub signature_max_age_secs: u64,
    /// Command token the bot answers (`WRITE_COMMAND`), matched case-insensitively.
    #[serde(default = "default_write_command")]
    pub write_command: String,
    /// Reply posted when the command is seen (`WRITE_COMMAND_REPLY`).
    #[serde(default = "default_write_command_reply")]
    pub write_command_reply: String,
}

impl fmt::Debug for ConfigInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigInner")
            .field("slack_bot_token", &"<REDACTED>")
            .field("slack_signing_secret", &"<REDACTED>")
            .field("listen_address", &self.listen_address)
            .field("skip_signature_verification", &self.skip_signature_verification)
            .field("signature_max_age_secs", &self.signature_max_age_secs)
            .field("write_command", &self.write_command)
            .field("write_command_reply", &self.write_command_reply)
            .finish()
    }
}

impl ConfigInner {
    /// Reject settings the webhook cannot run with.
    pub fn validate(&self) -> Res<()> {
        if self.slack_bot_token.is_empty() {
            return Err(anyhow::anyhow!("Slack bot token must be set."));
        }

        if self.slack_signing_secret.is_empty() && !self.skip_signature_verification {
            return Err(anyhow::anyhow!("Slack signing secret must be set unless signature verification is skipped."));
        }

        if self.write_command.is_empty() {
            return Err(anyhow::anyhow!("Write command must not be empty."));
        }

        if self.write_command_reply.is_empty() {
            return Err(anyhow::anyhow!("Write command reply must not be empty."));
        }

        Ok(())
    }
}

impl Config {
    /// Load from the environment, then `explicit_path` or `.hidden/config.toml`, and validate.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().try_parsing(true));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}
