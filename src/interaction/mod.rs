//! Event handling and user interactions for write-bot.
//!
//! This module provides functionality for handling Slack callbacks:
//! - Serving the Events API endpoint and authenticating requests
//! - Classifying events into handshakes, bot echoes, and commands
//! - Replying to recognized commands through the chat service

pub mod dispatch;
pub mod events;
