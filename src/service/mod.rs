//! Service integrations for external APIs and clients.
//!
//! This module contains the outbound chat service (Slack) used to post replies.
//! The service defines a generic trait and a concrete implementation,
//! allowing for extensibility and easy testing.

pub mod chat;
