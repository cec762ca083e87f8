//! Core components, types, and utilities for the write-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The command token and its canned reply.
//! - Slack request signature verification.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod signature;
pub mod types;
