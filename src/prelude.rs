//! Common imports for the webhook's modules.

pub use crate::base::{
    config::Config,
    types::{Dispatch, EventResponse, InboundEvent, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
