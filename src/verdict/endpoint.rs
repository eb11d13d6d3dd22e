//! Endpoint registration payload.
//!
//! A probe registers itself with `<hostname>:<edr id>` as its identifier and
//! its normalized platform string as `dos`.

use crate::dos::{normalize_dos, Dos};
use crate::symbol::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_EDR_ID: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRegistration {
    pub id: String,
    pub dos: String,
}

impl EndpointRegistration {
    pub fn new(hostname: &str, raw_dos: &str, edr_id: Option<&str>) -> Self {
        let dos = normalize_dos(raw_dos);
        if dos == Dos::FALLBACK.name() {
            debug!(raw_dos, "unrecognized platform, registering as none");
        }
        Self {
            id: format!("{}:{}", hostname.trim(), edr_id.unwrap_or(DEFAULT_EDR_ID)),
            dos,
        }
    }
}
