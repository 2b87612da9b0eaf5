//! Capture-side configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on a single enrichment lookup.
const fn default_lookup_timeout_ms() -> u64 {
    2000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Upper bound, in milliseconds, on each enrichment store lookup.
    ///
    /// Capture runs inline after the success signal; this bound keeps a slow
    /// domain store from stalling the caller. On timeout the fallback chain
    /// degrades to the synthesized placeholder label.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// Whether to record `source_address` / `user_agent` provenance.
    #[serde(default = "default_true")]
    pub record_provenance: bool,
}

const fn default_true() -> bool {
    true
}

impl CaptureConfig {
    /// The lookup bound as a [`Duration`].
    #[must_use]
    pub const fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: default_lookup_timeout_ms(),
            record_provenance: true,
        }
    }
}
