//! Read-side configuration.

use serde::{Deserialize, Serialize};

/// Default page size for audit queries.
const fn default_limit() -> u32 {
    20
}

/// Default stats window in days.
const fn default_window_days() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Default `limit` when a query does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Default trailing window for the statistics aggregator.
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_window_days: default_window_days(),
        }
    }
}
