//! Query engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the query controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Quiet period in milliseconds before typed search text is applied.
    ///
    /// Each keystroke restarts the timer.
    pub search_debounce_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 400,
        }
    }
}

impl QueryConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
