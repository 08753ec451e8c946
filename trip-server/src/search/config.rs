//! Search configuration.

use std::time::Duration;

/// Configuration parameters for a trip search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Bounded wait for one mode's whole pipeline (request + parse).
    /// A pipeline that outlives this settles its slot as failed.
    pub mode_timeout: Duration,
}

impl SearchConfig {
    /// Create a configuration with the given per-mode timeout.
    pub fn new(mode_timeout: Duration) -> Self {
        Self { mode_timeout }
    }

    /// Set the per-mode timeout.
    pub fn with_mode_timeout(mut self, timeout: Duration) -> Self {
        self.mode_timeout = timeout;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode_timeout: Duration::from_secs(15),
        }
    }
}
