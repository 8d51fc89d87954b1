//! Detection options.
//!
//! Pure configuration for a single detection attempt, with serde support so
//! embedders can carry the options across a JSON boundary unchanged.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wait window, in milliseconds, for provider injection.
pub const DEFAULT_DETECT_TIMEOUT_MS: u64 = 3_000;

/// Options for a single detection attempt.
///
/// Every field has a default, so `DetectOptions::default()` matches the
/// behavior embedders get when they pass no options at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectOptions {
    /// Milliseconds to wait for the injection notification before giving up.
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,

    /// Require the MetaMask capability marker on the detected provider.
    #[serde(rename = "mustBeMetaMask")]
    pub must_be_metamask: bool,

    /// Suppress the warning emitted when a marker-less provider is rejected.
    /// Silencing never changes the outcome, only the warning.
    pub silent: bool,
}

impl DetectOptions {
    /// Create options with the default wait window and no vendor requirement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout_ms: DEFAULT_DETECT_TIMEOUT_MS,
            must_be_metamask: false,
            silent: false,
        }
    }

    /// Set the wait window in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Require the MetaMask capability marker.
    #[must_use]
    pub const fn require_metamask(mut self, required: bool) -> Self {
        self.must_be_metamask = required;
        self
    }

    /// Suppress the marker-mismatch warning.
    #[must_use]
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// The wait window as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self::new()
    }
}
