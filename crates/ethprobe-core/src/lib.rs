//! Core domain types, ports, and the provider detector for ethprobe.
//!
//! ethprobe resolves the wallet provider a host agent injects into a shared
//! slot, tolerating injection that completes after startup. The detector
//! races the agent's injection-completed notification against a bounded
//! timer, short-circuiting entirely when the slot is already populated.
//!
//! This crate is pure domain + ports: it never owns the slot and never talks
//! to a concrete host. Adapters (see `ethprobe-host`) implement the ports.
#![deny(unused_crate_dependencies)]

pub mod detector;
pub mod domain;
pub mod ports;
pub mod settings;

// Re-export the public surface at the crate root for convenience
pub use detector::{DetectError, ProviderDetector, detect_provider};
pub use domain::{METAMASK_MARKER_KEY, ProviderObject};
pub use ports::{InjectionEvents, InjectionSignal, ProviderSlot};
pub use settings::{DEFAULT_DETECT_TIMEOUT_MS, DetectOptions};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
