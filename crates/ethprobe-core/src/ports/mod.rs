//! Port definitions (trait abstractions) for the host environment.
//!
//! Ports define what the detector expects from the environment hosting the
//! shared provider slot. They contain no transport details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No channel or runtime types in any signature
//! - The slot is read-only from core; the mutator half belongs to the host
//! - Subscriptions are owned guards: dropping one is the deregistration

pub mod injection_events;
pub mod provider_slot;

pub use injection_events::{InjectionEvents, InjectionSignal};
pub use provider_slot::ProviderSlot;
