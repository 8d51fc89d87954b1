//! In-process host environment for ethprobe.
//!
//! [`HostWindow`] plays the role of the external injecting agent: it owns the
//! shared provider slot and the one-shot injection announcement, and
//! implements the core ports the detector consumes. Embedders bridging a real
//! host environment can use it as the reference adapter; tests drive it
//! directly.
#![deny(unused_crate_dependencies)]

mod window;

pub use window::HostWindow;
