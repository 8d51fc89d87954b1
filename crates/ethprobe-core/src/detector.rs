//! Provider detection service.
//!
//! Races three signals: the provider already present in the slot, the host
//! agent's injection-completed notification, and a bounded timer. Resolves
//! with the provider value or a typed, terminal error; it never retries.

use std::sync::Arc;

use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::ProviderObject;
use crate::ports::{InjectionEvents, ProviderSlot};
use crate::settings::DetectOptions;

/// Terminal detection failures.
///
/// Messages are part of the compatibility contract with existing
/// integrations and must not change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    /// The shared binding never became set within the wait window.
    #[error("Unable to detect window.ethereum.")]
    ProviderNotFound,

    /// A provider was detected but lacks the required MetaMask marker.
    #[error("Non-MetaMask window.ethereum detected.")]
    NotMetaMask,
}

/// Detects a wallet provider injected into the shared host slot.
///
/// The detector is stateless across calls: every [`detect`] performs a fresh
/// short-circuit check and, when needed, a fresh subscription and timer.
/// Callers wanting another attempt simply call again.
///
/// [`detect`]: ProviderDetector::detect
#[derive(Clone)]
pub struct ProviderDetector {
    slot: Arc<dyn ProviderSlot>,
    events: Arc<dyn InjectionEvents>,
}

impl ProviderDetector {
    /// Create a detector over the given host ports.
    #[must_use]
    pub fn new(slot: Arc<dyn ProviderSlot>, events: Arc<dyn InjectionEvents>) -> Self {
        Self { slot, events }
    }

    /// Resolve the injected provider, waiting up to `options.timeout()`.
    ///
    /// If the slot is already populated at call time, no listener is
    /// registered and no timer is started; the value is vetted and returned
    /// directly. Otherwise the call suspends until the injection notification
    /// or the timer fires, whichever comes first, then re-reads the slot.
    ///
    /// # Errors
    ///
    /// - [`DetectError::ProviderNotFound`] if the slot is still empty after
    ///   the wait window.
    /// - [`DetectError::NotMetaMask`] if `options.must_be_metamask` is set
    ///   and the detected provider lacks the capability marker. Unless
    ///   `options.silent` is set, this also emits a warning first; silencing
    ///   never turns the failure into a success.
    pub async fn detect(&self, options: DetectOptions) -> Result<ProviderObject, DetectError> {
        if let Some(provider) = self.slot.get() {
            debug!("provider already present, skipping injection wait");
            return Self::vet(provider, options);
        }

        {
            let mut signal = self.events.subscribe();
            debug!(
                timeout_ms = options.timeout_ms,
                "waiting for injection announcement"
            );
            tokio::select! {
                () = signal.wait() => debug!("injection announced"),
                () = sleep(options.timeout()) => debug!("injection wait timed out"),
            }
            // Scope end drops the signal, deregistering the listener (and
            // cancelling whichever race branch lost) before the call settles.
        }

        match self.slot.get() {
            Some(provider) => Self::vet(provider, options),
            None => Err(DetectError::ProviderNotFound),
        }
    }

    /// Apply the vendor requirement to a detected provider.
    fn vet(provider: ProviderObject, options: DetectOptions) -> Result<ProviderObject, DetectError> {
        if options.must_be_metamask && !provider.is_metamask() {
            if !options.silent {
                warn!("{}", DetectError::NotMetaMask);
            }
            return Err(DetectError::NotMetaMask);
        }
        Ok(provider)
    }
}

/// Detect the injected provider through a combined environment handle.
///
/// Convenience entry point for embedders whose environment implements both
/// ports on one type.
pub async fn detect_provider<E>(
    env: Arc<E>,
    options: DetectOptions,
) -> Result<ProviderObject, DetectError>
where
    E: ProviderSlot + InjectionEvents + 'static,
{
    let detector = ProviderDetector::new(
        Arc::clone(&env) as Arc<dyn ProviderSlot>,
        env as Arc<dyn InjectionEvents>,
    );
    detector.detect(options).await
}
