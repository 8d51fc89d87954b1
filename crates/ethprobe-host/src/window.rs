//! Shared slot and injection announcement owned by the host agent.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use ethprobe_core::domain::ProviderObject;
use ethprobe_core::ports::{InjectionEvents, InjectionSignal, ProviderSlot};
use tokio::sync::watch;
use tracing::debug;

/// In-process stand-in for the page window an external agent injects into.
///
/// Owns the mutator half of the shared slot plus the one-shot
/// injection-completed announcement; the detector sees both only through the
/// core ports. Cloning yields another handle to the same window.
#[derive(Clone)]
pub struct HostWindow {
    inner: Arc<WindowInner>,
}

struct WindowInner {
    slot: RwLock<Option<ProviderObject>>,
    announce_tx: watch::Sender<bool>,
}

impl HostWindow {
    /// Create a window with an empty slot and no announcement fired.
    #[must_use]
    pub fn new() -> Self {
        let (announce_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(WindowInner {
                slot: RwLock::new(None),
                announce_tx,
            }),
        }
    }

    /// Write the slot without announcing.
    ///
    /// Models an agent that sets the binding but whose announcement the page
    /// never observes; detection then succeeds on the timer path.
    pub fn set_provider(&self, provider: ProviderObject) {
        *self.inner.slot.write().expect("slot lock poisoned") = Some(provider);
    }

    /// Reset the slot to empty.
    pub fn clear_provider(&self) {
        *self.inner.slot.write().expect("slot lock poisoned") = None;
    }

    /// Fire the one-shot injection-completed announcement.
    ///
    /// Wakes every subscription registered before this call. The
    /// announcement fires at most once; repeated calls are no-ops and do not
    /// wake later subscribers.
    pub fn announce(&self) {
        let fired = self.inner.announce_tx.send_if_modified(|announced| {
            if *announced {
                false
            } else {
                *announced = true;
                true
            }
        });
        if fired {
            debug!("announced provider injection");
        }
    }

    /// Normal external-agent sequence: write the slot, then announce.
    pub fn inject(&self, provider: ProviderObject) {
        self.set_provider(provider);
        self.announce();
    }

    /// Number of live injection subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.announce_tx.receiver_count()
    }
}

impl Default for HostWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderSlot for HostWindow {
    fn get(&self) -> Option<ProviderObject> {
        self.inner.slot.read().expect("slot lock poisoned").clone()
    }
}

impl InjectionEvents for HostWindow {
    fn subscribe(&self) -> Box<dyn InjectionSignal> {
        Box::new(AnnounceSignal {
            rx: self.inner.announce_tx.subscribe(),
        })
    }
}

/// Watch-backed injection signal; dropping the receiver deregisters it.
///
/// `subscribe` marks the current announcement state as seen, so a signal
/// registered before the announcement resolves even when awaited after it,
/// while one registered later never resolves.
struct AnnounceSignal {
    rx: watch::Receiver<bool>,
}

#[async_trait]
impl InjectionSignal for AnnounceSignal {
    async fn wait(&mut self) {
        if self.rx.changed().await.is_err() {
            // Window dropped without ever announcing: stay pending and let
            // the detector's timer decide the outcome.
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_announcement_reaches_prior_subscriber() {
        let window = HostWindow::new();
        let mut signal = window.subscribe();

        window.announce();

        // Awaited after the fact, still resolves
        timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("signal should resolve after announce");
    }

    #[tokio::test]
    async fn test_late_subscriber_never_hears_the_announcement() {
        let window = HostWindow::new();
        window.announce();

        let mut signal = window.subscribe();
        let result = timeout(Duration::from_millis(20), signal.wait()).await;
        assert!(result.is_err(), "announcement is one-shot");
    }

    #[tokio::test]
    async fn test_subscriber_count_tracks_signal_lifetime() {
        let window = HostWindow::new();
        assert_eq!(window.subscriber_count(), 0);

        let signal = window.subscribe();
        assert_eq!(window.subscriber_count(), 1);

        drop(signal);
        assert_eq!(window.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_set_without_announce_leaves_waiters_pending() {
        let window = HostWindow::new();
        let mut signal = window.subscribe();

        window.set_provider(ProviderObject::metamask());

        let result = timeout(Duration::from_millis(20), signal.wait()).await;
        assert!(result.is_err(), "no announcement, no wakeup");
        assert!(window.get().unwrap().is_metamask());
    }

    #[test]
    fn test_slot_mutators() {
        let window = HostWindow::new();
        assert_eq!(window.get(), None);

        window.set_provider(ProviderObject::new());
        assert_eq!(window.get(), Some(ProviderObject::new()));

        window.clear_provider();
        assert_eq!(window.get(), None);

        // Clones share the same window
        let alias = window.clone();
        alias.set_provider(ProviderObject::metamask());
        assert!(window.get().unwrap().is_metamask());
    }
}
