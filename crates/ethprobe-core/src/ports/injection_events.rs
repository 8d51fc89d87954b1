//! Subscription to the injection-completed notification.

use async_trait::async_trait;

/// An owned, one-shot wait on the injection-completed notification.
///
/// Dropping the signal deregisters the underlying listener, so registration
/// and deregistration pair up structurally: exactly once per subscription,
/// on every exit path.
#[async_trait]
pub trait InjectionSignal: Send {
    /// Resolve when the injection-completed notification fires.
    ///
    /// The notification is observed by every subscription registered before
    /// it fired, even when awaited afterwards. A subscription registered
    /// after the notification never resolves: the signal is one-shot, and a
    /// caller that missed it is expected to find the slot already populated.
    async fn wait(&mut self);
}

/// Subscription access to the injection-completed notification.
pub trait InjectionEvents: Send + Sync {
    /// Register a listener and return its owned signal.
    fn subscribe(&self) -> Box<dyn InjectionSignal>;
}
