//! WatcherGuard - scoped ownership of one engine subscription.

use std::fmt;

/// Releases exactly one engine subscription when dropped.
///
/// The guard is neither `Clone` nor `Copy`, so the subscription always has a
/// single owner and cannot be released twice. Dropping is the only
/// cancellation primitive.
#[must_use = "dropping a WatcherGuard releases its subscription immediately"]
pub struct WatcherGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl WatcherGuard {
    /// Wrap the engine's unsubscribe operation.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Whether dropping this guard will release a subscription.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now. Equivalent to dropping the guard.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for WatcherGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for WatcherGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatcherGuard")
            .field("active", &self.is_active())
            .finish()
    }
}
