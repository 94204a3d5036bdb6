//! Binding - read-write engine value with feedback-loop suppression.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{signal, Signal};
use tracing::trace;

use crate::engine::BindingSource;

use super::WatcherGuard;

// =============================================================================
// Sync State
// =============================================================================

/// Where a binding's current write originates.
///
/// `Idle` is the only state observable between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    /// A value is being mirrored locally; writes back to the engine are dropped.
    SyncingFromExternal,
}

/// Enters `SyncingFromExternal` and restores the previous state on drop.
struct SyncScope<'a> {
    state: &'a Cell<SyncState>,
    previous: SyncState,
}

impl<'a> SyncScope<'a> {
    fn enter(state: &'a Cell<SyncState>) -> Self {
        let previous = state.replace(SyncState::SyncingFromExternal);
        Self { state, previous }
    }
}

impl Drop for SyncScope<'_> {
    fn drop(&mut self) {
        self.state.set(self.previous);
    }
}

// =============================================================================
// Binding
// =============================================================================

struct BindingInner<T: Clone + PartialEq + 'static> {
    source: Option<Box<dyn BindingSource<T>>>,
    value: Signal<T>,
    state: Cell<SyncState>,
    guard: Option<WatcherGuard>,
}

impl<T: Clone + PartialEq + 'static> BindingInner<T> {
    /// Mirror an engine push without letting anything re-push it.
    fn mirror(&self, value: T) {
        let _sync = SyncScope::enter(&self.state);
        self.value.set(value);
    }
}

impl<T: Clone + PartialEq + 'static> Drop for BindingInner<T> {
    fn drop(&mut self) {
        drop(self.guard.take());
        if let Some(source) = self.source.take() {
            source.release();
        }
    }
}

/// A two-way reactive value shared with the engine.
///
/// - Local [`set`](Binding::set) while idle pushes to the engine immediately
///   and updates the cache.
/// - An engine push is mirrored under `SyncingFromExternal`; any write that
///   happens inside that window (typically a host effect reacting to the
///   mirrored signal) is suppressed instead of echoed back.
///
/// Like [`Computed`](super::Computed), ownership is exclusive and dropping
/// releases the engine subscription exactly once.
pub struct Binding<T: Clone + PartialEq + 'static> {
    inner: Rc<BindingInner<T>>,
}

impl<T: Clone + PartialEq + 'static> Binding<T> {
    /// Take ownership of `source`, read it, and start watching.
    pub fn new(source: Box<dyn BindingSource<T>>) -> Self {
        let initial = source.read();

        let inner = Rc::new_cyclic(|weak: &Weak<BindingInner<T>>| {
            let weak = weak.clone();
            let guard = source.watch(Box::new(move |value: T| {
                if let Some(inner) = weak.upgrade() {
                    trace!("binding: external push");
                    inner.mirror(value);
                }
            }));

            BindingInner {
                source: Some(source),
                value: signal(initial),
                state: Cell::new(SyncState::Idle),
                guard: Some(guard),
            }
        });

        Self { inner }
    }

    /// Current cached value.
    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    /// Write locally and push to the engine.
    ///
    /// The cache is updated first, so a corrected value the engine pushes
    /// back during the write is what remains. Dropped while an external
    /// value is being mirrored.
    pub fn set(&self, value: T) {
        let inner = &self.inner;
        if inner.state.get() == SyncState::SyncingFromExternal {
            trace!("binding: write suppressed during external sync");
            return;
        }

        inner.value.set(value.clone());
        if let Some(source) = inner.source.as_ref() {
            source.set(value);
        }
    }

    /// Read-modify-write through [`set`](Binding::set).
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    /// Reactive mirror of the cached value.
    pub fn signal(&self) -> Signal<T> {
        self.inner.value.clone()
    }

    /// Current sync state. Always `Idle` between operations.
    pub fn sync_state(&self) -> SyncState {
        self.inner.state.get()
    }

    /// Register an extra engine watcher.
    pub fn watch(&self, f: impl Fn(T) + 'static) -> WatcherGuard {
        match self.inner.source.as_ref() {
            Some(source) => source.watch(Box::new(f)),
            None => WatcherGuard::inert(),
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .field("state", &self.sync_state())
            .finish()
    }
}
