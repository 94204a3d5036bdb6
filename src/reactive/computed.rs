//! Computed - read-only engine value with a local cache.

use std::fmt;
use std::rc::{Rc, Weak};

use spark_signals::{signal, Signal};
use tracing::trace;

use crate::engine::ValueSource;

use super::WatcherGuard;

struct ComputedInner<T: Clone + PartialEq + 'static> {
    source: Option<Box<dyn ValueSource<T>>>,
    value: Signal<T>,
    /// The single internal watch that keeps `value` fresh.
    guard: Option<WatcherGuard>,
}

impl<T: Clone + PartialEq + 'static> Drop for ComputedInner<T> {
    fn drop(&mut self) {
        // Unwatch before the handle itself goes away.
        drop(self.guard.take());
        if let Some(source) = self.source.take() {
            source.release();
        }
    }
}

/// A read-only reactive value owned by the engine.
///
/// Construction pulls the initial value and installs exactly one internal
/// watch. Reads are served from the cache; pushes refresh it and propagate
/// through [`signal`](Computed::signal) to any host effect.
///
/// Ownership is exclusive: `Computed` is not `Clone`, and dropping it
/// releases the engine subscription exactly once.
///
/// # Example
///
/// ```ignore
/// use spark_bridge::reactive::Computed;
///
/// let title = Computed::new(engine.string_source(handle));
/// let label = title.signal();
/// effect(move || host_label.set_text(&label.get()));
/// ```
pub struct Computed<T: Clone + PartialEq + 'static> {
    inner: Rc<ComputedInner<T>>,
}

impl<T: Clone + PartialEq + 'static> Computed<T> {
    /// Take ownership of `source`, read it, and start watching.
    pub fn new(source: Box<dyn ValueSource<T>>) -> Self {
        let initial = source.read();

        let inner = Rc::new_cyclic(|weak: &Weak<ComputedInner<T>>| {
            let weak = weak.clone();
            let guard = source.watch(Box::new(move |value: T| {
                if let Some(inner) = weak.upgrade() {
                    trace!("computed: external push");
                    inner.value.set(value);
                }
            }));

            ComputedInner {
                source: Some(source),
                value: signal(initial),
                guard: Some(guard),
            }
        });

        Self { inner }
    }

    /// Current cached value.
    ///
    /// Inside a spark-signals derived or effect this creates a dependency.
    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    /// Reactive mirror of the cached value.
    pub fn signal(&self) -> Signal<T> {
        self.inner.value.clone()
    }

    /// Register an extra engine watcher.
    ///
    /// The returned guard unregisters `f` exactly once when dropped.
    pub fn watch(&self, f: impl Fn(T) + 'static) -> WatcherGuard {
        match self.inner.source.as_ref() {
            Some(source) => source.watch(Box::new(f)),
            None => WatcherGuard::inert(),
        }
    }

    /// Pull from the engine again, bypassing the push path.
    pub fn refresh(&self) {
        if let Some(source) = self.inner.source.as_ref() {
            self.inner.value.set(source.read());
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("value", &self.get())
            .finish()
    }
}
