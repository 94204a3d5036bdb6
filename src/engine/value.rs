//! Reactive value operations exposed by the engine.

use crate::reactive::WatcherGuard;

/// Callback the engine invokes with each pushed value.
pub type WatchCallback<T> = Box<dyn Fn(T)>;

/// Read-only value subscription (one per value kind `T`).
///
/// Implementors wrap one engine handle. The bridge owns the source
/// exclusively and calls [`release`](ValueSource::release) exactly once.
pub trait ValueSource<T> {
    /// Pull the current value.
    fn read(&self) -> T;

    /// Register `callback` for pushes. Dropping the guard unregisters it.
    ///
    /// Pushes are delivered on the host thread.
    fn watch(&self, callback: WatchCallback<T>) -> WatcherGuard;

    /// Drop the engine handle. Taking `Box<Self>` makes a second call impossible.
    fn release(self: Box<Self>);
}

/// Read-write value subscription.
pub trait BindingSource<T>: ValueSource<T> {
    /// Push a new value to the engine.
    fn set(&self, value: T);
}
