//! FnSource - a value source assembled from raw engine operations.
//!
//! Engines that expose plain per-kind functions (`read(handle)`,
//! `watch(handle, cb)`, `set(handle, v)`, `drop(handle)`) do not need a
//! dedicated type per value kind; the caller supplies the operations here.

use tracing::warn;

use crate::engine::{BindingSource, ValueSource, WatchCallback};

use super::WatcherGuard;

type ReadFn<T> = Box<dyn Fn(u64) -> T>;
type WatchFn<T> = Box<dyn Fn(u64, WatchCallback<T>) -> WatcherGuard>;
type SetFn<T> = Box<dyn Fn(u64, T)>;
type DropFn = Box<dyn FnOnce(u64)>;

/// Raw value handle plus the operations that act on it.
pub struct FnSource<T> {
    handle: u64,
    read: ReadFn<T>,
    watch: WatchFn<T>,
    set: Option<SetFn<T>>,
    drop: DropFn,
}

impl<T: 'static> FnSource<T> {
    /// A read-only source (for [`Computed`](super::Computed)).
    pub fn new(
        handle: u64,
        read: impl Fn(u64) -> T + 'static,
        watch: impl Fn(u64, WatchCallback<T>) -> WatcherGuard + 'static,
        drop: impl FnOnce(u64) + 'static,
    ) -> Self {
        Self {
            handle,
            read: Box::new(read),
            watch: Box::new(watch),
            set: None,
            drop: Box::new(drop),
        }
    }

    /// Add the write path (for [`Binding`](super::Binding)).
    pub fn with_set(mut self, set: impl Fn(u64, T) + 'static) -> Self {
        self.set = Some(Box::new(set));
        self
    }

    pub fn handle(&self) -> u64 {
        self.handle
    }
}

impl<T: 'static> ValueSource<T> for FnSource<T> {
    fn read(&self) -> T {
        (self.read)(self.handle)
    }

    fn watch(&self, callback: WatchCallback<T>) -> WatcherGuard {
        (self.watch)(self.handle, callback)
    }

    fn release(self: Box<Self>) {
        let Self {
            handle,
            drop: release,
            ..
        } = *self;
        release(handle);
    }
}

impl<T: 'static> BindingSource<T> for FnSource<T> {
    fn set(&self, value: T) {
        match self.set.as_ref() {
            Some(set) => set(self.handle, value),
            None => warn!(handle = self.handle, "set on a read-only value source ignored"),
        }
    }
}
