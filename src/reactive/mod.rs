//! Value Bridge - Reactive values shared with the external engine.
//!
//! The engine owns the truth; the bridge keeps a locally cached copy that is
//! refreshed by push notifications and mirrored into a spark-signals
//! [`Signal`](spark_signals::Signal) so host deriveds and effects react to it.
//!
//! - [`Computed`]: read-only, cached, push-refreshed
//! - [`Binding`]: read-write with a sync flag against feedback loops
//! - [`WatcherGuard`]: RAII token; dropping it releases one engine subscription
//! - [`FnSource`]: a source assembled from a raw handle and caller-supplied operations
//!
//! # Lifecycle
//!
//! ```text
//! new(source) ── read() ──▶ cached value ──▶ Signal<T>
//!      │
//!      └── watch(cb) ──▶ WatcherGuard (held internally)
//!
//! drop ── guard dropped (unwatch) ── source.release() (exactly once)
//! ```

mod binding;
mod computed;
mod source;
mod watcher;


pub use binding::*;
pub use computed::*;
pub use source::*;
pub use watcher::*;
