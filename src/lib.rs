//! # spark-bridge
//!
//! Host-side bridge between an external declarative UI engine and a
//! platform rendering host.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! the host-side reactive mirror of engine values.
//!
//! ## Architecture
//!
//! The engine is reachable only through opaque handles. The bridge resolves
//! those handles into concrete nodes, keeps live values in sync, and
//! negotiates layout between the engine's algorithms and host views:
//!
//! ```text
//! ViewHandle ──▶ Resolver ──▶ RenderNode ──▶ LayoutContainer ──▶ HostView
//!                  │  (factory or body)         │ propose / measure
//!                  │                            │ size / place
//!           ComponentRegistry            LayoutAlgorithm (engine)
//!
//! Computed / Binding ◀── push ── engine value      VirtualList ◀── batches ── collection
//! ```
//!
//! Everything runs on one host thread. The only background work is the
//! virtual list's id prefetch, whose results are applied back on the host
//! thread.
//!
//! ## Modules
//!
//! - [`types`] - TypeId, geometry, proposals, child metadata
//! - [`engine`] - Traits the external engine and host implement
//! - [`registry`] - Component registry and handle resolution
//! - [`reactive`] - Computed, Binding, WatcherGuard
//! - [`collection`] - Virtualized, prefetching collection
//! - [`layout`] - Three-phase layout negotiation

pub mod collection;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod node;
pub mod reactive;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{BridgeConfig, PrefetchConfig, ViewportFallback};
pub use error::{BridgeError, BridgeResult};

pub use engine::{
    BindingSource, CollectionSource, Env, HostView, ItemId, LayoutAlgorithm, ValueSource,
    ViewEngine, ViewHandle,
};

pub use node::{NodeContent, RenderNode};

pub use registry::{ComponentFlags, ComponentRegistry, Factory, Resolver};

pub use reactive::{Binding, Computed, FnSource, SyncState, WatcherGuard};

pub use collection::{InlineSpawner, PrefetchBatch, Spawner, ThreadSpawner, VirtualList};

pub use layout::{BoundsFallback, FlexAlgorithm, LayoutContainer, LayoutPass};

// Re-export spark-signals for convenience
pub use spark_signals::{derived, effect, signal, Signal};
