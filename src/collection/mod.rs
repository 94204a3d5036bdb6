//! Virtualized Collection - a lazily loaded, randomly indexable list.
//!
//! Wraps an engine [`CollectionSource`](crate::engine::CollectionSource)
//! (count + per-index id/view access) behind a local id buffer that grows in
//! batches as the host scrolls toward its end.
//!
//! ```text
//! host thread                                  background
//! ───────────                                  ──────────
//! get(i) ── near end of buffer? ── spawn ───▶  id_at(start..start+n)
//!                                                   │
//! poll() ◀──────────── mpsc::Receiver ◀──── PrefetchBatch
//!   └── extend buffer, clear in-flight flag, loaded_signal.set(len)
//! ```
//!
//! Only one batch is ever in flight per list. Batches are applied only on
//! the host thread, inside [`VirtualList::poll`].

mod list;
mod spawner;

pub use list::*;
pub use spawner::*;
