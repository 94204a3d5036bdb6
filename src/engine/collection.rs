//! Lazy collection access.

use super::handle::ViewHandle;

/// Stable identity of a collection element (for diffing).
pub type ItemId = u64;

/// External count + index access pair.
///
/// `Send + Sync` because id batches may be fetched off the host thread.
/// `view_at` is only ever called on the host thread.
pub trait CollectionSource: Send + Sync + 'static {
    /// Number of elements the engine currently exposes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stable id of the element at `index`.
    fn id_at(&self, index: usize) -> ItemId;

    /// Fresh view handle for the element at `index`.
    fn view_at(&self, index: usize) -> Option<ViewHandle>;
}
