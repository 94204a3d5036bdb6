//! The external sizing algorithm.

use crate::types::{ChildMetadata, ProposalSize, Rect, Size};

/// An externally supplied layout algorithm (stack, grid, overlay, ...).
///
/// The bridge never decides geometry itself; it measures content and feeds
/// the results through these three calls. `size` and `place` of one pass
/// always receive the same metadata slice.
pub trait LayoutAlgorithm {
    /// One size hint per child, used to decide how much space to offer.
    fn propose(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<ProposalSize>;

    /// The container's own size for the measured children.
    fn size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Size;

    /// One rect per child inside `bounds`.
    fn place(&self, bounds: Rect, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<Rect>;
}

impl<L: LayoutAlgorithm + ?Sized> LayoutAlgorithm for Box<L> {
    fn propose(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<ProposalSize> {
        (**self).propose(parent, children)
    }

    fn size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Size {
        (**self).size(parent, children)
    }

    fn place(&self, bounds: Rect, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<Rect> {
        (**self).place(bounds, parent, children)
    }
}
