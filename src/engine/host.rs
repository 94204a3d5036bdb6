//! Platform rendering host.

use crate::types::{ProposalSize, Rect, Size};

/// A concrete platform view (text, button, image, ...).
///
/// The bridge reaches into a host view only through these two calls.
pub trait HostView {
    /// Size this view wants for `proposal`. Pure with respect to layout state.
    fn measure(&mut self, proposal: ProposalSize) -> Size;

    /// Final frame, in the parent's coordinate space.
    fn place(&mut self, rect: Rect);
}

impl<V: HostView + ?Sized> HostView for Box<V> {
    fn measure(&mut self, proposal: ProposalSize) -> Size {
        (**self).measure(proposal)
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect)
    }
}
