//! Proposal resolution - the fallback chain for missing dimensions.

use crate::config::ViewportFallback;
use crate::types::{normalize_dimension, Axis, ProposalSize, Size};

/// Bounds known around a container when a pass starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundsFallback {
    /// The parent's last known bound.
    pub parent: Option<Size>,
    /// This container's previously placed bound.
    pub cached: Option<Size>,
    /// Where the horizontal viewport width comes from.
    pub viewport: ViewportFallback,
}

impl BoundsFallback {
    /// Resolve one dimension.
    ///
    /// Order: explicit proposal → parent bound → cached bound →
    /// viewport width (horizontal only) → unconstrained.
    pub fn resolve_dimension(&self, axis: Axis, explicit: Option<f32>) -> Option<f32> {
        normalize_dimension(explicit)
            .or_else(|| usable(self.parent.map(|s| s.along(axis))))
            .or_else(|| usable(self.cached.map(|s| s.along(axis))))
            .or_else(|| match axis {
                Axis::Horizontal => self.viewport.width(),
                Axis::Vertical => None,
            })
    }

    /// Resolve both dimensions of a parent proposal.
    pub fn resolve(&self, proposal: ProposalSize) -> ProposalSize {
        ProposalSize {
            width: self.resolve_dimension(Axis::Horizontal, proposal.width),
            height: self.resolve_dimension(Axis::Vertical, proposal.height),
        }
    }
}

/// A bound is usable when it is finite and non-negative.
fn usable(value: Option<f32>) -> Option<f32> {
    normalize_dimension(value).filter(|v| *v >= 0.0)
}
