//! Taffy Bridge - a flexbox [`LayoutAlgorithm`] backed by Taffy.
//!
//! Each call builds a throwaway Taffy tree: one root flex container and one
//! leaf per child, sized from the child's metadata.
//!
//! ```text
//! ChildMetadata                        Taffy leaf
//! ─────────────                        ──────────
//! proposal (measured size)   ──▶  size: Length(w) × Length(h)
//! stretch                    ──▶  flex_grow 1, main size 0, cross auto
//! priority > 0               ──▶  flex_shrink 0
//! ```

use taffy::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, LengthPercentage, NodeId, Style,
    TaffyResult, TaffyTree,
};
use tracing::warn;

use crate::engine::LayoutAlgorithm;
use crate::types::{Axis, ChildMetadata, ProposalSize, Rect, Size};

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

fn to_dimension(value: Option<f32>) -> Dimension {
    match value {
        Some(length) => Dimension::Length(length.max(0.0)),
        None => Dimension::Auto,
    }
}

fn to_available(value: Option<f32>) -> AvailableSpace {
    match value {
        Some(length) => AvailableSpace::Definite(length.max(0.0)),
        None => AvailableSpace::MaxContent,
    }
}

fn taffy_size<T>(axis: Axis, main: T, cross: T) -> taffy::Size<T> {
    match axis {
        Axis::Horizontal => taffy::Size {
            width: main,
            height: cross,
        },
        Axis::Vertical => taffy::Size {
            width: cross,
            height: main,
        },
    }
}

// =============================================================================
// FLEX ALGORITHM
// =============================================================================

/// Single-line flexbox along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexAlgorithm {
    direction: Axis,
    gap: f32,
}

impl FlexAlgorithm {
    pub fn new(direction: Axis) -> Self {
        Self {
            direction,
            gap: 0.0,
        }
    }

    /// Children laid out left to right.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Children laid out top to bottom.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Space between adjacent children along the main axis.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
        self
    }

    pub fn direction(&self) -> Axis {
        self.direction
    }

    fn cross(&self) -> Axis {
        match self.direction {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    fn leaf_style(&self, child: &ChildMetadata) -> Style {
        let size = if child.stretch {
            taffy_size(self.direction, Dimension::Length(0.0), Dimension::Auto)
        } else {
            taffy::Size {
                width: to_dimension(child.proposal.width),
                height: to_dimension(child.proposal.height),
            }
        };

        Style {
            size,
            flex_grow: if child.stretch { 1.0 } else { 0.0 },
            flex_shrink: if child.priority > 0 { 0.0 } else { 1.0 },
            ..Style::default()
        }
    }

    fn root_style(&self, main: Option<f32>, cross: Option<f32>) -> Style {
        let flex_direction = match self.direction {
            Axis::Horizontal => FlexDirection::Row,
            Axis::Vertical => FlexDirection::Column,
        };
        let gap = LengthPercentage::Length(self.gap);

        Style {
            flex_direction,
            align_items: Some(AlignItems::Stretch),
            size: taffy_size(self.direction, to_dimension(main), to_dimension(cross)),
            gap: taffy::Size {
                width: gap,
                height: gap,
            },
            ..Style::default()
        }
    }

    /// Build and lay out a tree. Returns the tree, its root and the leaves.
    fn compute(
        &self,
        root_style: Style,
        available: taffy::Size<AvailableSpace>,
        children: &[ChildMetadata],
    ) -> TaffyResult<(TaffyTree<()>, NodeId, Vec<NodeId>)> {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let leaves = children
            .iter()
            .map(|child| tree.new_leaf(self.leaf_style(child)))
            .collect::<TaffyResult<Vec<_>>>()?;
        let root = tree.new_with_children(root_style, &leaves)?;
        tree.compute_layout(root, available)?;
        Ok((tree, root, leaves))
    }

    fn try_size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> TaffyResult<Size> {
        let main = parent.along(self.direction);
        let cross = parent.along(self.cross());
        let has_stretch = children.iter().any(|c| c.stretch);

        // Without stretch children the container hugs its content.
        let root_main = main.filter(|_| has_stretch);
        let root_style = self.root_style(root_main, None);
        let available = taffy_size(self.direction, AvailableSpace::MaxContent, to_available(cross));

        let (tree, root, _) = self.compute(root_style, available, children)?;
        let layout = tree.layout(root)?;
        Ok(Size::new(layout.size.width, layout.size.height))
    }

    fn try_place(&self, bounds: Rect, children: &[ChildMetadata]) -> TaffyResult<Vec<Rect>> {
        let size = bounds.size;
        let root_style =
            self.root_style(Some(size.along(self.direction)), Some(size.along(self.cross())));
        let available = taffy::Size {
            width: AvailableSpace::Definite(size.width),
            height: AvailableSpace::Definite(size.height),
        };

        let (tree, _, leaves) = self.compute(root_style, available, children)?;
        leaves
            .iter()
            .map(|leaf| {
                let layout = tree.layout(*leaf)?;
                Ok(Rect::new(
                    bounds.x() + layout.location.x,
                    bounds.y() + layout.location.y,
                    layout.size.width,
                    layout.size.height,
                ))
            })
            .collect()
    }
}

impl Default for FlexAlgorithm {
    fn default() -> Self {
        Self::row()
    }
}

impl LayoutAlgorithm for FlexAlgorithm {
    /// Children are offered the cross-axis extent and are unconstrained
    /// along the main axis.
    fn propose(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<ProposalSize> {
        let cross = parent.along(self.cross());
        children
            .iter()
            .map(|_| match self.direction {
                Axis::Horizontal => ProposalSize::new(None, cross),
                Axis::Vertical => ProposalSize::new(cross, None),
            })
            .collect()
    }

    fn size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Size {
        self.try_size(parent, children).unwrap_or_else(|err| {
            warn!(%err, "taffy sizing failed");
            Size::ZERO
        })
    }

    fn place(&self, bounds: Rect, _parent: ProposalSize, children: &[ChildMetadata]) -> Vec<Rect> {
        self.try_place(bounds, children).unwrap_or_else(|err| {
            warn!(%err, "taffy placement failed");
            vec![Rect::new(bounds.x(), bounds.y(), 0.0, 0.0); children.len()]
        })
    }
}
