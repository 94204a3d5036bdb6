//! Test doubles for layout negotiation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::{HostView, LayoutAlgorithm};
use crate::types::{ChildMetadata, ProposalSize, Rect, Size};

/// Records the last rect a view was placed at.
#[derive(Debug, Clone, Default)]
pub(crate) struct Placement(Rc<RefCell<Option<Rect>>>);

impl Placement {
    pub(crate) fn placed(&self) -> Option<Rect> {
        *self.0.borrow()
    }
}

/// A leaf with a fixed intrinsic size.
pub(crate) struct FixedView {
    size: Size,
    slot: Placement,
}

impl FixedView {
    pub(crate) fn new(size: Size, slot: Placement) -> Self {
        Self { size, slot }
    }
}

impl HostView for FixedView {
    fn measure(&mut self, _proposal: ProposalSize) -> Size {
        self.size
    }

    fn place(&mut self, rect: Rect) {
        *self.slot.0.borrow_mut() = Some(rect);
    }
}

/// Additive horizontal stack.
///
/// Fixed children keep their measured width; stretch children share what
/// is left of the placed width. Every child gets the tallest fixed height.
///
/// `tests/support` carries the same algorithm as `StackLayout`; integration
/// tests only see the public API, and this one stays out of it.
pub(crate) struct HStack;

impl HStack {
    fn fixed_width(children: &[ChildMetadata]) -> f32 {
        children
            .iter()
            .filter(|c| !c.stretch)
            .map(|c| c.proposal.width.unwrap_or(0.0))
            .sum()
    }

    fn tallest(children: &[ChildMetadata]) -> f32 {
        children
            .iter()
            .filter(|c| !c.stretch)
            .map(|c| c.proposal.height.unwrap_or(0.0))
            .fold(0.0, f32::max)
    }
}

impl LayoutAlgorithm for HStack {
    fn propose(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<ProposalSize> {
        children
            .iter()
            .map(|_| ProposalSize::new(None, parent.height))
            .collect()
    }

    fn size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Size {
        let fixed = Self::fixed_width(children);
        let width = match parent.width {
            Some(available) if children.iter().any(|c| c.stretch) => available.max(fixed),
            _ => fixed,
        };
        Size::new(width, Self::tallest(children))
    }

    fn place(&self, bounds: Rect, _parent: ProposalSize, children: &[ChildMetadata]) -> Vec<Rect> {
        let stretch_count = children.iter().filter(|c| c.stretch).count();
        let remaining = (bounds.width() - Self::fixed_width(children)).max(0.0);
        let share = if stretch_count > 0 {
            remaining / stretch_count as f32
        } else {
            0.0
        };
        let height = Self::tallest(children);

        let mut x = bounds.x();
        children
            .iter()
            .map(|child| {
                let width = if child.stretch {
                    share
                } else {
                    child.proposal.width.unwrap_or(0.0)
                };
                let rect = Rect::new(x, bounds.y(), width, height);
                x += width;
                rect
            })
            .collect()
    }
}

#[derive(Debug, Default)]
pub(crate) struct CallLog {
    pub(crate) proposed: Vec<Vec<ChildMetadata>>,
    pub(crate) sized: Vec<Vec<ChildMetadata>>,
    pub(crate) placed: Vec<Vec<ChildMetadata>>,
}

/// Wraps an algorithm and records the metadata of every call.
pub(crate) struct RecordingAlgorithm<L> {
    inner: L,
    log: Rc<RefCell<CallLog>>,
    poison: Option<usize>,
    poison_size: bool,
}

impl<L: LayoutAlgorithm> RecordingAlgorithm<L> {
    pub(crate) fn new(inner: L) -> Self {
        Self {
            inner,
            log: Rc::default(),
            poison: None,
            poison_size: false,
        }
    }

    /// Report a NaN width and an infinite height from `size`.
    pub(crate) fn poison_size(mut self) -> Self {
        self.poison_size = true;
        self
    }

    /// Return a NaN rect for the child at `index`.
    pub(crate) fn poison_rect(mut self, index: usize) -> Self {
        self.poison = Some(index);
        self
    }

    pub(crate) fn log(&self) -> Rc<RefCell<CallLog>> {
        Rc::clone(&self.log)
    }
}

impl<L: LayoutAlgorithm> LayoutAlgorithm for RecordingAlgorithm<L> {
    fn propose(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<ProposalSize> {
        self.log.borrow_mut().proposed.push(children.to_vec());
        self.inner.propose(parent, children)
    }

    fn size(&self, parent: ProposalSize, children: &[ChildMetadata]) -> Size {
        self.log.borrow_mut().sized.push(children.to_vec());
        let size = self.inner.size(parent, children);
        if self.poison_size {
            Size::new(f32::NAN, f32::INFINITY)
        } else {
            size
        }
    }

    fn place(&self, bounds: Rect, parent: ProposalSize, children: &[ChildMetadata]) -> Vec<Rect> {
        self.log.borrow_mut().placed.push(children.to_vec());
        let mut rects = self.inner.place(bounds, parent, children);
        if let Some(rect) = self.poison.and_then(|index| rects.get_mut(index)) {
            *rect = Rect::new(f32::NAN, rect.y(), rect.width(), rect.height());
        }
        rects
    }
}
