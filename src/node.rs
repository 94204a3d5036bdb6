//! RenderNode - the concrete unit a factory produces.

use std::fmt;

use crate::engine::HostView;
use crate::layout::LayoutContainer;
use crate::types::{LayoutHints, ProposalSize, Rect, Size, TypeId};

/// What a resolved node renders.
pub enum NodeContent {
    /// A platform view (leaf).
    View(Box<dyn HostView>),
    /// A container that negotiates its children's layout.
    Container(LayoutContainer),
    /// Nothing (absent optional content).
    Empty,
}

/// A resolved, renderable node.
///
/// Carries the type id it was resolved from and the hints the layout
/// engine needs (`priority`, `stretch`). Live content (text, toggles, ...)
/// lives inside the host view as [`Computed`](crate::reactive::Computed) or
/// [`Binding`](crate::reactive::Binding) values and is released with it.
pub struct RenderNode {
    type_id: TypeId,
    hints: LayoutHints,
    content: NodeContent,
}

impl RenderNode {
    pub fn view(type_id: TypeId, view: impl HostView + 'static) -> Self {
        Self {
            type_id,
            hints: LayoutHints::default(),
            content: NodeContent::View(Box::new(view)),
        }
    }

    pub fn container(type_id: TypeId, container: LayoutContainer) -> Self {
        Self {
            type_id,
            hints: LayoutHints::default(),
            content: NodeContent::Container(container),
        }
    }

    pub fn empty(type_id: TypeId) -> Self {
        Self {
            type_id,
            hints: LayoutHints::default(),
            content: NodeContent::Empty,
        }
    }

    pub fn with_hints(mut self, hints: LayoutHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.hints.priority = priority;
        self
    }

    /// Mark as a flexible (spacer-like) child.
    pub fn stretch(mut self) -> Self {
        self.hints.stretch = true;
        self
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn hints(&self) -> LayoutHints {
        self.hints
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    pub fn as_container(&self) -> Option<&LayoutContainer> {
        match &self.content {
            NodeContent::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut LayoutContainer> {
        match &mut self.content {
            NodeContent::Container(container) => Some(container),
            _ => None,
        }
    }

    pub(crate) fn set_stretch(&mut self, stretch: bool) {
        self.hints.stretch = stretch;
    }

    /// Measure, handing nested containers the parent's last known bound.
    pub(crate) fn measure_within(
        &mut self,
        proposal: ProposalSize,
        parent_bound: Option<Size>,
    ) -> Size {
        match &mut self.content {
            NodeContent::View(view) => view.measure(proposal),
            NodeContent::Container(container) => container.measure_within(proposal, parent_bound),
            NodeContent::Empty => Size::ZERO,
        }
    }
}

impl HostView for RenderNode {
    fn measure(&mut self, proposal: ProposalSize) -> Size {
        self.measure_within(proposal, None)
    }

    fn place(&mut self, rect: Rect) {
        match &mut self.content {
            NodeContent::View(view) => view.place(rect),
            NodeContent::Container(container) => container.place(rect),
            NodeContent::Empty => {}
        }
    }
}

impl fmt::Debug for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.content {
            NodeContent::View(_) => "view",
            NodeContent::Container(_) => "container",
            NodeContent::Empty => "empty",
        };
        f.debug_struct("RenderNode")
            .field("type_id", &self.type_id)
            .field("hints", &self.hints)
            .field("kind", &kind)
            .finish()
    }
}
