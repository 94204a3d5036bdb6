//! LayoutContainer - three-phase layout negotiation.
//!
//! The external algorithm decides geometry; the host measures content.
//! Every pass runs the phases in order:
//!
//! ```text
//! 1. propose   metadata(empty proposals) ──▶ algorithm.propose ──▶ one hint per child
//! 2. measure   child.measure(hint)            (host-local, recursive for containers)
//! 3. size      metadata(measured | ZERO for stretch) ──▶ algorithm.size ──▶ own size
//!    place     same metadata, verbatim ──▶ algorithm.place(bounds) ──▶ child rects
//! ```
//!
//! Pass state lives in [`LayoutPass`] and is rebuilt from phase 1 whenever a
//! new measurement starts or placement arrives with a different size.

use std::fmt;

use tracing::{debug, warn};

use crate::config::{BridgeConfig, ViewportFallback};
use crate::engine::{HostView, LayoutAlgorithm};
use crate::node::RenderNode;
use crate::types::{ChildMetadata, ProposalSize, Rect, Size};

use super::proposal::BoundsFallback;

// =============================================================================
// Layout Pass
// =============================================================================

/// State carried between the phases of one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    /// Resolved parent proposal handed to every algorithm call.
    pub parent: ProposalSize,
    /// Phase 1 output.
    pub proposals: Vec<ProposalSize>,
    /// Phase 2 output.
    pub measured: Vec<Size>,
    /// Phase 3 metadata, shared verbatim by `size` and `place`.
    pub metadata: Vec<ChildMetadata>,
    /// Phase 3 result.
    pub size: Size,
}

// =============================================================================
// Layout Container
// =============================================================================

/// A parent node whose children are laid out by an external algorithm.
pub struct LayoutContainer {
    algorithm: Box<dyn LayoutAlgorithm>,
    children: Vec<RenderNode>,
    pass: Option<LayoutPass>,
    parent_bound: Option<Size>,
    cached_bound: Option<Size>,
    viewport: ViewportFallback,
}

impl LayoutContainer {
    pub fn new(algorithm: impl LayoutAlgorithm + 'static, children: Vec<RenderNode>) -> Self {
        Self {
            algorithm: Box::new(algorithm),
            children,
            pass: None,
            parent_bound: None,
            cached_bound: None,
            viewport: ViewportFallback::default(),
        }
    }

    /// Source of the horizontal viewport fallback.
    pub fn with_viewport(mut self, viewport: ViewportFallback) -> Self {
        self.viewport = viewport;
        self
    }

    /// Take layout settings from a bridge configuration.
    pub fn with_config(self, config: &BridgeConfig) -> Self {
        self.with_viewport(config.viewport)
    }

    /// Tell a root container the bound of the host view that contains it.
    pub fn set_parent_bound(&mut self, bound: Option<Size>) {
        self.parent_bound = bound;
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [RenderNode] {
        &mut self.children
    }

    /// State of the current pass, if one has run.
    pub fn pass(&self) -> Option<&LayoutPass> {
        self.pass.as_ref()
    }

    /// Bound from the last placement.
    pub fn cached_bound(&self) -> Option<Size> {
        self.cached_bound
    }

    /// Drop pass state; the next `place` starts over from phase 1.
    pub fn invalidate(&mut self) {
        self.pass = None;
    }

    /// Run phases 1-3 and return the container's size.
    pub fn measure(&mut self, proposal: ProposalSize) -> Size {
        self.run_pass(proposal)
    }

    /// Measure as a nested container, updating the parent bound first.
    pub(crate) fn measure_within(
        &mut self,
        proposal: ProposalSize,
        parent_bound: Option<Size>,
    ) -> Size {
        if parent_bound.is_some() {
            self.parent_bound = parent_bound;
        }
        self.run_pass(proposal)
    }

    /// Place children inside `bounds`.
    ///
    /// Reuses the metadata `size` saw. Children whose rect is not finite are
    /// skipped for this pass.
    pub fn place(&mut self, bounds: Rect) {
        if !bounds.is_finite() {
            warn!(?bounds, "ignoring non-finite container bounds");
            return;
        }

        let stale = self
            .pass
            .as_ref()
            .is_none_or(|pass| pass.size != bounds.size);
        if stale {
            self.run_pass(ProposalSize::from(bounds.size));
        }

        let Self {
            algorithm,
            children,
            pass,
            ..
        } = self;
        let Some(pass) = pass.as_ref() else {
            return;
        };

        let rects = algorithm.place(bounds, pass.parent, &pass.metadata);
        if rects.len() != children.len() {
            warn!(
                expected = children.len(),
                got = rects.len(),
                "place returned a mismatched number of rects"
            );
        }

        for (index, (child, rect)) in children.iter_mut().zip(rects).enumerate() {
            if !rect.is_finite() {
                warn!(child = index, ?rect, "skipping child with non-finite placement");
                continue;
            }
            child.place(rect);
        }

        self.cached_bound = Some(bounds.size);
    }

    #[tracing::instrument(level = "debug", skip(self), fields(children = self.children.len()))]
    fn run_pass(&mut self, proposal: ProposalSize) -> Size {
        let fallback = BoundsFallback {
            parent: self.parent_bound,
            cached: self.cached_bound,
            viewport: self.viewport,
        };
        let parent = fallback.resolve(proposal);
        let count = self.children.len();

        // Phase 1: propose with empty proposals.
        let initial: Vec<ChildMetadata> = self
            .children
            .iter()
            .map(|child| {
                let hints = child.hints();
                ChildMetadata::new(ProposalSize::UNSPECIFIED, hints.priority, hints.stretch)
            })
            .collect();
        let proposals = fit_len(
            self.algorithm.propose(parent, &initial),
            count,
            ProposalSize::UNSPECIFIED,
            "propose",
        )
        .into_iter()
        .map(ProposalSize::normalized)
        .collect::<Vec<_>>();

        // Phase 2: host-local measurement.
        let own_bound = self.cached_bound;
        let measured: Vec<Size> = self
            .children
            .iter_mut()
            .zip(&proposals)
            .map(|(child, hint)| child.measure_within(*hint, own_bound).sanitized())
            .collect();

        // Phase 3: size with measured metadata; stretch children report zero.
        let metadata: Vec<ChildMetadata> = initial
            .iter()
            .zip(&measured)
            .map(|(meta, size)| {
                let proposal = if meta.stretch {
                    ProposalSize::ZERO
                } else {
                    ProposalSize::from(*size)
                };
                ChildMetadata::new(proposal, meta.priority, meta.stretch)
            })
            .collect();

        let size = self.algorithm.size(parent, &metadata);
        let size = if size.is_finite() {
            size
        } else {
            warn!(?size, "layout algorithm returned a non-finite size");
            size.sanitized()
        };

        debug!(?parent, ?size, "layout pass sized");
        self.pass = Some(LayoutPass {
            parent,
            proposals,
            measured,
            metadata,
            size,
        });
        size
    }
}

impl HostView for LayoutContainer {
    fn measure(&mut self, proposal: ProposalSize) -> Size {
        LayoutContainer::measure(self, proposal)
    }

    fn place(&mut self, rect: Rect) {
        LayoutContainer::place(self, rect)
    }
}

impl fmt::Debug for LayoutContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContainer")
            .field("children", &self.children)
            .field("pass", &self.pass)
            .field("cached_bound", &self.cached_bound)
            .finish()
    }
}

/// Pad or truncate algorithm output to one entry per child.
fn fit_len<T: Clone>(mut values: Vec<T>, count: usize, fill: T, call: &'static str) -> Vec<T> {
    if values.len() != count {
        warn!(call, expected = count, got = values.len(), "algorithm output length mismatch");
        values.resize(count, fill);
    }
    values
}
