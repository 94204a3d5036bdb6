//! Layout Module - negotiation between external algorithms and host views.
//!
//! # Architecture
//!
//! A [`LayoutContainer`] owns its children and an external
//! [`LayoutAlgorithm`](crate::engine::LayoutAlgorithm). The algorithm owns
//! geometry; the host owns measurement. The container only shuttles data
//! between them and keeps the pass consistent:
//!
//! ```text
//!            ┌──────────── LayoutContainer ────────────┐
//! proposal ─▶│ BoundsFallback ─▶ propose ─▶ measure ─▶ size │─▶ Size
//!            │                                   │        │
//!   bounds ─▶│                  place ◀── same metadata   │─▶ child.place(rect)
//!            └─────────────────────────────────────────┘
//! ```
//!
//! Missing proposal dimensions resolve through [`BoundsFallback`]: parent
//! bound, then the container's cached bound, then the viewport width.
//!
//! [`FlexAlgorithm`] is a ready-made row/column algorithm built on Taffy.

mod container;
mod proposal;
mod taffy_bridge;
mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use container::{LayoutContainer, LayoutPass};
pub use proposal::BoundsFallback;
pub use taffy_bridge::FlexAlgorithm;
pub use viewport::terminal_width;
