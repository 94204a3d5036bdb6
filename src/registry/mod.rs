//! Component Registry - TypeId → factory mapping and handle resolution.
//!
//! The registry is an explicit object passed through registration and
//! resolution; there is no process-wide table.
//!
//! # Resolution
//!
//! ```text
//! handle ──type_id()──▶ factory registered? ──yes──▶ factory(handle, env) ──▶ RenderNode
//!    ▲                          │ no
//!    └────── body(handle) ◀─────┘   (None ⇒ UnknownComponent, depth cap ⇒ DelegationLimit)
//! ```

mod component;
mod resolve;

pub use component::*;
pub use resolve::*;
