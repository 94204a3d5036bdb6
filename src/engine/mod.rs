//! External engine boundary.
//!
//! Everything the bridge knows about the outside world goes through the
//! types and traits in this module:
//! - [`ViewHandle`] / [`Env`]: opaque handles owned by the engine
//! - [`ViewEngine`]: type identity and one-level `body` delegation
//! - [`ValueSource`] / [`BindingSource`]: per-kind reactive value operations
//! - [`LayoutAlgorithm`]: the external propose/size/place sizing algorithm
//! - [`CollectionSource`]: count + index access for lazy lists
//! - [`HostView`]: the platform view, reached only through `measure` and `place`
//!
//! # Ownership
//!
//! ```text
//! ViewHandle   engine produces, resolve() consumes exactly once (move-only)
//! Env          constructor owns; bridge passes by reference, clones to capture
//! ValueSource  Computed/Binding own exclusively; release(self: Box<Self>) runs once
//! WatcherGuard whoever holds it; Drop releases the engine subscription once
//! ```

mod collection;
mod handle;
mod host;
mod layout;
mod value;
mod view;

pub use collection::*;
pub use handle::*;
pub use host::*;
pub use layout::*;
pub use value::*;
pub use view::*;
