//! View identity and delegation.

use crate::types::TypeId;

use super::handle::{Env, ViewHandle};

/// The engine operations resolution needs.
///
/// Both calls are synchronous, local and infallible given a valid handle.
pub trait ViewEngine {
    /// Concrete kind of the view behind `handle`.
    fn type_id(&self, handle: &ViewHandle) -> TypeId;

    /// One level of delegation: the view this one is built from.
    ///
    /// Consumes `handle`. `None` means there is nothing further to unwrap.
    fn body(&self, handle: ViewHandle, env: &Env) -> Option<ViewHandle>;
}
