//! Factory registration.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::engine::{Env, ViewHandle};
use crate::error::{BridgeError, BridgeResult};
use crate::node::RenderNode;
use crate::types::TypeId;

use super::Resolver;

/// Builds a concrete node from an opaque handle.
///
/// Container factories resolve their children through the supplied
/// [`Resolver`].
pub type Factory = Box<dyn Fn(ViewHandle, &Env, &Resolver<'_>) -> BridgeResult<RenderNode>>;

bitflags::bitflags! {
    /// How a registered component participates in resolution and layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ComponentFlags: u8 {
        const NONE = 0;
        /// Ambient wrapper (theme, environment modifier); not visible content.
        /// Skipped when capturing the root content environment.
        const METADATA = 1 << 0;
        /// Flexible child (spacer). Resolved nodes are marked `stretch`.
        const STRETCH = 1 << 1;
    }
}

pub(crate) struct Registration {
    pub(crate) factory: Factory,
    pub(crate) flags: ComponentFlags,
}

// =============================================================================
// ComponentRegistry
// =============================================================================

/// Maps stable type ids to factories.
///
/// Registration is keyed by [`TypeId`], never by name, and the first
/// registration for an id wins. Lookup is a single hash probe.
#[derive(Default)]
pub struct ComponentRegistry {
    entries: HashMap<TypeId, Registration>,
    bootstrapped: bool,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a content factory.
    pub fn register(
        &mut self,
        type_id: TypeId,
        factory: impl Fn(ViewHandle, &Env, &Resolver<'_>) -> BridgeResult<RenderNode> + 'static,
    ) -> BridgeResult<()> {
        self.register_with_flags(type_id, ComponentFlags::NONE, factory)
    }

    /// Register an ambient wrapper that is not visible content.
    pub fn register_metadata(
        &mut self,
        type_id: TypeId,
        factory: impl Fn(ViewHandle, &Env, &Resolver<'_>) -> BridgeResult<RenderNode> + 'static,
    ) -> BridgeResult<()> {
        self.register_with_flags(type_id, ComponentFlags::METADATA, factory)
    }

    /// Register a factory with explicit flags.
    ///
    /// A second registration for the same id is rejected and the first kept.
    pub fn register_with_flags(
        &mut self,
        type_id: TypeId,
        flags: ComponentFlags,
        factory: impl Fn(ViewHandle, &Env, &Resolver<'_>) -> BridgeResult<RenderNode> + 'static,
    ) -> BridgeResult<()> {
        if self.entries.contains_key(&type_id) {
            return Err(BridgeError::DuplicateRegistration { type_id });
        }

        debug!(%type_id, ?flags, "registered component factory");
        self.entries.insert(
            type_id,
            Registration {
                factory: Box::new(factory),
                flags,
            },
        );
        Ok(())
    }

    /// Run `init` exactly once for this registry.
    ///
    /// Returns `Ok(true)` when `init` ran, `Ok(false)` when the registry was
    /// already bootstrapped. A failed `init` leaves the flag unset.
    pub fn bootstrap(
        &mut self,
        init: impl FnOnce(&mut Self) -> BridgeResult<()>,
    ) -> BridgeResult<bool> {
        if self.bootstrapped {
            return Ok(false);
        }
        init(self)?;
        self.bootstrapped = true;
        debug!(components = self.entries.len(), "component registry bootstrapped");
        Ok(true)
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries.contains_key(&type_id)
    }

    pub fn flags(&self, type_id: TypeId) -> Option<ComponentFlags> {
        self.entries.get(&type_id).map(|entry| entry.flags)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn lookup(&self, type_id: TypeId) -> Option<&Registration> {
        self.entries.get(&type_id)
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.entries.len())
            .field("bootstrapped", &self.bootstrapped)
            .finish()
    }
}
