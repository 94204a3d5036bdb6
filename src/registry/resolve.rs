//! Resolver - turns opaque handles into render nodes.

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, trace};

use crate::config::BridgeConfig;
use crate::engine::{Env, ViewEngine, ViewHandle};
use crate::error::{BridgeError, BridgeResult};
use crate::node::RenderNode;

use super::{ComponentFlags, ComponentRegistry};

/// Resolution context for one root path.
///
/// Create one per root render pass. The first non-metadata component it
/// resolves fixes the root content environment for the rest of the pass.
pub struct Resolver<'a> {
    registry: &'a ComponentRegistry,
    engine: &'a dyn ViewEngine,
    config: BridgeConfig,
    root_env: RefCell<Option<Env>>,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a ComponentRegistry, engine: &'a dyn ViewEngine) -> Self {
        Self::with_config(registry, engine, BridgeConfig::default())
    }

    pub fn with_config(
        registry: &'a ComponentRegistry,
        engine: &'a dyn ViewEngine,
        config: BridgeConfig,
    ) -> Self {
        Self {
            registry,
            engine,
            config,
            root_env: RefCell::new(None),
        }
    }

    /// Resolve a handle that must produce content.
    ///
    /// Follows `body` delegation until a registered factory matches. Errors
    /// are fatal: an absent handle, an unknown type at the end of the chain,
    /// or a chain longer than `max_delegation_depth`.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(handle = handle.as_ref().map(ViewHandle::raw))
    )]
    pub fn resolve(&self, handle: Option<ViewHandle>, env: &Env) -> BridgeResult<RenderNode> {
        let Some(mut handle) = handle else {
            return Err(BridgeError::InvalidHandle {
                context: "resolve requires a valid handle",
            });
        };

        let max_depth = self.config.max_delegation_depth;
        let mut depth = 0;

        loop {
            let type_id = self.engine.type_id(&handle);

            if let Some(registration) = self.registry.lookup(type_id) {
                if !registration.flags.contains(ComponentFlags::METADATA) {
                    self.capture_root_env(env);
                }

                trace!(%type_id, depth, "factory matched");
                let mut node = (registration.factory)(handle, env, self)?;
                if registration.flags.contains(ComponentFlags::STRETCH) {
                    node.set_stretch(true);
                }
                return Ok(node);
            }

            if depth >= max_depth {
                return Err(BridgeError::DelegationLimit { type_id, depth });
            }

            trace!(%type_id, depth, "no factory, delegating to body");
            handle = self
                .engine
                .body(handle, env)
                .ok_or(BridgeError::UnknownComponent { type_id })?;
            depth += 1;
        }
    }

    /// Resolve optional content; an absent handle is an empty result.
    pub fn resolve_optional(
        &self,
        handle: Option<ViewHandle>,
        env: &Env,
    ) -> BridgeResult<Option<RenderNode>> {
        match handle {
            Some(handle) => self.resolve(Some(handle), env).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve a raw handle value from an FFI boundary.
    pub fn resolve_raw(&self, raw: u64, env: &Env) -> BridgeResult<RenderNode> {
        self.resolve(ViewHandle::from_raw(raw), env)
    }

    /// Environment of the first content component resolved on this root path.
    pub fn root_environment(&self) -> Option<Env> {
        self.root_env.borrow().clone()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn registry(&self) -> &ComponentRegistry {
        self.registry
    }

    fn capture_root_env(&self, env: &Env) {
        let mut root_env = self.root_env.borrow_mut();
        if root_env.is_none() {
            debug!(env = env.raw(), "captured root content environment");
            *root_env = Some(env.clone());
        }
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("registry", self.registry)
            .field("root_env", &self.root_env.borrow())
            .finish()
    }
}
