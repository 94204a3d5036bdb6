//! Shared fakes for integration tests.
//!
//! `FakeEngine` is a table-driven external engine: every raw handle maps to
//! a node description (type, body, children, intrinsic size). Leaves record
//! their final placement back into the engine so tests can assert on it.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use spark_bridge::{
    BridgeConfig, BridgeResult, ChildMetadata, ComponentFlags, ComponentRegistry, Env, FnSource,
    HostView, LayoutAlgorithm, LayoutContainer, ProposalSize, Rect, RenderNode, Size, TypeId,
    ViewEngine, ViewHandle, ViewportFallback, WatcherGuard,
};

pub const LEAF: TypeId = TypeId::new(0x1EAF, 0xF00D);
pub const SPACER: TypeId = TypeId::new(0x5BAC, 0xF00D);
pub const HSTACK: TypeId = TypeId::new(0x57AC, 0xF00D);
pub const THEME: TypeId = TypeId::new(0x7E3E, 0xF00D);
pub const CUSTOM: TypeId = TypeId::new(0xC057, 0xF00D);

/// Route bridge logs to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Bridge settings for tests: no terminal size queries.
pub fn config() -> BridgeConfig {
    BridgeConfig::default().with_viewport(ViewportFallback::Disabled)
}

/// Convenience for tests: raw → handle, panicking on reserved values.
pub fn handle(raw: u64) -> ViewHandle {
    ViewHandle::from_raw(raw).expect("test handles live above the reserved range")
}

// =============================================================================
// Fake engine
// =============================================================================

#[derive(Debug, Clone, Default)]
struct FakeNode {
    type_id: TypeId,
    body: Option<u64>,
    children: Vec<u64>,
    size: Size,
    env: Option<u64>,
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    nodes: HashMap<u64, FakeNode>,
    placed: RefCell<HashMap<u64, Rect>>,
    body_calls: Cell<usize>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, raw: u64, width: f32, height: f32) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id: LEAF,
                size: Size::new(width, height),
                ..FakeNode::default()
            },
        );
        self
    }

    pub fn spacer(mut self, raw: u64) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id: SPACER,
                ..FakeNode::default()
            },
        );
        self
    }

    pub fn stack(mut self, raw: u64, children: &[u64]) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id: HSTACK,
                children: children.to_vec(),
                ..FakeNode::default()
            },
        );
        self
    }

    /// Theme wrapper around `child`, resolved under env `themed_env`.
    pub fn theme(mut self, raw: u64, child: u64, themed_env: u64) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id: THEME,
                children: vec![child],
                env: Some(themed_env),
                ..FakeNode::default()
            },
        );
        self
    }

    /// User-defined component with no factory; delegates to `body`.
    pub fn custom(mut self, raw: u64, body: u64) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id: CUSTOM,
                body: Some(body),
                ..FakeNode::default()
            },
        );
        self
    }

    /// Node of an arbitrary type with no body.
    pub fn opaque(mut self, raw: u64, type_id: TypeId) -> Self {
        self.nodes.insert(
            raw,
            FakeNode {
                type_id,
                ..FakeNode::default()
            },
        );
        self
    }

    pub fn placed(&self, raw: u64) -> Option<Rect> {
        self.placed.borrow().get(&raw).copied()
    }

    pub fn body_calls(&self) -> usize {
        self.body_calls.get()
    }

    fn node(&self, raw: u64) -> &FakeNode {
        &self.nodes[&raw]
    }
}

impl ViewEngine for FakeEngine {
    fn type_id(&self, handle: &ViewHandle) -> TypeId {
        self.node(handle.raw()).type_id
    }

    fn body(&self, handle: ViewHandle, _env: &Env) -> Option<ViewHandle> {
        self.body_calls.set(self.body_calls.get() + 1);
        self.node(handle.raw()).body.and_then(ViewHandle::from_raw)
    }
}

/// A leaf host view that reports placement back to the engine.
pub struct FakeLeaf {
    raw: u64,
    size: Size,
    engine: Rc<FakeEngine>,
}

impl HostView for FakeLeaf {
    fn measure(&mut self, _proposal: ProposalSize) -> Size {
        self.size
    }

    fn place(&mut self, rect: Rect) {
        self.engine.placed.borrow_mut().insert(self.raw, rect);
    }
}

/// Registry with factories for every fake component type.
pub fn registry(engine: &Rc<FakeEngine>) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry
        .bootstrap(|r| register_all(r, engine))
        .expect("fake registry bootstraps");
    registry
}

fn register_all(registry: &mut ComponentRegistry, engine: &Rc<FakeEngine>) -> BridgeResult<()> {
    let leaf_engine = Rc::clone(engine);
    registry.register(LEAF, move |handle, _env, _resolver| {
        let raw = handle.into_raw();
        let size = leaf_engine.node(raw).size;
        Ok(RenderNode::view(
            LEAF,
            FakeLeaf {
                raw,
                size,
                engine: Rc::clone(&leaf_engine),
            },
        ))
    })?;

    let spacer_engine = Rc::clone(engine);
    registry.register_with_flags(SPACER, ComponentFlags::STRETCH, move |handle, _env, _resolver| {
        Ok(RenderNode::view(
            SPACER,
            FakeLeaf {
                raw: handle.into_raw(),
                size: Size::ZERO,
                engine: Rc::clone(&spacer_engine),
            },
        ))
    })?;

    let stack_engine = Rc::clone(engine);
    registry.register(HSTACK, move |handle, env, resolver| {
        let children = stack_engine
            .node(handle.raw())
            .children
            .iter()
            .map(|raw| resolver.resolve(ViewHandle::from_raw(*raw), env))
            .collect::<BridgeResult<Vec<_>>>()?;
        let container = LayoutContainer::new(StackLayout, children).with_config(resolver.config());
        Ok(RenderNode::container(HSTACK, container))
    })?;

    let theme_engine = Rc::clone(engine);
    registry.register_metadata(THEME, move |handle, env, resolver| {
        let node = theme_engine.node(handle.raw());
        let themed = node.env.map(Env::from_raw).unwrap_or_else(|| env.clone());
        let child = node.children.first().copied().and_then(ViewHandle::from_raw);
        resolver.resolve(child, &themed)
    })?;

    Ok(())
}

// =============================================================================
// Stack layout
// =============================================================================

/// Additive horizontal stack used as the external algorithm in tests.
///
/// Fixed children keep their measured width and sit side by side; stretch
/// children split the remaining width. Every child gets the tallest fixed
/// child's height.
///
/// Same behavior as the crate's internal `HStack` test double, which is not
/// exported; keep the two in step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackLayout;

impl StackLayout {
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

impl LayoutAlgorithm for StackLayout {
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

// =============================================================================
// Engine values
// =============================================================================

type Watcher<T> = Rc<dyn Fn(T)>;

/// One engine-owned value with watchers, as the engine side of a binding.
pub struct EngineValue<T> {
    value: RefCell<T>,
    watchers: RefCell<Vec<(u64, Watcher<T>)>>,
    next_watcher: Cell<u64>,
    set_calls: RefCell<Vec<T>>,
    released: Cell<usize>,
}

impl<T: Clone + 'static> EngineValue<T> {
    pub fn new(value: T) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(value),
            watchers: RefCell::new(Vec::new()),
            next_watcher: Cell::new(0),
            set_calls: RefCell::new(Vec::new()),
            released: Cell::new(0),
        })
    }

    /// Change the value on the engine side and notify watchers.
    pub fn push(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        let watchers: Vec<Watcher<T>> = self
            .watchers
            .borrow()
            .iter()
            .map(|(_, watcher)| Rc::clone(watcher))
            .collect();
        for watcher in watchers {
            watcher(value.clone());
        }
    }

    pub fn value(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn set_calls(&self) -> Vec<T> {
        self.set_calls.borrow().clone()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.borrow().len()
    }

    /// Raw-operation source over this value. Writes echo back as a push.
    pub fn source(self: &Rc<Self>, handle: u64) -> FnSource<T> {
        let read = Rc::clone(self);
        let watch = Rc::clone(self);
        let release = Rc::clone(self);
        let set = Rc::clone(self);

        FnSource::new(
            handle,
            move |_| read.value(),
            move |_, callback| {
                let id = watch.next_watcher.get();
                watch.next_watcher.set(id + 1);
                watch.watchers.borrow_mut().push((id, Rc::from(callback)));

                let owner = Rc::clone(&watch);
                WatcherGuard::new(move || {
                    owner.watchers.borrow_mut().retain(|(watcher, _)| *watcher != id);
                })
            },
            move |_| release.released.set(release.released.get() + 1),
        )
        .with_set(move |_, value: T| {
            set.set_calls.borrow_mut().push(value.clone());
            set.push(value);
        })
    }
}
