//! Bridge configuration.
//!
//! Plain structs with defaults. Hosts override individual fields with the
//! `with_*` setters.

/// Default prefetch trigger distance from the end of the loaded buffer.
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 10;

/// Default number of elements loaded per prefetch batch.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Default maximum length of a `body` delegation chain.
pub const DEFAULT_MAX_DELEGATION_DEPTH: usize = 64;

// =============================================================================
// Viewport Fallback
// =============================================================================

/// Where the horizontal viewport width fallback comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewportFallback {
    /// Ask the terminal for its column count.
    #[default]
    Terminal,
    /// Use a fixed width.
    Fixed(f32),
    /// No viewport fallback; resolution continues to "unconstrained".
    Disabled,
}

// =============================================================================
// Prefetch
// =============================================================================

/// Virtualized collection loading parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Accessing an index within this many elements of the loaded end triggers a prefetch.
    pub threshold: usize,
    /// Upper bound on elements loaded per batch.
    pub batch_size: usize,
    /// Elements loaded synchronously when the collection is created.
    pub initial_batch: usize,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_PREFETCH_THRESHOLD,
            batch_size: DEFAULT_BATCH_SIZE,
            initial_batch: DEFAULT_BATCH_SIZE,
        }
    }
}

impl PrefetchConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_initial_batch(mut self, initial_batch: usize) -> Self {
        self.initial_batch = initial_batch;
        self
    }
}

// =============================================================================
// Bridge Config
// =============================================================================

/// Top-level configuration shared by resolution and layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeConfig {
    pub max_delegation_depth: usize,
    pub prefetch: PrefetchConfig,
    pub viewport: ViewportFallback,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_delegation_depth: DEFAULT_MAX_DELEGATION_DEPTH,
            prefetch: PrefetchConfig::default(),
            viewport: ViewportFallback::default(),
        }
    }
}

impl BridgeConfig {
    pub fn with_max_delegation_depth(mut self, depth: usize) -> Self {
        self.max_delegation_depth = depth.max(1);
        self
    }

    pub fn with_prefetch(mut self, prefetch: PrefetchConfig) -> Self {
        self.prefetch = prefetch;
        self
    }

    pub fn with_viewport(mut self, viewport: ViewportFallback) -> Self {
        self.viewport = viewport;
        self
    }
}
