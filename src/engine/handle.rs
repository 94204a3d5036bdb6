//! Opaque handles owned by the external engine.

use std::num::NonZeroU64;

/// Raw values at or below this are reserved and never name a live view.
pub const RESERVED_HANDLE_MAX: u64 = 0xFFF;

// =============================================================================
// ViewHandle
// =============================================================================

/// Non-owning reference to a view produced by the engine for one render pass.
///
/// Deliberately neither `Clone` nor `Copy`: a handle is consumed by exactly
/// one resolution. Validity is explicit; an absent handle is `None`, never a
/// sentinel value.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle {
    raw: NonZeroU64,
}

impl ViewHandle {
    /// Sanitize a raw handle value coming across an FFI boundary.
    ///
    /// Zero and the reserved low range are treated as absent.
    pub fn from_raw(raw: u64) -> Option<Self> {
        if raw <= RESERVED_HANDLE_MAX {
            return None;
        }
        NonZeroU64::new(raw).map(|raw| Self { raw })
    }

    /// Raw value, for engine lookups. Does not consume the handle.
    #[inline]
    pub fn raw(&self) -> u64 {
        self.raw.get()
    }

    /// Give the raw value back to the engine, consuming the handle.
    #[inline]
    pub fn into_raw(self) -> u64 {
        self.raw.get()
    }
}

// =============================================================================
// Env
// =============================================================================

/// Opaque ambient context (theme, safe area, ...).
///
/// Owned by whichever subsystem constructed it. The bridge reads and forwards
/// it to factories and never mutates it; cloning copies the reference, not
/// the environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env {
    raw: u64,
}

impl Env {
    pub const fn from_raw(raw: u64) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn raw(&self) -> u64 {
        self.raw
    }
}
