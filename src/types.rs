//! Core types for spark-bridge.
//!
//! Geometry and identity values that cross the boundary between the host and
//! the external UI engine. Everything here is `Copy` and free of handles.

use std::fmt;

// =============================================================================
// Type Identity
// =============================================================================

/// Stable 128-bit component type identifier.
///
/// This is the only identity the resolver has for an opaque handle's concrete
/// kind. It is NOT `std::any::TypeId`: the engine hands out these values and
/// they must stay equal across builds and implementations.
///
/// Equality and hashing cover both halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TypeId {
    pub low: u64,
    pub high: u64,
}

impl TypeId {
    /// Create a type id from its two 64-bit halves.
    pub const fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Create a type id from a single 128-bit value (low half first).
    pub const fn from_u128(value: u128) -> Self {
        Self {
            low: value as u64,
            high: (value >> 64) as u64,
        }
    }

    /// Pack both halves into one 128-bit value.
    pub const fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.high, self.low)
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// A concrete size in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Replace non-finite dimensions with zero.
    pub fn sanitized(self) -> Self {
        Self {
            width: if self.width.is_finite() { self.width } else { 0.0 },
            height: if self.height.is_finite() { self.height } else { 0.0 },
        }
    }

    /// Dimension along an axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A point in logical points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Origin + size. Used for final placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// A rect at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// All four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.x.is_finite() && self.origin.y.is_finite() && self.size.is_finite()
    }
}

// =============================================================================
// Proposal
// =============================================================================

/// An optionally partial size hint.
///
/// An absent dimension means "unconstrained". NaN and infinite values are
/// never stored: every constructor normalizes them to absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProposalSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Fully unconstrained proposal.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero in both dimensions (used for stretch children after measuring).
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Create a proposal, normalizing invalid dimensions to absent.
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            width: normalize_dimension(width),
            height: normalize_dimension(height),
        }
    }

    /// Proposal with both dimensions fixed.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(Some(width), Some(height))
    }

    /// Re-apply normalization (for values built field by field).
    pub fn normalized(self) -> Self {
        Self::new(self.width, self.height)
    }

    /// Dimension along an axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

impl From<Size> for ProposalSize {
    fn from(size: Size) -> Self {
        Self::new(Some(size.width), Some(size.height))
    }
}

/// NaN/infinite → absent.
#[inline]
pub fn normalize_dimension(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

// =============================================================================
// Child Metadata
// =============================================================================

/// Per-child input to the external layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChildMetadata {
    /// Measured size (or an empty/zero proposal before measuring).
    pub proposal: ProposalSize,
    /// Layout priority. Higher values are sized first.
    pub priority: u8,
    /// Flexible child (spacer-like); resolved after fixed siblings.
    pub stretch: bool,
}

impl ChildMetadata {
    pub fn new(proposal: ProposalSize, priority: u8, stretch: bool) -> Self {
        Self {
            proposal,
            priority,
            stretch,
        }
    }
}

// =============================================================================
// Layout Hints
// =============================================================================

/// Layout participation hints carried by a resolved node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutHints {
    pub priority: u8,
    pub stretch: bool,
}

impl LayoutHints {
    pub const STRETCH: Self = Self {
        priority: 0,
        stretch: true,
    };

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}
