//! Viewport width probe.

use crate::config::ViewportFallback;
use crate::types::normalize_dimension;

impl ViewportFallback {
    /// Horizontal viewport width, if this fallback can supply one.
    pub fn width(&self) -> Option<f32> {
        match *self {
            ViewportFallback::Terminal => terminal_width(),
            ViewportFallback::Fixed(width) => normalize_dimension(Some(width)).filter(|w| *w > 0.0),
            ViewportFallback::Disabled => None,
        }
    }
}

/// Current terminal column count, when attached to a terminal.
pub fn terminal_width() -> Option<f32> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| columns)
        .filter(|columns| *columns > 0)
        .map(f32::from)
}
