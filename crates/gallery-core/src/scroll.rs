//! Scroll progress tracking and frame-rate smoothing.
//!
//! Two values exist: `target`, written synchronously from the scroll
//! position, and `displayed`, pulled toward the target once per display
//! frame. The pull is a discrete exponential-decay filter: every tick the
//! remaining distance shrinks by `SCROLL_LERP_ALPHA`, so after k frames the
//! residual is `(1 - alpha)^k` of the starting distance.

use crate::constants::{SCROLL_LERP_ALPHA, SETTLE_EPSILON};

/// Normalized progress through the hero track, in [0, 1] on both fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollProgress {
    target: f32,
    displayed: f32,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Recompute the target from the hero track's position.
    ///
    /// `track_top_px` is the track's bounding-rect top relative to the
    /// viewport (negative once the viewer has scrolled into the track).
    /// A track no taller than the viewport has no scrollable distance and
    /// degenerates to progress 0.
    pub fn set_scroll(&mut self, track_top_px: f32, track_height_px: f32, viewport_height_px: f32) {
        let total = track_height_px - viewport_height_px;
        self.target = if total <= 0.0 {
            0.0
        } else {
            (-track_top_px / total).clamp(0.0, 1.0)
        };
    }

    /// Advance `displayed` one frame toward `target`.
    ///
    /// Returns whether the displayed value moved; once the residual falls
    /// below `SETTLE_EPSILON` the value holds still until the target changes.
    pub fn step(&mut self) -> bool {
        let diff = self.target - self.displayed;
        if diff.abs() <= SETTLE_EPSILON {
            return false;
        }
        self.displayed = (self.displayed + diff * SCROLL_LERP_ALPHA).clamp(0.0, 1.0);
        true
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.target - self.displayed).abs() <= SETTLE_EPSILON
    }
}
