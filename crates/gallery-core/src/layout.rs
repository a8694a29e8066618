//! Hero "bento" assembly layout.
//!
//! A pure mapping from (smoothed progress, viewport, panel index) to a
//! per-panel transform. Panel 0 is the centerpiece: it stays centered and
//! shrinks into place. Panels 1..4 fly in from off-screen scatter positions
//! toward symmetric slots around the center. No internal state anywhere;
//! callers recompute on every smoothed-progress update.

use glam::Vec2;

use crate::constants::*;

/// Current viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

/// One panel's visual state: offset from the viewport center plus scale,
/// tilt, fade and stacking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTransform {
    pub offset: Vec2,
    pub scale: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl PanelTransform {
    /// CSS transform string for an element anchored at the viewport center.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
            self.offset.x, self.offset.y, self.rotation_deg, self.scale
        )
    }
}

/// Endpoint pair for one panel: scattered (progress 0) and assembled
/// (progress 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelConfig {
    pub scattered: PanelTransform,
    pub assembled: PanelTransform,
}

/// Endpoint configuration for panel `index` under the given viewport.
///
/// Panics in debug builds if `index` is out of range; callers iterate
/// `0..PANEL_COUNT`.
pub fn panel_config(index: usize, viewport: Viewport) -> PanelConfig {
    debug_assert!(index < PANEL_COUNT);
    let mobile = viewport.is_mobile();

    if index == 0 {
        let (start_scale, final_scale) = if mobile {
            (CENTER_START_SCALE_MOBILE, CENTER_FINAL_SCALE_MOBILE)
        } else {
            (CENTER_START_SCALE, CENTER_FINAL_SCALE)
        };
        return PanelConfig {
            scattered: PanelTransform {
                offset: Vec2::ZERO,
                scale: start_scale,
                rotation_deg: 0.0,
                opacity: 0.0,
                z_index: CENTER_Z_INDEX,
            },
            assembled: PanelTransform {
                offset: Vec2::ZERO,
                scale: final_scale,
                rotation_deg: 0.0,
                opacity: 1.0,
                z_index: CENTER_Z_INDEX,
            },
        };
    }

    let (fx, fy, tilt) = SATELLITE_SCATTER[index - 1];
    let scale_mult = if mobile {
        SATELLITE_MOBILE_SCALE_MULT
    } else {
        1.0
    };
    PanelConfig {
        scattered: PanelTransform {
            offset: Vec2::new(fx * viewport.width, fy * viewport.height),
            scale: SATELLITE_START_SCALE * scale_mult,
            rotation_deg: tilt,
            opacity: 0.0,
            z_index: SATELLITE_Z_INDEX,
        },
        assembled: PanelTransform {
            offset: Vec2::new(
                fx.signum() * SLOT_FRACTION * viewport.width,
                fy.signum() * SLOT_FRACTION * viewport.height,
            ),
            scale: SATELLITE_FINAL_SCALE * scale_mult,
            rotation_deg: 0.0,
            opacity: 1.0,
            z_index: SATELLITE_Z_INDEX,
        },
    }
}

/// Transform for panel `index` at smoothed progress `p`.
///
/// Linear blend on offset and scale, tilt decaying to zero, fade over the
/// first 40% of progress. The boundaries are exact: `p <= 0` yields the
/// scattered state, `p >= 1` the assembled state.
pub fn transform_at(p: f32, viewport: Viewport, index: usize) -> PanelTransform {
    let cfg = panel_config(index, viewport);
    if p <= 0.0 {
        return cfg.scattered;
    }
    if p >= 1.0 {
        return cfg.assembled;
    }
    PanelTransform {
        offset: cfg.scattered.offset.lerp(cfg.assembled.offset, p),
        scale: cfg.scattered.scale + (cfg.assembled.scale - cfg.scattered.scale) * p,
        rotation_deg: cfg.scattered.rotation_deg * (1.0 - p),
        opacity: (p * OPACITY_RAMP).clamp(0.0, 1.0),
        z_index: cfg.scattered.z_index,
    }
}
