// Shared tuning constants for the hero assembly animation and scroll smoothing.

// Layout
pub const PANEL_COUNT: usize = 5; // one centerpiece + four satellites
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const HERO_TRACK_SCREENS: f32 = 4.0; // hero track height in viewport heights

// Scroll smoothing
pub const SCROLL_LERP_ALPHA: f32 = 0.085; // per-frame pull toward the target
pub const SETTLE_EPSILON: f32 = 1e-4; // residual below this counts as settled

// Panels reach full opacity over the first 40% of scroll progress
pub const OPACITY_RAMP: f32 = 2.5;

// Centerpiece scales (shrinks into place)
pub const CENTER_START_SCALE: f32 = 4.0;
pub const CENTER_START_SCALE_MOBILE: f32 = 2.5;
pub const CENTER_FINAL_SCALE: f32 = 1.1;
pub const CENTER_FINAL_SCALE_MOBILE: f32 = 0.75;

// Satellite scales
pub const SATELLITE_START_SCALE: f32 = 1.4;
pub const SATELLITE_FINAL_SCALE: f32 = 0.85;
pub const SATELLITE_MOBILE_SCALE_MULT: f32 = 0.7;

// Assembled grid: satellite slots sit at this fraction of the viewport
// width/height from center, one per quadrant
pub const SLOT_FRACTION: f32 = 0.30;

// Stacking: the centerpiece always sits above the satellites
pub const CENTER_Z_INDEX: i32 = 10;
pub const SATELLITE_Z_INDEX: i32 = 1;

// Scattered satellite positions as viewport fractions plus an initial tilt
// (degrees). Offsets stay within 1.2x..1.5x of the viewport dimension so
// every satellite starts fully off screen.
pub const SATELLITE_SCATTER: [(f32, f32, f32); 4] = [
    (-1.35, -1.20, -18.0), // upper left
    (1.45, -1.25, 15.0),   // upper right
    (-1.25, 1.30, 12.0),   // lower left
    (1.50, 1.40, -21.0),   // lower right
];
