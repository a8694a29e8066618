// Host-side tests for the hero assembly interpolator.

use gallery_core::{
    panel_config, transform_at, Viewport, CENTER_FINAL_SCALE, CENTER_FINAL_SCALE_MOBILE,
    CENTER_START_SCALE, CENTER_START_SCALE_MOBILE, CENTER_Z_INDEX, PANEL_COUNT,
    SATELLITE_Z_INDEX, SLOT_FRACTION,
};

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0)
}

fn mobile() -> Viewport {
    Viewport::new(390.0, 844.0)
}

#[test]
fn boundary_states_are_exact() {
    for vp in [desktop(), mobile()] {
        for i in 0..PANEL_COUNT {
            let cfg = panel_config(i, vp);
            assert_eq!(transform_at(0.0, vp, i), cfg.scattered);
            assert_eq!(transform_at(1.0, vp, i), cfg.assembled);
            // Out-of-range progress pins to the endpoints
            assert_eq!(transform_at(-0.5, vp, i), cfg.scattered);
            assert_eq!(transform_at(1.5, vp, i), cfg.assembled);
        }
    }
}

#[test]
fn interpolator_is_idempotent() {
    let vp = desktop();
    for i in 0..PANEL_COUNT {
        for &p in &[0.0, 0.123, 0.4, 0.77, 1.0] {
            assert_eq!(transform_at(p, vp, i), transform_at(p, vp, i));
        }
    }
}

#[test]
fn centerpiece_stays_centered_and_shrinks_into_place() {
    let vp = desktop();
    let cfg = panel_config(0, vp);
    assert_eq!(cfg.scattered.offset.x, 0.0);
    assert_eq!(cfg.scattered.offset.y, 0.0);
    assert_eq!(cfg.assembled.offset.x, 0.0);
    assert_eq!(cfg.assembled.offset.y, 0.0);
    assert_eq!(cfg.scattered.scale, CENTER_START_SCALE);
    assert_eq!(cfg.assembled.scale, CENTER_FINAL_SCALE);

    // Midway it is still centered, with scale strictly between the endpoints
    let mid = transform_at(0.5, vp, 0);
    assert_eq!(mid.offset.x, 0.0);
    assert!(mid.scale < CENTER_START_SCALE && mid.scale > CENTER_FINAL_SCALE);
}

#[test]
fn centerpiece_uses_mobile_scales_under_the_breakpoint() {
    let cfg = panel_config(0, mobile());
    assert_eq!(cfg.scattered.scale, CENTER_START_SCALE_MOBILE);
    assert_eq!(cfg.assembled.scale, CENTER_FINAL_SCALE_MOBILE);
}

#[test]
fn satellites_start_off_screen_and_assemble_symmetrically() {
    let vp = desktop();
    for i in 1..PANEL_COUNT {
        let cfg = panel_config(i, vp);
        // Scattered: at least 1.2x of the viewport dimension off center
        assert!(cfg.scattered.offset.x.abs() >= 1.2 * vp.width);
        assert!(cfg.scattered.offset.y.abs() >= 1.2 * vp.height);
        // Assembled: the symmetric slot fractions, rotation fully decayed
        assert_eq!(cfg.assembled.offset.x.abs(), SLOT_FRACTION * vp.width);
        assert_eq!(cfg.assembled.offset.y.abs(), SLOT_FRACTION * vp.height);
        assert_eq!(cfg.assembled.rotation_deg, 0.0);
        assert_ne!(cfg.scattered.rotation_deg, 0.0);
    }

    // One satellite per quadrant
    let quadrants: Vec<(bool, bool)> = (1..PANEL_COUNT)
        .map(|i| {
            let o = panel_config(i, vp).assembled.offset;
            (o.x > 0.0, o.y > 0.0)
        })
        .collect();
    for a in 0..quadrants.len() {
        for b in (a + 1)..quadrants.len() {
            assert_ne!(quadrants[a], quadrants[b], "two satellites share a quadrant");
        }
    }
}

#[test]
fn rotation_decays_linearly_to_zero() {
    let vp = desktop();
    for i in 1..PANEL_COUNT {
        let start = panel_config(i, vp).scattered.rotation_deg;
        let mid = transform_at(0.5, vp, i);
        assert!((mid.rotation_deg - start * 0.5).abs() < 1e-4);
        assert_eq!(transform_at(1.0, vp, i).rotation_deg, 0.0);
    }
}

#[test]
fn opacity_ramps_over_the_first_forty_percent() {
    let vp = desktop();
    let t = transform_at(0.2, vp, 0);
    assert!((t.opacity - 0.5).abs() < 1e-6);
    // Saturated from 40% onward
    assert_eq!(transform_at(0.4, vp, 0).opacity, 1.0);
    assert_eq!(transform_at(0.9, vp, 0).opacity, 1.0);
    assert_eq!(transform_at(0.0, vp, 0).opacity, 0.0);
}

#[test]
fn centerpiece_stacks_above_satellites() {
    let vp = desktop();
    let center = transform_at(0.5, vp, 0);
    assert_eq!(center.z_index, CENTER_Z_INDEX);
    for i in 1..PANEL_COUNT {
        let sat = transform_at(0.5, vp, i);
        assert_eq!(sat.z_index, SATELLITE_Z_INDEX);
        assert!(center.z_index > sat.z_index);
    }
}

#[test]
fn resizing_across_the_breakpoint_changes_a_settled_layout() {
    // A settled scroll position must still be repainted on resize: the same
    // progress maps to different transforms once the viewport changes.
    let p = 0.5;
    for i in 0..PANEL_COUNT {
        assert_ne!(transform_at(p, desktop(), i), transform_at(p, mobile(), i));
    }
    // Fully assembled, the centerpiece scale follows the breakpoint
    assert_eq!(transform_at(1.0, desktop(), 0).scale, CENTER_FINAL_SCALE);
    assert_eq!(transform_at(1.0, mobile(), 0).scale, CENTER_FINAL_SCALE_MOBILE);

    // Width-only resizes move the satellite slots too
    let wide = Viewport::new(1920.0, 900.0);
    assert_ne!(
        transform_at(p, desktop(), 1).offset,
        transform_at(p, wide, 1).offset
    );
}

#[test]
fn css_transform_renders_all_components() {
    let t = transform_at(0.3, desktop(), 2);
    let css = t.css_transform();
    assert!(css.starts_with("translate(-50%, -50%)"));
    assert!(css.contains("rotate("));
    assert!(css.contains("scale("));
}
