// Host-side tests for constants and their mathematical relationships.

use dreamy_tree::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_open_unit_interval() {
    for alpha in [
        LEAF_MORPH_ALPHA,
        DECORATION_MORPH_ALPHA,
        RIBBON_MORPH_ALPHA,
        BLOSSOM_MORPH_ALPHA,
        STAR_Y_ALPHA,
        STAR_SCALE_ALPHA,
        STAR_OPACITY_ALPHA,
        ROTATION_EASE,
        CURSOR_SMOOTHING,
    ] {
        assert!(alpha > 0.0 && alpha < 1.0, "factor {alpha} out of (0, 1)");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cones_taper_to_the_apex() {
    // Radius must stay non-negative over the whole height.
    assert!(LEAF_HEIGHT <= TREE_APEX);
    assert!(DECORATION_HEIGHT <= TREE_APEX);
    assert!(RIBBON_HEIGHT <= TREE_APEX);
    assert!(LEAF_TAPER > 0.0 && DECORATION_TAPER > 0.0 && RIBBON_TAPER > 0.0);
    assert!(DECORATION_OUTSET >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_sits_on_the_leaf_tip() {
    let leaf_top = LEAF_HEIGHT + LEAF_Y_OFFSET;
    assert!(STAR_TREE_Y >= leaf_top);
    assert!(STAR_TREE_Y - leaf_top < 0.5);
    assert!(STAR_EXPLODE_Y > STAR_TREE_Y);
    assert!(STAR_SHINE_DEPTH < 1.0, "key light must never go negative");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scatter_extents_dwarf_the_tree() {
    let base_radius = TREE_APEX * LEAF_TAPER;
    for extent in [LEAF_SCATTER, DECORATION_SCATTER, RIBBON_SCATTER] {
        assert!(extent[0] / 2.0 > base_radius);
        assert!(extent[2] / 2.0 > base_radius);
    }
    assert!(BLOSSOM_SHELL_MIN > BLOSSOM_BASE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulses_never_invert() {
    assert!(BLOSSOM_POINT_PULSE < BLOSSOM_POINT_SIZE);
    assert!(SPARKLE_SCALE_PULSE < SPARKLE_SCALE_BASE);
    assert!(SPARKLE_OPACITY_PULSE <= SPARKLE_OPACITY_BASE);
    assert!(SPARKLE_OPACITY_BASE + SPARKLE_OPACITY_PULSE <= 1.0);
    assert!(RING_PULSE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_thresholds_are_small_image_fractions() {
    assert!(PINCH_THRESHOLD > 0.0 && PINCH_THRESHOLD < 0.5);
    assert!(OPEN_MARGIN > 0.0 && OPEN_MARGIN < 0.5);
    // Drift alone must be slower than a hand-driven ease step.
    assert!(ROTATION_DRIFT < ROTATION_SENSITIVITY * ROTATION_EASE);
}

#[test]
fn palettes_are_24_bit() {
    for hex in LEAF_PALETTE
        .iter()
        .chain(&DECORATION_PALETTE)
        .chain(&BLOSSOM_GRADIENT)
        .chain(std::iter::once(&RIBBON_TINT))
    {
        assert!(*hex <= 0xFF_FFFF);
    }
}
