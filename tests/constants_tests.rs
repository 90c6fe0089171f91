// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(ROTATION_EASE > 0.0 && ROTATION_EASE < 1.0);
    assert!(POSITION_EASE > 0.0 && POSITION_EASE < 1.0);
    // Position drifts slower than rotation follows
    assert!(POSITION_EASE < ROTATION_EASE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_sane() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_ranges_are_valid_channels() {
    for (lo, hi) in [COLOR_RED_RANGE, COLOR_GREEN_RANGE, COLOR_BLUE_RANGE] {
        assert!(lo >= 0.0 && hi <= 1.0);
        assert!(lo < hi);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_gains_keep_targets_small() {
    assert!(POINTER_DEADZONE > 0.0 && POINTER_DEADZONE < 1.0);
    assert!(POINTER_POSITION_GAIN > 0.0 && POINTER_POSITION_GAIN < POSITION_HALF_EXTENT);
    assert!(POINTER_ROTATION_GAIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn material_and_thresholds_are_positive() {
    assert!(PARTICLE_COUNT > 0);
    assert!(MAX_PARTICLE_COUNT >= PARTICLE_COUNT);
    assert!(MAX_PARTICLE_COUNT <= u32::MAX as usize);
    assert!(POINT_SIZE > 0.0);
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
    assert!(SCROLL_TOP_THRESHOLD_PX > SECTION_PROBE_PX);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}
