// Host-side tests for pointer normalization.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

const W: f64 = 1920.0;
const H: f64 = 1080.0;

#[test]
fn center_maps_to_origin() {
    let p = normalize_pointer(W / 2.0, H / 2.0, W, H).unwrap();
    assert!(p.x.abs() < 1e-6);
    assert!(p.y.abs() < 1e-6);
}

#[test]
fn top_left_maps_to_minus_one_plus_one() {
    let p = normalize_pointer(0.0, 0.0, W, H).unwrap();
    assert_eq!(p, PointerState { x: -1.0, y: 1.0 });
}

#[test]
fn bottom_right_maps_to_plus_one_minus_one() {
    let p = normalize_pointer(W, H, W, H).unwrap();
    assert_eq!(p, PointerState { x: 1.0, y: -1.0 });
}

#[test]
fn y_axis_is_inverted() {
    let upper = normalize_pointer(W / 2.0, H * 0.25, W, H).unwrap();
    let lower = normalize_pointer(W / 2.0, H * 0.75, W, H).unwrap();
    assert!((upper.y - 0.5).abs() < 1e-6);
    assert!((lower.y + 0.5).abs() < 1e-6);
}

#[test]
fn degenerate_viewport_is_rejected() {
    assert!(normalize_pointer(10.0, 10.0, 0.0, H).is_none());
    assert!(normalize_pointer(10.0, 10.0, W, 0.0).is_none());
    assert!(normalize_pointer(10.0, 10.0, f64::NAN, H).is_none());
}

#[test]
fn deadzone_is_exclusive() {
    assert!(!PointerState { x: 0.1, y: -0.1 }.outside_deadzone(0.1));
    assert!(PointerState { x: 0.11, y: 0.0 }.outside_deadzone(0.1));
    assert!(PointerState { x: 0.0, y: -0.5 }.outside_deadzone(0.1));
}
