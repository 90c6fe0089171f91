// Host-side tests for particle field generation and the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod field {
    include!("../src/field.rs");
}

use camera::Camera;
use constants::*;
use field::*;
use glam::{Mat4, Vec2, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field_with_seed(seed: u64) -> ParticleField {
    ParticleField::generate(PARTICLE_COUNT, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn generates_requested_particle_count() {
    let field = field_with_seed(1);
    assert_eq!(field.len(), 2000);
    assert!(!field.is_empty());
    assert_eq!(
        field.as_bytes().len(),
        2000 * std::mem::size_of::<ParticleVertex>()
    );
    assert_eq!(std::mem::size_of::<ParticleVertex>(), 24);
}

#[test]
fn positions_and_colors_stay_in_range() {
    let field = field_with_seed(2);
    for v in field.vertices() {
        for p in v.position {
            assert!((-2.5..2.5).contains(&p), "position {p} out of range");
        }
        let [r, g, b] = v.color;
        assert!((0.2..0.4).contains(&r), "red {r}");
        assert!((0.7..1.0).contains(&g), "green {g}");
        assert!((0.8..1.0).contains(&b), "blue {b}");
    }
}

#[test]
fn samples_cover_the_cube() {
    let field = field_with_seed(3);
    let (mut min, mut max) = (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
    for v in field.vertices() {
        let p = Vec3::from_array(v.position);
        min = min.min(p);
        max = max.max(p);
    }
    // 2000 uniform samples should get close to every face.
    assert!(min.max_element() < -2.0);
    assert!(max.min_element() > 2.0);
}

#[test]
fn same_seed_same_field_different_seed_different_field() {
    assert_eq!(field_with_seed(9).vertices(), field_with_seed(9).vertices());
    assert_ne!(field_with_seed(9).vertices(), field_with_seed(10).vertices());
}

#[test]
fn new_field_starts_untransformed() {
    let field = field_with_seed(4);
    assert_eq!(field.transform, FieldTransform::default());
    assert_eq!(field.transform.model_matrix(), Mat4::IDENTITY);
}

#[test]
fn model_matrix_applies_rotation_then_translation() {
    let t = FieldTransform {
        rotation: Vec2::new(0.0, std::f32::consts::FRAC_PI_2),
        position: Vec3::new(0.0, 0.1, 0.0),
    };
    // +X rotated a quarter turn about Y lands on -Z, then shifts up.
    let p = t.model_matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(0.0, 0.1, -1.0)).length() < 1e-5);
}

#[test]
fn camera_projects_origin_to_screen_center() {
    let cam = Camera::looking_down_z(CAMERA_Z, 16.0 / 9.0);
    let clip = cam.projection_matrix() * cam.view_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6);
    assert!(ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn camera_aspect_tracks_viewport() {
    let mut cam = Camera::default();
    assert_eq!(cam.aspect, 1.0);
    cam.set_viewport(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.set_viewport(1920, 0);
    assert_eq!(cam.aspect, 1.0);
}
