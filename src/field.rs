// Randomized particle point cloud and its whole-field transform.
//
// Individual particle positions never change after generation; only the
// aggregate [`FieldTransform`] is animated.

use crate::constants::{
    COLOR_BLUE_RANGE, COLOR_GREEN_RANGE, COLOR_RED_RANGE, POSITION_HALF_EXTENT,
};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

/// Per-particle data as laid out in the GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Rotation (about X then Y) and translation applied to the whole field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldTransform {
    /// `x` is the rotation about the X axis, `y` about the Y axis (radians).
    pub rotation: Vec2,
    pub position: Vec3,
}

impl FieldTransform {
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    vertices: Vec<ParticleVertex>,
    pub transform: FieldTransform,
}

impl ParticleField {
    /// Sample `count` particles with independent uniform draws per axis and
    /// per color channel.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut vertices = Vec::with_capacity(count);
        for _ in 0..count {
            let position = [
                rng.gen_range(-POSITION_HALF_EXTENT..POSITION_HALF_EXTENT),
                rng.gen_range(-POSITION_HALF_EXTENT..POSITION_HALF_EXTENT),
                rng.gen_range(-POSITION_HALF_EXTENT..POSITION_HALF_EXTENT),
            ];
            let color = [
                rng.gen_range(COLOR_RED_RANGE.0..COLOR_RED_RANGE.1),
                rng.gen_range(COLOR_GREEN_RANGE.0..COLOR_GREEN_RANGE.1),
                rng.gen_range(COLOR_BLUE_RANGE.0..COLOR_BLUE_RANGE.1),
            ];
            vertices.push(ParticleVertex { position, color });
        }
        Self {
            vertices,
            transform: FieldTransform::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    /// Raw bytes for the instance buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
