// Host-side tests for backend-dependent device limits.
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
mod input {
    include!("../src/input.rs");
}
mod scheduler {
    include!("../src/scheduler.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod limits {
    include!("../src/render/limits.rs");
}

use field::ParticleVertex;
use limits::limits_for_backend;
use scene::SceneUniforms;

#[test]
fn webgl2_adapters_get_downlevel_limits() {
    assert_eq!(
        limits_for_backend(wgpu::Backend::Gl),
        wgpu::Limits::downlevel_webgl2_defaults()
    );
    assert_eq!(
        limits_for_backend(wgpu::Backend::BrowserWebGpu),
        wgpu::Limits::default()
    );
}

#[test]
fn particle_pipeline_fits_webgl2_limits() {
    let limits = limits_for_backend(wgpu::Backend::Gl);
    // One uniform block, one instance buffer with two attributes, no storage.
    assert!(std::mem::size_of::<SceneUniforms>() as u32 <= limits.max_uniform_buffer_binding_size);
    assert!(limits.max_uniform_buffers_per_shader_stage >= 1);
    assert!(limits.max_vertex_buffers >= 1);
    assert!(limits.max_vertex_attributes >= 2);
    assert!(std::mem::size_of::<ParticleVertex>() as u32 <= limits.max_vertex_buffer_array_stride);
    assert!(limits.max_bind_groups >= 1);
}
