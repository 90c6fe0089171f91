/// Device limits to request. WebGL2 contexts cannot meet the WebGPU defaults.
pub fn limits_for_backend(backend: wgpu::Backend) -> wgpu::Limits {
    match backend {
        wgpu::Backend::Gl => wgpu::Limits::downlevel_webgl2_defaults(),
        // Default limits avoid passing unknown fields to older WebGPU impls
        _ => wgpu::Limits::default(),
    }
}
