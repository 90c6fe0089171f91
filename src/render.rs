use crate::constants::MSAA_SAMPLES;
use crate::field::ParticleField;
use crate::scene::{RenderBackend, RenderError, RendererOptions, SceneUniforms};
use web_sys as web;

mod limits;
mod particles;
mod targets;

use limits::limits_for_backend;

use particles::{create_particle_resources, ParticleResources};
use targets::MsaaTarget;

pub(crate) static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

// ===================== WebGPU / WebGL2 particle renderer =====================

pub struct GpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    sample_count: u32,
    clear_color: wgpu::Color,
    msaa: Option<MsaaTarget>,
    particles: Option<ParticleResources>,
    released: bool,
}

impl GpuRenderer {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        options: RendererOptions,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        // WebGPU when the browser can hand out an adapter, WebGL2 otherwise.
        let instance = wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        })
        .await;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU or WebGL2 adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter: {:?} ({:?})", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: limits_for_backend(info.backend),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let opaque_alpha = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let alpha_mode = if options.alpha {
            caps.alpha_modes
                .iter()
                .copied()
                .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
                .unwrap_or(opaque_alpha)
        } else {
            opaque_alpha
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let sample_count = if options.antialias { MSAA_SAMPLES } else { 1 };
        let msaa = (sample_count > 1)
            .then(|| MsaaTarget::new(&device, format, width, height, sample_count));
        let clear_color = if options.alpha {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color::BLACK
        };
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?} samples={}",
            width,
            height,
            format,
            alpha_mode,
            sample_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sample_count,
            clear_color,
            msaa,
            particles: None,
            released: false,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl RenderBackend for GpuRenderer {
    fn upload_field(&mut self, field: &ParticleField) {
        if let Some(old) = self.particles.take() {
            old.destroy();
        }
        self.particles = Some(create_particle_resources(
            &self.device,
            field,
            self.config.format,
            self.sample_count,
        ));
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.released || width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
        if let Some(old) = self.msaa.take() {
            old.destroy();
            self.msaa = Some(MsaaTarget::new(
                &self.device,
                self.config.format,
                width,
                height,
                self.sample_count,
            ));
        }
    }

    fn draw(&mut self, uniforms: &SceneUniforms) -> Result<(), RenderError> {
        let Some(particles) = &self.particles else {
            return Err(RenderError::Other("no particle field uploaded".into()));
        };
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => return Err(RenderError::Timeout),
            Err(other) => return Err(RenderError::Other(other.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.queue
            .write_buffer(&particles.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let (target, resolve_target) = match &self.msaa {
                Some(msaa) => (&msaa.view, Some(&view)),
                None => (&view, None),
            };
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&particles.pipeline);
            rpass.set_bind_group(0, &particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, particles.instance_buffer.slice(..));
            rpass.draw(0..6, 0..particles.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        if let Some(particles) = self.particles.take() {
            particles.destroy();
        }
        if let Some(msaa) = self.msaa.take() {
            msaa.destroy();
        }
        self.released = true;
        log::info!("[gpu] resources released");
    }
}
