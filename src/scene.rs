// Scene manager: camera, particle field and renderer as one owned aggregate
// with an explicit Uninitialized → Running → Disposed lifecycle.

use crate::camera::Camera;
use crate::constants::{
    BOB_AMPLITUDE, BOB_FREQUENCY_PER_MS, CAMERA_Z, MAX_PARTICLE_COUNT, PARTICLE_COUNT,
    POINTER_DEADZONE, POINTER_POSITION_GAIN, POINTER_ROTATION_GAIN, POINT_OPACITY, POINT_SIZE,
    POSITION_EASE, ROTATION_EASE, SPIN_PER_FRAME,
};
use crate::field::ParticleField;
use crate::input::PointerState;
use crate::scheduler::{FrameLoop, FrameScheduler};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("scene has been disposed; create a new scene manager to restart")]
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("timed out acquiring the next frame")]
    Timeout,
    #[error("render failed: {0}")]
    Other(String),
}

/// Per-instance knobs; defaults come from `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    /// Fixed seed for reproducible fields; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub point_size: f32,
    pub opacity: f32,
    pub camera_z: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: None,
            point_size: POINT_SIZE,
            opacity: POINT_OPACITY,
            camera_z: CAMERA_Z,
        }
    }
}

impl SceneConfig {
    /// Apply optional string overrides (e.g. from `data-*` attributes).
    /// Values that fail to parse, or counts outside `1..=MAX_PARTICLE_COUNT`,
    /// are logged and ignored.
    pub fn with_overrides(mut self, particle_count: Option<&str>, seed: Option<&str>) -> Self {
        if let Some(raw) = particle_count {
            match raw.trim().parse::<usize>() {
                Ok(n) if (1..=MAX_PARTICLE_COUNT).contains(&n) => self.particle_count = n,
                _ => log::warn!("[scene] ignoring particle count override {:?}", raw),
            }
        }
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(s) => self.seed = Some(s),
                Err(_) => log::warn!("[scene] ignoring seed override {:?}", raw),
            }
        }
        self
    }
}

/// Surface creation flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RendererOptions {
    /// Composite the canvas over the page instead of clearing to opaque.
    pub alpha: bool,
    pub antialias: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            alpha: true,
            antialias: true,
        }
    }
}

/// Uniform block consumed by the particle shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub model_view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub point_size: f32,
    pub opacity: f32,
    pub _pad: [f32; 2],
}

/// GPU side of the scene. The backend owns the field's geometry and material
/// once uploaded.
pub trait RenderBackend {
    fn upload_field(&mut self, field: &ParticleField);
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, uniforms: &SceneUniforms) -> Result<(), RenderError>;
    /// Free every GPU resource. Called at most once per backend.
    fn release(&mut self);
}

struct RunningScene<R: RenderBackend> {
    camera: Camera,
    field: ParticleField,
    renderer: R,
}

enum SceneState<R: RenderBackend> {
    Uninitialized,
    Running(RunningScene<R>),
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Disposed,
}

/// Exponential smoothing step: move `factor` of the remaining distance.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Field rotation the pointer pulls toward.
#[inline]
pub fn pointer_rotation_target(pointer: PointerState) -> Vec2 {
    Vec2::new(
        pointer.y * POINTER_ROTATION_GAIN,
        -pointer.x * POINTER_ROTATION_GAIN,
    )
}

pub struct SceneManager<R: RenderBackend, S: FrameScheduler> {
    config: SceneConfig,
    state: SceneState<R>,
    scheduler: S,
    frame_loop: FrameLoop,
}

impl<R: RenderBackend, S: FrameScheduler> SceneManager<R, S> {
    pub fn new(config: SceneConfig, scheduler: S) -> Self {
        Self {
            config,
            state: SceneState::Uninitialized,
            scheduler,
            frame_loop: FrameLoop::new(),
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self.state {
            SceneState::Uninitialized => Lifecycle::Uninitialized,
            SceneState::Running(_) => Lifecycle::Running,
            SceneState::Disposed => Lifecycle::Disposed,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn field(&self) -> Option<&ParticleField> {
        match &self.state {
            SceneState::Running(scene) => Some(&scene.field),
            _ => None,
        }
    }

    pub fn camera(&self) -> Option<&Camera> {
        match &self.state {
            SceneState::Running(scene) => Some(&scene.camera),
            _ => None,
        }
    }

    pub fn renderer(&self) -> Option<&R> {
        match &self.state {
            SceneState::Running(scene) => Some(&scene.renderer),
            _ => None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_loop.is_pending()
    }

    /// Bind to a render surface and start the frame loop.
    ///
    /// A missing surface (`None`) leaves the manager uninitialized so that a
    /// later call can retry. Re-initializing a running scene is a no-op.
    pub fn initialize(
        &mut self,
        renderer: Option<R>,
        width: u32,
        height: u32,
    ) -> Result<(), SceneError> {
        match self.state {
            SceneState::Disposed => return Err(SceneError::Disposed),
            SceneState::Running(_) => {
                log::debug!("[scene] already running; initialize ignored");
                return Ok(());
            }
            SceneState::Uninitialized => {}
        }
        let Some(mut renderer) = renderer else {
            log::debug!("[scene] render surface not ready");
            return Ok(());
        };

        let mut camera = Camera::looking_down_z(self.config.camera_z, 1.0);
        camera.set_viewport(width, height);

        let count = self.config.particle_count.min(MAX_PARTICLE_COUNT);
        if count < self.config.particle_count {
            log::warn!(
                "[scene] particle count {} capped at {}",
                self.config.particle_count,
                count
            );
        }
        let field = match self.config.seed {
            Some(seed) => ParticleField::generate(count, &mut StdRng::seed_from_u64(seed)),
            None => ParticleField::generate(count, &mut StdRng::from_entropy()),
        };
        renderer.upload_field(&field);
        renderer.resize(width, height);

        log::info!(
            "[scene] initialized: {} particles, {}x{}",
            field.len(),
            width,
            height
        );
        self.state = SceneState::Running(RunningScene {
            camera,
            field,
            renderer,
        });
        self.frame_loop.schedule(&mut self.scheduler);
        Ok(())
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        let SceneState::Running(scene) = &mut self.state else {
            log::debug!("[scene] resize before initialization ignored");
            return;
        };
        if width == 0 || height == 0 {
            return;
        }
        scene.camera.set_viewport(width, height);
        scene.renderer.resize(width, height);
    }

    /// Idle spin, vertical bob, then one draw call. `now_ms` is wall-clock
    /// milliseconds since the epoch.
    pub fn render_frame(&mut self, now_ms: f64) {
        let SceneState::Running(scene) = &mut self.state else {
            return;
        };
        let transform = &mut scene.field.transform;
        transform.rotation.x += SPIN_PER_FRAME;
        transform.rotation.y += SPIN_PER_FRAME;
        transform.position.y = ((now_ms * BOB_FREQUENCY_PER_MS).sin() as f32) * BOB_AMPLITUDE;

        let model_view = scene.camera.view_matrix() * transform.model_matrix();
        let uniforms = SceneUniforms {
            model_view: model_view.to_cols_array_2d(),
            projection: scene.camera.projection_matrix().to_cols_array_2d(),
            point_size: self.config.point_size,
            opacity: self.config.opacity,
            _pad: [0.0; 2],
        };
        if let Err(e) = scene.renderer.draw(&uniforms) {
            log::warn!("[scene] dropped frame: {}", e);
        }
    }

    /// One easing step toward the pointer-driven rotation and position.
    pub fn apply_pointer_influence(&mut self, pointer: PointerState) {
        let SceneState::Running(scene) = &mut self.state else {
            return;
        };
        let transform = &mut scene.field.transform;
        let target = pointer_rotation_target(pointer);
        transform.rotation.x = ease_toward(transform.rotation.x, target.x, ROTATION_EASE);
        transform.rotation.y = ease_toward(transform.rotation.y, target.y, ROTATION_EASE);

        if pointer.outside_deadzone(POINTER_DEADZONE) {
            transform.position.x = ease_toward(
                transform.position.x,
                pointer.x * POINTER_POSITION_GAIN,
                POSITION_EASE,
            );
            transform.position.y = ease_toward(
                transform.position.y,
                pointer.y * POINTER_POSITION_GAIN,
                POSITION_EASE,
            );
        }
    }

    /// Frame callback body: consume the pending handle, draw, ease toward the
    /// pointer and queue the next frame.
    pub fn tick(&mut self, now_ms: f64, pointer: PointerState) {
        self.frame_loop.mark_fired();
        if !matches!(self.state, SceneState::Running(_)) {
            return;
        }
        self.render_frame(now_ms);
        self.apply_pointer_influence(pointer);
        self.frame_loop.schedule(&mut self.scheduler);
    }

    /// Supersede the pending frame with a fresh one (pointer target changed).
    pub fn restart_loop(&mut self) {
        if matches!(self.state, SceneState::Running(_)) {
            self.frame_loop.schedule(&mut self.scheduler);
        }
    }

    /// Release GPU resources and cancel the pending frame. Safe to repeat.
    pub fn dispose(&mut self) {
        self.frame_loop.cancel(&mut self.scheduler);
        match std::mem::replace(&mut self.state, SceneState::Disposed) {
            SceneState::Running(mut scene) => {
                scene.renderer.release();
                log::info!("[scene] disposed");
            }
            SceneState::Uninitialized => {
                // Never bound to a surface; stay retryable.
                self.state = SceneState::Uninitialized;
            }
            SceneState::Disposed => {}
        }
    }
}

impl<R: RenderBackend, S: FrameScheduler> Drop for SceneManager<R, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
