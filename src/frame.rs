use crate::constants::FRAME_STALL_MS;
use crate::render::GpuRenderer;
use crate::scene::{RendererOptions, SceneConfig, SceneManager};
use crate::scheduler::{AnimationHandle, FrameScheduler};
use crate::ui::UiState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Scene = SceneManager<GpuRenderer, RafScheduler>;
pub type SharedScene = Rc<RefCell<Scene>>;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame`-backed scheduler. Every request queues the same
/// frame callback; the id returned by the browser is the cancellation token.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<AnimationHandle> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        let id = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()?;
        Some(AnimationHandle::new(id))
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.id());
        }
    }
}

pub struct FrameContext {
    pub scene: SharedScene,
    pub ui: Rc<RefCell<UiState>>,
    pub last_instant: Option<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_instant {
            let gap = (now - last).as_millis();
            if gap > FRAME_STALL_MS {
                log::debug!("[frame] resumed after {} ms", gap);
            }
        }
        self.last_instant = Some(now);

        // Pointer updates committed before this callback are visible here.
        let pointer = self.ui.borrow().pointer;
        self.scene.borrow_mut().tick(js_sys::Date::now(), pointer);
    }
}

/// Build the scene manager and its frame callback. Nothing is scheduled until
/// the scene is initialized with a renderer.
pub fn build_scene(config: SceneConfig, ui: Rc<RefCell<UiState>>) -> SharedScene {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scene = Rc::new(RefCell::new(SceneManager::new(
        config,
        RafScheduler {
            callback: callback.clone(),
        },
    )));
    let mut frame_ctx = FrameContext {
        scene: scene.clone(),
        ui,
        last_instant: None,
    };
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp_ms: f64| {
        frame_ctx.frame();
    }) as Box<dyn FnMut(f64)>));
    scene
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuRenderer> {
    match GpuRenderer::new(canvas, RendererOptions::default()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] renderer init error: {:?}", e);
            None
        }
    }
}
