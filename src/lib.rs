#![cfg(target_arch = "wasm32")]
use crate::scene::SceneConfig;
use crate::ui::UiState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod field;
mod frame;
mod input;
mod nav;
mod render;
mod scene;
mod scheduler;
mod ui;

const CANVAS_ID: &str = "particle-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-portfolio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn scene_config_for(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    SceneConfig::default().with_overrides(
        canvas.get_attribute("data-particle-count").as_deref(),
        canvas.get_attribute("data-seed").as_deref(),
    )
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ui = Rc::new(RefCell::new(UiState::default()));

    // Without a canvas the page still gets navigation, just no background.
    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => Some(
            el.dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
        ),
        None => {
            log::info!("[scene] no #{} element; background disabled", CANVAS_ID);
            None
        }
    };
    let config = canvas
        .as_ref()
        .map(scene_config_for)
        .unwrap_or_default();
    let scene = frame::build_scene(config, ui.clone());

    let wiring = events::EventWiring {
        document: document.clone(),
        ui: ui.clone(),
        scene: scene.clone(),
    };
    events::wire_page_handlers(&wiring);
    events::wire_pointermove(&wiring);
    events::wire_pagehide(&scene);
    nav::render(&document, &ui.borrow());

    let Some(canvas) = canvas else {
        return Ok(());
    };
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas, &scene);

    let renderer = frame::init_gpu(&canvas).await;
    let (width, height) = (canvas.width(), canvas.height());
    scene
        .borrow_mut()
        .initialize(renderer, width, height)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
