use super::{dispatch, EventWiring};
use crate::dom;
use crate::frame::SharedScene;
use crate::ui::UiEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let Some((width, height)) = dom::viewport_size(&window) else {
            return;
        };
        dispatch(
            &w,
            UiEvent::PointerMoved {
                x: ev.client_x() as f64,
                y: ev.client_y() as f64,
                viewport_width: width,
                viewport_height: height,
            },
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas backing store at CSS size × devicePixelRatio and forward
/// the new size to the scene.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: &SharedScene) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let scene = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        scene
            .borrow_mut()
            .on_resize(canvas_resize.width(), canvas_resize.height());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
