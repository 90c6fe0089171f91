use super::{dispatch, EventWiring};
use crate::dom;
use crate::frame::SharedScene;
use crate::ui::UiEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_page_handlers(w: &EventWiring) {
    wire_scroll(w);
    wire_nav_clicks(w);

    let wm = w.clone();
    dom::add_click_listener(&w.document, "menu-toggle", move || {
        dispatch(&wm, UiEvent::ToggleMenu);
    });
    let wt = w.clone();
    dom::add_click_listener(&w.document, "scroll-top", move || {
        dispatch(&wt, UiEvent::ScrollToTop);
    });
}

fn wire_scroll(w: &EventWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let sections = dom::section_rects(&w.document);
        dispatch(&w, UiEvent::Scrolled { scroll_y, sections });
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// One delegated listener covers desktop, mobile and hero buttons alike.
fn wire_nav_clicks(w: &EventWiring) {
    let w = w.clone();
    let document = w.document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(section) = dom::section_for_target(ev.target()) else {
            return;
        };
        ev.prevent_default();
        let available = dom::has_section(&w.document, section);
        dispatch(&w, UiEvent::NavigateTo { section, available });
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Tear the scene down when the page goes away.
pub fn wire_pagehide(scene: &SharedScene) {
    let scene = scene.clone();
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().dispose();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
