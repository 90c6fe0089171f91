use crate::dom;
use crate::frame::SharedScene;
use crate::nav;
use crate::ui::{self, UiEffect, UiEvent, UiState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod page;
mod pointer;

pub use page::{wire_page_handlers, wire_pagehide};
pub use pointer::{wire_canvas_resize, wire_pointermove};

#[derive(Clone)]
pub struct EventWiring {
    pub document: web::Document,
    pub ui: Rc<RefCell<UiState>>,
    pub scene: SharedScene,
}

/// Fold one event into the UI state and carry out the resulting effect.
pub fn dispatch(w: &EventWiring, event: UiEvent) {
    let (effect, snapshot) = {
        let mut state = w.ui.borrow_mut();
        let effect = ui::update(&mut state, event);
        (effect, *state)
    };
    match effect {
        Some(UiEffect::RestartPointerLoop) => w.scene.borrow_mut().restart_loop(),
        Some(UiEffect::ScrollIntoView(section)) => dom::scroll_into_view(&w.document, section),
        Some(UiEffect::ScrollToTop) => {
            if let Some(window) = web::window() {
                dom::scroll_to_top(&window);
            }
        }
        None => {}
    }
    // Pointer moves never change page chrome
    if !matches!(event, UiEvent::PointerMoved { .. }) {
        nav::render(&w.document, &snapshot);
    }
}
