use crate::ui::{Section, SectionRect};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Window inner size in CSS px.
pub fn viewport_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Bounding rects of every section in `Section::ALL` order.
pub fn section_rects(document: &web::Document) -> [Option<SectionRect>; 4] {
    Section::ALL.map(|section| {
        document.get_element_by_id(section.id()).map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionRect {
                top: rect.top(),
                bottom: rect.bottom(),
            }
        })
    })
}

#[inline]
pub fn has_section(document: &web::Document, section: Section) -> bool {
    document.get_element_by_id(section.id()).is_some()
}

pub fn scroll_into_view(document: &web::Document, section: Section) {
    if let Some(el) = document.get_element_by_id(section.id()) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        opts.set_block(web::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

pub fn scroll_to_top(window: &web::Window) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Section named by the nearest `data-section` ancestor of an event target.
pub fn section_for_target(target: Option<web::EventTarget>) -> Option<Section> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let button = el.closest("[data-section]").ok()??;
    let raw = button.get_attribute("data-section")?;
    match raw.parse::<Section>() {
        Ok(section) => Some(section),
        Err(e) => {
            log::warn!("[ui] {}", e);
            None
        }
    }
}
