use crate::ui::{Section, UiState};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1("hidden")
    } else {
        cl.remove_1("hidden")
    };
}

/// Mark the navigation buttons of the active section.
pub fn highlight_section(document: &web::Document, active: Section) {
    for section in Section::ALL {
        let selector = format!("[data-section='{}']", section.id());
        let Ok(nodes) = document.query_selector_all(&selector) else {
            continue;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            _ = el.class_list().toggle_with_force("active", section == active);
        }
    }
}

pub fn set_menu_open(document: &web::Document, open: bool) {
    if let Some(menu) = document.get_element_by_id("mobile-menu") {
        set_hidden(&menu, !open);
    }
    if let Some(toggle) = document.get_element_by_id("menu-toggle") {
        toggle.set_text_content(Some(if open { "✕" } else { "☰" }));
    }
}

pub fn set_scroll_top_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id("scroll-top") {
        set_hidden(&el, !visible);
    }
}

/// Bring the page chrome in line with the current UI state.
pub fn render(document: &web::Document, state: &UiState) {
    highlight_section(document, state.active_section);
    set_menu_open(document, state.menu_open);
    set_scroll_top_visible(document, state.show_scroll_top);
}
