// Page-level interaction state: pointer, active section, menu and the
// scroll-to-top affordance.
//
// Every DOM event is turned into a [`UiEvent`] and folded into [`UiState`] by
// [`update`]. The returned [`UiEffect`] tells the browser layer what side
// effect to perform; this module never touches the DOM itself.

use crate::constants::{SCROLL_TOP_THRESHOLD_PX, SECTION_PROBE_PX};
use crate::input::{normalize_pointer, PointerState};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Gallery,
    Contact,
}

impl Section {
    /// Document order; also the order in which sections are probed on scroll.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Gallery,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Gallery => "gallery",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section relative to the viewport top, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    #[inline]
    pub fn spans_probe(self) -> bool {
        self.top <= SECTION_PROBE_PX && self.bottom >= SECTION_PROBE_PX
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiState {
    pub pointer: PointerState,
    pub active_section: Section,
    pub show_scroll_top: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiEvent {
    PointerMoved {
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    /// `sections[i]` is the rect of `Section::ALL[i]`, `None` when the element
    /// is missing from the document.
    Scrolled {
        scroll_y: f64,
        sections: [Option<SectionRect>; 4],
    },
    /// Navigation request; `available` is false when the target element is
    /// missing, in which case nothing happens.
    NavigateTo { section: Section, available: bool },
    ToggleMenu,
    ScrollToTop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Pointer target changed; cancel the pending frame and reschedule.
    RestartPointerLoop,
    ScrollIntoView(Section),
    ScrollToTop,
}

/// First section, in document order, whose rect spans the probe line.
pub fn section_at_probe(sections: &[Option<SectionRect>; 4]) -> Option<Section> {
    Section::ALL
        .into_iter()
        .zip(sections.iter())
        .find(|(_, rect)| rect.is_some_and(SectionRect::spans_probe))
        .map(|(section, _)| section)
}

pub fn update(state: &mut UiState, event: UiEvent) -> Option<UiEffect> {
    match event {
        UiEvent::PointerMoved {
            x,
            y,
            viewport_width,
            viewport_height,
        } => {
            let pointer = normalize_pointer(x, y, viewport_width, viewport_height)?;
            state.pointer = pointer;
            Some(UiEffect::RestartPointerLoop)
        }
        UiEvent::Scrolled { scroll_y, sections } => {
            state.show_scroll_top = scroll_y > SCROLL_TOP_THRESHOLD_PX;
            // No match keeps the previous section (fast scrolls can skip the band).
            if let Some(section) = section_at_probe(&sections) {
                if section != state.active_section {
                    log::debug!("[ui] active section {} -> {}", state.active_section, section);
                }
                state.active_section = section;
            }
            None
        }
        UiEvent::NavigateTo { section, available } => {
            if !available {
                log::debug!("[ui] no element for section {}", section);
                return None;
            }
            state.active_section = section;
            state.menu_open = false;
            Some(UiEffect::ScrollIntoView(section))
        }
        UiEvent::ToggleMenu => {
            state.menu_open = !state.menu_open;
            None
        }
        UiEvent::ScrollToTop => Some(UiEffect::ScrollToTop),
    }
}
