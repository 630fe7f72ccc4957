// src/navigation.rs
//! Scroll-spy and menu logic. The page script mirrors these rules using the
//! constants rendered into it.

use serde::{Deserialize, Serialize};

/// Viewport line a section must straddle to count as active.
pub const SCROLL_OFFSET: f64 = 100.0;
/// Scroll distance after which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

pub const SECTION_ORDER: [SectionId; 6] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Skills,
    SectionId::Contact,
];

impl SectionId {
    /// DOM id / anchor.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        SECTION_ORDER.iter().copied().find(|s| s.anchor() == anchor)
    }
}

/// Bounding box of a rendered section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    fn straddles_offset(&self) -> bool {
        self.top <= SCROLL_OFFSET && self.bottom >= SCROLL_OFFSET
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: SectionId::Home,
            scrolled: false,
            menu_open: false,
        }
    }
}

impl NavigationState {
    /// Recompute from a scroll event. Sections are visited in page order and the
    /// last one straddling the offset wins; with no match the active section stays.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;

        let mut ordered: Vec<&SectionBounds> = sections.iter().collect();
        ordered.sort_by_key(|b| SECTION_ORDER.iter().position(|s| *s == b.id));

        if let Some(hit) = ordered.into_iter().filter(|b| b.straddles_offset()).last() {
            self.active_section = hit.id;
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Jumping to a section always closes the mobile menu.
    pub fn scroll_to(&mut self, section: SectionId) -> &'static str {
        self.menu_open = false;
        section.anchor()
    }
}
