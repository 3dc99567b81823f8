//! Mobile navigation toggle and in-page anchor resolution.

use crate::constants::ACTIVE_CLASS;
use crate::surface::Surface;

pub struct MobileNav<E> {
    toggle: E,
    menu: E,
}

impl<E: Surface> MobileNav<E> {
    /// Both halves are required; with either missing there is nothing to drive.
    pub fn new(toggle: Option<E>, menu: Option<E>) -> Option<Self> {
        Some(Self {
            toggle: toggle?,
            menu: menu?,
        })
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(ACTIVE_CLASS)
    }

    /// Flip the menu; toggle and menu always end in the same state.
    pub fn toggle(&self) {
        let open = !self.is_open();
        self.menu.set_class(ACTIVE_CLASS, open);
        self.toggle.set_class(ACTIVE_CLASS, open);
    }

    pub fn close(&self) {
        self.menu.remove_class(ACTIVE_CLASS);
        self.toggle.remove_class(ACTIVE_CLASS);
    }
}

/// Selector for the element an in-page link points at. A bare `#` (or
/// anything that is not a fragment) is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() >= 2 && href.starts_with('#')).then_some(href)
}
