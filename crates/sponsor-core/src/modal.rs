//! Package comparison modal.
//!
//! The page body is scroll-locked for exactly as long as a session is open:
//! the lock is a guard owned by the session, so every path that ends the
//! session (close, replacement by another package, controller drop) releases
//! it.

use crate::catalog::{Package, PackageId};
use crate::constants::MODAL_OPEN_CLASS;
use crate::surface::Surface;
use std::cell::RefCell;

pub const FEATURES_HEADING: &str = "Avantages inclus";
pub const CTA_LABEL: &str = "Choisir ce pack";
pub const CTA_HREF: &str = "#contact";
pub const CTA_ATTRIBUTE: &str = "data-modal-cta";

pub const INCLUDED_GLYPH: &str = "fa-check";
pub const EXCLUDED_GLYPH: &str = "fa-times";

/// Key that dismisses the modal.
pub const CLOSE_KEY: &str = "Escape";

const HEADING_STYLE: &str = "margin-bottom: 1rem; font-size: 1.3rem;";
const LIST_STYLE: &str = "list-style: none;";
const ROW_STYLE: &str = "padding: 0.75rem 0; border-bottom: 1px solid var(--light-gray); \
                         display: flex; align-items: center; gap: 0.75rem;";
const INCLUDED_TEXT_STYLE: &str = "color: var(--dark-gray);";
const EXCLUDED_TEXT_STYLE: &str = "color: #999; opacity: 0.6;";
const INCLUDED_ICON_COLOR: &str = "#4caf50";
const EXCLUDED_ICON_COLOR: &str = "#999";
const CTA_STYLE: &str = "width: 100%; margin-top: 2rem; justify-content: center;";

/// Interactions that dismiss the modal. All of them end in
/// [`ModalController::close`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Key,
    Backdrop,
    CallToAction,
}

impl CloseTrigger {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == CLOSE_KEY).then_some(CloseTrigger::Key)
    }

    /// A click on the overlay closes only when it lands on the backdrop
    /// itself or inside the call-to-action; clicks on the dialog content
    /// are ignored.
    pub fn from_overlay_click(target_is_overlay: bool, inside_cta: bool) -> Option<Self> {
        if target_is_overlay {
            Some(CloseTrigger::Backdrop)
        } else if inside_cta {
            Some(CloseTrigger::CallToAction)
        } else {
            None
        }
    }
}

/// Suspends background scrolling of `body` until dropped.
pub struct ScrollLock<E: Surface> {
    body: E,
}

impl<E: Surface> ScrollLock<E> {
    pub fn acquire(body: E) -> Self {
        body.set_style("overflow", "hidden");
        Self { body }
    }
}

impl<E: Surface> Drop for ScrollLock<E> {
    fn drop(&mut self) {
        self.body.remove_style("overflow");
    }
}

pub enum ModalSession<E: Surface> {
    Hidden,
    Showing {
        package: PackageId,
        lock: Option<ScrollLock<E>>,
    },
}

impl<E: Surface> ModalSession<E> {
    pub fn package(&self) -> Option<PackageId> {
        match self {
            ModalSession::Hidden => None,
            ModalSession::Showing { package, .. } => Some(*package),
        }
    }
}

/// Elements the modal renders into. Only `overlay` is required.
pub struct ModalParts<E> {
    pub overlay: E,
    pub title: Option<E>,
    pub price: Option<E>,
    pub body: Option<E>,
    pub page_body: Option<E>,
}

pub struct ModalController<E: Surface> {
    parts: ModalParts<E>,
    session: RefCell<ModalSession<E>>,
}

impl<E: Surface + Clone> ModalController<E> {
    pub fn new(parts: ModalParts<E>) -> Self {
        Self {
            parts,
            session: RefCell::new(ModalSession::Hidden),
        }
    }

    pub fn current(&self) -> Option<PackageId> {
        self.session.borrow().package()
    }

    pub fn is_open(&self) -> bool {
        self.current().is_some()
    }

    pub fn open(&self, id: PackageId) {
        let pkg = id.package();
        if let Some(title) = &self.parts.title {
            title.set_text(pkg.name);
        }
        if let Some(price) = &self.parts.price {
            price.set_text(pkg.price);
        }
        if let Some(body) = &self.parts.body {
            body.set_html(&render_package_body(pkg));
        }
        self.parts.overlay.add_class(MODAL_OPEN_CLASS);

        // Re-opening while already showing keeps one lock, never two.
        let mut session = self.session.borrow_mut();
        let lock = match std::mem::replace(&mut *session, ModalSession::Hidden) {
            ModalSession::Showing { lock, .. } => lock,
            ModalSession::Hidden => self.parts.page_body.clone().map(ScrollLock::acquire),
        };
        *session = ModalSession::Showing {
            package: id,
            lock,
        };
        log::info!("[modal] open {}", id);
    }

    /// Close if `trigger` is a dismissal; returns whether it was.
    pub fn dismiss(&self, trigger: Option<CloseTrigger>) -> bool {
        let Some(trigger) = trigger else {
            return false;
        };
        log::debug!("[modal] dismissed by {:?}", trigger);
        self.close();
        true
    }

    /// Hide the modal and release the scroll lock. Safe to call repeatedly.
    pub fn close(&self) {
        self.parts.overlay.remove_class(MODAL_OPEN_CLASS);
        let previous = std::mem::replace(&mut *self.session.borrow_mut(), ModalSession::Hidden);
        if let Some(id) = previous.package() {
            log::info!("[modal] close {}", id);
        }
    }
}

pub fn render_package_body(pkg: &Package) -> String {
    let mut html = format!(
        "<h3 style=\"{HEADING_STYLE}\">{FEATURES_HEADING}</h3><ul style=\"{LIST_STYLE}\">"
    );
    for feature in pkg.features {
        let (glyph, icon_color, text_style) = if feature.included {
            (INCLUDED_GLYPH, INCLUDED_ICON_COLOR, INCLUDED_TEXT_STYLE)
        } else {
            (EXCLUDED_GLYPH, EXCLUDED_ICON_COLOR, EXCLUDED_TEXT_STYLE)
        };
        html.push_str(&format!(
            "<li class=\"feature-row\" data-included=\"{}\" style=\"{ROW_STYLE} {}\">",
            feature.included, text_style
        ));
        html.push_str(&format!(
            "<i class=\"fas {}\" style=\"color: {};\"></i> {}</li>",
            glyph,
            icon_color,
            escape_html(feature.text)
        ));
    }
    html.push_str("</ul>");
    html.push_str(&format!("<a href=\"{CTA_HREF}\" {CTA_ATTRIBUTE} class=\"btn btn-primary\" "));
    html.push_str(&format!("style=\"{CTA_STYLE}\">"));
    html.push_str(CTA_LABEL);
    html.push_str("</a>");
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
