use crate::constants::{MODAL_CTA_SELECTOR, PACKAGE_ATTRIBUTE};
use crate::dom::{self, DomNode};
use sponsor_core::modal::{CloseTrigger, ModalController, ModalParts};
use sponsor_core::registry::{Collection, ElementRegistry, Role};
use sponsor_core::PackageId;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Modal = Rc<ModalController<DomNode>>;

/// Bind package triggers, the close control and the backdrop. Returns `None`
/// when the page has no modal.
pub fn wire(registry: &ElementRegistry<DomNode>) -> Option<Modal> {
    let overlay = registry.cloned(Role::Modal)?;
    let modal = Rc::new(ModalController::new(ModalParts {
        overlay: overlay.clone(),
        title: registry.cloned(Role::ModalTitle),
        price: registry.cloned(Role::ModalPrice),
        body: registry.cloned(Role::ModalBody),
        page_body: registry.cloned(Role::Body),
    }));

    for trigger in registry.all(Collection::PackageTriggers) {
        let raw = trigger.element().get_attribute(PACKAGE_ATTRIBUTE).unwrap_or_default();
        let id = match raw.parse::<PackageId>() {
            Ok(id) => id,
            Err(e) => {
                log::warn!("[modal] trigger skipped: {}", e);
                continue;
            }
        };
        let m = modal.clone();
        dom::listen(trigger.target(), "click", move |ev| {
            ev.prevent_default();
            m.open(id);
        });
    }

    if let Some(close) = registry.get(Role::ModalClose) {
        let m = modal.clone();
        dom::listen(close.target(), "click", move |_| {
            m.dismiss(Some(CloseTrigger::Button));
        });
    }

    // The call-to-action closes and lets its anchor navigate.
    let m = modal.clone();
    let backdrop = overlay.clone();
    dom::listen(overlay.target(), "click", move |ev| {
        m.dismiss(CloseTrigger::from_overlay_click(
            backdrop.is_event_target(&ev),
            clicked_cta(&ev),
        ));
    });

    Some(modal)
}

fn clicked_cta(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(MODAL_CTA_SELECTOR).ok().flatten())
        .is_some()
}
