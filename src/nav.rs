use crate::dom::{self, DomNode};
use sponsor_core::nav::{anchor_target, MobileNav};
use sponsor_core::registry::{Collection, ElementRegistry, Role};
use std::rc::Rc;
use web_sys as web;

pub fn wire(document: &web::Document, registry: &ElementRegistry<DomNode>) {
    wire_mobile_menu(registry);
    wire_anchors(document, registry);
    wire_back_to_top(registry);
}

fn wire_mobile_menu(registry: &ElementRegistry<DomNode>) {
    let Some(nav) = MobileNav::new(
        registry.cloned(Role::NavToggle),
        registry.cloned(Role::NavMenu),
    ) else {
        return;
    };
    let nav = Rc::new(nav);
    if let Some(toggle) = registry.get(Role::NavToggle) {
        let nav = nav.clone();
        dom::listen(toggle.target(), "click", move |_| nav.toggle());
    }
    for link in registry.all(Collection::NavLinks) {
        let nav = nav.clone();
        dom::listen(link.target(), "click", move |_| nav.close());
    }
}

fn wire_anchors(document: &web::Document, registry: &ElementRegistry<DomNode>) {
    for anchor in registry.all(Collection::Anchors) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(anchor.target(), "click", move |ev| {
            let href = link.element().get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            // Fragments that are not valid selectors fall through to the browser.
            let Ok(Some(target)) = doc.query_selector(selector) else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

fn wire_back_to_top(registry: &ElementRegistry<DomNode>) {
    let Some(btn) = registry.get(Role::BackToTop) else {
        return;
    };
    dom::listen(btn.target(), "click", |_| {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
}
