use crate::dom::{self, DomNode};
use gloo_timers::callback::Timeout;
use sponsor_core::registry::{Collection, ElementRegistry, Role};
use sponsor_core::scroll::{Hero, ScrollConfig, ScrollReactor};
use sponsor_core::throttle::Coalescer;
use sponsor_core::{REVEAL_SETTLE_DELAY_MS, SCROLL_COALESCE_DELAY_MS};
use std::rc::Rc;
use web_sys as web;

pub fn wire(window: &web::Window, registry: &ElementRegistry<DomNode>, config: ScrollConfig) {
    let reactor = Rc::new(ScrollReactor {
        config,
        navbar: registry.cloned(Role::Navbar),
        sections: registry.cloned_all(Collection::RevealSections),
        back_to_top: registry.cloned(Role::BackToTop),
        hero: registry.cloned(Role::Hero).map(|container| Hero {
            container,
            badges: registry.cloned_all(Collection::HeroBadges),
        }),
    });

    reactor.apply(dom::viewport());
    {
        let reactor = reactor.clone();
        Timeout::new(REVEAL_SETTLE_DELAY_MS, move || reactor.apply(dom::viewport())).forget();
    }

    let coalescer = Rc::new(Coalescer::new());
    dom::listen_passive(window.as_ref(), "scroll", move |_| {
        if !coalescer.request() {
            return;
        }
        let reactor = reactor.clone();
        let coalescer = coalescer.clone();
        Timeout::new(SCROLL_COALESCE_DELAY_MS, move || {
            let folded = coalescer.fire();
            log::trace!("[scroll] recompute ({} event(s))", folded);
            reactor.apply(dom::viewport());
        })
        .forget();
    });
}
