use crate::dom::{self, DomNode};
use glam::Vec2;
use sponsor_core::pointer::PointerEffect;
use sponsor_core::registry::{Collection, ElementRegistry};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_effects(registry: &ElementRegistry<DomNode>) {
    for card in registry.all(Collection::TiltCards) {
        wire_effect(card, PointerEffect::Tilt);
    }
    for button in registry.all(Collection::MagneticButtons) {
        wire_effect(button, PointerEffect::Magnetic);
    }
}

fn wire_effect(node: &DomNode, effect: PointerEffect) {
    let on_move = node.clone();
    dom::listen(node.target(), "mousemove", move |ev| {
        if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
            let client = Vec2::new(mev.client_x() as f32, mev.client_y() as f32);
            effect.on_move(&on_move, client);
        }
    });
    let on_leave = node.clone();
    dom::listen(node.target(), "mouseleave", move |_| effect.on_leave(&on_leave));
}
