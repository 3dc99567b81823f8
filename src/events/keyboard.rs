use crate::modal::Modal;
use sponsor_core::modal::CloseTrigger;
use wasm_bindgen::JsCast;
use web_sys as web;

// The close key dismisses the package modal whether or not it is showing.
pub fn wire_close_key(document: &web::Document, modal: Modal) {
    crate::dom::listen(document.as_ref(), "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            modal.dismiss(CloseTrigger::from_key(&kev.key()));
        }
    });
}
