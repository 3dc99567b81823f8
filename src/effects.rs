use crate::constants::{PARTICLES_GLOBAL, REVEAL_LIBRARY_GLOBAL};
use crate::dom::DomNode;
use serde::Serialize;
use sponsor_core::effects::{ParticlesConfig, RevealConfig, PARTICLE_CONTAINERS};
use sponsor_core::registry::ElementRegistry;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn global(window: &web::Window, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    match serde_wasm_bindgen::to_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("[effects] config conversion failed: {}", e);
            None
        }
    }
}

/// Initialise the scroll-reveal library if the page loaded it.
pub fn init_reveal_library(window: &web::Window) {
    let Some(lib) = global(window, REVEAL_LIBRARY_GLOBAL) else {
        log::info!("[effects] {} not present; skipping", REVEAL_LIBRARY_GLOBAL);
        return;
    };
    let Some(init) = js_sys::Reflect::get(&lib, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        return;
    };
    if let Some(cfg) = to_js(&RevealConfig::default()) {
        if let Err(e) = init.call1(&lib, &cfg) {
            log::warn!("[effects] {}.init failed: {:?}", REVEAL_LIBRARY_GLOBAL, e);
        }
    }
}

/// Start the particle background in every container present on the page.
pub fn init_particles(window: &web::Window, registry: &ElementRegistry<DomNode>) {
    let Some(particles) = global(window, PARTICLES_GLOBAL)
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
    else {
        log::info!("[effects] {} not present; skipping", PARTICLES_GLOBAL);
        return;
    };
    let Some(cfg) = to_js(&ParticlesConfig::default()) else {
        return;
    };
    for id in PARTICLE_CONTAINERS {
        if registry.by_id(id).is_none() {
            continue;
        }
        if let Err(e) = particles.call2(&JsValue::NULL, &JsValue::from_str(id), &cfg) {
            log::warn!("[effects] particles on #{} failed: {:?}", id, e);
        }
    }
}
