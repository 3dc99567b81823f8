#![cfg(target_arch = "wasm32")]
use sponsor_core::counter::CounterConfig;
use sponsor_core::scroll::ScrollConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod counters;
mod disclosure;
mod dom;
mod effects;
mod events;
mod modal;
mod nav;
mod registry;
mod scroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sponsor-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    dom::when_ready(&document, || {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Behaviors take their elements from here; only anchor targets are
    // resolved at click time.
    let registry = registry::build(&document);

    effects::init_reveal_library(&window);
    scroll::wire(&window, &registry, ScrollConfig::default());
    nav::wire(&document, &registry);
    counters::wire(&registry, CounterConfig::default());
    disclosure::wire_all(&registry);
    if let Some(modal) = modal::wire(&registry) {
        events::wire_close_key(&document, modal);
    }
    events::wire_pointer_effects(&registry);
    effects::init_particles(&window, &registry);

    // Non-fatal: logged only.
    if let Err(e) = contact::wire(&document, &registry) {
        log::error!("[contact] {:?}", e);
    }

    log::info!("sponsor-web interactions loaded");
    Ok(())
}
