use crate::constants::{COUNT_ATTRIBUTE, INTERSECTION_OBSERVER_GLOBAL};
use crate::dom::DomNode;
use instant::Instant;
use sponsor_core::counter::{CounterConfig, CounterProgress};
use sponsor_core::registry::{Collection, ElementRegistry};
use sponsor_core::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Counter = (DomNode, Rc<RefCell<CounterProgress>>);

pub fn wire(registry: &ElementRegistry<DomNode>, config: CounterConfig) {
    let counters: Rc<Vec<Counter>> = Rc::new(
        registry
            .all(Collection::Counters)
            .iter()
            .map(|node| {
                let raw = node.attribute(COUNT_ATTRIBUTE);
                let progress = CounterProgress::from_attribute(raw.as_deref(), &config);
                (node.clone(), Rc::new(RefCell::new(progress)))
            })
            .collect(),
    );
    if counters.is_empty() {
        return;
    }

    if !observer_supported() {
        log::info!("[counter] no IntersectionObserver; animating {} now", counters.len());
        for (node, progress) in counters.iter() {
            start(node.clone(), progress.clone());
        }
        return;
    }

    let observed = counters.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some((node, progress)) = observed.iter().find(|(n, _)| n.is(target.as_ref()))
                {
                    start(node.clone(), progress.clone());
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.visibility_threshold));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for (node, _) in counters.iter() {
                observer.observe(node.element());
            }
            callback.forget();
        }
        Err(e) => {
            log::warn!("[counter] observer error: {:?}; animating now", e);
            for (node, progress) in counters.iter() {
                start(node.clone(), progress.clone());
            }
        }
    }
}

fn observer_supported() -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    js_sys::Reflect::has(&w, &JsValue::from_str(INTERSECTION_OBSERVER_GLOBAL)).unwrap_or(false)
}

/// Drive one counter to completion, one step per animation frame. Repeat
/// triggers for a counter that already started are ignored.
fn start(node: DomNode, progress: Rc<RefCell<CounterProgress>>) {
    if !progress.borrow_mut().begin() {
        return;
    }
    log::debug!("[counter] start target={}", progress.borrow().target());
    let started = Instant::now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let more = {
            let mut p = progress.borrow_mut();
            let more = p.step(started.elapsed());
            node.set_text(&p.formatted());
            more
        };
        if more {
            request_frame(&tick_clone);
        } else {
            // Completed: release the closure so the cycle is broken.
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
