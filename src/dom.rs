use sponsor_core::{Rect, Surface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`] but registered as passive, for scroll-frequency events.
pub fn listen_passive(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn when_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    listen(document.as_ref(), "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<DomNode> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .filter_map(DomNode::from_element)
        .collect()
}

pub fn query_one(root: &web::Document, selector: &str) -> Option<DomNode> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(DomNode::from_element)
}

pub fn by_id(root: &web::Document, id: &str) -> Option<DomNode> {
    root.get_element_by_id(id).and_then(DomNode::from_element)
}

pub fn viewport() -> sponsor_core::scroll::Viewport {
    let Some(w) = web::window() else {
        return Default::default();
    };
    sponsor_core::scroll::Viewport {
        scroll_y: w.scroll_y().unwrap_or(0.0),
        height: w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

/// Shared handle to one page element.
#[derive(Clone, Debug)]
pub struct DomNode(web::HtmlElement);

impl DomNode {
    pub fn from_element(el: web::Element) -> Option<Self> {
        el.dyn_into::<web::HtmlElement>().ok().map(Self)
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.0
    }

    pub fn target(&self) -> &web::EventTarget {
        self.0.as_ref()
    }

    pub fn is(&self, other: &wasm_bindgen::JsValue) -> bool {
        let me: &wasm_bindgen::JsValue = self.0.as_ref();
        me == other
    }

    /// Nearest ancestor (or self) matching `selector`.
    pub fn closest(&self, selector: &str) -> Option<DomNode> {
        self.0
            .closest(selector)
            .ok()
            .flatten()
            .and_then(DomNode::from_element)
    }

    /// Whether the event originated on this element itself, not a descendant.
    pub fn is_event_target(&self, ev: &web::Event) -> bool {
        ev.target().map(|t| self.is(t.as_ref())).unwrap_or(false)
    }
}

impl Surface for DomNode {
    fn add_class(&self, class: &str) {
        _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn style(&self, property: &str) -> String {
        self.0.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        _ = self.0.style().set_property(property, value);
    }

    fn remove_style(&self, property: &str) {
        _ = self.0.style().remove_property(property);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn scroll_height(&self) -> f64 {
        self.0.scroll_height() as f64
    }

    fn bounding_rect(&self) -> Rect {
        let r = self.0.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }
}
