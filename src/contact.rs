use crate::constants::{
    EMAILJS_GLOBAL, EMAILJS_PUBLIC_KEY, EMAILJS_SDK_URL, EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID,
};
use crate::dom::{self, DomNode};
use serde::Serialize;
use sponsor_core::contact::{self, FormFields, FormView, Mailer};
use sponsor_core::registry::{ElementRegistry, Role};
use sponsor_core::DeliveryError;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Sends the form through the EmailJS SDK loaded on the page.
pub struct EmailJsMailer {
    service_id: &'static str,
    template_id: &'static str,
}

impl Default for EmailJsMailer {
    fn default() -> Self {
        Self {
            service_id: EMAILJS_SERVICE_ID,
            template_id: EMAILJS_TEMPLATE_ID,
        }
    }
}

impl Mailer for EmailJsMailer {
    async fn send(&self, fields: &FormFields) -> Result<(), DeliveryError> {
        let sdk = sdk_object().ok_or_else(|| DeliveryError::Unavailable("sdk not loaded".into()))?;
        let send = sdk_function(&sdk, "send")
            .ok_or_else(|| DeliveryError::Unavailable("emailjs.send missing".into()))?;
        let params = fields
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| DeliveryError::Rejected(e.to_string()))?;
        let promise = send
            .call3(
                &sdk,
                &JsValue::from_str(self.service_id),
                &JsValue::from_str(self.template_id),
                &params,
            )
            .map_err(|e| DeliveryError::Rejected(format!("{:?}", e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|e| DeliveryError::Rejected(format!("{:?}", e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError::Rejected(format!("{:?}", e)))
    }
}

pub struct BrowserForm {
    form: web::HtmlFormElement,
}

impl FormView for BrowserForm {
    fn fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        let Ok(data) = web::FormData::new_with_form(&self.form) else {
            return fields;
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return fields;
        };
        for entry in entries.flatten() {
            let pair: js_sys::Array = entry.unchecked_into();
            // File inputs yield non-string values; they are not forwarded.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(name, value);
            }
        }
        fields
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn notify(&self, message: &str) {
        if let Some(w) = web::window() {
            _ = w.alert_with_message(message);
        }
    }
}

fn sdk_object() -> Option<JsValue> {
    let w = web::window()?;
    js_sys::Reflect::get(&w, &JsValue::from_str(EMAILJS_GLOBAL))
        .ok()
        .filter(|v| v.is_object())
}

fn sdk_function(sdk: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(sdk, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

/// Load the SDK, then take over submission of the contact form.
pub fn wire(document: &web::Document, registry: &ElementRegistry<DomNode>) -> anyhow::Result<()> {
    let Some(node) = registry.get(Role::ContactForm) else {
        return Ok(());
    };
    let form = node
        .element()
        .clone()
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!("#contactForm is not a form: {:?}", e))?;

    let script = document
        .create_element("script")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlScriptElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    script.set_src(EMAILJS_SDK_URL);

    let view = Rc::new(BrowserForm { form: form.clone() });
    let on_load = Closure::once(move || {
        let Some(sdk) = sdk_object() else {
            log::error!("[contact] sdk loaded without a global");
            return;
        };
        if let Some(init) = sdk_function(&sdk, "init") {
            if let Err(e) = init.call1(&sdk, &JsValue::from_str(EMAILJS_PUBLIC_KEY)) {
                log::error!("[contact] sdk init failed: {:?}", e);
                return;
            }
        }
        let mailer = Rc::new(EmailJsMailer::default());
        dom::listen(form.as_ref(), "submit", move |ev| {
            ev.prevent_default();
            let mailer = mailer.clone();
            let view = view.clone();
            spawn_local(async move {
                _ = contact::submit(&*mailer, &*view).await;
            });
        });
        log::info!("[contact] form ready");
    });
    script.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&script)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
