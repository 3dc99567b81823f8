// Markup binding names and external service identifiers used by the web
// frontend. Controller tuning lives in `sponsor_core::constants`.

// Element attributes
pub const COUNT_ATTRIBUTE: &str = "data-count";
pub const PACKAGE_ATTRIBUTE: &str = "data-package";
pub const MODAL_CTA_SELECTOR: &str = "[data-modal-cta]";

// Optional globals probed before use
pub const PARTICLES_GLOBAL: &str = "particlesJS";
pub const REVEAL_LIBRARY_GLOBAL: &str = "AOS";
pub const EMAILJS_GLOBAL: &str = "emailjs";
pub const INTERSECTION_OBSERVER_GLOBAL: &str = "IntersectionObserver";

// EmailJS delivery
pub const EMAILJS_SDK_URL: &str = "https://cdn.jsdelivr.net/npm/emailjs-com@3/dist/email.min.js";
pub const EMAILJS_PUBLIC_KEY: &str = "JoFE_i3HTclvNYerV";
pub const EMAILJS_SERVICE_ID: &str = "service_kyp52bc";
pub const EMAILJS_TEMPLATE_ID: &str = "template_k5tvoch";
