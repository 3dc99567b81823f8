// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use sponsor_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(NAVBAR_SCROLLED_THRESHOLD_PX > 0.0);
    // The navbar turns solid long before the back-to-top control appears.
    assert!(BACK_TO_TOP_THRESHOLD_PX > NAVBAR_SCROLLED_THRESHOLD_PX);
    assert!(REVEAL_VIEWPORT_RATIO > 0.0 && REVEAL_VIEWPORT_RATIO <= 1.0);
    assert!(SCROLL_COALESCE_DELAY_MS < REVEAL_SETTLE_DELAY_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_and_pointer_constants_are_positive() {
    assert!(COUNTER_DURATION_MS > 0);
    assert!(COUNTER_VISIBILITY_THRESHOLD > 0.0 && COUNTER_VISIBILITY_THRESHOLD <= 1.0);
    assert!(PARALLAX_BASE_SPEED > 0.0);
    assert!(PARALLAX_SPEED_STEP > 0.0);
    assert!(TILT_DIVISOR > 0.0);
    assert!(MAGNETIC_FACTOR > 0.0 && MAGNETIC_FACTOR < 1.0);
}

#[test]
fn markup_bindings() {
    assert_eq!(COUNT_ATTRIBUTE, "data-count");
    assert_eq!(PACKAGE_ATTRIBUTE, "data-package");
    assert_eq!(sponsor_core::modal::CLOSE_KEY, "Escape");
    assert!(MODAL_CTA_SELECTOR.starts_with('['));
    assert!(EMAILJS_SDK_URL.starts_with("https://"));
    assert!(!EMAILJS_SERVICE_ID.is_empty());
    assert!(!EMAILJS_TEMPLATE_ID.is_empty());
}
