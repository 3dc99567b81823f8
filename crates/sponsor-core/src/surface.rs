//! Element handle abstraction used by every controller.
//!
//! The browser frontend implements [`Surface`] for a thin wrapper around
//! `web_sys::HtmlElement`; tests implement it for an in-memory fake. All
//! methods take `&self` because the underlying document is shared and
//! interior-mutable.

/// Viewport-relative box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

pub trait Surface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Inline style property; empty string when unset.
    fn style(&self, property: &str) -> String;
    fn set_style(&self, property: &str, value: &str);
    fn remove_style(&self, property: &str);

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_html(&self, html: &str);

    /// Natural content height, including overflowed content.
    fn scroll_height(&self) -> f64;
    fn bounding_rect(&self) -> Rect;

    #[inline]
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}
