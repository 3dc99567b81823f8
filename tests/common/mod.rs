// In-memory stand-in for a DOM element, shared by the host tests.

#![allow(dead_code)]
use sponsor_core::{Rect, Surface};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Default, Debug)]
pub struct FakeState {
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub html: String,
    pub scroll_height: f64,
    pub rect: Rect,
}

#[derive(Clone, Default, Debug)]
pub struct FakeNode(pub Rc<RefCell<FakeState>>);

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: &[&str]) -> Self {
        let node = Self::new();
        for c in classes {
            node.add_class(c);
        }
        node
    }

    pub fn with_scroll_height(h: f64) -> Self {
        let node = Self::new();
        node.0.borrow_mut().scroll_height = h;
        node
    }

    pub fn with_rect(rect: Rect) -> Self {
        let node = Self::new();
        node.0.borrow_mut().rect = rect;
        node
    }

    pub fn with_attribute(name: &str, value: &str) -> Self {
        let node = Self::new();
        node.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        node
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.borrow_mut().rect = rect;
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn html(&self) -> String {
        self.0.borrow().html.clone()
    }
}

impl Surface for FakeNode {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn style(&self, property: &str) -> String {
        self.0
            .borrow()
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, property: &str) {
        self.0.borrow_mut().styles.remove(property);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_html(&self, html: &str) {
        self.0.borrow_mut().html = html.to_string();
    }

    fn scroll_height(&self) -> f64 {
        self.0.borrow().scroll_height
    }

    fn bounding_rect(&self) -> Rect {
        self.0.borrow().rect
    }
}
