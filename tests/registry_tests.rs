// Host-side tests for the element registry.

mod common;

use common::FakeNode;
use sponsor_core::registry::{Collection, ElementRegistry, Role};
use sponsor_core::Surface;

#[test]
fn absent_roles_are_none_and_collections_default_empty() {
    let reg: ElementRegistry<FakeNode> = ElementRegistry::new();
    assert!(reg.get(Role::Navbar).is_none());
    assert!(reg.all(Collection::Counters).is_empty());
    assert_eq!(reg.missing_roles().len(), Role::ALL.len());
}

#[test]
fn lookups_return_registered_elements() {
    let mut reg = ElementRegistry::new();
    let nav = FakeNode::with_classes(&["navbar"]);
    reg.insert(Role::Navbar, nav.clone());
    reg.insert_all(
        Collection::Counters,
        vec![
            FakeNode::with_attribute("data-count", "120"),
            FakeNode::with_attribute("data-count", "45"),
        ],
    );

    assert!(reg.get(Role::Navbar).unwrap().has_class("navbar"));
    let counters = reg.cloned_all(Collection::Counters);
    assert_eq!(counters.len(), 2);
    assert_eq!(counters[1].attribute("data-count").as_deref(), Some("45"));
    assert!(!reg.missing_roles().contains(&Role::Navbar));
}

#[test]
fn selectors_match_page_markup() {
    assert_eq!(Role::Navbar.selector(), "#navbar");
    assert_eq!(Role::NavToggle.selector(), "#navToggle");
    assert_eq!(Role::NavMenu.selector(), "#navMenu");
    assert_eq!(Role::BackToTop.selector(), "#scrollTopBtn");
    assert_eq!(Role::Modal.selector(), "#packageModal");
    assert_eq!(Role::ContactForm.selector(), "#contactForm");
    assert_eq!(Collection::Counters.selector(), "[data-count]");
    assert_eq!(Collection::NavLinks.selector(), ".nav-link");
}

#[test]
fn every_role_and_collection_has_a_selector() {
    for role in Role::ALL {
        assert!(!role.selector().is_empty(), "{role:?}");
    }
    for c in Collection::ALL {
        assert!(!c.selector().is_empty(), "{c:?}");
    }
}

#[test]
fn id_lookups_are_separate_from_roles() {
    let mut reg = ElementRegistry::new();
    assert!(reg.by_id("venue-content").is_none());

    reg.insert_id("venue-content", FakeNode::with_classes(&["budget-content"]));
    reg.insert_id("particles-hero", FakeNode::new());
    assert!(reg.by_id("venue-content").unwrap().has_class("budget-content"));
    assert!(reg.cloned_id("particles-hero").is_some());
    assert!(reg.by_id("venue").is_none());
    assert_eq!(reg.missing_roles().len(), Role::ALL.len());
}
