// Host-side tests for disclosure panels against an in-memory document.

mod common;

use common::FakeNode;
use sponsor_core::disclosure::{DisclosureGroup, DisclosureKind, IndicatorTarget, Panel};
use sponsor_core::registry::{Collection, ElementRegistry};
use sponsor_core::Surface;

fn budget_group(ids: &[&str]) -> (DisclosureGroup<FakeNode>, Vec<(FakeNode, FakeNode)>) {
    let mut group = DisclosureGroup::new(DisclosureKind::Budget);
    let mut nodes = Vec::new();
    for id in ids {
        let content = FakeNode::with_classes(&["budget-content"]);
        let icon = FakeNode::with_classes(&["fas", "fa-chevron-down"]);
        group.add(Panel::new(*id, content.clone(), Some(icon.clone())));
        nodes.push((content, icon));
    }
    (group, nodes)
}

#[test]
fn opening_sibling_closes_open_panel() {
    let (group, nodes) = budget_group(&["logistics", "catering"]);

    group.toggle("logistics");
    assert!(group.is_open("logistics"));

    group.toggle("catering");
    assert!(!group.is_open("logistics"));
    assert!(group.is_open("catering"));
    assert!(!nodes[0].0.has_class("active"));
    assert!(nodes[1].0.has_class("active"));
}

#[test]
fn toggling_open_panel_closes_it() {
    let (group, _) = budget_group(&["logistics"]);
    group.toggle("logistics");
    group.toggle("logistics");
    assert!(!group.is_open("logistics"));
    assert!(group.open_ids().is_empty());
}

#[test]
fn at_most_one_open_in_exclusive_group() {
    let (group, _) = budget_group(&["a", "b", "c", "d"]);
    for id in ["a", "c", "b", "d", "d", "a", "b"] {
        group.toggle(id);
        assert!(group.open_ids().len() <= 1, "after toggling {id}");
    }
}

#[test]
fn chevron_follows_open_state() {
    let (group, nodes) = budget_group(&["a", "b"]);
    group.toggle("a");
    assert!(nodes[0].1.has_class("fa-chevron-up"));
    assert!(!nodes[0].1.has_class("fa-chevron-down"));

    group.toggle("b");
    assert!(nodes[0].1.has_class("fa-chevron-down"));
    assert!(!nodes[0].1.has_class("fa-chevron-up"));
    assert!(nodes[1].1.has_class("fa-chevron-up"));
}

#[test]
fn unknown_panel_is_a_no_op() {
    let (group, nodes) = budget_group(&["a"]);
    group.toggle("a");
    group.toggle("missing");
    assert!(group.is_open("a"));
    assert!(nodes[0].0.has_class("active"));
}

#[test]
fn measured_panel_opens_to_natural_height_and_collapses_to_zero() {
    let mut group = DisclosureGroup::new(DisclosureKind::ComparisonTable);
    let content = FakeNode::with_scroll_height(320.0);
    let icon = FakeNode::with_classes(&["fa-chevron-down"]);
    group.add(Panel::new("", content.clone(), Some(icon.clone())));

    assert!(!group.is_open(""));
    group.toggle("");
    assert_eq!(content.style("max-height"), "320px");
    assert!(icon.has_class("fa-chevron-up"));

    group.toggle("");
    assert_eq!(content.style("max-height"), "0px");
    assert!(!group.is_open(""));
    assert!(icon.has_class("fa-chevron-down"));
}

#[test]
fn packs_table_rotates_icon() {
    let mut group = DisclosureGroup::new(DisclosureKind::PacksTable);
    let content = FakeNode::with_scroll_height(500.0);
    let icon = FakeNode::new();
    group.add(Panel::new("", content.clone(), Some(icon.clone())));

    group.toggle("");
    assert_eq!(icon.style("transform"), "rotate(180deg)");
    group.toggle("");
    assert_eq!(icon.style("transform"), "rotate(0deg)");
}

#[test]
fn package_details_use_class_and_height_exclusively() {
    let mut group = DisclosureGroup::new(DisclosureKind::PackageDetails);
    let gold = FakeNode::with_scroll_height(210.0);
    let silver = FakeNode::with_scroll_height(180.0);
    let gold_btn = FakeNode::new();
    let silver_btn = FakeNode::new();
    group.add(Panel::new("gold", gold.clone(), Some(gold_btn.clone())));
    group.add(Panel::new("silver", silver.clone(), Some(silver_btn.clone())));

    group.toggle("gold");
    assert!(gold.has_class("active"));
    assert_eq!(gold.style("max-height"), "210px");
    assert!(gold_btn.has_class("active"));

    group.toggle("silver");
    assert!(!gold.has_class("active"));
    assert_eq!(gold.style("max-height"), "0px");
    assert!(!gold_btn.has_class("active"));
    assert_eq!(silver.style("max-height"), "180px");
    assert!(silver_btn.has_class("active"));
}

#[test]
fn more_features_panels_are_independent() {
    let mut group = DisclosureGroup::new(DisclosureKind::MoreFeatures);
    let bronze = FakeNode::new();
    let gold = FakeNode::new();
    let bronze_btn = FakeNode::new();
    group.add(Panel::new("bronze", bronze.clone(), Some(bronze_btn.clone())));
    group.add(Panel::new("gold", gold.clone(), None));

    group.toggle("bronze");
    group.toggle("gold");
    assert!(group.is_open("bronze"));
    assert!(group.is_open("gold"));
    assert!(bronze_btn.html().contains("Voir moins"));
    assert!(bronze_btn.has_class("active"));

    group.toggle("bronze");
    assert!(bronze_btn.html().contains("Voir plus"));
    assert!(!bronze_btn.has_class("active"));
    assert!(group.is_open("gold"));
}

#[test]
fn markup_contract_for_each_kind() {
    assert_eq!(DisclosureKind::Budget.content_id("venue"), "venue-content");
    assert_eq!(
        DisclosureKind::Budget.indicator("venue"),
        IndicatorTarget::ById("venue-icon".to_string())
    );
    assert_eq!(
        DisclosureKind::ComparisonTable.content_id(""),
        "comparison-table-content"
    );
    assert_eq!(DisclosureKind::PacksTable.content_id(""), "packs-table-content");
    assert_eq!(DisclosureKind::PackageDetails.content_id("gold"), "details-gold");
    assert_eq!(
        DisclosureKind::PackageDetails.indicator("gold"),
        IndicatorTarget::ClosestOf {
            id: "icon-gold".to_string(),
            selector: ".pkg-expand-btn"
        }
    );
    assert_eq!(DisclosureKind::MoreFeatures.content_id("gold"), "more-gold");
    assert_eq!(DisclosureKind::MoreFeatures.indicator("gold"), IndicatorTarget::Trigger);
}

#[test]
fn close_all_collapses_every_panel() {
    let mut group = DisclosureGroup::new(DisclosureKind::MoreFeatures);
    let bronze = FakeNode::new();
    let gold = FakeNode::new();
    group.add(Panel::new("bronze", bronze.clone(), None));
    group.add(Panel::new("gold", gold.clone(), None));
    group.toggle("bronze");
    group.toggle("gold");
    assert_eq!(group.open_ids().len(), 2);

    group.close_all();
    assert!(group.open_ids().is_empty());
    assert!(!bronze.has_class("active"));
    assert!(!gold.has_class("active"));
}

#[test]
fn group_is_assembled_from_registered_triggers() {
    let mut reg = ElementRegistry::new();
    reg.insert_all(
        Collection::BudgetTriggers,
        vec![
            FakeNode::with_attribute("data-budget", "venue"),
            FakeNode::with_attribute("data-budget", "catering"),
            // No content registered for this one.
            FakeNode::with_attribute("data-budget", "ghost"),
        ],
    );
    let venue = FakeNode::new();
    let venue_icon = FakeNode::with_classes(&["fa-chevron-down"]);
    reg.insert_id("venue-content", venue.clone());
    reg.insert_id("venue-icon", venue_icon.clone());
    reg.insert_id("catering-content", FakeNode::new());

    let group = DisclosureGroup::from_registry(DisclosureKind::Budget, &reg, |_, _| None);
    assert_eq!(group.kind(), DisclosureKind::Budget);
    assert_eq!(group.len(), 2);

    group.toggle("venue");
    assert!(venue.has_class("active"));
    assert!(venue_icon.has_class("fa-chevron-up"));
    group.toggle("ghost");
    assert_eq!(group.open_ids(), vec!["venue"]);
}

#[test]
fn package_detail_indicator_resolves_to_ancestor_or_icon() {
    let mut reg = ElementRegistry::new();
    reg.insert_all(
        Collection::PackageDetailTriggers,
        vec![
            FakeNode::with_attribute("data-pkg-details", "gold"),
            FakeNode::with_attribute("data-pkg-details", "silver"),
        ],
    );
    let button = FakeNode::new();
    let silver_icon = FakeNode::new();
    reg.insert_id("details-gold", FakeNode::new());
    reg.insert_id("icon-gold", FakeNode::with_attribute("data-has-button", "yes"));
    reg.insert_id("details-silver", FakeNode::new());
    reg.insert_id("icon-silver", silver_icon.clone());

    let found = button.clone();
    let group = DisclosureGroup::from_registry(
        DisclosureKind::PackageDetails,
        &reg,
        move |icon: &FakeNode, selector| {
            assert_eq!(selector, ".pkg-expand-btn");
            icon.attribute("data-has-button").map(|_| found.clone())
        },
    );

    group.toggle("gold");
    assert!(button.has_class("active"));
    group.toggle("silver");
    assert!(!button.has_class("active"));
    assert!(silver_icon.has_class("active"));
}

#[test]
fn more_features_trigger_is_its_own_indicator() {
    let mut reg = ElementRegistry::new();
    let trigger = FakeNode::with_attribute("data-more-features", "bronze");
    reg.insert_all(Collection::MoreFeatureTriggers, vec![trigger.clone()]);
    reg.insert_id("more-bronze", FakeNode::new());

    let group = DisclosureGroup::from_registry(DisclosureKind::MoreFeatures, &reg, |_, _| None);
    group.toggle("bronze");
    assert!(trigger.has_class("active"));
    assert!(trigger.html().contains("Voir moins"));
}

#[test]
fn each_kind_reads_triggers_by_its_attribute() {
    for kind in DisclosureKind::ALL {
        assert_eq!(
            kind.triggers().selector(),
            format!("[{}]", kind.trigger_attribute()),
            "{kind:?}"
        );
    }
    assert_eq!(DisclosureKind::Budget.indicator("venue").element_id(), Some("venue-icon"));
    assert_eq!(DisclosureKind::MoreFeatures.indicator("x").element_id(), None);
}
