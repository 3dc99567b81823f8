use crate::dom::{self, DomNode};
use sponsor_core::disclosure::DisclosureKind;
use sponsor_core::effects::PARTICLE_CONTAINERS;
use sponsor_core::registry::{Collection, ElementRegistry, Role};
use sponsor_core::Surface;
use web_sys as web;

/// Resolve every role and collection once. Later lookups never touch the
/// document.
pub fn build(document: &web::Document) -> ElementRegistry<DomNode> {
    let mut registry = ElementRegistry::new();
    for role in Role::ALL {
        let found = match role {
            Role::Body => document.body().and_then(|b| DomNode::from_element(b.into())),
            _ => dom::query_one(document, role.selector()),
        };
        if let Some(node) = found {
            registry.insert(role, node);
        }
    }
    for collection in Collection::ALL {
        registry.insert_all(collection, dom::query_all(document, collection.selector()));
    }
    register_disclosure_ids(document, &mut registry);
    for id in PARTICLE_CONTAINERS {
        register_id(document, &mut registry, id);
    }
    let missing = registry.missing_roles();
    if !missing.is_empty() {
        log::debug!("[registry] absent roles: {:?}", missing);
    }
    log::info!(
        "[registry] sections={} counters={} cards={} buttons={}",
        registry.all(Collection::RevealSections).len(),
        registry.all(Collection::Counters).len(),
        registry.all(Collection::TiltCards).len(),
        registry.all(Collection::MagneticButtons).len()
    );
    registry
}

/// Panel content and indicator ids are derived from each trigger's attribute.
fn register_disclosure_ids(document: &web::Document, registry: &mut ElementRegistry<DomNode>) {
    for kind in DisclosureKind::ALL {
        let ids: Vec<String> = registry
            .all(kind.triggers())
            .iter()
            .filter_map(|t| t.attribute(kind.trigger_attribute()))
            .flat_map(|id| {
                let indicator = kind.indicator(&id);
                std::iter::once(kind.content_id(&id))
                    .chain(indicator.element_id().map(str::to_string))
            })
            .collect();
        for id in ids {
            register_id(document, registry, &id);
        }
    }
}

fn register_id(document: &web::Document, registry: &mut ElementRegistry<DomNode>, id: &str) {
    if let Some(node) = dom::by_id(document, id) {
        registry.insert_id(id, node);
    }
}
