use crate::dom::DomNode;
use sponsor_core::disclosure::{DisclosureGroup, DisclosureKind};
use sponsor_core::registry::ElementRegistry;
use sponsor_core::Surface;
use std::rc::Rc;

/// Build one group per panel family from the registry and bind its triggers.
pub fn wire_all(registry: &ElementRegistry<DomNode>) {
    for kind in DisclosureKind::ALL {
        wire_kind(registry, kind);
    }
}

fn wire_kind(registry: &ElementRegistry<DomNode>, kind: DisclosureKind) {
    let group = DisclosureGroup::from_registry(kind, registry, DomNode::closest);
    if group.is_empty() {
        return;
    }

    log::info!("[disclosure] {:?}: {} panel(s)", group.kind(), group.len());
    let group = Rc::new(group);
    for trigger in registry.all(kind.triggers()) {
        let Some(id) = trigger.attribute(kind.trigger_attribute()) else {
            continue;
        };
        let group = group.clone();
        crate::dom::listen(trigger.target(), "click", move |_| group.toggle(&id));
    }
}
