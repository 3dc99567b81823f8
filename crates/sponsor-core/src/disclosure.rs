//! Expand/collapse panels grouped by mutual exclusion.
//!
//! Open state lives on the elements themselves (an `active` class or a
//! non-zero `max-height`); the controller only knows which element belongs to
//! which panel.

use crate::constants::ACTIVE_CLASS;
use crate::registry::{Collection, ElementRegistry};
use crate::surface::Surface;
use fnv::FnvHashMap;

const CHEVRON_UP: &str = "fa-chevron-up";
const CHEVRON_DOWN: &str = "fa-chevron-down";
const COLLAPSED_HEIGHT: &str = "0px";

/// The five panel families present on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureKind {
    Budget,
    ComparisonTable,
    PacksTable,
    PackageDetails,
    MoreFeatures,
}

/// How a panel shows that it is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Class,
    MeasuredHeight,
    ClassAndHeight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// Swap `fa-chevron-down` for `fa-chevron-up`.
    Chevron,
    /// Rotate the icon 180 degrees while open.
    Rotate,
    /// Toggle `active` on the indicator.
    ActiveClass,
    /// Toggle `active` and replace the label markup.
    ActiveLabel {
        open: &'static str,
        closed: &'static str,
    },
}

/// Where the indicator for a panel is found in markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndicatorTarget {
    ById(String),
    /// Closest ancestor matching `selector` of the element with `id`.
    ClosestOf { id: String, selector: &'static str },
    /// The trigger element itself.
    Trigger,
}

impl IndicatorTarget {
    /// Id of the element to resolve, if the indicator is not the trigger.
    pub fn element_id(&self) -> Option<&str> {
        match self {
            IndicatorTarget::ById(id) | IndicatorTarget::ClosestOf { id, .. } => Some(id),
            IndicatorTarget::Trigger => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exclusivity {
    Exclusive,
    Independent,
}

impl DisclosureKind {
    pub const ALL: [DisclosureKind; 5] = [
        DisclosureKind::Budget,
        DisclosureKind::ComparisonTable,
        DisclosureKind::PacksTable,
        DisclosureKind::PackageDetails,
        DisclosureKind::MoreFeatures,
    ];

    /// Attribute carried by trigger elements; its value is the panel id.
    pub fn trigger_attribute(self) -> &'static str {
        match self {
            DisclosureKind::Budget => "data-budget",
            DisclosureKind::ComparisonTable => "data-comparison-table",
            DisclosureKind::PacksTable => "data-packs-table",
            DisclosureKind::PackageDetails => "data-pkg-details",
            DisclosureKind::MoreFeatures => "data-more-features",
        }
    }

    /// Registry collection holding this family's triggers.
    pub fn triggers(self) -> Collection {
        match self {
            DisclosureKind::Budget => Collection::BudgetTriggers,
            DisclosureKind::ComparisonTable => Collection::ComparisonTableTriggers,
            DisclosureKind::PacksTable => Collection::PacksTableTriggers,
            DisclosureKind::PackageDetails => Collection::PackageDetailTriggers,
            DisclosureKind::MoreFeatures => Collection::MoreFeatureTriggers,
        }
    }

    pub fn content_id(self, panel_id: &str) -> String {
        match self {
            DisclosureKind::Budget => format!("{panel_id}-content"),
            DisclosureKind::ComparisonTable => "comparison-table-content".to_string(),
            DisclosureKind::PacksTable => "packs-table-content".to_string(),
            DisclosureKind::PackageDetails => format!("details-{panel_id}"),
            DisclosureKind::MoreFeatures => format!("more-{panel_id}"),
        }
    }

    pub fn indicator(self, panel_id: &str) -> IndicatorTarget {
        match self {
            DisclosureKind::Budget => IndicatorTarget::ById(format!("{panel_id}-icon")),
            DisclosureKind::ComparisonTable => IndicatorTarget::ById("table-icon".to_string()),
            DisclosureKind::PacksTable => IndicatorTarget::ById("packs-icon".to_string()),
            DisclosureKind::PackageDetails => IndicatorTarget::ClosestOf {
                id: format!("icon-{panel_id}"),
                selector: ".pkg-expand-btn",
            },
            DisclosureKind::MoreFeatures => IndicatorTarget::Trigger,
        }
    }

    pub fn affordance(self) -> Affordance {
        match self {
            DisclosureKind::Budget | DisclosureKind::MoreFeatures => Affordance::Class,
            DisclosureKind::ComparisonTable | DisclosureKind::PacksTable => {
                Affordance::MeasuredHeight
            }
            DisclosureKind::PackageDetails => Affordance::ClassAndHeight,
        }
    }

    pub fn indicator_style(self) -> IndicatorStyle {
        match self {
            DisclosureKind::Budget | DisclosureKind::ComparisonTable => IndicatorStyle::Chevron,
            DisclosureKind::PacksTable => IndicatorStyle::Rotate,
            DisclosureKind::PackageDetails => IndicatorStyle::ActiveClass,
            DisclosureKind::MoreFeatures => IndicatorStyle::ActiveLabel {
                open: "<span>Voir moins</span> <i class=\"fas fa-chevron-up\"></i>",
                closed: "<span>Voir plus</span> <i class=\"fas fa-chevron-down\"></i>",
            },
        }
    }

    pub fn exclusivity(self) -> Exclusivity {
        match self {
            DisclosureKind::Budget | DisclosureKind::PackageDetails => Exclusivity::Exclusive,
            // Single-panel groups never have siblings to close.
            DisclosureKind::ComparisonTable
            | DisclosureKind::PacksTable
            | DisclosureKind::MoreFeatures => Exclusivity::Independent,
        }
    }
}

pub struct Panel<E> {
    pub id: String,
    pub content: E,
    pub indicator: Option<E>,
}

impl<E> Panel<E> {
    pub fn new(id: impl Into<String>, content: E, indicator: Option<E>) -> Self {
        Self {
            id: id.into(),
            content,
            indicator,
        }
    }
}

pub struct DisclosureGroup<E> {
    kind: DisclosureKind,
    panels: Vec<Panel<E>>,
    index: FnvHashMap<String, usize>,
}

impl<E: Surface> DisclosureGroup<E> {
    pub fn new(kind: DisclosureKind) -> Self {
        Self {
            kind,
            panels: Vec::new(),
            index: FnvHashMap::default(),
        }
    }

    pub fn kind(&self) -> DisclosureKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Registers a panel; a second panel with the same id replaces the first.
    pub fn add(&mut self, panel: Panel<E>) {
        match self.index.get(&panel.id) {
            Some(&i) => self.panels[i] = panel,
            None => {
                self.index.insert(panel.id.clone(), self.panels.len());
                self.panels.push(panel);
            }
        }
    }

    pub fn is_open(&self, panel_id: &str) -> bool {
        self.panel(panel_id).map(|p| self.panel_open(p)).unwrap_or(false)
    }

    pub fn open_ids(&self) -> Vec<&str> {
        self.panels
            .iter()
            .filter(|p| self.panel_open(p))
            .map(|p| p.id.as_str())
            .collect()
    }

    /// Close the panel if open; otherwise close its exclusive siblings and
    /// open it. Unknown ids are ignored.
    pub fn toggle(&self, panel_id: &str) {
        let Some(target) = self.panel(panel_id) else {
            log::debug!("[disclosure] {:?}: no panel `{}`", self.kind, panel_id);
            return;
        };
        if self.panel_open(target) {
            self.close(target);
            return;
        }
        if self.kind.exclusivity() == Exclusivity::Exclusive {
            for other in self.panels.iter().filter(|p| p.id != target.id) {
                self.close(other);
            }
        }
        self.open(target);
    }

    pub fn close_all(&self) {
        for p in &self.panels {
            self.close(p);
        }
    }

    fn panel(&self, panel_id: &str) -> Option<&Panel<E>> {
        self.index.get(panel_id).map(|&i| &self.panels[i])
    }

    fn panel_open(&self, panel: &Panel<E>) -> bool {
        match self.kind.affordance() {
            Affordance::Class | Affordance::ClassAndHeight => panel.content.has_class(ACTIVE_CLASS),
            Affordance::MeasuredHeight => {
                let h = panel.content.style("max-height");
                !h.is_empty() && h != COLLAPSED_HEIGHT && h != "0"
            }
        }
    }

    fn open(&self, panel: &Panel<E>) {
        let content = &panel.content;
        match self.kind.affordance() {
            Affordance::Class => content.add_class(ACTIVE_CLASS),
            Affordance::MeasuredHeight => expand_to_natural_height(content),
            Affordance::ClassAndHeight => {
                content.add_class(ACTIVE_CLASS);
                expand_to_natural_height(content);
            }
        }
        if let Some(ind) = &panel.indicator {
            show_indicator(ind, self.kind.indicator_style(), true);
        }
    }

    fn close(&self, panel: &Panel<E>) {
        let content = &panel.content;
        match self.kind.affordance() {
            Affordance::Class => content.remove_class(ACTIVE_CLASS),
            Affordance::MeasuredHeight => content.set_style("max-height", COLLAPSED_HEIGHT),
            Affordance::ClassAndHeight => {
                content.remove_class(ACTIVE_CLASS);
                content.set_style("max-height", COLLAPSED_HEIGHT);
            }
        }
        if let Some(ind) = &panel.indicator {
            show_indicator(ind, self.kind.indicator_style(), false);
        }
    }
}

impl<E: Surface + Clone> DisclosureGroup<E> {
    /// Assemble the group for `kind` from its registered triggers. Content and
    /// indicators are looked up by their derived ids; `ancestor` resolves
    /// [`IndicatorTarget::ClosestOf`] from the registered element. Triggers
    /// whose content is not registered are skipped.
    pub fn from_registry(
        kind: DisclosureKind,
        registry: &ElementRegistry<E>,
        ancestor: impl Fn(&E, &'static str) -> Option<E>,
    ) -> Self {
        let mut group = Self::new(kind);
        for trigger in registry.all(kind.triggers()) {
            let id = trigger.attribute(kind.trigger_attribute()).unwrap_or_default();
            let Some(content) = registry.cloned_id(&kind.content_id(&id)) else {
                log::debug!("[disclosure] {:?}: no content for `{}`", kind, id);
                continue;
            };
            let indicator = match kind.indicator(&id) {
                IndicatorTarget::ById(icon) => registry.cloned_id(&icon),
                IndicatorTarget::ClosestOf { id: icon, selector } => registry
                    .by_id(&icon)
                    .map(|el| ancestor(el, selector).unwrap_or_else(|| el.clone())),
                IndicatorTarget::Trigger => Some(trigger.clone()),
            };
            group.add(Panel::new(id, content, indicator));
        }
        group
    }
}

#[inline]
fn expand_to_natural_height<E: Surface>(content: &E) {
    let h = content.scroll_height().max(0.0);
    content.set_style("max-height", &format!("{h}px"));
}

fn show_indicator<E: Surface>(indicator: &E, style: IndicatorStyle, open: bool) {
    match style {
        IndicatorStyle::Chevron => {
            indicator.set_class(CHEVRON_UP, open);
            indicator.set_class(CHEVRON_DOWN, !open);
        }
        IndicatorStyle::Rotate => {
            let angle = if open { 180 } else { 0 };
            indicator.set_style("transform", &format!("rotate({angle}deg)"));
        }
        IndicatorStyle::ActiveClass => indicator.set_class(ACTIVE_CLASS, open),
        IndicatorStyle::ActiveLabel {
            open: open_html,
            closed: closed_html,
        } => {
            indicator.set_class(ACTIVE_CLASS, open);
            indicator.set_html(if open { open_html } else { closed_html });
        }
    }
}
