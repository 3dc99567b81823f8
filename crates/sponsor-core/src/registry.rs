//! Element registry: logical role -> element, built once at start-up.
//!
//! Controllers receive the elements they need from here instead of querying
//! the document ad hoc. The selectors returned by [`Role::selector`] and
//! [`Collection::selector`] are the markup contract. Elements addressed by a
//! derived id (disclosure panels, particle containers) are kept by that id.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Body,
    Navbar,
    NavToggle,
    NavMenu,
    BackToTop,
    Hero,
    Modal,
    ModalTitle,
    ModalPrice,
    ModalBody,
    ModalClose,
    ContactForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    RevealSections,
    Counters,
    HeroBadges,
    TiltCards,
    MagneticButtons,
    NavLinks,
    Anchors,
    PackageTriggers,
    BudgetTriggers,
    ComparisonTableTriggers,
    PacksTableTriggers,
    PackageDetailTriggers,
    MoreFeatureTriggers,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Body,
        Role::Navbar,
        Role::NavToggle,
        Role::NavMenu,
        Role::BackToTop,
        Role::Hero,
        Role::Modal,
        Role::ModalTitle,
        Role::ModalPrice,
        Role::ModalBody,
        Role::ModalClose,
        Role::ContactForm,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Role::Body => "body",
            Role::Navbar => "#navbar",
            Role::NavToggle => "#navToggle",
            Role::NavMenu => "#navMenu",
            Role::BackToTop => "#scrollTopBtn",
            Role::Hero => ".hero",
            Role::Modal => "#packageModal",
            Role::ModalTitle => "#modalTitle",
            Role::ModalPrice => "#modalPrice",
            Role::ModalBody => "#modalBody",
            Role::ModalClose => "#packageModal .modal-close",
            Role::ContactForm => "#contactForm",
        }
    }
}

impl Collection {
    pub const ALL: [Collection; 13] = [
        Collection::RevealSections,
        Collection::Counters,
        Collection::HeroBadges,
        Collection::TiltCards,
        Collection::MagneticButtons,
        Collection::NavLinks,
        Collection::Anchors,
        Collection::PackageTriggers,
        Collection::BudgetTriggers,
        Collection::ComparisonTableTriggers,
        Collection::PacksTableTriggers,
        Collection::PackageDetailTriggers,
        Collection::MoreFeatureTriggers,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Collection::RevealSections => "section",
            Collection::Counters => "[data-count]",
            Collection::HeroBadges => ".hero .hero-badge",
            Collection::TiltCards => ".about-card, .benefit-card, .pkg-card-vertical",
            Collection::MagneticButtons => ".btn-primary, .btn-sponsor",
            Collection::NavLinks => ".nav-link",
            Collection::Anchors => "a[href^=\"#\"]",
            Collection::PackageTriggers => "[data-package]",
            Collection::BudgetTriggers => "[data-budget]",
            Collection::ComparisonTableTriggers => "[data-comparison-table]",
            Collection::PacksTableTriggers => "[data-packs-table]",
            Collection::PackageDetailTriggers => "[data-pkg-details]",
            Collection::MoreFeatureTriggers => "[data-more-features]",
        }
    }
}

pub struct ElementRegistry<E> {
    singles: FnvHashMap<Role, E>,
    lists: FnvHashMap<Collection, Vec<E>>,
    by_id: FnvHashMap<String, E>,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            singles: FnvHashMap::default(),
            lists: FnvHashMap::default(),
            by_id: FnvHashMap::default(),
        }
    }
}

impl<E> ElementRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role, element: E) {
        self.singles.insert(role, element);
    }

    pub fn insert_all(&mut self, collection: Collection, elements: Vec<E>) {
        self.lists.insert(collection, elements);
    }

    pub fn insert_id(&mut self, id: impl Into<String>, element: E) {
        self.by_id.insert(id.into(), element);
    }

    pub fn get(&self, role: Role) -> Option<&E> {
        self.singles.get(&role)
    }

    pub fn all(&self, collection: Collection) -> &[E] {
        self.lists
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn by_id(&self, id: &str) -> Option<&E> {
        self.by_id.get(id)
    }

    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|r| !self.singles.contains_key(r))
            .collect()
    }
}

impl<E: Clone> ElementRegistry<E> {
    pub fn cloned(&self, role: Role) -> Option<E> {
        self.get(role).cloned()
    }

    pub fn cloned_id(&self, id: &str) -> Option<E> {
        self.by_id(id).cloned()
    }

    pub fn cloned_all(&self, collection: Collection) -> Vec<E> {
        self.all(collection).to_vec()
    }
}
