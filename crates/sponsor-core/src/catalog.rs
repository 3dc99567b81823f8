//! Static sponsorship package catalog.
//!
//! Package identifiers form a closed enum so an unknown id can never reach the
//! modal; markup strings are parsed once, at the wiring boundary.

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PackageId {
    Bronze,
    Silver,
    Gold,
    Exclusive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub text: &'static str,
    pub included: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Package {
    pub id: PackageId,
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [Feature],
}

const fn yes(text: &'static str) -> Feature {
    Feature {
        text,
        included: true,
    }
}

const fn no(text: &'static str) -> Feature {
    Feature {
        text,
        included: false,
    }
}

const BRONZE_FEATURES: &[Feature] = &[
    yes("Logo sur site web officiel"),
    yes("Logo sur réseaux sociaux"),
    yes("Mention dans les publications officielles"),
    no("Logo sur supports imprimés"),
    no("Logo sur écran LED / scène"),
    no("Mise en place d'un stand"),
    no("Distribution de goodies"),
    no("Interaction directe avec participants"),
    no("Mot lors des cérémonies"),
    no("Solution dédiée"),
];

const SILVER_FEATURES: &[Feature] = &[
    yes("Logo sur site web officiel"),
    yes("Logo sur réseaux sociaux"),
    yes("Mention dans les publications officielles"),
    yes("Logo sur supports imprimés"),
    no("Logo sur écran LED / scène"),
    yes("Mise en place d'un stand"),
    yes("Distribution de goodies"),
    yes("Interaction directe avec participants"),
    no("Mot lors des cérémonies"),
    no("Solution dédiée"),
];

const GOLD_FEATURES: &[Feature] = &[
    yes("Logo sur site web officiel"),
    yes("Logo sur réseaux sociaux"),
    yes("Mention dans les publications officielles"),
    yes("Logo sur supports imprimés"),
    yes("Logo sur écran LED / scène"),
    yes("Mise en place d'un stand"),
    yes("Distribution de goodies"),
    yes("Interaction directe avec participants"),
    yes("Mot lors des cérémonies"),
    no("Solution dédiée"),
];

const EXCLUSIVE_FEATURES: &[Feature] = &[
    yes("Logo sur site web officiel"),
    yes("Logo sur réseaux sociaux"),
    yes("Mention dans les publications officielles"),
    yes("Logo sur supports imprimés"),
    yes("Logo sur écran LED / scène"),
    yes("Mise en place d'un stand premium"),
    yes("Distribution de goodies"),
    yes("Interaction directe avec participants"),
    yes("Mot lors des cérémonies"),
    yes("Solution dédiée pour le sponsor"),
];

static BRONZE: Package = Package {
    id: PackageId::Bronze,
    name: "Pack Bronze",
    price: "2 000 TND",
    features: BRONZE_FEATURES,
};

static SILVER: Package = Package {
    id: PackageId::Silver,
    name: "Pack Silver",
    price: "4 000 TND",
    features: SILVER_FEATURES,
};

static GOLD: Package = Package {
    id: PackageId::Gold,
    name: "Pack Gold",
    price: "6 000 TND",
    features: GOLD_FEATURES,
};

static EXCLUSIVE: Package = Package {
    id: PackageId::Exclusive,
    name: "Pack Exclusif",
    price: "20 000 TND",
    features: EXCLUSIVE_FEATURES,
};

impl PackageId {
    pub const ALL: [PackageId; 4] = [
        PackageId::Bronze,
        PackageId::Silver,
        PackageId::Gold,
        PackageId::Exclusive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageId::Bronze => "bronze",
            PackageId::Silver => "silver",
            PackageId::Gold => "gold",
            PackageId::Exclusive => "exclusive",
        }
    }

    pub fn package(self) -> &'static Package {
        match self {
            PackageId::Bronze => &BRONZE,
            PackageId::Silver => &SILVER,
            PackageId::Gold => &GOLD,
            PackageId::Exclusive => &EXCLUSIVE,
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PackageId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| CatalogError::UnknownPackage(s.to_string()))
    }
}

impl Package {
    pub fn included_count(&self) -> usize {
        self.features.iter().filter(|f| f.included).count()
    }
}
