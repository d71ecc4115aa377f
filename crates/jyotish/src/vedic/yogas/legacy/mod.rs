//! Hand-written detectors for the families that have no catalog entries.
//!
//! Each family is a plain function from chart facts to findings. The
//! orchestrator runs them in [`LEGACY_FAMILIES`] order.

mod arishta;
mod aspects;
mod bhava;
mod conjunctions;
mod dhana;
mod nakshatra;
mod parivartana;
mod placements;
pub mod policy;
mod raja;

use crate::chart::types::{HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::types::{Yoga, YogaCategory};
use policy::{policy_strength, LegacyRule};

pub type FamilyDetector = fn(&[PlanetPosition], &[HouseData]) -> Vec<Yoga>;

pub const LEGACY_FAMILIES: &[(&str, FamilyDetector)] = &[
    ("raja", raja::detect),
    ("dhana", dhana::detect),
    ("conjunction", conjunctions::detect),
    ("placement", placements::detect),
    ("bhava", bhava::detect),
    ("parivartana", parivartana::detect),
    ("arishta", arishta::detect),
    ("aspect", aspects::detect),
    ("nakshatra", nakshatra::detect),
];

/// Run every legacy family in registration order.
pub fn detect_legacy(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut found = Vec::new();
    for (family, detect) in LEGACY_FAMILIES {
        let before = found.len();
        found.extend(detect(positions, houses));
        log::trace!("legacy {family}: {} findings", found.len() - before);
    }
    found
}

pub(crate) fn finding(
    category: YogaCategory,
    name: impl Into<String>,
    planets: Vec<Planet>,
    houses: Vec<u8>,
    rule: LegacyRule,
    description: String,
    effects: impl Into<String>,
) -> Yoga {
    let mut unique = Vec::with_capacity(houses.len());
    for house in houses {
        if !unique.contains(&house) {
            unique.push(house);
        }
    }
    Yoga {
        category,
        name: name.into(),
        planets,
        houses: unique,
        strength: policy_strength(rule),
        description,
        effects: effects.into(),
    }
}

/// Canonical significations of the twelve houses, indexed by house number - 1.
pub(crate) const HOUSE_MEANINGS: [&str; 12] = [
    "self, personality, physical body",
    "wealth, family, speech",
    "siblings, courage, communication",
    "mother, home, education, vehicles",
    "children, intelligence, creativity",
    "enemies, diseases, debts, service",
    "spouse, partnerships, business",
    "longevity, transformation, hidden wealth",
    "father, fortune, dharma, higher learning",
    "career, status, authority, karma",
    "gains, income, friendships, aspirations",
    "losses, expenses, spirituality, foreign lands",
];

pub(crate) fn house_meaning(house: u8) -> &'static str {
    HOUSE_MEANINGS
        .get(usize::from(house).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}
