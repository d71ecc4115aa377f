//! Declarative yoga definitions.
//!
//! Each entry names a detection strategy together with exactly the
//! parameters that strategy reads. Entries are grouped by classical family;
//! the family is metadata and plays no part in dispatch.

mod arishta;
mod lunar;
mod mahapurusha;
mod nabhasa;
mod raja_dhana;
mod solar;

use crate::chart::types::{Dignity, Modality, Planet};
use crate::vedic::yogas::helpers::Polarity;
use crate::vedic::yogas::types::{Strength, YogaCategory};

/// One catalogued combination. Frozen at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaDefinition {
    /// Display name and deduplication key.
    pub name: &'static str,
    /// Classical text the rule is taken from.
    pub source: &'static str,
    pub category: YogaCategory,
    pub detection: Detection,
    pub effects: &'static str,
    pub base_strength: Strength,
    /// Checked in order; the first rule whose condition holds sets the strength.
    pub strength_rules: &'static [StrengthRule],
}

/// Detection strategy with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// `planet` in one of `houses` holding one of `dignities`.
    AngularPlacement {
        planet: Planet,
        houses: &'static [u8],
        dignities: &'static [Dignity],
    },
    /// Every planet in one shared house, unless `gate` vetoes the match.
    Conjunction {
        planets: &'static [Planet],
        gate: Option<Gate>,
    },
    /// Any of `planets` in any of `houses`. Evidence accumulates across
    /// every hit; the finding is strong when `primary` is among them.
    HousePlacement {
        planets: &'static [Planet],
        houses: &'static [u8],
        primary: Planet,
    },
    /// Delegates to one predicate of the registry.
    Pattern(PatternCheck),
}

/// A veto applied after a conjunction is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Mercury must be farther from the Sun than the configured orb.
    MercuryNotCombust,
}

/// Named entries of the custom predicate registry.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternCheck {
    /// A qualifying planet in the 2nd house counted from `reference`.
    HaloSecond(Planet),
    /// A qualifying planet in the 12th house counted from `reference`.
    HaloTwelfth(Planet),
    /// Qualifying planets on both sides of `reference`.
    HaloBoth(Planet),
    /// Both sides empty and no benefic conjunct `reference`.
    HaloNeither(Planet),
    /// The seven classical planets spread over exactly this many signs.
    SignCount(u8),
    /// The seven classical planets all in signs of one modality.
    UniformModality(Modality),
    /// All kendras occupied, every kendra occupant of one polarity.
    KendraPolarity(Polarity),
    /// The seven classical planets confined to one house subset.
    ConfinedTo(&'static [u8]),
    /// Confined to at least one of several house subsets.
    ConfinedToAnyOf(&'static [&'static [u8]]),
    /// Confined to `width` consecutive houses beginning at `start`.
    Window { start: u8, width: u8 },
    /// Confined to `width` consecutive houses beginning at any of `starts`.
    RotatingWindow { width: u8, starts: &'static [u8] },
    /// Confined to alternate houses, odd or even.
    AlternateHouses { odd: bool },
    /// Every classical planet strictly inside the arc running from `from` to `to`.
    NodalEnclosure { from: Planet, to: Planet },
    /// Jupiter at one of these counted offsets from the Moon.
    JupiterFromMoon(&'static [u8]),
    /// At least `min` natural benefics at these counted offsets from the Moon.
    BeneficsFromMoon { offsets: &'static [u8], min: usize },
    /// The lord of `house` placed in a dusthana.
    DusthanaLord { house: u8 },
    /// Any dusthana lord placed in a dusthana.
    AnyDusthanaLordInDusthana,
    /// A debilitated planet whose dispositor is in a kendra from lagna or Moon.
    NeechaBhanga,
    /// Ninth lord in a kendra or trikona in exaltation, moolatrikona or own sign.
    NinthLordDignified,
    /// Every kendra holds at least one planet.
    AllKendrasOccupied,
    /// Every listed planet in one of `houses`.
    AllPlacedIn {
        planets: &'static [Planet],
        houses: &'static [u8],
    },
    /// A benefic in a kendra while the 6th and 8th hold no malefic.
    KendraBeneficsClearDusthanas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthRule {
    pub when: StrengthCondition,
    pub strength: Strength,
}

/// Condition tags a strength rule can key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthCondition {
    /// The target planet holds this dignity.
    Dignity(Dignity),
    /// The anchoring house of the match is a kendra.
    AnchorInKendra,
    /// The anchoring house of the match is a trikona.
    AnchorInTrikona,
    /// At least this many planets contribute.
    PlanetsAtLeast(usize),
}

pub(crate) const KENDRA_HOUSES: &[u8] = &[1, 4, 7, 10];

pub(crate) const ESCALATE_IN_KENDRA_TRIKONA: &[StrengthRule] = &[
    StrengthRule { when: StrengthCondition::AnchorInKendra, strength: Strength::Strong },
    StrengthRule { when: StrengthCondition::AnchorInTrikona, strength: Strength::Strong },
];

fn build_catalog() -> Vec<YogaDefinition> {
    let families: [&[YogaDefinition]; 10] = [
        mahapurusha::MAHAPURUSHA,
        nabhasa::SANKHYA,
        nabhasa::ASRAYA,
        nabhasa::DALA,
        nabhasa::AKRITI,
        lunar::LUNAR,
        solar::SOLAR,
        raja_dhana::RAJA,
        raja_dhana::DHANA,
        arishta::ARISHTA,
    ];
    families.iter().flat_map(|family| family.iter().cloned()).collect()
}

lazy_static::lazy_static! {
    static ref CATALOG: Vec<YogaDefinition> = build_catalog();
}

/// The full catalog in evaluation order.
pub fn catalog() -> &'static [YogaDefinition] {
    &CATALOG
}

/// Look up one definition by its name.
pub fn find_definition(name: &str) -> Option<&'static YogaDefinition> {
    CATALOG.iter().find(|d| d.name == name)
}
