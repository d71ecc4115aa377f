use super::{Detection, StrengthCondition, StrengthRule, YogaDefinition, KENDRA_HOUSES};
use crate::chart::types::{Dignity, Planet};
use crate::vedic::yogas::types::{Strength, YogaCategory};

const DIGNIFIED: &[Dignity] = &[Dignity::Exalted, Dignity::OwnSign, Dignity::Moolatrikona];

const EXALTED_IS_STRONG: &[StrengthRule] = &[StrengthRule {
    when: StrengthCondition::Dignity(Dignity::Exalted),
    strength: Strength::Strong,
}];

const fn mahapurusha(name: &'static str, planet: Planet, effects: &'static str) -> YogaDefinition {
    YogaDefinition {
        name,
        source: "BPHS",
        category: YogaCategory::Mahapurusha,
        detection: Detection::AngularPlacement {
            planet,
            houses: KENDRA_HOUSES,
            dignities: DIGNIFIED,
        },
        effects,
        base_strength: Strength::Moderate,
        strength_rules: EXALTED_IS_STRONG,
    }
}

pub(super) const MAHAPURUSHA: &[YogaDefinition] = &[
    mahapurusha(
        "Ruchaka Yoga",
        Planet::Mars,
        "Courage, command and physical vigour; success in military, sport or engineering.",
    ),
    mahapurusha(
        "Bhadra Yoga",
        Planet::Mercury,
        "Sharp intellect and eloquence; skill in trade, writing and learning.",
    ),
    mahapurusha(
        "Hamsa Yoga",
        Planet::Jupiter,
        "Wisdom, righteousness and respect; drawn to teaching, law or spiritual life.",
    ),
    mahapurusha(
        "Malavya Yoga",
        Planet::Venus,
        "Beauty, comfort and artistic refinement; enjoys vehicles and a happy marriage.",
    ),
    mahapurusha(
        "Sasa Yoga",
        Planet::Saturn,
        "Authority over many people through patience and discipline; \
         rises through persistent effort.",
    ),
];
