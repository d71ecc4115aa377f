use super::{
    Detection, Gate, PatternCheck, StrengthCondition, StrengthRule, YogaDefinition,
    ESCALATE_IN_KENDRA_TRIKONA,
};
use crate::chart::types::Planet;
use crate::vedic::yogas::types::{Strength, YogaCategory};

const MANY_PLANETS: &[StrengthRule] = &[StrengthRule {
    when: StrengthCondition::PlanetsAtLeast(2),
    strength: Strength::Strong,
}];

pub(super) const SOLAR: &[YogaDefinition] = &[
    YogaDefinition {
        name: "Vesi Yoga",
        source: "Saravali",
        category: YogaCategory::Solar,
        detection: Detection::Pattern(PatternCheck::HaloSecond(Planet::Sun)),
        effects: "Balanced outlook, truthful speech and steady prosperity.",
        base_strength: Strength::Moderate,
        strength_rules: MANY_PLANETS,
    },
    YogaDefinition {
        name: "Vasi Yoga",
        source: "Saravali",
        category: YogaCategory::Solar,
        detection: Detection::Pattern(PatternCheck::HaloTwelfth(Planet::Sun)),
        effects: "Skilful and charitable; well regarded by those in power.",
        base_strength: Strength::Moderate,
        strength_rules: MANY_PLANETS,
    },
    YogaDefinition {
        name: "Ubhayachari Yoga",
        source: "Saravali",
        category: YogaCategory::Solar,
        detection: Detection::Pattern(PatternCheck::HaloBoth(Planet::Sun)),
        effects: "Eloquent, handsome and prosperous; ranks with rulers.",
        base_strength: Strength::Strong,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Budha Aditya Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Solar,
        detection: Detection::Conjunction {
            planets: &[Planet::Sun, Planet::Mercury],
            gate: Some(Gate::MercuryNotCombust),
        },
        effects: "Sharp intelligence and skill in communication; learned and respected.",
        base_strength: Strength::Moderate,
        strength_rules: ESCALATE_IN_KENDRA_TRIKONA,
    },
];
