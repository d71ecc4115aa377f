use super::{Detection, PatternCheck, YogaDefinition};
use crate::chart::types::Planet;
use crate::vedic::yogas::types::{Strength, YogaCategory};

pub(super) const ARISHTA: &[YogaDefinition] = &[
    YogaDefinition {
        name: "Kala Sarpa Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Arishta,
        detection: Detection::Pattern(PatternCheck::NodalEnclosure {
            from: Planet::Rahu,
            to: Planet::Ketu,
        }),
        effects: "Obstacles and delays; results come late and after struggle.",
        base_strength: Strength::Strong,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Kala Amrita Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Arishta,
        detection: Detection::Pattern(PatternCheck::NodalEnclosure {
            from: Planet::Ketu,
            to: Planet::Rahu,
        }),
        effects: "Early struggle giving way to spiritual growth and later success.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Guru-Chandala Yoga",
        source: "BPHS",
        category: YogaCategory::Arishta,
        detection: Detection::Conjunction { planets: &[Planet::Jupiter, Planet::Rahu], gate: None },
        effects: "Unorthodox beliefs and conflict with teachers; judgement may be clouded.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Shrapit Yoga",
        source: "BPHS",
        category: YogaCategory::Arishta,
        detection: Detection::Conjunction { planets: &[Planet::Saturn, Planet::Rahu], gate: None },
        effects: "Burdens carried from the past; delays in career and family matters.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
];
