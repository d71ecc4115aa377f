//! Raja (power) and Dhana (wealth) combinations.

use super::{
    Detection, PatternCheck, StrengthCondition, StrengthRule, YogaDefinition,
    ESCALATE_IN_KENDRA_TRIKONA,
};
use crate::chart::types::Planet;
use crate::vedic::yogas::types::{Strength, YogaCategory};

const BENEFICS: &[Planet] = &[Planet::Jupiter, Planet::Venus, Planet::Mercury];

const SEVERAL_PLANETS: &[StrengthRule] = &[StrengthRule {
    when: StrengthCondition::PlanetsAtLeast(3),
    strength: Strength::Strong,
}];

pub(super) const RAJA: &[YogaDefinition] = &[
    YogaDefinition {
        name: "Chatussagara Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::AllKendrasOccupied),
        effects: "Fame spreading to the four oceans; wealth and a long, prosperous life.",
        base_strength: Strength::Strong,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Viparita Raja Yoga",
        source: "BPHS",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::AnyDusthanaLordInDusthana),
        effects: "Rise through adversity; gains arrive from the misfortune of rivals.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Harsha Yoga",
        source: "BPHS",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::DusthanaLord { house: 6 }),
        effects: "Victory over enemies, good health and happiness.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Sarala Yoga",
        source: "BPHS",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::DusthanaLord { house: 8 }),
        effects: "Long life, fearlessness and learning; prospers through resilience.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Vimala Yoga",
        source: "BPHS",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::DusthanaLord { house: 12 }),
        effects: "Frugal and independent; good conduct and a contented life.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Neecha Bhanga Raja Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::NeechaBhanga),
        effects: "A weakness overturned into strength; success after early setbacks.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Guru-Mangala Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Raja,
        detection: Detection::Conjunction { planets: &[Planet::Jupiter, Planet::Mars], gate: None },
        effects: "Energy guided by wisdom; success in leadership, law or engineering.",
        base_strength: Strength::Moderate,
        strength_rules: ESCALATE_IN_KENDRA_TRIKONA,
    },
    YogaDefinition {
        name: "Amala Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Raja,
        detection: Detection::Pattern(PatternCheck::BeneficsFromMoon { offsets: &[10], min: 1 }),
        effects: "Spotless reputation and virtuous conduct; lasting fame.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
];

pub(super) const DHANA: &[YogaDefinition] = &[
    YogaDefinition {
        name: "Lakshmi Yoga",
        source: "BPHS",
        category: YogaCategory::Dhana,
        detection: Detection::Pattern(PatternCheck::NinthLordDignified),
        effects: "Abundant wealth, nobility and good fortune.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Vasumati Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Dhana,
        detection: Detection::HousePlacement {
            planets: BENEFICS,
            houses: &[3, 6, 10, 11],
            primary: Planet::Jupiter,
        },
        effects: "Steady accumulation of wealth; never in want.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
    YogaDefinition {
        name: "Saraswati Yoga",
        source: "Phaladeepika",
        category: YogaCategory::Dhana,
        detection: Detection::Pattern(PatternCheck::AllPlacedIn {
            planets: BENEFICS,
            houses: &[1, 2, 4, 5, 7, 9, 10],
        }),
        effects: "Learning, eloquence and poetic skill; wealth through knowledge.",
        base_strength: Strength::Moderate,
        strength_rules: SEVERAL_PLANETS,
    },
    YogaDefinition {
        name: "Parvata Yoga",
        source: "BPHS",
        category: YogaCategory::Dhana,
        detection: Detection::Pattern(PatternCheck::KendraBeneficsClearDusthanas),
        effects: "Prosperity, charity and a leading place in the community.",
        base_strength: Strength::Moderate,
        strength_rules: &[],
    },
];
