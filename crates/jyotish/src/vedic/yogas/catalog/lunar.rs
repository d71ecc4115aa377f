use super::{
    Detection, PatternCheck, StrengthCondition, StrengthRule, YogaDefinition,
    ESCALATE_IN_KENDRA_TRIKONA,
};
use crate::chart::types::Planet;
use crate::vedic::yogas::types::{Strength, YogaCategory};

const fn lunar(
    name: &'static str,
    source: &'static str,
    detection: Detection,
    effects: &'static str,
    base_strength: Strength,
    strength_rules: &'static [StrengthRule],
) -> YogaDefinition {
    YogaDefinition {
        name,
        source,
        category: YogaCategory::Lunar,
        detection,
        effects,
        base_strength,
        strength_rules,
    }
}

const MANY_PLANETS: &[StrengthRule] = &[StrengthRule {
    when: StrengthCondition::PlanetsAtLeast(2),
    strength: Strength::Strong,
}];

pub(super) const LUNAR: &[YogaDefinition] = &[
    lunar(
        "Sunapha Yoga",
        "Saravali",
        Detection::Pattern(PatternCheck::HaloSecond(Planet::Moon)),
        "Self-earned wealth, intelligence and a good reputation.",
        Strength::Moderate,
        MANY_PLANETS,
    ),
    lunar(
        "Anapha Yoga",
        "Saravali",
        Detection::Pattern(PatternCheck::HaloTwelfth(Planet::Moon)),
        "Good health, pleasing manners and freedom from want.",
        Strength::Moderate,
        MANY_PLANETS,
    ),
    lunar(
        "Durudhara Yoga",
        "Saravali",
        Detection::Pattern(PatternCheck::HaloBoth(Planet::Moon)),
        "Wealth, vehicles and generosity; enjoys the comforts of life.",
        Strength::Strong,
        &[],
    ),
    lunar(
        "Kemadruma Yoga",
        "BPHS",
        Detection::Pattern(PatternCheck::HaloNeither(Planet::Moon)),
        "Loneliness, want and mental unrest; troubles ease when planets aspect the Moon.",
        Strength::Moderate,
        &[],
    ),
    lunar(
        "Gaja Kesari Yoga",
        "Phaladeepika",
        Detection::Pattern(PatternCheck::JupiterFromMoon(&[1, 4, 7, 10])),
        "Intelligence, lasting fame and prosperity; victorious over rivals.",
        Strength::Moderate,
        ESCALATE_IN_KENDRA_TRIKONA,
    ),
    lunar(
        "Shakata Yoga",
        "Phaladeepika",
        Detection::Pattern(PatternCheck::JupiterFromMoon(&[6, 8, 12])),
        "Fortune rises and falls like a cart wheel; periods of loss follow gains.",
        Strength::Moderate,
        &[],
    ),
    lunar(
        "Adhi Yoga",
        "Phaladeepika",
        Detection::Pattern(PatternCheck::BeneficsFromMoon { offsets: &[6, 7, 8], min: 2 }),
        "Leadership and high office; polite, trustworthy and healthy.",
        Strength::Moderate,
        &[],
    ),
    lunar(
        "Chandra-Mangala Yoga",
        "Phaladeepika",
        Detection::Conjunction { planets: &[Planet::Moon, Planet::Mars], gate: None },
        "Earnings through enterprise and trade; a restless drive for money.",
        Strength::Moderate,
        ESCALATE_IN_KENDRA_TRIKONA,
    ),
];
