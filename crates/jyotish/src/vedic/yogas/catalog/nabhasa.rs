//! Nabhasa yogas: whole-chart shapes traced by the seven classical planets.

use super::{Detection, PatternCheck, YogaDefinition};
use crate::chart::types::Modality;
use crate::vedic::yogas::helpers::Polarity;
use crate::vedic::yogas::types::{Strength, YogaCategory};

const fn shape(
    name: &'static str,
    category: YogaCategory,
    check: PatternCheck,
    effects: &'static str,
) -> YogaDefinition {
    YogaDefinition {
        name,
        source: "Brihat Jataka",
        category,
        detection: Detection::Pattern(check),
        effects,
        base_strength: Strength::Moderate,
        strength_rules: &[],
    }
}

const fn sankhya(name: &'static str, signs: u8, effects: &'static str) -> YogaDefinition {
    shape(name, YogaCategory::NabhasaSankhya, PatternCheck::SignCount(signs), effects)
}

const fn akriti(name: &'static str, check: PatternCheck, effects: &'static str) -> YogaDefinition {
    shape(name, YogaCategory::NabhasaAkriti, check, effects)
}

pub(super) const SANKHYA: &[YogaDefinition] = &[
    sankhya("Gola Yoga", 1, "Poverty and a wandering, unsettled life with little learning."),
    sankhya(
        "Yuga Yoga",
        2,
        "Lacks wealth and conventional standing; may stand apart from society.",
    ),
    sankhya(
        "Sula Yoga",
        3,
        "Sharp temperament, prone to quarrels and injuries; gains through struggle.",
    ),
    sankhya("Kedara Yoga", 4, "Prosperity through land and agriculture; helpful to many."),
    sankhya("Pasa Yoga", 5, "Skilled and talkative with many dependants; can become entangled."),
    sankhya("Dama Yoga", 6, "Generous and wealthy; helps others and earns renown."),
    sankhya("Veena Yoga", 7, "Fond of music and the arts; leads a cultured and pleasant life."),
];

pub(super) const ASRAYA: &[YogaDefinition] = &[
    shape(
        "Rajju Yoga",
        YogaCategory::NabhasaAsraya,
        PatternCheck::UniformModality(Modality::Movable),
        "Fond of travel and change; fortune found away from home.",
    ),
    shape(
        "Musala Yoga",
        YogaCategory::NabhasaAsraya,
        PatternCheck::UniformModality(Modality::Fixed),
        "Steady, proud and determined; accumulates wealth and honour.",
    ),
    shape(
        "Nala Yoga",
        YogaCategory::NabhasaAsraya,
        PatternCheck::UniformModality(Modality::Dual),
        "Adaptable and clever with a mixed fortune; skilled at many crafts.",
    ),
];

pub(super) const DALA: &[YogaDefinition] = &[
    shape(
        "Mala Yoga",
        YogaCategory::NabhasaDala,
        PatternCheck::KendraPolarity(Polarity::Benefic),
        "Comfort, vehicles and lasting happiness.",
    ),
    shape(
        "Sarpa Yoga",
        YogaCategory::NabhasaDala,
        PatternCheck::KendraPolarity(Polarity::Malefic),
        "Hardship and dependence on others; a crooked or troubled path.",
    ),
];

const NON_KENDRA_STARTS: &[u8] = &[2, 3, 5, 6, 8, 9, 11, 12];

pub(super) const AKRITI: &[YogaDefinition] = &[
    akriti(
        "Gada Yoga",
        PatternCheck::ConfinedToAnyOf(&[&[1, 4], &[4, 7], &[7, 10], &[10, 1]]),
        "Wealth gained through effort; respected and religious.",
    ),
    akriti(
        "Sakata Yoga",
        PatternCheck::ConfinedTo(&[1, 7]),
        "Earns through carts and conveyance; fortunes that come and go.",
    ),
    akriti(
        "Vihaga Yoga",
        PatternCheck::ConfinedTo(&[4, 10]),
        "A roving messenger's life; quarrelsome yet resourceful.",
    ),
    akriti(
        "Sringataka Yoga",
        PatternCheck::ConfinedTo(&[1, 5, 9]),
        "Fortunate and contented in later life; fond of quarrel in youth.",
    ),
    akriti(
        "Hala Yoga",
        PatternCheck::ConfinedToAnyOf(&[&[2, 6, 10], &[3, 7, 11], &[4, 8, 12]]),
        "Livelihood from the land; hard working and well fed.",
    ),
    akriti(
        "Kamala Yoga",
        PatternCheck::ConfinedTo(&[1, 4, 7, 10]),
        "Great virtue, long life and wide fame.",
    ),
    akriti(
        "Vapi Yoga",
        PatternCheck::ConfinedToAnyOf(&[&[2, 5, 8, 11], &[3, 6, 9, 12]]),
        "Hoards wealth; comfortable but of modest reputation.",
    ),
    akriti(
        "Yupa Yoga",
        PatternCheck::Window { start: 1, width: 4 },
        "Devoted to ritual and charity; self-controlled.",
    ),
    akriti(
        "Shara Yoga",
        PatternCheck::Window { start: 4, width: 4 },
        "Skilled with tools and weapons; may work with forests or hunting.",
    ),
    akriti(
        "Shakti Yoga",
        PatternCheck::Window { start: 7, width: 4 },
        "Slow to prosper but persevering; fond of combat.",
    ),
    akriti(
        "Danda Yoga",
        PatternCheck::Window { start: 10, width: 4 },
        "Separated from kin; serves others for a living.",
    ),
    akriti(
        "Nauka Yoga",
        PatternCheck::Window { start: 1, width: 7 },
        "Earns through water and trade; famous but restless.",
    ),
    akriti(
        "Kuta Yoga",
        PatternCheck::Window { start: 4, width: 7 },
        "Untruthful in dealings; may live in remote places.",
    ),
    akriti(
        "Chhatra Yoga",
        PatternCheck::Window { start: 7, width: 7 },
        "Protects and supports dependants; happy at the end of life.",
    ),
    akriti(
        "Chapa Yoga",
        PatternCheck::Window { start: 10, width: 7 },
        "Brave and guarded; enjoys life in middle age.",
    ),
    akriti(
        "Ardha Chandra Yoga",
        PatternCheck::RotatingWindow { width: 7, starts: NON_KENDRA_STARTS },
        "Handsome and honoured; commands others.",
    ),
    akriti(
        "Chakra Yoga",
        PatternCheck::AlternateHouses { odd: true },
        "Sovereign rank; others bow to the native.",
    ),
    akriti(
        "Samudra Yoga",
        PatternCheck::AlternateHouses { odd: false },
        "Many possessions and comforts; generous and well liked.",
    ),
];
