//! Finding types produced by the yoga engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::chart::types::Planet;

/// Classical family a yoga belongs to. Metadata only; never a dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YogaCategory {
    Mahapurusha,
    NabhasaSankhya,
    NabhasaAsraya,
    NabhasaDala,
    NabhasaAkriti,
    Lunar,
    Solar,
    Raja,
    Dhana,
    Arishta,
    Conjunction,
    Placement,
    Bhava,
    Parivartana,
    Aspect,
    Nakshatra,
}

impl YogaCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mahapurusha => "Pancha Mahapurusha",
            Self::NabhasaSankhya => "Nabhasa (Sankhya)",
            Self::NabhasaAsraya => "Nabhasa (Asraya)",
            Self::NabhasaDala => "Nabhasa (Dala)",
            Self::NabhasaAkriti => "Nabhasa (Akriti)",
            Self::Lunar => "Chandra",
            Self::Solar => "Surya",
            Self::Raja => "Raja",
            Self::Dhana => "Dhana",
            Self::Arishta => "Arishta",
            Self::Conjunction => "Graha Yuti",
            Self::Placement => "Graha Bhava",
            Self::Bhava => "Bhava",
            Self::Parivartana => "Parivartana",
            Self::Aspect => "Drishti",
            Self::Nakshatra => "Nakshatra",
        }
    }
}

impl fmt::Display for YogaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        })
    }
}

/// A detected yoga. Built fresh on every pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yoga {
    #[serde(rename = "type")]
    pub category: YogaCategory,
    pub name: String,
    pub planets: Vec<Planet>,
    pub houses: Vec<u8>,
    pub strength: Strength,
    pub description: String,
    pub effects: String,
}
