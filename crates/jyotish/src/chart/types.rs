//! Chart data model shared by the builder, the validator and the yoga engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten chart points a yoga pass works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Ascendant,
}

/// All ten chart points in input order.
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
    Planet::Ascendant,
];

/// The seven classical planets, excluding both nodes and the ascendant.
pub const CLASSICAL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Ascendant => "Ascendant",
        }
    }

    pub const fn is_classical(self) -> bool {
        !matches!(self, Self::Rahu | Self::Ketu | Self::Ascendant)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign quality used by the Nabhasa Asraya family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign containing a sidereal longitude. Input is normalized first.
    pub fn from_longitude(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        Self::from_index((lon / 30.0) as usize)
    }

    /// Wraps any index into the zodiac.
    pub const fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// The sign `count` places ahead, counting this sign as zero.
    pub const fn advance(self, count: usize) -> Self {
        Self::from_index(self.index() + count)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positional strength of a planet in its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Moolatrikona => "Moolatrikona",
            Self::OwnSign => "Own-sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

impl fmt::Display for Dignity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single chart point as supplied to the yoga engine.
///
/// `house` is whole-sign from the ascendant (1..=12) and `degree` is the
/// longitude within its sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Planet,
    pub longitude: f64,
    pub sign: Sign,
    pub degree: f64,
    pub house: u8,
    pub nakshatra: String,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub retrograde: bool,
    pub combust: bool,
    pub dignity: Dignity,
    pub speed: f64,
}

/// One whole-sign house with its lord and occupants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseData {
    pub number: u8,
    pub sign: Sign,
    pub lord: Planet,
    pub planets: Vec<Planet>,
}

/// A fully computed chart: ten positions and twelve houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub positions: Vec<PlanetPosition>,
    pub houses: Vec<HouseData>,
}

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}
