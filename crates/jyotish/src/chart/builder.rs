//! Builds a well-formed [`Chart`] from raw sidereal longitudes.
//!
//! Houses are whole-sign from the ascendant. Ketu is derived opposite Rahu
//! when it is not supplied.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::chart::dignities::DignitiesService;
use crate::chart::nakshatra::get_nakshatra_for_longitude;
use crate::chart::rulers::get_sign_lord;
use crate::chart::types::{
    normalize_degrees, Chart, HouseData, Planet, PlanetPosition, Sign, ALL_PLANETS,
    CLASSICAL_PLANETS,
};
use crate::error::ChartError;

/// One planet entry of a serialized chart request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetInput {
    pub planet: Planet,
    pub longitude: f64,
    /// Degrees per day; the planet's mean motion is used when absent.
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Serialized chart request: ascendant plus planet longitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub ascendant: f64,
    pub planets: Vec<PlanetInput>,
}

/// Mean daily motion, used when a caller gives no speed.
fn mean_speed(planet: Planet) -> f64 {
    match planet {
        Planet::Sun => 0.9856,
        Planet::Moon => 13.1764,
        Planet::Mars => 0.5240,
        Planet::Mercury => 1.3833,
        Planet::Jupiter => 0.0831,
        Planet::Venus => 1.2000,
        Planet::Saturn => 0.0335,
        Planet::Rahu | Planet::Ketu => -0.0529,
        Planet::Ascendant => 0.0,
    }
}

/// Combustion threshold (degrees from Sun). `None` for Sun, nodes and ascendant.
///
/// Mercury and Venus use tighter orbs when retrograde.
pub fn combustion_orb(planet: Planet, retrograde: bool) -> Option<f64> {
    match planet {
        Planet::Moon => Some(12.0),
        Planet::Mars => Some(17.0),
        Planet::Mercury => Some(if retrograde { 12.0 } else { 14.0 }),
        Planet::Jupiter => Some(11.0),
        Planet::Venus => Some(if retrograde { 8.0 } else { 10.0 }),
        Planet::Saturn => Some(15.0),
        Planet::Sun | Planet::Rahu | Planet::Ketu | Planet::Ascendant => None,
    }
}

fn arc_between(a: f64, b: f64) -> f64 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(360.0 - diff)
}

#[derive(Debug, Clone)]
pub struct ChartBuilder {
    ascendant: f64,
    planets: BTreeMap<Planet, (f64, f64)>,
}

impl ChartBuilder {
    pub fn new(ascendant_longitude: f64) -> Self {
        Self {
            ascendant: ascendant_longitude,
            planets: BTreeMap::new(),
        }
    }

    /// Add a planet moving at its mean daily motion.
    pub fn planet(self, planet: Planet, longitude: f64) -> Self {
        self.planet_with_speed(planet, longitude, mean_speed(planet))
    }

    pub fn planet_with_speed(mut self, planet: Planet, longitude: f64, speed: f64) -> Self {
        if planet != Planet::Ascendant {
            self.planets.insert(planet, (longitude, speed));
        }
        self
    }

    pub fn from_input(input: &ChartInput) -> Self {
        input.planets.iter().fold(Self::new(input.ascendant), |builder, entry| {
            let speed = entry.speed.unwrap_or_else(|| mean_speed(entry.planet));
            builder.planet_with_speed(entry.planet, entry.longitude, speed)
        })
    }

    pub fn build(self) -> Result<Chart, ChartError> {
        if !self.ascendant.is_finite() {
            return Err(ChartError::InvalidLongitude {
                planet: Planet::Ascendant,
                value: self.ascendant,
            });
        }
        let mut raw = self.planets;
        for (planet, (lon, speed)) in &raw {
            if !lon.is_finite() || !speed.is_finite() {
                return Err(ChartError::InvalidLongitude { planet: *planet, value: *lon });
            }
        }
        for planet in CLASSICAL_PLANETS.iter().chain([Planet::Rahu].iter()) {
            if !raw.contains_key(planet) {
                return Err(ChartError::MissingPlanet { planet: *planet });
            }
        }
        if !raw.contains_key(&Planet::Ketu) {
            let (rahu_lon, rahu_speed) = raw[&Planet::Rahu];
            raw.insert(Planet::Ketu, (normalize_degrees(rahu_lon + 180.0), rahu_speed));
        }
        raw.insert(Planet::Ascendant, (self.ascendant, 0.0));

        let asc_sign = Sign::from_longitude(self.ascendant);
        let sun_lon = raw[&Planet::Sun].0;
        let dignities = DignitiesService;

        let positions: Vec<PlanetPosition> = ALL_PLANETS
            .iter()
            .map(|planet| {
                let (lon, speed) = raw[planet];
                let longitude = normalize_degrees(lon);
                let sign = Sign::from_longitude(longitude);
                let house = ((sign.index() + 12 - asc_sign.index()) % 12 + 1) as u8;
                let nakshatra = get_nakshatra_for_longitude(longitude);
                let retrograde = speed < 0.0;
                let combust = combustion_orb(*planet, retrograde)
                    .map(|orb| arc_between(longitude, sun_lon) < orb)
                    .unwrap_or(false);
                PlanetPosition {
                    planet: *planet,
                    longitude,
                    sign,
                    degree: longitude % 30.0,
                    house,
                    nakshatra: nakshatra.base.name,
                    nakshatra_index: nakshatra.base.index as u8,
                    pada: nakshatra.pada,
                    retrograde,
                    combust,
                    dignity: dignities.get_dignity(*planet, longitude),
                    speed,
                }
            })
            .collect();

        let houses = (1..=12u8)
            .map(|number| {
                let sign = asc_sign.advance(number as usize - 1);
                HouseData {
                    number,
                    sign,
                    lord: get_sign_lord(sign),
                    planets: positions
                        .iter()
                        .filter(|p| p.house == number && p.planet != Planet::Ascendant)
                        .map(|p| p.planet)
                        .collect(),
                }
            })
            .collect();

        Ok(Chart { positions, houses })
    }
}

impl Chart {
    pub fn from_input(input: &ChartInput) -> Result<Chart, ChartError> {
        ChartBuilder::from_input(input).build()
    }
}
