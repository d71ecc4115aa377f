//! Pure chart-fact helpers shared by the catalog engine and the legacy detector.
//!
//! Every lookup is total: a missing planet or house yields `None` (or an
//! empty list) and the caller treats that as "no match".

use crate::chart::types::{normalize_degrees, HouseData, Planet, PlanetPosition};

pub const KENDRA: [u8; 4] = [1, 4, 7, 10];
pub const TRIKONA: [u8; 3] = [1, 5, 9];
pub const DUSTHANA: [u8; 3] = [6, 8, 12];
pub const UPACHAYA: [u8; 4] = [3, 6, 10, 11];

pub fn is_kendra(house: u8) -> bool {
    KENDRA.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONA.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA.contains(&house)
}

pub fn is_upachaya(house: u8) -> bool {
    UPACHAYA.contains(&house)
}

/// Counted-house distance from `from` to `to`, inclusive of the starting
/// house: a house counted from itself is 1, the next house is 2.
pub fn house_offset(from: u8, to: u8) -> u8 {
    ((to as i32 - from as i32 + 12).rem_euclid(12) + 1) as u8
}

/// The house at counted offset `offset` from `reference` (inverse of [`house_offset`]).
pub fn house_from(reference: u8, offset: u8) -> u8 {
    ((reference as i32 - 1 + offset as i32 - 1).rem_euclid(12) + 1) as u8
}

pub fn find_planet(positions: &[PlanetPosition], planet: Planet) -> Option<&PlanetPosition> {
    positions.iter().find(|p| p.planet == planet)
}

pub fn house_of(positions: &[PlanetPosition], planet: Planet) -> Option<u8> {
    find_planet(positions, planet).map(|p| p.house)
}

pub fn find_house(houses: &[HouseData], number: u8) -> Option<&HouseData> {
    houses.iter().find(|h| h.number == number)
}

pub fn house_lord(houses: &[HouseData], number: u8) -> Option<Planet> {
    find_house(houses, number).map(|h| h.lord)
}

/// The lord of `number` together with the house that lord occupies.
pub fn lord_placement(
    positions: &[PlanetPosition],
    houses: &[HouseData],
    number: u8,
) -> Option<(Planet, u8)> {
    let lord = house_lord(houses, number)?;
    house_of(positions, lord).map(|placed| (lord, placed))
}

/// Planets in a house, in input order. The ascendant point is never an occupant.
pub fn planets_in_house(positions: &[PlanetPosition], house: u8) -> Vec<Planet> {
    positions
        .iter()
        .filter(|p| p.house == house && p.planet != Planet::Ascendant)
        .map(|p| p.planet)
        .collect()
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Both planets present and in the same house.
pub fn are_conjunct(positions: &[PlanetPosition], a: Planet, b: Planet) -> bool {
    match (house_of(positions, a), house_of(positions, b)) {
        (Some(ha), Some(hb)) => ha == hb,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Benefic,
    Malefic,
}

/// Moon is benefic while waxing: (Moon − Sun + 360) mod 360 in [0, 180).
/// False when either luminary is missing.
pub fn is_moon_benefic(positions: &[PlanetPosition]) -> bool {
    moon_polarity(positions) == Some(Polarity::Benefic)
}

fn moon_polarity(positions: &[PlanetPosition]) -> Option<Polarity> {
    let moon = find_planet(positions, Planet::Moon)?;
    let sun = find_planet(positions, Planet::Sun)?;
    let elongation = (moon.longitude - sun.longitude + 360.0).rem_euclid(360.0);
    if elongation < 180.0 {
        Some(Polarity::Benefic)
    } else {
        Some(Polarity::Malefic)
    }
}

/// Natural polarity, with the Moon resolved from its phase. The ascendant
/// point has none.
pub fn polarity(planet: Planet, positions: &[PlanetPosition]) -> Option<Polarity> {
    match planet {
        Planet::Jupiter | Planet::Venus | Planet::Mercury => Some(Polarity::Benefic),
        Planet::Sun | Planet::Mars | Planet::Saturn | Planet::Rahu | Planet::Ketu => {
            Some(Polarity::Malefic)
        }
        Planet::Moon => moon_polarity(positions),
        Planet::Ascendant => None,
    }
}

pub fn is_benefic(planet: Planet, positions: &[PlanetPosition]) -> bool {
    polarity(planet, positions) == Some(Polarity::Benefic)
}

pub fn is_malefic(planet: Planet, positions: &[PlanetPosition]) -> bool {
    polarity(planet, positions) == Some(Polarity::Malefic)
}

/// English ordinal for a house number: 1st, 2nd, 3rd, 4th ... 11th, 12th.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// "Sun, Moon and Mars"
pub fn join_planets(planets: &[Planet]) -> String {
    match planets {
        [] => String::new(),
        [one] => one.name().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|p| p.name()).collect();
            format!("{} and {}", head.join(", "), last.name())
        }
    }
}
