//! Custom predicate registry.
//!
//! These are the one-off algorithms a generic strategy cannot express. Each
//! predicate returns its verdict together with the evidence (planets and
//! houses) the finding needs, since that cannot be reconstructed afterwards.

use std::collections::BTreeSet;
use crate::chart::types::{
    Dignity, HouseData, Modality, Planet, PlanetPosition, CLASSICAL_PLANETS,
};
use crate::vedic::yogas::catalog::PatternCheck;
use crate::vedic::yogas::helpers::{
    angular_distance, find_planet, house_from, house_lord, house_of, house_offset, is_benefic,
    is_dusthana, is_kendra, is_malefic, is_trikona, join_planets, lord_placement, ordinal,
    planets_in_house, polarity, Polarity, DUSTHANA, KENDRA,
};
use crate::vedic::yogas::types::Strength;

/// Evidence returned by a matching predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    pub planets: Vec<Planet>,
    pub houses: Vec<u8>,
    pub detail: String,
    /// Overrides the definition's strength rules when set.
    pub strength: Option<Strength>,
}

impl PatternMatch {
    fn new(planets: Vec<Planet>, houses: Vec<u8>, detail: String) -> Self {
        Self { planets, houses, detail, strength: None }
    }
}

/// Points that never count towards a lunar or solar halo.
const HALO_EXCLUDED: [Planet; 4] = [Planet::Sun, Planet::Rahu, Planet::Ketu, Planet::Ascendant];

const NATURAL_BENEFICS: [Planet; 3] = [Planet::Jupiter, Planet::Venus, Planet::Mercury];

/// Dispatch one registry entry.
pub fn evaluate_pattern(
    check: &PatternCheck,
    positions: &[PlanetPosition],
    houses: &[HouseData],
) -> Option<PatternMatch> {
    match check {
        PatternCheck::HaloSecond(reference) => halo_second(positions, *reference),
        PatternCheck::HaloTwelfth(reference) => halo_twelfth(positions, *reference),
        PatternCheck::HaloBoth(reference) => halo_both(positions, *reference),
        PatternCheck::HaloNeither(reference) => halo_neither(positions, *reference),
        PatternCheck::SignCount(count) => sign_count(positions, *count),
        PatternCheck::UniformModality(modality) => uniform_modality(positions, *modality),
        PatternCheck::KendraPolarity(wanted) => kendra_polarity(positions, *wanted),
        PatternCheck::ConfinedTo(set) => confined_to(positions, set),
        PatternCheck::ConfinedToAnyOf(sets) => {
            sets.iter().find_map(|set| confined_to(positions, set))
        }
        PatternCheck::Window { start, width } => window(positions, *start, *width),
        PatternCheck::RotatingWindow { width, starts } => {
            starts.iter().find_map(|start| window(positions, *start, *width))
        }
        PatternCheck::AlternateHouses { odd } => alternate_houses(positions, *odd),
        PatternCheck::NodalEnclosure { from, to } => nodal_enclosure(positions, *from, *to),
        PatternCheck::JupiterFromMoon(offsets) => jupiter_from_moon(positions, offsets),
        PatternCheck::BeneficsFromMoon { offsets, min } => {
            benefics_from_moon(positions, offsets, *min)
        }
        PatternCheck::DusthanaLord { house } => dusthana_lord(positions, houses, *house),
        PatternCheck::AnyDusthanaLordInDusthana => any_dusthana_lord_in_dusthana(positions, houses),
        PatternCheck::NeechaBhanga => neecha_bhanga(positions, houses),
        PatternCheck::NinthLordDignified => ninth_lord_dignified(positions, houses),
        PatternCheck::AllKendrasOccupied => all_kendras_occupied(positions),
        PatternCheck::AllPlacedIn { planets, houses: allowed } => {
            all_placed_in(positions, planets, allowed)
        }
        PatternCheck::KendraBeneficsClearDusthanas => kendra_benefics_clear_dusthanas(positions),
    }
}

/// Mercury counts as "not combust" only when its shortest arc to the Sun
/// exceeds `orb`. A missing Sun or Mercury fails the gate.
pub fn mercury_not_combust(positions: &[PlanetPosition], orb: f64) -> bool {
    match (find_planet(positions, Planet::Sun), find_planet(positions, Planet::Mercury)) {
        (Some(sun), Some(mercury)) => angular_distance(sun.longitude, mercury.longitude) > orb,
        _ => false,
    }
}

// --- Angular halo -------------------------------------------------------

/// House at `offset` from `reference` and the qualifying planets in it.
fn halo_side(
    positions: &[PlanetPosition],
    reference: Planet,
    offset: u8,
) -> Option<(u8, Vec<Planet>)> {
    let base = house_of(positions, reference)?;
    let target = house_from(base, offset);
    let occupants = positions
        .iter()
        .filter(|p| {
            p.house == target && p.planet != reference && !HALO_EXCLUDED.contains(&p.planet)
        })
        .map(|p| p.planet)
        .collect();
    Some((target, occupants))
}

fn halo_second(positions: &[PlanetPosition], reference: Planet) -> Option<PatternMatch> {
    let (house, planets) = halo_side(positions, reference, 2)?;
    if planets.is_empty() {
        return None;
    }
    let detail = format!("{} occupies the 2nd house from {}", join_planets(&planets), reference);
    Some(PatternMatch::new(planets, vec![house], detail))
}

fn halo_twelfth(positions: &[PlanetPosition], reference: Planet) -> Option<PatternMatch> {
    let (house, planets) = halo_side(positions, reference, 12)?;
    if planets.is_empty() {
        return None;
    }
    let detail = format!("{} occupies the 12th house from {}", join_planets(&planets), reference);
    Some(PatternMatch::new(planets, vec![house], detail))
}

fn halo_both(positions: &[PlanetPosition], reference: Planet) -> Option<PatternMatch> {
    let (second, ahead) = halo_side(positions, reference, 2)?;
    let (twelfth, behind) = halo_side(positions, reference, 12)?;
    if ahead.is_empty() || behind.is_empty() {
        return None;
    }
    let detail = format!(
        "{} flanks {} from the 2nd house and {} from the 12th",
        join_planets(&ahead),
        reference,
        join_planets(&behind)
    );
    let planets = ahead.into_iter().chain(behind).collect();
    Some(PatternMatch::new(planets, vec![second, twelfth], detail))
}

fn halo_neither(positions: &[PlanetPosition], reference: Planet) -> Option<PatternMatch> {
    let (_, ahead) = halo_side(positions, reference, 2)?;
    let (_, behind) = halo_side(positions, reference, 12)?;
    if !ahead.is_empty() || !behind.is_empty() {
        return None;
    }
    let base = house_of(positions, reference)?;
    let benefic_company = planets_in_house(positions, base)
        .into_iter()
        .any(|p| p != reference && is_benefic(p, positions));
    if benefic_company {
        return None;
    }
    let detail = format!(
        "the houses on either side of {} are empty and no benefic joins it in the {} house",
        reference,
        ordinal(base)
    );
    Some(PatternMatch::new(vec![reference], vec![base], detail))
}

// --- Nabhasa ------------------------------------------------------------

/// Positions of all seven classical planets, or `None` if any is missing.
fn classical_positions(positions: &[PlanetPosition]) -> Option<Vec<&PlanetPosition>> {
    CLASSICAL_PLANETS.iter().map(|planet| find_planet(positions, *planet)).collect()
}

fn occupied_houses(classical: &[&PlanetPosition]) -> Vec<u8> {
    classical.iter().map(|p| p.house).collect::<BTreeSet<_>>().into_iter().collect()
}

fn sign_count(positions: &[PlanetPosition], count: u8) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    let signs: BTreeSet<_> = classical.iter().map(|p| p.sign).collect();
    if signs.len() != count as usize {
        return None;
    }
    let detail = format!("the seven planets occupy {} distinct signs", signs.len());
    Some(PatternMatch::new(CLASSICAL_PLANETS.to_vec(), occupied_houses(&classical), detail))
}

fn uniform_modality(positions: &[PlanetPosition], modality: Modality) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    if !classical.iter().all(|p| p.sign.modality() == modality) {
        return None;
    }
    let label = match modality {
        Modality::Movable => "movable",
        Modality::Fixed => "fixed",
        Modality::Dual => "dual",
    };
    let detail = format!("all seven planets are in {label} signs");
    Some(PatternMatch::new(CLASSICAL_PLANETS.to_vec(), occupied_houses(&classical), detail))
}

fn kendra_polarity(positions: &[PlanetPosition], wanted: Polarity) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    let all_occupied = KENDRA.iter().all(|k| classical.iter().any(|p| p.house == *k));
    if !all_occupied {
        return None;
    }
    // Nodes in a kendra count towards the polarity test.
    let in_kendra: Vec<Planet> = KENDRA
        .iter()
        .flat_map(|k| planets_in_house(positions, *k))
        .collect();
    if !in_kendra.iter().all(|p| polarity(*p, positions) == Some(wanted)) {
        return None;
    }
    let label = match wanted {
        Polarity::Benefic => "benefics",
        Polarity::Malefic => "malefics",
    };
    let detail = format!("all four kendras are occupied and held only by {label}");
    Some(PatternMatch::new(in_kendra, KENDRA.to_vec(), detail))
}

fn confined_to(positions: &[PlanetPosition], set: &[u8]) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    if !classical.iter().all(|p| set.contains(&p.house)) {
        return None;
    }
    let list: Vec<String> = set.iter().map(|h| h.to_string()).collect();
    let detail = format!("all seven planets are confined to houses {}", list.join(", "));
    Some(PatternMatch::new(CLASSICAL_PLANETS.to_vec(), occupied_houses(&classical), detail))
}

fn window(positions: &[PlanetPosition], start: u8, width: u8) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    let inside = |house: u8| house_offset(start, house) <= width;
    if !classical.iter().all(|p| inside(p.house)) {
        return None;
    }
    let end = house_from(start, width);
    let detail = format!(
        "all seven planets lie within the {width} houses from the {} to the {}",
        ordinal(start),
        ordinal(end)
    );
    Some(PatternMatch::new(CLASSICAL_PLANETS.to_vec(), occupied_houses(&classical), detail))
}

/// Sorted occupied houses must be separated by even gaps, starting on the
/// requested parity.
fn alternate_houses(positions: &[PlanetPosition], odd: bool) -> Option<PatternMatch> {
    let classical = classical_positions(positions)?;
    let houses = occupied_houses(&classical);
    let first = *houses.first()?;
    if (first % 2 == 1) != odd {
        return None;
    }
    if !houses.windows(2).all(|pair| (pair[1] - pair[0]) % 2 == 0) {
        return None;
    }
    let detail = format!(
        "all seven planets occupy alternate houses from the {}",
        if odd { "1st" } else { "2nd" }
    );
    Some(PatternMatch::new(CLASSICAL_PLANETS.to_vec(), houses, detail))
}

/// Half-open circular containment: `house` lies in [start, end) walking
/// forward through the houses.
pub fn arc_contains(start: u8, end: u8, house: u8) -> bool {
    let span = (end as i32 - start as i32).rem_euclid(12);
    let distance = (house as i32 - start as i32).rem_euclid(12);
    distance < span
}

fn nodal_enclosure(positions: &[PlanetPosition], from: Planet, to: Planet) -> Option<PatternMatch> {
    let start = house_of(positions, from)?;
    let end = house_of(positions, to)?;
    if start == end {
        return None;
    }
    let classical = classical_positions(positions)?;
    let enclosed = classical
        .iter()
        .all(|p| p.house != start && arc_contains(start, end, p.house));
    if !enclosed {
        return None;
    }
    let detail = format!(
        "all seven planets lie between {} in the {} house and {} in the {}",
        from,
        ordinal(start),
        to,
        ordinal(end)
    );
    let mut planets = vec![from, to];
    planets.extend(CLASSICAL_PLANETS);
    Some(PatternMatch::new(planets, vec![start, end], detail))
}

// --- Lunar offsets ------------------------------------------------------

fn jupiter_from_moon(positions: &[PlanetPosition], offsets: &[u8]) -> Option<PatternMatch> {
    let moon = house_of(positions, Planet::Moon)?;
    let jupiter = house_of(positions, Planet::Jupiter)?;
    let offset = house_offset(moon, jupiter);
    if !offsets.contains(&offset) {
        return None;
    }
    let houses = if moon == jupiter { vec![moon] } else { vec![moon, jupiter] };
    let detail = format!("Jupiter is in the {} house counted from the Moon", ordinal(offset));
    Some(PatternMatch::new(vec![Planet::Moon, Planet::Jupiter], houses, detail))
}

fn benefics_from_moon(
    positions: &[PlanetPosition],
    offsets: &[u8],
    min: usize,
) -> Option<PatternMatch> {
    let moon = house_of(positions, Planet::Moon)?;
    let mut planets = Vec::new();
    let mut houses = BTreeSet::new();
    for benefic in NATURAL_BENEFICS {
        if let Some(house) = house_of(positions, benefic) {
            if offsets.contains(&house_offset(moon, house)) {
                planets.push(benefic);
                houses.insert(house);
            }
        }
    }
    if planets.len() < min.max(1) {
        return None;
    }
    let list: Vec<String> = offsets.iter().map(|o| ordinal(*o)).collect();
    let detail = format!("{} occupy the {} from the Moon", join_planets(&planets), list.join("/"));
    let mut result = PatternMatch::new(planets, houses.into_iter().collect(), detail);
    if result.planets.len() == NATURAL_BENEFICS.len() {
        result.strength = Some(Strength::Strong);
    }
    Some(result)
}

// --- Lord based ---------------------------------------------------------

fn dusthana_lord(
    positions: &[PlanetPosition],
    houses: &[HouseData],
    house: u8,
) -> Option<PatternMatch> {
    let (lord, placed) = lord_placement(positions, houses, house)?;
    if !is_dusthana(placed) {
        return None;
    }
    let detail = format!(
        "{lord}, lord of the {}, sits in the {} house",
        ordinal(house),
        ordinal(placed)
    );
    Some(PatternMatch::new(vec![lord], vec![house, placed], detail))
}

fn any_dusthana_lord_in_dusthana(
    positions: &[PlanetPosition],
    houses: &[HouseData],
) -> Option<PatternMatch> {
    let mut planets: Vec<Planet> = Vec::new();
    let mut involved = BTreeSet::new();
    let mut parts = Vec::new();
    for house in DUSTHANA {
        if let Some((lord, placed)) = lord_placement(positions, houses, house) {
            if is_dusthana(placed) {
                if !planets.contains(&lord) {
                    planets.push(lord);
                }
                involved.insert(house);
                involved.insert(placed);
                parts.push(format!(
                    "the {} lord {lord} is in the {}",
                    ordinal(house),
                    ordinal(placed)
                ));
            }
        }
    }
    if planets.is_empty() {
        return None;
    }
    let mut result = PatternMatch::new(planets, involved.into_iter().collect(), parts.join("; "));
    if parts.len() >= 2 {
        result.strength = Some(Strength::Strong);
    }
    Some(result)
}

fn neecha_bhanga(positions: &[PlanetPosition], houses: &[HouseData]) -> Option<PatternMatch> {
    let moon = house_of(positions, Planet::Moon);
    let mut planets = Vec::new();
    let mut involved = BTreeSet::new();
    let mut parts = Vec::new();
    for planet in CLASSICAL_PLANETS {
        let Some(position) = find_planet(positions, planet) else { continue };
        if position.dignity != Dignity::Debilitated {
            continue;
        }
        let Some(dispositor) = house_lord(houses, position.house) else { continue };
        let Some(dispositor_house) = house_of(positions, dispositor) else { continue };
        let from_moon = moon.map(|m| is_kendra(house_offset(m, dispositor_house))).unwrap_or(false);
        if is_kendra(dispositor_house) || from_moon {
            planets.push(planet);
            if dispositor != planet && !planets.contains(&dispositor) {
                planets.push(dispositor);
            }
            involved.insert(position.house);
            involved.insert(dispositor_house);
            parts.push(format!(
                "debilitated {planet} is rescued by its dispositor {dispositor} in a kendra"
            ));
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(PatternMatch::new(planets, involved.into_iter().collect(), parts.join("; ")))
}

fn ninth_lord_dignified(
    positions: &[PlanetPosition],
    houses: &[HouseData],
) -> Option<PatternMatch> {
    let (lord, placed) = lord_placement(positions, houses, 9)?;
    let dignity = find_planet(positions, lord)?.dignity;
    let strong = matches!(dignity, Dignity::Exalted | Dignity::OwnSign | Dignity::Moolatrikona);
    if !(strong && (is_kendra(placed) || is_trikona(placed))) {
        return None;
    }
    let detail = format!(
        "the 9th lord {lord} is in the {} house in {dignity} dignity",
        ordinal(placed)
    );
    let mut result = PatternMatch::new(vec![lord], vec![9, placed], detail);
    if dignity == Dignity::Exalted {
        result.strength = Some(Strength::Strong);
    }
    Some(result)
}

fn all_kendras_occupied(positions: &[PlanetPosition]) -> Option<PatternMatch> {
    let mut planets = Vec::new();
    for kendra in KENDRA {
        let occupants = planets_in_house(positions, kendra);
        if occupants.is_empty() {
            return None;
        }
        planets.extend(occupants);
    }
    let detail = "every kendra holds at least one planet".to_string();
    Some(PatternMatch::new(planets, KENDRA.to_vec(), detail))
}

fn all_placed_in(
    positions: &[PlanetPosition],
    planets: &[Planet],
    allowed: &[u8],
) -> Option<PatternMatch> {
    let mut involved = BTreeSet::new();
    for planet in planets {
        let house = house_of(positions, *planet)?;
        if !allowed.contains(&house) {
            return None;
        }
        involved.insert(house);
    }
    let detail = format!("{} all occupy favourable houses", join_planets(planets));
    Some(PatternMatch::new(planets.to_vec(), involved.into_iter().collect(), detail))
}

fn kendra_benefics_clear_dusthanas(positions: &[PlanetPosition]) -> Option<PatternMatch> {
    let benefics: Vec<&PlanetPosition> = positions
        .iter()
        .filter(|p| is_kendra(p.house) && is_benefic(p.planet, positions))
        .collect();
    if benefics.is_empty() {
        return None;
    }
    let afflicted = [6u8, 8]
        .iter()
        .any(|h| planets_in_house(positions, *h).into_iter().any(|p| is_malefic(p, positions)));
    if afflicted {
        return None;
    }
    let planets: Vec<Planet> = benefics.iter().map(|p| p.planet).collect();
    let houses: Vec<u8> = benefics
        .iter()
        .map(|p| p.house)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let detail = format!(
        "{} in kendras with the 6th and 8th free of malefics",
        join_planets(&planets)
    );
    Some(PatternMatch::new(planets, houses, detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::chart::types::Chart;

    /// Aries rising so that sign index + 1 equals the house number.
    fn chart(longitudes: [f64; 8]) -> Chart {
        let planets = [
            Planet::Sun,
            Planet::Moon,
            Planet::Mars,
            Planet::Mercury,
            Planet::Jupiter,
            Planet::Venus,
            Planet::Saturn,
            Planet::Rahu,
        ];
        planets
            .iter()
            .zip(longitudes)
            .fold(ChartBuilder::new(5.0), |b, (planet, lon)| b.planet(*planet, lon))
            .build()
            .unwrap()
    }

    fn check(chart: &Chart, pattern: PatternCheck) -> Option<PatternMatch> {
        evaluate_pattern(&pattern, &chart.positions, &chart.houses)
    }

    #[test]
    fn test_halo_sides_can_cofire() {
        // Moon in 4, Mars in 5, Venus in 3
        let c = chart([200.0, 100.0, 130.0, 215.0, 250.0, 70.0, 310.0, 20.0]);
        assert!(check(&c, PatternCheck::HaloSecond(Planet::Moon)).is_some());
        assert!(check(&c, PatternCheck::HaloTwelfth(Planet::Moon)).is_some());
        let both = check(&c, PatternCheck::HaloBoth(Planet::Moon)).unwrap();
        assert_eq!(both.planets, vec![Planet::Mars, Planet::Venus]);
        assert_eq!(both.houses, vec![5, 3]);
        assert!(check(&c, PatternCheck::HaloNeither(Planet::Moon)).is_none());
    }

    #[test]
    fn test_halo_ignores_sun_and_nodes() {
        // Moon in 4; only the Sun (5) and Rahu (3) flank it
        let c = chart([130.0, 100.0, 200.0, 215.0, 250.0, 300.0, 310.0, 70.0]);
        assert!(check(&c, PatternCheck::HaloSecond(Planet::Moon)).is_none());
        assert!(check(&c, PatternCheck::HaloTwelfth(Planet::Moon)).is_none());
        assert!(check(&c, PatternCheck::HaloNeither(Planet::Moon)).is_some());
    }

    #[test]
    fn test_halo_neither_needs_no_benefic_company() {
        // Moon and Jupiter both in 4, flanks empty
        let c = chart([200.0, 100.0, 220.0, 215.0, 105.0, 300.0, 310.0, 20.0]);
        assert!(check(&c, PatternCheck::HaloNeither(Planet::Moon)).is_none());
    }

    #[test]
    fn test_sign_count_exact() {
        // Houses 1, 2, 3 only
        let c = chart([10.0, 15.0, 40.0, 45.0, 70.0, 75.0, 20.0, 200.0]);
        let found = check(&c, PatternCheck::SignCount(3)).unwrap();
        assert_eq!(found.houses, vec![1, 2, 3]);
        assert!(check(&c, PatternCheck::SignCount(2)).is_none());
        assert!(check(&c, PatternCheck::SignCount(4)).is_none());
    }

    #[test]
    fn test_uniform_modality() {
        // Aries, Cancer, Libra, Capricorn
        let c = chart([10.0, 95.0, 185.0, 275.0, 100.0, 190.0, 280.0, 40.0]);
        assert!(check(&c, PatternCheck::UniformModality(Modality::Movable)).is_some());
        assert!(check(&c, PatternCheck::UniformModality(Modality::Fixed)).is_none());
    }

    #[test]
    fn test_kendra_polarity_uses_moon_phase() {
        // Kendras: Moon 1, Jupiter 4, Venus 7, Mercury 10. Sun ahead of the
        // Moon makes it waning and therefore malefic.
        let waning = chart([40.0, 10.0, 70.0, 280.0, 100.0, 190.0, 65.0, 140.0]);
        assert!(check(&waning, PatternCheck::KendraPolarity(Polarity::Benefic)).is_none());

        // Sun behind the Moon => waxing, Moon benefic
        let waxing = chart([340.0, 10.0, 70.0, 280.0, 100.0, 190.0, 65.0, 140.0]);
        let found = check(&waxing, PatternCheck::KendraPolarity(Polarity::Benefic)).unwrap();
        assert_eq!(found.houses, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_kendra_polarity_counts_nodes() {
        // Waxing Moon 1, Jupiter 4, Venus 7, Mercury 10, but Rahu joins the
        // Moon in 1 and Ketu joins Venus in 7
        let c = chart([340.0, 10.0, 70.0, 280.0, 100.0, 190.0, 65.0, 15.0]);
        assert!(check(&c, PatternCheck::KendraPolarity(Polarity::Benefic)).is_none());
        assert!(check(&c, PatternCheck::KendraPolarity(Polarity::Malefic)).is_none());
    }

    #[test]
    fn test_kendra_polarity_malefics() {
        // Sun 1, Mars 4, Saturn 7, waning Moon 10; benefics in 2, 5, 12
        let c = chart([10.0, 280.0, 100.0, 40.0, 130.0, 340.0, 190.0, 70.0]);
        let found = check(&c, PatternCheck::KendraPolarity(Polarity::Malefic)).unwrap();
        assert_eq!(found.planets, vec![Planet::Sun, Planet::Mars, Planet::Saturn, Planet::Moon]);
        assert_eq!(found.houses, vec![1, 4, 7, 10]);
        assert!(check(&c, PatternCheck::KendraPolarity(Polarity::Benefic)).is_none());
    }

    #[test]
    fn test_uniform_fixed_and_dual() {
        // Taurus, Leo, Scorpio, Aquarius
        let fixed = chart([40.0, 130.0, 215.0, 50.0, 305.0, 135.0, 220.0, 70.0]);
        assert!(check(&fixed, PatternCheck::UniformModality(Modality::Fixed)).is_some());
        assert!(check(&fixed, PatternCheck::UniformModality(Modality::Movable)).is_none());
        assert!(check(&fixed, PatternCheck::UniformModality(Modality::Dual)).is_none());

        // Gemini, Virgo, Sagittarius, Pisces
        let dual = chart([65.0, 155.0, 245.0, 80.0, 335.0, 160.0, 250.0, 10.0]);
        assert!(check(&dual, PatternCheck::UniformModality(Modality::Dual)).is_some());
        assert!(check(&dual, PatternCheck::UniformModality(Modality::Fixed)).is_none());
    }

    #[test]
    fn test_confined_to_any_of() {
        let pairs = PatternCheck::ConfinedToAnyOf(&[&[1, 4], &[4, 7], &[7, 10], &[10, 1]]);
        // Houses 10 and 1 only, matched by the wrapping pair
        let c = chart([280.0, 10.0, 285.0, 290.0, 15.0, 295.0, 20.0, 100.0]);
        let found = check(&c, pairs.clone()).unwrap();
        assert_eq!(found.houses, vec![1, 10]);

        // Saturn in 4 spreads the planets over three houses
        let spread = chart([280.0, 10.0, 285.0, 290.0, 15.0, 295.0, 100.0, 160.0]);
        assert!(check(&spread, pairs).is_none());
    }

    #[test]
    fn test_window_and_rotation() {
        // Houses 4..=7
        let c = chart([95.0, 100.0, 130.0, 160.0, 190.0, 125.0, 185.0, 20.0]);
        assert!(check(&c, PatternCheck::Window { start: 4, width: 4 }).is_some());
        assert!(check(&c, PatternCheck::Window { start: 1, width: 4 }).is_none());
        // Wrapping window 10..=1
        let w = chart([280.0, 300.0, 330.0, 340.0, 10.0, 285.0, 15.0, 100.0]);
        assert!(check(&w, PatternCheck::Window { start: 10, width: 4 }).is_some());
        let rotating = PatternCheck::RotatingWindow {
            width: 7,
            starts: &[2, 3, 5, 6, 8, 9, 11, 12],
        };
        assert!(check(&w, rotating).is_some());
    }

    #[test]
    fn test_alternate_houses_parity() {
        // Houses 1, 3, 5, 9, 11
        let odd = chart([10.0, 70.0, 130.0, 250.0, 310.0, 15.0, 75.0, 100.0]);
        assert!(check(&odd, PatternCheck::AlternateHouses { odd: true }).is_some());
        assert!(check(&odd, PatternCheck::AlternateHouses { odd: false }).is_none());
        // A house 2 breaks the even gaps
        let mixed = chart([10.0, 40.0, 130.0, 250.0, 310.0, 15.0, 75.0, 100.0]);
        assert!(check(&mixed, PatternCheck::AlternateHouses { odd: true }).is_none());
    }

    #[test]
    fn test_arc_contains_half_open() {
        assert!(arc_contains(3, 9, 3));
        assert!(arc_contains(3, 9, 8));
        assert!(!arc_contains(3, 9, 9));
        assert!(arc_contains(11, 5, 1));
        assert!(!arc_contains(11, 5, 6));
    }

    #[test]
    fn test_nodal_enclosure() {
        // Rahu in 1 (Ketu in 7); planets in 2..=6
        let c = chart([40.0, 70.0, 100.0, 130.0, 160.0, 45.0, 75.0, 10.0]);
        let sarpa = PatternCheck::NodalEnclosure { from: Planet::Rahu, to: Planet::Ketu };
        let amrita = PatternCheck::NodalEnclosure { from: Planet::Ketu, to: Planet::Rahu };
        let found = check(&c, sarpa.clone()).unwrap();
        assert_eq!(found.houses, vec![1, 7]);
        assert!(check(&c, amrita).is_none());

        // A planet sharing Rahu's house is not strictly inside
        let touching = chart([40.0, 70.0, 100.0, 130.0, 160.0, 45.0, 15.0, 10.0]);
        assert!(check(&touching, sarpa).is_none());
    }

    #[test]
    fn test_nodal_enclosure_from_ketu() {
        // Rahu in 7 puts Ketu in 1; planets in 2..=6
        let c = chart([40.0, 70.0, 100.0, 50.0, 130.0, 160.0, 45.0, 190.0]);
        let amrita = PatternCheck::NodalEnclosure { from: Planet::Ketu, to: Planet::Rahu };
        let found = check(&c, amrita).unwrap();
        assert_eq!(found.houses, vec![1, 7]);
        assert_eq!(&found.planets[..2], &[Planet::Ketu, Planet::Rahu]);
        let sarpa = PatternCheck::NodalEnclosure { from: Planet::Rahu, to: Planet::Ketu };
        assert!(check(&c, sarpa).is_none());
    }

    #[test]
    fn test_mercury_gate() {
        let c = chart([40.0, 100.0, 130.0, 60.0, 250.0, 300.0, 310.0, 20.0]);
        assert!(mercury_not_combust(&c.positions, 14.0));
        let close = chart([40.0, 100.0, 130.0, 48.0, 250.0, 300.0, 310.0, 20.0]);
        assert!(!mercury_not_combust(&close.positions, 14.0));
        // Exactly on the orb is still combust
        let edge = chart([40.0, 100.0, 130.0, 54.0, 250.0, 300.0, 310.0, 20.0]);
        assert!(!mercury_not_combust(&edge.positions, 14.0));
    }

    #[test]
    fn test_jupiter_from_moon() {
        // Moon 5, Jupiter 8
        let c = chart([10.0, 130.0, 40.0, 15.0, 220.0, 70.0, 300.0, 100.0]);
        let found = check(&c, PatternCheck::JupiterFromMoon(&[1, 4, 7, 10])).unwrap();
        assert_eq!(found.houses, vec![5, 8]);
        assert!(check(&c, PatternCheck::JupiterFromMoon(&[6, 8, 12])).is_none());
    }

    #[test]
    fn test_viparita_lords() {
        // Aries rising: 6th lord Mercury, 8th lord Mars, 12th lord Jupiter.
        // Mercury in 8 (Scorpio), Mars in 12 (Pisces)
        let c = chart([10.0, 40.0, 340.0, 220.0, 100.0, 70.0, 300.0, 130.0]);
        let found = check(&c, PatternCheck::AnyDusthanaLordInDusthana).unwrap();
        assert_eq!(found.planets, vec![Planet::Mercury, Planet::Mars]);
        assert_eq!(found.strength, Some(Strength::Strong));
        assert!(check(&c, PatternCheck::DusthanaLord { house: 6 }).is_some());
        assert!(check(&c, PatternCheck::DusthanaLord { house: 12 }).is_none());
    }

    #[test]
    fn test_neecha_bhanga() {
        // Mars debilitated in Cancer (4); its dispositor Moon in 10 (kendra)
        let c = chart([40.0, 280.0, 100.0, 60.0, 250.0, 300.0, 310.0, 20.0]);
        let found = check(&c, PatternCheck::NeechaBhanga).unwrap();
        assert_eq!(found.planets, vec![Planet::Mars, Planet::Moon]);
        assert_eq!(found.houses, vec![4, 10]);
    }
}
