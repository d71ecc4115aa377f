//! Wealth combinations built from the lords of houses 1, 2, 5, 9 and 11.

use super::finding;
use super::policy::LegacyRule;
use crate::chart::types::{Dignity, HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::{
    are_conjunct, find_planet, house_of, house_offset, is_kendra, is_trikona, is_upachaya,
    join_planets, lord_placement, ordinal,
};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

const WEALTH_HOUSES: [u8; 5] = [1, 2, 5, 9, 11];

pub(super) fn detect(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = lord_conjunctions(positions, houses);
    yogas.extend(gain_lords_exchanged(positions, houses));
    yogas.extend(dignified_lords(positions, houses));
    yogas.extend(lakshmi(positions, houses));
    yogas.extend(vasumati(positions));
    yogas
}

/// Every pair of wealth lords sharing a house.
fn lord_conjunctions(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for (i, first) in WEALTH_HOUSES.iter().enumerate() {
        for second in &WEALTH_HOUSES[i + 1..] {
            let (Some((a, placed)), Some((b, _))) = (
                lord_placement(positions, houses, *first),
                lord_placement(positions, houses, *second),
            ) else {
                continue;
            };
            if a == b || !are_conjunct(positions, a, b) {
                continue;
            }
            yogas.push(finding(
                YogaCategory::Dhana,
                format!("Dhana Yoga ({} and {} Lords)", ordinal(*first), ordinal(*second)),
                vec![a, b],
                vec![*first, *second, placed],
                LegacyRule::DhanaLordConjunction,
                format!(
                    "The {} lord {a} and the {} lord {b} are conjunct in the {} house.",
                    ordinal(*first),
                    ordinal(*second),
                    ordinal(placed)
                ),
                "Wealth through the combined significations of both houses.",
            ));
        }
    }
    yogas
}

/// 2nd lord in the 11th or 11th lord in the 2nd.
fn gain_lords_exchanged(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for (from, to) in [(2u8, 11u8), (11, 2)] {
        let Some((lord, placed)) = lord_placement(positions, houses, from) else { continue };
        if placed != to {
            continue;
        }
        yogas.push(finding(
            YogaCategory::Dhana,
            format!("Dhana Yoga ({} Lord in {})", ordinal(from), ordinal(to)),
            vec![lord],
            vec![from, to],
            LegacyRule::DhanaLordExchangePlacement,
            format!("The {} lord {lord} sits in the {} house.", ordinal(from), ordinal(to)),
            "Income and savings support each other; steady financial growth.",
        ));
    }
    yogas
}

/// 2nd or 11th lord strong by sign and well placed.
fn dignified_lords(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for house in [2u8, 11] {
        let Some((lord, placed)) = lord_placement(positions, houses, house) else { continue };
        let Some(position) = find_planet(positions, lord) else { continue };
        let dignified = matches!(
            position.dignity,
            Dignity::Exalted | Dignity::OwnSign | Dignity::Moolatrikona
        );
        if !dignified || !(is_kendra(placed) || is_trikona(placed)) {
            continue;
        }
        yogas.push(finding(
            YogaCategory::Dhana,
            format!("Dhana Yoga (Dignified {} Lord)", ordinal(house)),
            vec![lord],
            vec![house, placed],
            LegacyRule::DhanaLordDignified,
            format!(
                "The {} lord {lord} is {} in the {} house.",
                ordinal(house),
                position.dignity,
                ordinal(placed)
            ),
            "Substantial wealth that endures.",
        ));
    }
    yogas
}

/// Ninth lord in a kendra while the lagna lord is dignified.
fn lakshmi(positions: &[PlanetPosition], houses: &[HouseData]) -> Option<Yoga> {
    let (ninth, placed) = lord_placement(positions, houses, 9)?;
    let (lagna_lord, _) = lord_placement(positions, houses, 1)?;
    let dignity = find_planet(positions, lagna_lord)?.dignity;
    if !is_kendra(placed) || !matches!(dignity, Dignity::Exalted | Dignity::OwnSign) {
        return None;
    }
    let planets = if ninth == lagna_lord { vec![ninth] } else { vec![ninth, lagna_lord] };
    Some(finding(
        YogaCategory::Dhana,
        "Lakshmi Yoga",
        planets,
        vec![9, placed],
        LegacyRule::LakshmiNinthLord,
        format!(
            "The 9th lord {ninth} is in the {} house and the lagna lord {lagna_lord} is {dignity}.",
            ordinal(placed)
        ),
        "Blessings of fortune; wealth, refinement and generosity.",
    ))
}

/// Natural benefics in upachaya houses counted from the Moon.
fn vasumati(positions: &[PlanetPosition]) -> Option<Yoga> {
    let moon = house_of(positions, Planet::Moon)?;
    let mut planets = Vec::new();
    let mut involved = Vec::new();
    for position in positions {
        let benefic = matches!(position.planet, Planet::Jupiter | Planet::Venus | Planet::Mercury);
        if benefic && is_upachaya(house_offset(moon, position.house)) {
            planets.push(position.planet);
            involved.push(position.house);
        }
    }
    if planets.is_empty() {
        return None;
    }
    Some(finding(
        YogaCategory::Dhana,
        "Vasumati Yoga",
        planets.clone(),
        involved,
        LegacyRule::VasumatiFromMoon,
        format!("{} occupy upachaya houses from the Moon.", join_planets(&planets)),
        "Steady accumulation of wealth; never in want.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;

    #[test]
    fn test_second_and_eleventh_lords() {
        // Aries rising: Venus rules the 2nd, Saturn the 11th; both in Aquarius (11th)
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 130.0)
            .planet(Planet::Moon, 100.0)
            .planet(Planet::Mars, 200.0)
            .planet(Planet::Mercury, 150.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 305.0)
            .planet(Planet::Saturn, 310.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let yogas = detect(&chart.positions, &chart.houses);
        let names: Vec<&str> = yogas.iter().map(|y| y.name.as_str()).collect();
        assert!(names.contains(&"Dhana Yoga (2nd and 11th Lords)"));
        assert!(names.contains(&"Dhana Yoga (2nd Lord in 11th)"));
        assert!(!names.contains(&"Dhana Yoga (11th Lord in 2nd)"));
    }

    #[test]
    fn test_names_unique_within_family() {
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 10.0)
            .planet(Planet::Moon, 15.0)
            .planet(Planet::Mars, 20.0)
            .planet(Planet::Mercury, 40.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 300.0)
            .planet(Planet::Saturn, 310.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let yogas = detect(&chart.positions, &chart.houses);
        let mut names: Vec<&str> = yogas.iter().map(|y| y.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
