use super::policy::LegacyRule;
use super::{finding, house_meaning};
use crate::chart::types::{HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::ordinal;
use crate::vedic::yogas::types::{Yoga, YogaCategory};

/// Natural significations of the classical planets.
const PLANET_EFFECTS: [(Planet, &str); 7] = [
    (Planet::Sun, "authority, vitality, father, government"),
    (Planet::Moon, "emotions, mother, public, mind"),
    (Planet::Mars, "courage, energy, siblings, property"),
    (Planet::Mercury, "intelligence, communication, business"),
    (Planet::Jupiter, "wisdom, wealth, children, fortune"),
    (Planet::Venus, "luxury, arts, spouse, vehicles"),
    (Planet::Saturn, "discipline, longevity, servants, delays"),
];

pub(super) fn signification(planet: Planet) -> Option<&'static str> {
    PLANET_EFFECTS.iter().find(|(p, _)| *p == planet).map(|(_, text)| *text)
}

/// One finding per classical planet for the house it occupies.
pub(super) fn detect(positions: &[PlanetPosition], _houses: &[HouseData]) -> Vec<Yoga> {
    positions
        .iter()
        .filter(|p| p.planet.is_classical())
        .filter_map(|p| {
            let nature = signification(p.planet)?;
            let planet = p.planet;
            let house = p.house;
            Some(finding(
                YogaCategory::Placement,
                format!("{planet} in {} House", ordinal(house)),
                vec![planet],
                vec![house],
                LegacyRule::PlanetInHouse,
                format!(
                    "{planet} ({nature}) occupies the {} house ({}).",
                    ordinal(house),
                    house_meaning(house)
                ),
                format!(
                    "{planet} shapes the matters of the {} house: {}.",
                    ordinal(house),
                    house_meaning(house)
                ),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::chart::types::CLASSICAL_PLANETS;

    #[test]
    fn test_one_finding_per_classical_planet() {
        // Aries rising: Sun in Aries, Saturn in Capricorn, Rahu in Gemini
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 10.0)
            .planet(Planet::Moon, 100.0)
            .planet(Planet::Mars, 130.0)
            .planet(Planet::Mercury, 40.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 330.0)
            .planet(Planet::Saturn, 280.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let yogas = detect(&chart.positions, &chart.houses);
        assert_eq!(yogas.len(), 7);
        assert!(yogas.iter().all(|y| !y.planets.contains(&Planet::Rahu)));

        let sun = yogas.iter().find(|y| y.name == "Sun in 1st House").unwrap();
        assert_eq!(sun.houses, vec![1]);
        assert!(sun.description.contains("authority, vitality"));
        assert!(sun.description.contains("self, personality"));
        assert!(yogas.iter().any(|y| y.name == "Saturn in 10th House"));
    }

    #[test]
    fn test_every_classical_planet_has_text() {
        for planet in CLASSICAL_PLANETS {
            assert!(signification(planet).is_some(), "{planet}");
        }
        assert!(signification(Planet::Ketu).is_none());
    }
}
