use super::finding;
use super::policy::LegacyRule;
use crate::chart::nakshatra::NAKSHATRA_ORDER;
use crate::chart::types::{HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::find_planet;
use crate::vedic::yogas::types::{Yoga, YogaCategory};

/// Planets whose lunar mansion is reported.
const NAKSHATRA_PLANETS: [Planet; 6] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
];

pub(super) fn detect(positions: &[PlanetPosition], _houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for planet in NAKSHATRA_PLANETS {
        let Some(position) = find_planet(positions, planet) else { continue };
        let Some((_, name, lord)) = NAKSHATRA_ORDER.get(usize::from(position.nakshatra_index))
        else {
            continue;
        };
        yogas.push(finding(
            YogaCategory::Nakshatra,
            format!("{planet} in {name} Nakshatra"),
            vec![planet],
            vec![position.house],
            LegacyRule::PlanetInNakshatra,
            format!(
                "{planet} is in {name} nakshatra, pada {}, ruled by {lord}.",
                position.pada
            ),
            format!("{planet} acts through the nature of {name} and its lord {lord}."),
        ));
    }
    yogas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;

    #[test]
    fn test_mansions_for_six_planets() {
        let chart = ChartBuilder::new(250.0)
            .planet(Planet::Sun, 100.5)
            .planet(Planet::Moon, 33.2)
            .planet(Planet::Mars, 298.0)
            .planet(Planet::Mercury, 118.0)
            .planet(Planet::Jupiter, 95.0)
            .planet(Planet::Venus, 140.0)
            .planet(Planet::Saturn, 200.0)
            .planet(Planet::Rahu, 10.0)
            .build()
            .unwrap();
        let yogas = detect(&chart.positions, &chart.houses);
        assert_eq!(yogas.len(), 6);
        assert!(yogas.iter().all(|y| y.planets[0] != Planet::Saturn));

        let moon = yogas.iter().find(|y| y.name == "Moon in Krittika Nakshatra").unwrap();
        assert!(moon.description.contains("ruled by Sun"));
        // Taurus is the 6th house from a Sagittarius ascendant
        assert_eq!(moon.houses, vec![6]);
        assert!(yogas.iter().any(|y| y.name == "Sun in Pushya Nakshatra"));
    }
}
