use super::policy::LegacyRule;
use super::{finding, house_meaning};
use crate::chart::types::{HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::{house_from, house_of, join_planets, ordinal, planets_in_house};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

const ASPECTING_PLANETS: [Planet; 4] =
    [Planet::Jupiter, Planet::Saturn, Planet::Mars, Planet::Rahu];

/// Counted house offset and the name of the aspect cast across it.
const ASPECTS: [(u8, &str); 5] = [
    (7, "opposition"),
    (4, "square"),
    (5, "trine"),
    (9, "trine"),
    (10, "square"),
];

/// Aspects that land on an occupied house.
pub(super) fn detect(positions: &[PlanetPosition], _houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for planet in ASPECTING_PLANETS {
        let Some(from) = house_of(positions, planet) else { continue };
        for (offset, kind) in ASPECTS {
            let to = house_from(from, offset);
            let targets = planets_in_house(positions, to);
            if targets.is_empty() {
                continue;
            }
            let mut planets = vec![planet];
            planets.extend(targets.iter().copied());
            yogas.push(finding(
                YogaCategory::Aspect,
                format!("{planet} {kind} aspect from {} to {}", ordinal(from), ordinal(to)),
                planets,
                vec![from, to],
                LegacyRule::GrahaDrishti,
                format!(
                    "{planet} in the {} house casts a {kind} aspect on {} in the {}.",
                    ordinal(from),
                    join_planets(&targets),
                    ordinal(to)
                ),
                format!(
                    "{planet} colours the matters of the {} house: {}.",
                    ordinal(to),
                    house_meaning(to)
                ),
            ));
        }
    }
    yogas
}
