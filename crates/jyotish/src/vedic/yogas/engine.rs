//! Evaluates catalog definitions against a chart.

use crate::chart::types::{Dignity, HouseData, Planet, PlanetPosition};
use crate::settings::DetectionSettings;
use crate::vedic::yogas::catalog::{Detection, Gate, StrengthCondition, YogaDefinition};
use crate::vedic::yogas::helpers::{
    find_planet, house_of, is_kendra, is_trikona, join_planets, ordinal,
};
use crate::vedic::yogas::predicates::{evaluate_pattern, mercury_not_combust};
use crate::vedic::yogas::types::{Strength, Yoga};

/// Facts a strength rule can inspect.
struct MatchContext {
    dignity: Option<Dignity>,
    anchor: Option<u8>,
    planet_count: usize,
}

struct Evidence {
    planets: Vec<Planet>,
    houses: Vec<u8>,
    description: String,
    strength: Strength,
}

/// Evaluate one definition with default settings.
pub fn evaluate(
    definition: &YogaDefinition,
    positions: &[PlanetPosition],
    houses: &[HouseData],
) -> Option<Yoga> {
    evaluate_with(definition, positions, houses, &DetectionSettings::default())
}

/// Evaluate one definition. An unmatched definition yields `None`.
pub fn evaluate_with(
    definition: &YogaDefinition,
    positions: &[PlanetPosition],
    houses: &[HouseData],
    settings: &DetectionSettings,
) -> Option<Yoga> {
    let evidence = match &definition.detection {
        Detection::AngularPlacement { planet, houses: eligible, dignities } => {
            angular_placement(definition, positions, *planet, eligible, dignities)
        }
        Detection::Conjunction { planets, gate } => {
            conjunction(definition, positions, planets, *gate, settings)
        }
        Detection::HousePlacement { planets, houses: eligible, primary } => {
            house_placement(positions, planets, eligible, *primary)
        }
        Detection::Pattern(check) => {
            let found = evaluate_pattern(check, positions, houses)?;
            let strength = found.strength.unwrap_or_else(|| {
                resolve_strength(
                    definition,
                    &MatchContext {
                        dignity: None,
                        anchor: found.houses.first().copied(),
                        planet_count: found.planets.len(),
                    },
                )
            });
            Some(Evidence {
                description: sentence(&found.detail),
                planets: found.planets,
                houses: found.houses,
                strength,
            })
        }
    }?;

    log::trace!("{} matched ({})", definition.name, evidence.strength);

    Some(Yoga {
        category: definition.category,
        name: definition.name.to_string(),
        planets: evidence.planets,
        houses: evidence.houses,
        strength: evidence.strength,
        description: evidence.description,
        effects: definition.effects.to_string(),
    })
}

fn angular_placement(
    definition: &YogaDefinition,
    positions: &[PlanetPosition],
    planet: Planet,
    eligible: &[u8],
    dignities: &[Dignity],
) -> Option<Evidence> {
    let position = find_planet(positions, planet)?;
    if !eligible.contains(&position.house) || !dignities.contains(&position.dignity) {
        return None;
    }
    let strength = resolve_strength(
        definition,
        &MatchContext {
            dignity: Some(position.dignity),
            anchor: Some(position.house),
            planet_count: 1,
        },
    );
    Some(Evidence {
        planets: vec![planet],
        houses: vec![position.house],
        description: format!(
            "{planet} occupies the {} house in {} dignity.",
            ordinal(position.house),
            position.dignity
        ),
        strength,
    })
}

fn conjunction(
    definition: &YogaDefinition,
    positions: &[PlanetPosition],
    planets: &[Planet],
    gate: Option<Gate>,
    settings: &DetectionSettings,
) -> Option<Evidence> {
    let (first, rest) = planets.split_first()?;
    let shared = house_of(positions, *first)?;
    for planet in rest {
        if house_of(positions, *planet)? != shared {
            return None;
        }
    }
    match gate {
        Some(Gate::MercuryNotCombust) => {
            if !mercury_not_combust(positions, settings.mercury_combustion_orb) {
                log::trace!("{} vetoed: Mercury combust", definition.name);
                return None;
            }
        }
        None => {}
    }
    let strength = resolve_strength(
        definition,
        &MatchContext {
            dignity: None,
            anchor: Some(shared),
            planet_count: planets.len(),
        },
    );
    Some(Evidence {
        planets: planets.to_vec(),
        houses: vec![shared],
        description: format!(
            "{} are conjunct in the {} house.",
            join_planets(planets),
            ordinal(shared)
        ),
        strength,
    })
}

fn house_placement(
    positions: &[PlanetPosition],
    planets: &[Planet],
    eligible: &[u8],
    primary: Planet,
) -> Option<Evidence> {
    let mut found = Vec::new();
    let mut occupied = Vec::new();
    for planet in planets {
        if let Some(house) = house_of(positions, *planet) {
            if eligible.contains(&house) {
                found.push(*planet);
                if !occupied.contains(&house) {
                    occupied.push(house);
                }
            }
        }
    }
    if found.is_empty() {
        return None;
    }
    let strength = if found.contains(&primary) { Strength::Strong } else { Strength::Moderate };
    let list: Vec<String> = occupied.iter().map(|h| ordinal(*h)).collect();
    let description = format!(
        "{} {} the {} house{}.",
        join_planets(&found),
        if found.len() == 1 { "occupies" } else { "occupy" },
        list.join(", "),
        if occupied.len() == 1 { "" } else { "s" }
    );
    Some(Evidence { planets: found, houses: occupied, description, strength })
}

fn resolve_strength(definition: &YogaDefinition, context: &MatchContext) -> Strength {
    definition
        .strength_rules
        .iter()
        .find(|rule| match rule.when {
            StrengthCondition::Dignity(dignity) => context.dignity == Some(dignity),
            StrengthCondition::AnchorInKendra => context.anchor.map(is_kendra).unwrap_or(false),
            StrengthCondition::AnchorInTrikona => context.anchor.map(is_trikona).unwrap_or(false),
            StrengthCondition::PlanetsAtLeast(count) => context.planet_count >= count,
        })
        .map(|rule| rule.strength)
        .unwrap_or(definition.base_strength)
}

/// Capitalise a predicate detail into a sentence.
fn sentence(detail: &str) -> String {
    let mut chars = detail.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::chart::types::Chart;
    use crate::vedic::yogas::catalog::find_definition;

    /// Aries rising; longitudes for Sun..Saturn then Rahu.
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

    fn run(name: &str, chart: &Chart) -> Option<Yoga> {
        let definition = find_definition(name).unwrap();
        evaluate(definition, &chart.positions, &chart.houses)
    }

    #[test]
    fn test_ruchaka_strength_follows_dignity() {
        // Mars exalted in Capricorn, the 10th house
        let exalted = chart([40.0, 100.0, 298.0, 60.0, 250.0, 130.0, 200.0, 20.0]);
        let yoga = run("Ruchaka Yoga", &exalted).unwrap();
        assert_eq!(yoga.strength, Strength::Strong);
        assert_eq!(yoga.houses, vec![10]);
        assert_eq!(yoga.description, "Mars occupies the 10th house in Exalted dignity.");

        // Mars in its own sign Aries, past the moolatrikona span
        let own = chart([40.0, 100.0, 20.0, 60.0, 250.0, 130.0, 200.0, 80.0]);
        assert_eq!(run("Ruchaka Yoga", &own).unwrap().strength, Strength::Moderate);

        // Mars in Libra (Neutral to Venus) in the 7th
        let neutral = chart([40.0, 100.0, 190.0, 60.0, 250.0, 130.0, 200.0, 20.0]);
        assert!(run("Ruchaka Yoga", &neutral).is_none());
    }

    #[test]
    fn test_budha_aditya_gate() {
        // Sun and Mercury in Taurus, the 2nd house
        let apart = chart([32.0, 100.0, 130.0, 52.0, 250.0, 300.0, 200.0, 20.0]);
        let yoga = run("Budha Aditya Yoga", &apart).unwrap();
        assert_eq!(yoga.houses, vec![2]);
        assert_eq!(yoga.strength, Strength::Moderate);

        let close = chart([32.0, 100.0, 130.0, 40.0, 250.0, 300.0, 200.0, 20.0]);
        assert!(run("Budha Aditya Yoga", &close).is_none());

        let loose = DetectionSettings {
            mercury_combustion_orb: 5.0,
            ..DetectionSettings::default()
        };
        let definition = find_definition("Budha Aditya Yoga").unwrap();
        assert!(evaluate_with(definition, &close.positions, &close.houses, &loose).is_some());
    }

    #[test]
    fn test_conjunction_escalates_in_kendra() {
        // Moon and Mars together in Cancer, the 4th house
        let c = chart([40.0, 100.0, 110.0, 60.0, 250.0, 300.0, 200.0, 20.0]);
        let yoga = run("Chandra-Mangala Yoga", &c).unwrap();
        assert_eq!(yoga.strength, Strength::Strong);
        assert_eq!(yoga.planets, vec![Planet::Moon, Planet::Mars]);
    }

    #[test]
    fn test_house_placement_accumulates_evidence() {
        // Venus in the 3rd, Mercury in the 11th, Jupiter elsewhere
        let without_primary = chart([320.0, 100.0, 130.0, 310.0, 250.0, 70.0, 200.0, 20.0]);
        let yoga = run("Vasumati Yoga", &without_primary).unwrap();
        assert_eq!(yoga.planets, vec![Planet::Venus, Planet::Mercury]);
        assert_eq!(yoga.houses, vec![3, 11]);
        assert_eq!(yoga.strength, Strength::Moderate);

        // Jupiter joins in the 10th
        let with_primary = chart([320.0, 100.0, 130.0, 310.0, 280.0, 70.0, 200.0, 20.0]);
        assert_eq!(run("Vasumati Yoga", &with_primary).unwrap().strength, Strength::Strong);
    }

    #[test]
    fn test_pattern_description_is_a_sentence() {
        // Moon in 5, Jupiter in 8
        let c = chart([10.0, 130.0, 40.0, 15.0, 220.0, 70.0, 300.0, 100.0]);
        let yoga = run("Gaja Kesari Yoga", &c).unwrap();
        assert_eq!(yoga.description, "Jupiter is in the 4th house counted from the Moon.");
        // Anchor is the Moon's 5th house, a trikona
        assert_eq!(yoga.strength, Strength::Strong);
    }

    #[test]
    fn test_sentence() {
        assert_eq!(sentence("all planets"), "All planets.");
        assert_eq!(sentence(""), "");
    }
}
