use super::finding;
use super::policy::LegacyRule;
use crate::chart::types::{HouseData, Planet, PlanetPosition, CLASSICAL_PLANETS};
use crate::vedic::yogas::helpers::{house_of, ordinal};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

/// Interpretation of each classical pair, in [`CLASSICAL_PLANETS`] pair order.
const PAIR_EFFECTS: [(Planet, Planet, &str); 21] = [
    (
        Planet::Sun,
        Planet::Moon,
        "Will and feeling act as one; strong purpose, sometimes at the cost of rest.",
    ),
    (Planet::Sun, Planet::Mars, "Energetic and commanding; quick to act and quick to anger."),
    (
        Planet::Sun,
        Planet::Mercury,
        "Intellect lit by confidence; skill in speech and administration.",
    ),
    (Planet::Sun, Planet::Jupiter, "Principled leadership; respected for judgement and integrity."),
    (Planet::Sun, Planet::Venus, "Taste for refinement and display; relationships tied to status."),
    (
        Planet::Sun,
        Planet::Saturn,
        "Tension between authority and duty; recognition arrives slowly.",
    ),
    (Planet::Moon, Planet::Mars, "Emotional intensity and drive; earnings through bold ventures."),
    (Planet::Moon, Planet::Mercury, "Quick, adaptable mind; talent for language and trade."),
    (Planet::Moon, Planet::Jupiter, "Generous and optimistic nature; protected by good counsel."),
    (
        Planet::Moon,
        Planet::Venus,
        "Gentle charm and artistic feeling; comfort and pleasant company.",
    ),
    (
        Planet::Moon,
        Planet::Saturn,
        "Serious, reserved temperament; emotional maturity through hardship.",
    ),
    (
        Planet::Mars,
        Planet::Mercury,
        "Sharp, argumentative intellect; technical and strategic skill.",
    ),
    (
        Planet::Mars,
        Planet::Jupiter,
        "Courage guided by principle; success in law, command or engineering.",
    ),
    (Planet::Mars, Planet::Venus, "Passionate and magnetic; strong desires in love and art."),
    (Planet::Mars, Planet::Saturn, "Friction between haste and caution; endurance under pressure."),
    (Planet::Mercury, Planet::Jupiter, "Learning and wisdom combined; gifted teacher or adviser."),
    (
        Planet::Mercury,
        Planet::Venus,
        "Graceful speech and creative skill; success in arts and commerce.",
    ),
    (
        Planet::Mercury,
        Planet::Saturn,
        "Methodical, practical thinking; patience with detailed work.",
    ),
    (Planet::Jupiter, Planet::Venus, "Two benefics together; comfort, learning and social grace."),
    (
        Planet::Jupiter,
        Planet::Saturn,
        "Steady ambition tempered by ethics; gains through long effort.",
    ),
    (Planet::Venus, Planet::Saturn, "Loyal in relationships; artistry refined by discipline."),
];

fn pair_effect(a: Planet, b: Planet) -> &'static str {
    PAIR_EFFECTS
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|(_, _, text)| *text)
        .unwrap_or("")
}

pub(super) fn detect(positions: &[PlanetPosition], _houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for (i, a) in CLASSICAL_PLANETS.iter().enumerate() {
        for b in &CLASSICAL_PLANETS[i + 1..] {
            let (Some(ha), Some(hb)) = (house_of(positions, *a), house_of(positions, *b)) else {
                continue;
            };
            if ha != hb {
                continue;
            }
            yogas.push(finding(
                YogaCategory::Conjunction,
                format!("{a}-{b} Conjunction"),
                vec![*a, *b],
                vec![ha],
                LegacyRule::PlanetConjunction,
                format!("{a} and {b} are conjunct in the {} house.", ordinal(ha)),
                pair_effect(*a, *b),
            ));
        }
    }
    yogas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;

    #[test]
    fn test_every_pair_has_text() {
        for (i, a) in CLASSICAL_PLANETS.iter().enumerate() {
            for b in &CLASSICAL_PLANETS[i + 1..] {
                assert!(!pair_effect(*a, *b).is_empty(), "{a}-{b}");
            }
        }
    }

    #[test]
    fn test_three_planets_give_three_pairs() {
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 10.0)
            .planet(Planet::Moon, 15.0)
            .planet(Planet::Mars, 20.0)
            .planet(Planet::Mercury, 100.0)
            .planet(Planet::Jupiter, 160.0)
            .planet(Planet::Venus, 220.0)
            .planet(Planet::Saturn, 280.0)
            .planet(Planet::Rahu, 190.0)
            .build()
            .unwrap();
        let names: Vec<String> = detect(&chart.positions, &chart.houses)
            .into_iter()
            .map(|y| y.name)
            .collect();
        assert_eq!(
            names,
            vec!["Sun-Moon Conjunction", "Sun-Mars Conjunction", "Moon-Mars Conjunction"]
        );
    }
}
