//! Parivartana: two house lords occupying each other's houses.

use super::finding;
use super::policy::LegacyRule;
use crate::chart::types::{HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::{is_dusthana, is_kendra, is_trikona, lord_placement, ordinal};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExchangeKind {
    Maha,
    Khala,
    Dainya,
}

impl ExchangeKind {
    fn classify(a: u8, b: u8) -> Self {
        if is_dusthana(a) || is_dusthana(b) {
            Self::Dainya
        } else if (is_kendra(a) || is_trikona(a)) && (is_kendra(b) || is_trikona(b)) {
            Self::Maha
        } else {
            Self::Khala
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Maha => "Maha Parivartana Yoga",
            Self::Khala => "Khala Parivartana Yoga",
            Self::Dainya => "Dainya Parivartana Yoga",
        }
    }

    fn rule(self) -> LegacyRule {
        match self {
            Self::Maha => LegacyRule::MahaParivartana,
            Self::Khala => LegacyRule::KhalaParivartana,
            Self::Dainya => LegacyRule::DainyaParivartana,
        }
    }

    fn effects(self) -> &'static str {
        match self {
            Self::Maha => "Wealth, status and support; each house strengthens the other.",
            Self::Khala => "Fluctuating fortune; gains come with restlessness.",
            Self::Dainya => "Struggles and setbacks tied to the houses involved.",
        }
    }
}

struct Exchange {
    kind: ExchangeKind,
    houses: (u8, u8),
    lords: (Planet, Planet),
}

fn exchanges(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Exchange> {
    let mut found = Vec::new();
    for a in 1..=12u8 {
        for b in (a + 1)..=12u8 {
            let (Some((lord_a, in_a)), Some((lord_b, in_b))) =
                (lord_placement(positions, houses, a), lord_placement(positions, houses, b))
            else {
                continue;
            };
            if lord_a != lord_b && in_a == b && in_b == a {
                found.push(Exchange {
                    kind: ExchangeKind::classify(a, b),
                    houses: (a, b),
                    lords: (lord_a, lord_b),
                });
            }
        }
    }
    found
}

/// One finding per exchange kind, collecting every exchange of that kind.
pub(super) fn detect(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let all = exchanges(positions, houses);
    let mut yogas = Vec::new();
    for kind in [ExchangeKind::Maha, ExchangeKind::Khala, ExchangeKind::Dainya] {
        let matching: Vec<&Exchange> = all.iter().filter(|e| e.kind == kind).collect();
        if matching.is_empty() {
            continue;
        }
        let mut planets = Vec::new();
        let mut involved = Vec::new();
        let mut parts = Vec::new();
        for exchange in &matching {
            let (a, b) = exchange.houses;
            let (lord_a, lord_b) = exchange.lords;
            planets.extend([lord_a, lord_b]);
            involved.extend([a, b]);
            parts.push(format!(
                "{lord_a} (lord of the {}) and {lord_b} (lord of the {}) exchange houses",
                ordinal(a),
                ordinal(b)
            ));
        }
        yogas.push(finding(
            YogaCategory::Parivartana,
            kind.name(),
            planets,
            involved,
            kind.rule(),
            format!("{}.", parts.join("; ")),
            kind.effects(),
        ));
    }
    yogas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::vedic::yogas::types::Strength;

    #[test]
    fn test_classification() {
        assert_eq!(ExchangeKind::classify(1, 7), ExchangeKind::Maha);
        assert_eq!(ExchangeKind::classify(5, 9), ExchangeKind::Maha);
        assert_eq!(ExchangeKind::classify(2, 11), ExchangeKind::Khala);
        assert_eq!(ExchangeKind::classify(1, 8), ExchangeKind::Dainya);
        assert_eq!(ExchangeKind::classify(6, 12), ExchangeKind::Dainya);
    }

    #[test]
    fn test_lagna_and_seventh_exchange() {
        // Aries rising: Mars in Libra, Venus in Aries
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 130.0)
            .planet(Planet::Moon, 100.0)
            .planet(Planet::Mars, 190.0)
            .planet(Planet::Mercury, 150.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 10.0)
            .planet(Planet::Saturn, 280.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let yogas = detect(&chart.positions, &chart.houses);
        let maha = yogas.iter().find(|y| y.name == "Maha Parivartana Yoga").unwrap();
        assert_eq!(maha.strength, Strength::Strong);
        assert_eq!(maha.planets, vec![Planet::Mars, Planet::Venus]);
        assert_eq!(maha.houses, vec![1, 7]);
    }
}
