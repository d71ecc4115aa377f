use super::finding;
use super::policy::LegacyRule;
use crate::chart::types::{HouseData, Planet, PlanetPosition, CLASSICAL_PLANETS};
use crate::vedic::yogas::helpers::{are_conjunct, house_lord, house_of, ordinal, KENDRA, TRIKONA};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

pub(super) fn detect(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = kendra_trikona_lords(positions, houses);
    yogas.extend(dharma_karmadhipati(positions, houses));
    yogas.extend(yogakaraka(houses));
    yogas
}

/// A kendra lord sharing a house with a trikona lord.
fn kendra_trikona_lords(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for kendra in KENDRA {
        for trikona in TRIKONA {
            let (Some(k_lord), Some(t_lord)) =
                (house_lord(houses, kendra), house_lord(houses, trikona))
            else {
                continue;
            };
            if k_lord == t_lord || !are_conjunct(positions, k_lord, t_lord) {
                continue;
            }
            let Some(shared) = house_of(positions, k_lord) else { continue };
            yogas.push(finding(
                YogaCategory::Raja,
                format!("Raja Yoga (Lords of {} and {})", ordinal(kendra), ordinal(trikona)),
                vec![k_lord, t_lord],
                vec![kendra, trikona, shared],
                LegacyRule::KendraTrikonaLords,
                format!(
                    "{k_lord}, lord of the {}, joins {t_lord}, lord of the {}, in the {} house.",
                    ordinal(kendra),
                    ordinal(trikona),
                    ordinal(shared)
                ),
                "Power, status and recognition; the union of effort and fortune.",
            ));
        }
    }
    yogas
}

fn dharma_karmadhipati(positions: &[PlanetPosition], houses: &[HouseData]) -> Option<Yoga> {
    let ninth = house_lord(houses, 9)?;
    let tenth = house_lord(houses, 10)?;
    if ninth == tenth || !are_conjunct(positions, ninth, tenth) {
        return None;
    }
    let shared = house_of(positions, ninth)?;
    Some(finding(
        YogaCategory::Raja,
        "Dharma Karmadhipati Yoga",
        vec![ninth, tenth],
        vec![9, 10, shared],
        LegacyRule::DharmaKarmadhipati,
        format!(
            "The 9th lord {ninth} and the 10th lord {tenth} are conjunct in the {} house.",
            ordinal(shared)
        ),
        "Career aligned with purpose; righteous action brings lasting success.",
    ))
}

/// One planet owning both a kendra and a trikona, the lagna excluded.
fn yogakaraka(houses: &[HouseData]) -> Vec<Yoga> {
    let owned = |planet: Planet, candidates: &[u8]| -> Vec<u8> {
        candidates
            .iter()
            .copied()
            .filter(|h| house_lord(houses, *h) == Some(planet))
            .collect()
    };
    let mut yogas = Vec::new();
    for planet in CLASSICAL_PLANETS {
        let kendras = owned(planet, &[4, 7, 10]);
        let trikonas = owned(planet, &[5, 9]);
        if let (Some(k), Some(t)) = (kendras.first(), trikonas.first()) {
            yogas.push(finding(
                YogaCategory::Raja,
                "Yogakaraka Yoga",
                vec![planet],
                vec![*k, *t],
                LegacyRule::Yogakaraka,
                format!("{planet} rules both the {} and the {} house.", ordinal(*k), ordinal(*t)),
                "A single planet that confers status and success through its periods.",
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
    fn test_taurus_rising_has_saturn_yogakaraka() {
        let chart = ChartBuilder::new(45.0)
            .planet(Planet::Sun, 10.0)
            .planet(Planet::Moon, 100.0)
            .planet(Planet::Mars, 130.0)
            .planet(Planet::Mercury, 20.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 330.0)
            .planet(Planet::Saturn, 200.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let found = yogakaraka(&chart.houses);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].planets, vec![Planet::Saturn]);
        assert_eq!(found[0].houses, vec![10, 9]);
    }

    #[test]
    fn test_kendra_trikona_lords_conjunct() {
        // Aries rising: Moon (4th lord) with Sun (5th lord) in Leo
        let chart = ChartBuilder::new(5.0)
            .planet(Planet::Sun, 130.0)
            .planet(Planet::Moon, 140.0)
            .planet(Planet::Mars, 200.0)
            .planet(Planet::Mercury, 150.0)
            .planet(Planet::Jupiter, 250.0)
            .planet(Planet::Venus, 330.0)
            .planet(Planet::Saturn, 20.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap();
        let found = kendra_trikona_lords(&chart.positions, &chart.houses);
        let names: Vec<&str> = found.iter().map(|y| y.name.as_str()).collect();
        assert!(names.contains(&"Raja Yoga (Lords of 4th and 5th)"));
        let yoga = found.iter().find(|y| y.name == "Raja Yoga (Lords of 4th and 5th)").unwrap();
        assert_eq!(yoga.houses, vec![4, 5]);
    }
}
