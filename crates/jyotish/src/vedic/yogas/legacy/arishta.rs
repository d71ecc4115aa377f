use super::finding;
use super::policy::LegacyRule;
use crate::chart::types::{Dignity, HouseData, Planet, PlanetPosition};
use crate::vedic::yogas::helpers::{
    are_conjunct, find_planet, house_from, house_lord, house_of, is_dusthana, is_malefic,
    join_planets, ordinal, planets_in_house,
};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

pub(super) fn detect(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    yogas.extend(debilitated_lagna_lord(positions, houses));
    yogas.extend(debilitated_moon_sign_lord(positions, houses));
    yogas.extend(malefics_in_dusthanas(positions));
    yogas.extend(grahan(positions, Planet::Sun, "Surya Grahan Yoga"));
    yogas.extend(grahan(positions, Planet::Moon, "Chandra Grahan Yoga"));
    yogas.extend(papakartari(positions, 1, "Lagna Papakartari Yoga", "the lagna"));
    if let Some(moon) = house_of(positions, Planet::Moon) {
        yogas.extend(papakartari(positions, moon, "Chandra Papakartari Yoga", "the Moon"));
    }
    yogas
}

fn debilitated_lord(
    positions: &[PlanetPosition],
    houses: &[HouseData],
    house: u8,
) -> Option<(Planet, u8)> {
    let lord = house_lord(houses, house)?;
    let position = find_planet(positions, lord)?;
    (position.dignity == Dignity::Debilitated).then_some((lord, position.house))
}

fn debilitated_lagna_lord(positions: &[PlanetPosition], houses: &[HouseData]) -> Option<Yoga> {
    let (lord, placed) = debilitated_lord(positions, houses, 1)?;
    Some(finding(
        YogaCategory::Arishta,
        "Debilitated Lagna Lord Yoga",
        vec![lord],
        vec![1, placed],
        LegacyRule::DebilitatedLagnaLord,
        format!("The lagna lord {lord} is debilitated in the {} house.", ordinal(placed)),
        "Weak constitution and low confidence; health needs care.",
    ))
}

fn debilitated_moon_sign_lord(positions: &[PlanetPosition], houses: &[HouseData]) -> Option<Yoga> {
    let moon = house_of(positions, Planet::Moon)?;
    let (lord, placed) = debilitated_lord(positions, houses, moon)?;
    Some(finding(
        YogaCategory::Arishta,
        "Debilitated Moon-Sign Lord Yoga",
        vec![Planet::Moon, lord],
        vec![moon, placed],
        LegacyRule::DebilitatedMoonSignLord,
        format!(
            "{lord}, lord of the Moon's sign, is debilitated in the {} house.",
            ordinal(placed)
        ),
        "Emotional instability and worry; peace of mind is hard won.",
    ))
}

fn malefics_in_dusthanas(positions: &[PlanetPosition]) -> Option<Yoga> {
    let afflicting: Vec<&PlanetPosition> = positions
        .iter()
        .filter(|p| is_dusthana(p.house) && is_malefic(p.planet, positions))
        .collect();
    if afflicting.len() < 2 {
        return None;
    }
    let planets: Vec<Planet> = afflicting.iter().map(|p| p.planet).collect();
    let houses = afflicting.iter().map(|p| p.house).collect();
    Some(finding(
        YogaCategory::Arishta,
        "Malefics in Dusthanas Yoga",
        planets.clone(),
        houses,
        LegacyRule::MaleficsInDusthanas,
        format!("{} occupy the dusthana houses.", join_planets(&planets)),
        "Periods of illness, debt or conflict; resilience is tested.",
    ))
}

/// A luminary sharing a house with either node.
fn grahan(positions: &[PlanetPosition], luminary: Planet, name: &str) -> Option<Yoga> {
    let nodes: Vec<Planet> = [Planet::Rahu, Planet::Ketu]
        .into_iter()
        .filter(|node| are_conjunct(positions, luminary, *node))
        .collect();
    let node = *nodes.first()?;
    let house = house_of(positions, luminary)?;
    Some(finding(
        YogaCategory::Arishta,
        name,
        vec![luminary, node],
        vec![house],
        LegacyRule::Grahan,
        format!("{luminary} is eclipsed by {node} in the {} house.", ordinal(house)),
        "The significations of the luminary are obscured; confidence or peace of mind suffers.",
    ))
}

/// Malefics in both the 12th and the 2nd from `reference`.
fn papakartari(
    positions: &[PlanetPosition],
    reference: u8,
    name: &str,
    label: &str,
) -> Option<Yoga> {
    let behind = house_from(reference, 12);
    let ahead = house_from(reference, 2);
    let malefics_in = |house: u8| -> Vec<Planet> {
        planets_in_house(positions, house)
            .into_iter()
            .filter(|p| is_malefic(*p, positions))
            .collect()
    };
    let before = malefics_in(behind);
    let after = malefics_in(ahead);
    if before.is_empty() || after.is_empty() {
        return None;
    }
    let planets: Vec<Planet> = before.iter().chain(after.iter()).copied().collect();
    Some(finding(
        YogaCategory::Arishta,
        name,
        planets,
        vec![behind, reference, ahead],
        LegacyRule::Papakartari,
        format!(
            "{} and {} hem in {label} from the 12th and 2nd.",
            join_planets(&before),
            join_planets(&after)
        ),
        "Pressure from both sides; obstacles hem in the affected area of life.",
    ))
}
