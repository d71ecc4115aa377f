use super::policy::LegacyRule;
use super::{finding, house_meaning};
use crate::chart::types::{HouseData, PlanetPosition};
use crate::vedic::yogas::helpers::{is_dusthana, lord_placement, ordinal};
use crate::vedic::yogas::types::{Yoga, YogaCategory};

/// Every house lord placed outside its own house.
pub(super) fn detect(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    let mut yogas = Vec::new();
    for house in 1..=12u8 {
        let Some((lord, placed)) = lord_placement(positions, houses, house) else { continue };
        if placed == house {
            continue;
        }
        let rule = if is_dusthana(placed) {
            LegacyRule::BhavaLordDusthana
        } else {
            LegacyRule::BhavaLordFavourable
        };
        yogas.push(finding(
            YogaCategory::Bhava,
            format!("{} Lord in {} House Yoga", ordinal(house), ordinal(placed)),
            vec![lord],
            vec![house, placed],
            rule,
            format!(
                "{lord}, lord of the {} ({}), is placed in the {} ({}).",
                ordinal(house),
                house_meaning(house),
                ordinal(placed),
                house_meaning(placed)
            ),
            format!(
                "Links the matters of {} with those of {}.",
                house_meaning(house),
                house_meaning(placed)
            ),
        ));
    }
    yogas
}
