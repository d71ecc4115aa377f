//! Optional structural checks on caller-supplied chart data.
//!
//! The yoga engine does not call this on its own; it silently under-reports
//! on malformed input. Callers that want a loud failure opt in through
//! `DetectionSettings::validate_input` or call [`validate_chart`] directly.

use std::collections::HashSet;
use crate::chart::types::{HouseData, PlanetPosition, ALL_PLANETS};
use crate::error::ChartError;

/// Check the input contract: ten distinct chart points with houses in
/// range, and twelve distinct houses numbered 1 to 12.
pub fn validate_chart(
    positions: &[PlanetPosition],
    houses: &[HouseData],
) -> Result<(), ChartError> {
    if positions.len() != ALL_PLANETS.len() {
        return Err(ChartError::PlanetCount {
            expected: ALL_PLANETS.len(),
            found: positions.len(),
        });
    }

    let mut seen = HashSet::new();
    for position in positions {
        if !seen.insert(position.planet) {
            return Err(ChartError::DuplicatePlanet { planet: position.planet });
        }
        if !(1..=12).contains(&position.house) {
            return Err(ChartError::PlanetHouseOutOfRange {
                planet: position.planet,
                house: position.house,
            });
        }
    }
    if let Some(missing) = ALL_PLANETS.iter().find(|p| !seen.contains(*p)) {
        return Err(ChartError::MissingPlanet { planet: *missing });
    }

    if houses.len() != 12 {
        return Err(ChartError::HouseCount { found: houses.len() });
    }
    let mut numbers = HashSet::new();
    for house in houses {
        if !(1..=12).contains(&house.number) {
            return Err(ChartError::HouseOutOfRange { number: house.number });
        }
        if !numbers.insert(house.number) {
            return Err(ChartError::DuplicateHouse { number: house.number });
        }
    }
    Ok(())
}
