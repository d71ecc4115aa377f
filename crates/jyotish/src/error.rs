use thiserror::Error;
use crate::chart::types::Planet;

/// Errors raised by the chart builder and the optional input validator.
///
/// The yoga engine itself never fails; these only surface when a caller asks
/// for a chart to be built or checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Expected {expected} planet positions, found {found}")]
    PlanetCount { expected: usize, found: usize },
    #[error("Planet {planet} appears more than once")]
    DuplicatePlanet { planet: Planet },
    #[error("Planet {planet} is missing from the chart")]
    MissingPlanet { planet: Planet },
    #[error("Planet {planet} has house {house}; houses run 1 to 12")]
    PlanetHouseOutOfRange { planet: Planet, house: u8 },
    #[error("Expected 12 houses, found {found}")]
    HouseCount { found: usize },
    #[error("House {number} appears more than once")]
    DuplicateHouse { number: u8 },
    #[error("House number {number} is outside 1 to 12")]
    HouseOutOfRange { number: u8 },
    #[error("Invalid longitude for {planet}: {value}")]
    InvalidLongitude { planet: Planet, value: f64 },
}
