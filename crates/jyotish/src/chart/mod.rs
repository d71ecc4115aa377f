pub mod builder;
pub mod dignities;
pub mod nakshatra;
pub mod rulers;
pub mod types;
pub mod validate;

pub use builder::{combustion_orb, ChartBuilder, ChartInput, PlanetInput};
pub use dignities::{natural_relationship, DignitiesService, Relationship};
pub use nakshatra::{get_nakshatra_for_longitude, NakshatraMetadata, NakshatraRecord};
pub use rulers::get_sign_lord;
pub use types::{
    normalize_degrees, Chart, Dignity, HouseData, Modality, Planet, PlanetPosition, Sign,
    ALL_PLANETS, ALL_SIGNS, CLASSICAL_PLANETS,
};
pub use validate::validate_chart;
