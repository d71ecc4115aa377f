//! Vedic chart model and yoga detection.
//!
//! Build a [`Chart`] from longitudes with [`ChartBuilder`], then hand its
//! positions and houses to [`detect_yogas`] or a configured [`YogaDetector`].

pub mod chart;
pub mod error;
pub mod settings;
pub mod vedic;

pub use chart::{
    Chart, ChartBuilder, ChartInput, Dignity, HouseData, Planet, PlanetInput, PlanetPosition, Sign,
};
pub use error::ChartError;
pub use settings::DetectionSettings;
pub use vedic::yogas::{detect_yogas, Strength, Yoga, YogaCategory, YogaDetector};
