//! Detection settings.

use serde::{Deserialize, Serialize};
use crate::vedic::yogas::types::YogaCategory;

/// Arc (degrees) inside which Mercury is treated as combust for Budha Aditya.
pub const DEFAULT_MERCURY_COMBUSTION_ORB: f64 = 14.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionSettings {
    /// Combustion gate used by Sun-Mercury conjunctions. Independent of the
    /// per-planet orbs behind `PlanetPosition::combust`.
    pub mercury_combustion_orb: f64,
    /// Run the legacy detector after the catalog.
    pub include_legacy: bool,
    /// Validate the chart before detection and refuse malformed input.
    pub validate_input: bool,
    /// Findings of these categories are dropped from the output.
    pub disabled_categories: Vec<YogaCategory>,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            mercury_combustion_orb: DEFAULT_MERCURY_COMBUSTION_ORB,
            include_legacy: true,
            validate_input: false,
            disabled_categories: Vec::new(),
        }
    }
}

impl DetectionSettings {
    pub fn is_enabled(&self, category: YogaCategory) -> bool {
        !self.disabled_categories.contains(&category)
    }
}
