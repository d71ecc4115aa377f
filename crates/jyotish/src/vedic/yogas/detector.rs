//! Runs the catalog and the legacy families and merges their findings.

use std::collections::HashSet;
use crate::chart::types::{Chart, HouseData, PlanetPosition};
use crate::chart::validate::validate_chart;
use crate::error::ChartError;
use crate::settings::DetectionSettings;
use crate::vedic::yogas::catalog::catalog;
use crate::vedic::yogas::engine::evaluate_with;
use crate::vedic::yogas::legacy::detect_legacy;
use crate::vedic::yogas::types::Yoga;

#[derive(Debug, Clone, Default)]
pub struct YogaDetector {
    settings: DetectionSettings,
}

impl YogaDetector {
    pub fn new(settings: DetectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }

    /// Detect every yoga present. When `validate_input` is set and the chart
    /// is malformed, the failure is logged and nothing is reported.
    pub fn detect(&self, positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
        if self.settings.validate_input {
            if let Err(e) = validate_chart(positions, houses) {
                log::warn!("Skipping yoga detection: {}", e);
                return Vec::new();
            }
        }
        self.run(positions, houses)
    }

    /// Validate the chart, then detect.
    pub fn try_detect(
        &self,
        positions: &[PlanetPosition],
        houses: &[HouseData],
    ) -> Result<Vec<Yoga>, ChartError> {
        validate_chart(positions, houses).map_err(|e| {
            log::warn!("Chart failed validation: {}", e);
            e
        })?;
        Ok(self.run(positions, houses))
    }

    pub fn detect_chart(&self, chart: &Chart) -> Vec<Yoga> {
        self.detect(&chart.positions, &chart.houses)
    }

    fn run(&self, positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
        let catalog_found: Vec<Yoga> = catalog()
            .iter()
            .filter_map(|definition| evaluate_with(definition, positions, houses, &self.settings))
            .collect();

        let legacy_found = if self.settings.include_legacy {
            detect_legacy(positions, houses)
        } else {
            Vec::new()
        };

        let catalog_count = catalog_found.len();
        let legacy_count = legacy_found.len();
        let merged = merge_findings(catalog_found, legacy_found);
        log::debug!(
            "Yoga pass: {} catalog, {} legacy, {} after merge",
            catalog_count,
            legacy_count,
            merged.len()
        );

        merged
            .into_iter()
            .filter(|yoga| self.settings.is_enabled(yoga.category))
            .collect()
    }
}

/// Catalog findings first, then legacy findings whose names are not already
/// taken. The first finding with a given name wins.
pub fn merge_findings(catalog_found: Vec<Yoga>, legacy_found: Vec<Yoga>) -> Vec<Yoga> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(catalog_found.len() + legacy_found.len());
    for yoga in catalog_found.into_iter().chain(legacy_found) {
        if seen.insert(yoga.name.clone()) {
            merged.push(yoga);
        } else {
            log::trace!("Dropping duplicate finding {}", yoga.name);
        }
    }
    merged
}

/// Detect yogas with default settings.
pub fn detect_yogas(positions: &[PlanetPosition], houses: &[HouseData]) -> Vec<Yoga> {
    YogaDetector::default().detect(positions, houses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::builder::ChartBuilder;
    use crate::chart::types::Planet;
    use crate::vedic::yogas::types::{Strength, YogaCategory};

    fn yoga(name: &str, category: YogaCategory) -> Yoga {
        Yoga {
            category,
            name: name.to_string(),
            planets: Vec::new(),
            houses: Vec::new(),
            strength: Strength::Moderate,
            description: String::new(),
            effects: String::new(),
        }
    }

    fn sample_chart() -> Chart {
        ChartBuilder::new(5.0)
            .planet(Planet::Sun, 32.0)
            .planet(Planet::Moon, 130.0)
            .planet(Planet::Mars, 298.0)
            .planet(Planet::Mercury, 52.0)
            .planet(Planet::Jupiter, 220.0)
            .planet(Planet::Venus, 330.0)
            .planet(Planet::Saturn, 200.0)
            .planet(Planet::Rahu, 70.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_catalog_wins_on_name_clash() {
        let catalog_found = vec![yoga("Lakshmi Yoga", YogaCategory::Dhana)];
        let mut legacy = yoga("Lakshmi Yoga", YogaCategory::Dhana);
        legacy.description = "legacy".to_string();
        let conjunction = yoga("Sun-Moon Conjunction", YogaCategory::Conjunction);
        let merged = merge_findings(catalog_found, vec![legacy, conjunction]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].description, "");
        assert_eq!(merged[1].name, "Sun-Moon Conjunction");
    }

    #[test]
    fn test_legacy_can_be_skipped() {
        let chart = sample_chart();
        let full = YogaDetector::default().detect_chart(&chart);
        let settings = DetectionSettings { include_legacy: false, ..DetectionSettings::default() };
        let catalog_only = YogaDetector::new(settings).detect_chart(&chart);
        assert!(full.len() > catalog_only.len());
        assert!(catalog_only.iter().all(|y| y.category != YogaCategory::Bhava));
    }

    #[test]
    fn test_disabled_categories_are_filtered() {
        let chart = sample_chart();
        let settings = DetectionSettings {
            disabled_categories: vec![YogaCategory::Bhava, YogaCategory::Conjunction],
            ..DetectionSettings::default()
        };
        let found = YogaDetector::new(settings).detect_chart(&chart);
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|y| y.category != YogaCategory::Bhava && y.category != YogaCategory::Conjunction));
    }

    #[test]
    fn test_validation_is_opt_in() {
        let chart = sample_chart();
        let truncated = &chart.positions[..9];
        assert!(!detect_yogas(truncated, &chart.houses).is_empty());

        let strict = YogaDetector::new(DetectionSettings {
            validate_input: true,
            ..DetectionSettings::default()
        });
        assert!(strict.detect(truncated, &chart.houses).is_empty());
        assert_eq!(
            strict.try_detect(truncated, &chart.houses),
            Err(ChartError::PlanetCount { expected: 10, found: 9 })
        );
        assert!(strict.try_detect(&chart.positions, &chart.houses).is_ok());
    }
}
