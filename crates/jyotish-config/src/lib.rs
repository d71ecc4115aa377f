use anyhow::Context;
use jyotish::settings::DEFAULT_MERCURY_COMBUSTION_ORB;
use jyotish::{DetectionSettings, YogaCategory};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct YogaDetectionToml {
    #[serde(default = "default_orb")]
    mercury_combustion_orb: f64,
    #[serde(default = "default_true")]
    include_legacy: bool,
    #[serde(default)]
    validate_input: bool,
    #[serde(default)]
    disabled_categories: Vec<YogaCategory>,
}

fn default_orb() -> f64 {
    DEFAULT_MERCURY_COMBUSTION_ORB
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    yoga_detection: Option<YogaDetectionToml>,
}

/// Try the usual relative locations of `configs/yogas.toml`.
pub fn read_yogas_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/yogas.toml", "../../configs/yogas.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load yogas.toml from {:?}", paths);
}

/// Parse the `[yoga_detection]` table of a config document.
pub fn parse_detection_settings(text: &str) -> anyhow::Result<DetectionSettings> {
    let root: RootConfigToml = toml::from_str(text).map_err(|e| {
        anyhow::anyhow!("Failed to parse yogas.toml for yoga_detection settings: {e}")
    })?;
    let cfg = root
        .yoga_detection
        .ok_or_else(|| anyhow::anyhow!("Missing [yoga_detection] table in yogas.toml"))?;
    let YogaDetectionToml {
        mercury_combustion_orb,
        include_legacy,
        validate_input,
        disabled_categories,
    } = cfg;
    if !mercury_combustion_orb.is_finite() || !(0.0..=30.0).contains(&mercury_combustion_orb) {
        anyhow::bail!(
            "yoga_detection.mercury_combustion_orb must be between 0 and 30 degrees, got {}",
            mercury_combustion_orb
        );
    }
    Ok(DetectionSettings {
        mercury_combustion_orb,
        include_legacy,
        validate_input,
        disabled_categories,
    })
}

pub fn load_detection_settings_from(path: &Path) -> anyhow::Result<DetectionSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_detection_settings(&text).with_context(|| format!("Invalid config in {}", path.display()))
}

pub fn load_detection_settings() -> anyhow::Result<DetectionSettings> {
    let text = read_yogas_toml_text()?;
    parse_detection_settings(&text)
}

/// Like [`load_detection_settings`], falling back to defaults when the file
/// or table is absent or unreadable.
pub fn load_detection_settings_or_default() -> DetectionSettings {
    match load_detection_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::info!("Using default yoga detection settings: {e}");
            DetectionSettings::default()
        }
    }
}
