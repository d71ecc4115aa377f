mod report;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use jyotish::{Chart, ChartInput, DetectionSettings, YogaDetector};
use std::path::{Path, PathBuf};

use report::{render_text, Report};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON report.
    Json,
    /// Human-readable listing.
    Text,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Detect Vedic yogas in a birth chart")]
struct Args {
    /// Chart request as JSON:
    /// `{"ascendant": .., "planets": [{"planet": "sun", "longitude": ..}, ..]}`.
    #[arg(long)]
    chart: PathBuf,

    /// Detection settings file (default: configs/yogas.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Reject malformed charts instead of under-reporting.
    #[arg(long)]
    validate: bool,

    /// Skip the legacy detector families.
    #[arg(long)]
    no_legacy: bool,
}

fn load_chart(path: &Path) -> anyhow::Result<Chart> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chart {}", path.display()))?;
    let input: ChartInput = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse chart JSON {}", path.display()))?;
    Chart::from_input(&input).with_context(|| format!("Invalid chart in {}", path.display()))
}

fn resolve_settings(args: &Args) -> anyhow::Result<DetectionSettings> {
    let mut settings = match &args.config {
        Some(path) => jyotish_config::load_detection_settings_from(path)?,
        None => jyotish_config::load_detection_settings_or_default(),
    };
    if args.validate {
        settings.validate_input = true;
    }
    if args.no_legacy {
        settings.include_legacy = false;
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = resolve_settings(&args)?;
    log::debug!("Detection settings: {:?}", settings);

    let chart = load_chart(&args.chart)?;
    let detector = YogaDetector::new(settings);
    let yogas = if detector.settings().validate_input {
        detector
            .try_detect(&chart.positions, &chart.houses)
            .context("Chart failed validation")?
    } else {
        detector.detect_chart(&chart)
    };
    log::info!("{} yogas found in {}", yogas.len(), args.chart.display());

    let report = Report::new(&chart, &yogas);
    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print!("{}", render_text(&report)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CHART: &str = r#"{"ascendant": 5.0, "planets": [
        {"planet": "sun", "longitude": 40.0},
        {"planet": "moon", "longitude": 100.0},
        {"planet": "mars", "longitude": 298.0},
        {"planet": "mercury", "longitude": 60.0},
        {"planet": "jupiter", "longitude": 250.0},
        {"planet": "venus", "longitude": 130.0},
        {"planet": "saturn", "longitude": 200.0},
        {"planet": "rahu", "longitude": 20.0}
    ]}"#;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "yoga_report",
            "--chart",
            "chart.json",
            "--format",
            "json",
            "--validate",
            "--no-legacy",
        ]);
        assert_eq!(args.format, Format::Json);
        assert!(args.validate && args.no_legacy);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            config,
            "[yoga_detection]\ninclude_legacy = true\nmercury_combustion_orb = 9.0"
        )
        .unwrap();
        let args = Args::parse_from([
            "yoga_report".to_string(),
            "--chart".to_string(),
            "chart.json".to_string(),
            "--config".to_string(),
            config.path().display().to_string(),
            "--no-legacy".to_string(),
        ]);
        let settings = resolve_settings(&args).unwrap();
        assert!(!settings.include_legacy);
        assert_eq!(settings.mercury_combustion_orb, 9.0);
    }

    #[test]
    fn test_load_chart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CHART.as_bytes()).unwrap();
        let chart = load_chart(file.path()).unwrap();
        assert_eq!(chart.positions.len(), 10);
    }

    #[test]
    fn test_load_chart_reports_missing_planet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"ascendant": 5.0, "planets": [{"planet": "sun", "longitude": 40.0}]}"#)
            .unwrap();
        let err = load_chart(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("missing"));
    }
}
