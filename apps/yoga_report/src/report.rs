use jyotish::{Chart, Planet, Yoga};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Report<'a> {
    pub ascendant: String,
    pub count: usize,
    pub yogas: &'a [Yoga],
}

impl<'a> Report<'a> {
    pub fn new(chart: &Chart, yogas: &'a [Yoga]) -> Self {
        let ascendant = chart
            .positions
            .iter()
            .find(|p| p.planet == Planet::Ascendant)
            .map(|p| p.sign.to_string())
            .unwrap_or_default();
        Self {
            ascendant,
            count: yogas.len(),
            yogas,
        }
    }
}

pub(crate) fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ascendant: {}", report.ascendant);
    let _ = writeln!(out, "{} yogas found", report.count);
    for yoga in report.yogas {
        let houses: Vec<String> = yoga.houses.iter().map(|h| h.to_string()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [{}, {}]", yoga.name, yoga.category, yoga.strength);
        let _ = writeln!(out, "  houses: {}", houses.join(", "));
        let _ = writeln!(out, "  {}", yoga.description);
        let _ = writeln!(out, "  {}", yoga.effects);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish::{ChartBuilder, Strength, YogaCategory};

    fn chart() -> Chart {
        ChartBuilder::new(250.0)
            .planet(Planet::Sun, 100.5)
            .planet(Planet::Moon, 33.2)
            .planet(Planet::Mars, 298.0)
            .planet(Planet::Mercury, 118.0)
            .planet(Planet::Jupiter, 95.0)
            .planet(Planet::Venus, 140.0)
            .planet(Planet::Saturn, 200.0)
            .planet(Planet::Rahu, 10.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_render_text() {
        let yogas = vec![Yoga {
            category: YogaCategory::Mahapurusha,
            name: "Ruchaka Yoga".to_string(),
            planets: vec![Planet::Mars],
            houses: vec![10],
            strength: Strength::Strong,
            description: "Mars occupies the 10th house in Exalted dignity.".to_string(),
            effects: "Courage.".to_string(),
        }];
        let chart = chart();
        let text = render_text(&Report::new(&chart, &yogas));
        assert!(text.starts_with("Ascendant: Sagittarius\n1 yogas found\n"));
        assert!(text.contains("Ruchaka Yoga [Pancha Mahapurusha, strong]"));
        assert!(text.contains("  houses: 10"));
    }

    #[test]
    fn test_json_report_shape() {
        let chart = chart();
        let yogas = jyotish::detect_yogas(&chart.positions, &chart.houses);
        let value = serde_json::to_value(Report::new(&chart, &yogas)).unwrap();
        assert_eq!(value["ascendant"], "Sagittarius");
        assert_eq!(value["count"], yogas.len());
        assert!(value["yogas"].is_array());
    }
}
