//! Nakshatra lookup for chart positions.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::{Deserialize, Serialize};
use crate::chart::types::{normalize_degrees, Planet};

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (slug, display_name, planetary lord)
pub const NAKSHATRA_ORDER: &[(&str, &str, Planet)] = &[
    ("ashwini", "Ashwini", Planet::Ketu),
    ("bharani", "Bharani", Planet::Venus),
    ("krittika", "Krittika", Planet::Sun),
    ("rohini", "Rohini", Planet::Moon),
    ("mrigashira", "Mrigashira", Planet::Mars),
    ("ardra", "Ardra", Planet::Rahu),
    ("punarvasu", "Punarvasu", Planet::Jupiter),
    ("pushya", "Pushya", Planet::Saturn),
    ("ashlesha", "Ashlesha", Planet::Mercury),
    ("magha", "Magha", Planet::Ketu),
    ("purva_phalguni", "Purva Phalguni", Planet::Venus),
    ("uttara_phalguni", "Uttara Phalguni", Planet::Sun),
    ("hasta", "Hasta", Planet::Moon),
    ("chitra", "Chitra", Planet::Mars),
    ("swati", "Swati", Planet::Rahu),
    ("vishakha", "Vishakha", Planet::Jupiter),
    ("anuradha", "Anuradha", Planet::Saturn),
    ("jyeshtha", "Jyeshtha", Planet::Mercury),
    ("mula", "Mula", Planet::Ketu),
    ("purva_ashadha", "Purva Ashadha", Planet::Venus),
    ("uttara_ashadha", "Uttara Ashadha", Planet::Sun),
    ("shravana", "Shravana", Planet::Moon),
    ("dhanishta", "Dhanishta", Planet::Mars),
    ("shatabhisha", "Shatabhisha", Planet::Rahu),
    ("purva_bhadrapada", "Purva Bhadrapada", Planet::Jupiter),
    ("uttara_bhadrapada", "Uttara Bhadrapada", Planet::Saturn),
    ("revati", "Revati", Planet::Mercury),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NakshatraRecord {
    pub id: String,
    pub name: String,
    pub lord: Planet,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NakshatraMetadata {
    #[serde(flatten)]
    pub base: NakshatraRecord,
    pub pada: u8,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, display_name, lord))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            NakshatraRecord {
                id: slug.to_string(),
                name: display_name.to_string(),
                lord: *lord,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
                index: idx,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

/// Return metadata for the nakshatra containing the given longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let index = (lon / NAKSHATRA_SEGMENT_SIZE) as usize % NAKSHATRA_TABLE.len();
    let entry = &NAKSHATRA_TABLE[index];

    let offset = lon - entry.start;
    // Float error at a segment edge can push the quotient to 4.
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;

    NakshatraMetadata {
        base: entry.clone(),
        pada,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_nakshatra_for_longitude() {
        let meta = get_nakshatra_for_longitude(0.0);
        assert_eq!(meta.base.id, "ashwini");
        assert_eq!(meta.base.lord, Planet::Ketu);
        assert_eq!(meta.pada, 1);

        let meta2 = get_nakshatra_for_longitude(13.33);
        assert_eq!(meta2.base.id, "ashwini");
        assert_eq!(meta2.pada, 4);
    }

    #[test]
    fn test_last_nakshatra_wraps() {
        let meta = get_nakshatra_for_longitude(359.99);
        assert_eq!(meta.base.name, "Revati");
        assert_eq!(meta.base.index, 26);
        assert_eq!(get_nakshatra_for_longitude(360.0).base.index, 0);
    }

    #[test]
    fn test_pada_progression() {
        // Rohini starts at 40°
        assert_eq!(get_nakshatra_for_longitude(40.5).pada, 1);
        assert_eq!(get_nakshatra_for_longitude(44.0).pada, 2);
        assert_eq!(get_nakshatra_for_longitude(47.0).pada, 3);
        assert_eq!(get_nakshatra_for_longitude(50.5).pada, 4);
    }
}
