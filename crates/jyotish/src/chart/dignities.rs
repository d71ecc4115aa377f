//! Dignity calculation for Vedic astrology.
//!
//! Resolves exaltation, debilitation, moolatrikona and own-sign placements,
//! falling back to the natural (naisargika) relationship between a planet and
//! the lord of the sign it occupies.

use serde::{Deserialize, Serialize};
use crate::chart::rulers::get_sign_lord;
use crate::chart::types::{normalize_degrees, Dignity, Planet, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// Moolatrikona span: sign plus [start, end) degrees within it.
struct MoolatrikonaSpan {
    sign: Sign,
    start: f64,
    end: f64,
}

fn exaltation_sign(planet: Planet) -> Option<Sign> {
    match planet {
        Planet::Sun => Some(Sign::Aries),
        Planet::Moon => Some(Sign::Taurus),
        Planet::Mars => Some(Sign::Capricorn),
        Planet::Mercury => Some(Sign::Virgo),
        Planet::Jupiter => Some(Sign::Cancer),
        Planet::Venus => Some(Sign::Pisces),
        Planet::Saturn => Some(Sign::Libra),
        Planet::Rahu => Some(Sign::Taurus),
        Planet::Ketu => Some(Sign::Scorpio),
        Planet::Ascendant => None,
    }
}

fn moolatrikona_span(planet: Planet) -> Option<MoolatrikonaSpan> {
    let (sign, start, end) = match planet {
        Planet::Sun => (Sign::Leo, 0.0, 20.0),
        Planet::Moon => (Sign::Taurus, 3.0, 30.0),
        Planet::Mars => (Sign::Aries, 0.0, 12.0),
        Planet::Mercury => (Sign::Virgo, 15.0, 20.0),
        Planet::Jupiter => (Sign::Sagittarius, 0.0, 10.0),
        Planet::Venus => (Sign::Libra, 0.0, 15.0),
        Planet::Saturn => (Sign::Aquarius, 0.0, 20.0),
        _ => return None,
    };
    Some(MoolatrikonaSpan { sign, start, end })
}

/// Natural relationship of `planet` towards `other`.
pub fn natural_relationship(planet: Planet, other: Planet) -> Relationship {
    use Planet::*;
    use Relationship::*;
    if planet == other {
        return Friend;
    }
    let (friends, enemies): (&[Planet], &[Planet]) = match planet {
        Sun => (&[Moon, Mars, Jupiter], &[Venus, Saturn]),
        Moon => (&[Sun, Mercury], &[]),
        Mars => (&[Sun, Moon, Jupiter], &[Mercury]),
        Mercury => (&[Sun, Venus], &[Moon]),
        Jupiter => (&[Sun, Moon, Mars], &[Mercury, Venus]),
        Venus => (&[Mercury, Saturn], &[Sun, Moon]),
        Saturn => (&[Mercury, Venus], &[Sun, Moon, Mars]),
        Rahu | Ketu => (&[Mercury, Venus, Saturn], &[Sun, Moon, Mars]),
        Ascendant => (&[], &[]),
    };
    if friends.contains(&other) {
        Friend
    } else if enemies.contains(&other) {
        Enemy
    } else {
        Neutral
    }
}

pub struct DignitiesService;

impl DignitiesService {
    /// Get the dignity of a planet at a sidereal longitude.
    ///
    /// Moolatrikona spans take precedence inside the exaltation sign (Moon in
    /// Taurus past 3°, Mercury in Virgo from 15° to 20°).
    pub fn get_dignity(&self, planet: Planet, longitude: f64) -> Dignity {
        if planet == Planet::Ascendant {
            return Dignity::Neutral;
        }
        let lon = normalize_degrees(longitude);
        let sign = Sign::from_longitude(lon);
        let degree = lon % 30.0;

        if let Some(span) = moolatrikona_span(planet) {
            if span.sign == sign && degree >= span.start && degree < span.end {
                return Dignity::Moolatrikona;
            }
        }
        if exaltation_sign(planet) == Some(sign) {
            return Dignity::Exalted;
        }
        if self.is_debilitation_sign(planet, sign) {
            return Dignity::Debilitated;
        }

        let lord = get_sign_lord(sign);
        if lord == planet {
            return Dignity::OwnSign;
        }
        match natural_relationship(planet, lord) {
            Relationship::Friend => Dignity::Friendly,
            Relationship::Neutral => Dignity::Neutral,
            Relationship::Enemy => Dignity::Enemy,
        }
    }

    /// Whether `sign` is the debilitation sign of `planet`.
    pub fn is_debilitation_sign(&self, planet: Planet, sign: Sign) -> bool {
        exaltation_sign(planet).map(|s| s.advance(6) == sign).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_dignity_exalted() {
        let service = DignitiesService;
        // Mars in Capricorn (270-300 degrees)
        assert_eq!(service.get_dignity(Planet::Mars, 280.0), Dignity::Exalted);
        // Sun in Aries
        assert_eq!(service.get_dignity(Planet::Sun, 10.0), Dignity::Exalted);
    }

    #[test]
    fn test_get_dignity_debilitated() {
        let service = DignitiesService;
        // Mars in Cancer
        assert_eq!(service.get_dignity(Planet::Mars, 100.0), Dignity::Debilitated);
        // Jupiter in Capricorn
        assert_eq!(service.get_dignity(Planet::Jupiter, 275.0), Dignity::Debilitated);
    }

    #[test]
    fn test_get_dignity_moolatrikona_precedence() {
        let service = DignitiesService;
        assert_eq!(service.get_dignity(Planet::Moon, 31.0), Dignity::Exalted);
        assert_eq!(service.get_dignity(Planet::Moon, 40.0), Dignity::Moolatrikona);
        assert_eq!(service.get_dignity(Planet::Mercury, 157.0), Dignity::Exalted);
        assert_eq!(service.get_dignity(Planet::Mercury, 167.0), Dignity::Moolatrikona);
        assert_eq!(service.get_dignity(Planet::Sun, 125.0), Dignity::Moolatrikona);
        assert_eq!(service.get_dignity(Planet::Sun, 145.0), Dignity::OwnSign);
    }

    #[test]
    fn test_get_dignity_relationship_fallback() {
        let service = DignitiesService;
        // Sun in Sagittarius: Jupiter is a friend
        assert_eq!(service.get_dignity(Planet::Sun, 245.0), Dignity::Friendly);
        // Sun in Taurus: Venus is an enemy
        assert_eq!(service.get_dignity(Planet::Sun, 45.0), Dignity::Enemy);
        // Sun in Gemini: Mercury is neutral
        assert_eq!(service.get_dignity(Planet::Sun, 75.0), Dignity::Neutral);
    }

    #[test]
    fn test_debilitation_signs() {
        let service = DignitiesService;
        assert!(service.is_debilitation_sign(Planet::Sun, Sign::Libra));
        assert!(service.is_debilitation_sign(Planet::Rahu, Sign::Scorpio));
        assert!(!service.is_debilitation_sign(Planet::Sun, Sign::Aries));
        assert!(!service.is_debilitation_sign(Planet::Ascendant, Sign::Libra));
    }

    #[test]
    fn test_ascendant_is_neutral() {
        assert_eq!(DignitiesService.get_dignity(Planet::Ascendant, 10.0), Dignity::Neutral);
    }
}
