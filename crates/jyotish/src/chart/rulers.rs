//! Sign rulers for Vedic astrology.
//!
//! Maps zodiac signs to their classical lords. The nodes and the ascendant
//! rule no sign.

use crate::chart::types::{Planet, Sign};

const SIGN_LORDS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

/// Get sign lord
pub fn get_sign_lord(sign: Sign) -> Planet {
    SIGN_LORDS[sign.index()]
}
