//! Zodiac signs and longitude → sign placement.
//!
//! The zodiac is twelve equal 30° arcs starting at 0° Aries. Sign index is
//! `floor(longitude / 30)` after normalization.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::normalize_360;

/// Width of one sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// The twelve zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All twelve signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Sign {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Astrological glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Sign::Aries => "♈",
            Sign::Taurus => "♉",
            Sign::Gemini => "♊",
            Sign::Cancer => "♋",
            Sign::Leo => "♌",
            Sign::Virgo => "♍",
            Sign::Libra => "♎",
            Sign::Scorpio => "♏",
            Sign::Sagittarius => "♐",
            Sign::Capricorn => "♑",
            Sign::Aquarius => "♒",
            Sign::Pisces => "♓",
        }
    }

    /// Sanskrit name in Devanagari.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Sign::Aries => "मेष",
            Sign::Taurus => "वृषभ",
            Sign::Gemini => "मिथुन",
            Sign::Cancer => "कर्क",
            Sign::Leo => "सिंह",
            Sign::Virgo => "कन्या",
            Sign::Libra => "तुला",
            Sign::Scorpio => "वृश्चिक",
            Sign::Sagittarius => "धनु",
            Sign::Capricorn => "मकर",
            Sign::Aquarius => "कुंभ",
            Sign::Pisces => "मीन",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    /// Ruling planet (sign lordship).
    pub const fn lord(self) -> Planet {
        match self {
            Sign::Aries | Sign::Scorpio => Planet::Mars,
            Sign::Taurus | Sign::Libra => Planet::Venus,
            Sign::Gemini | Sign::Virgo => Planet::Mercury,
            Sign::Cancer => Planet::Moon,
            Sign::Leo => Planet::Sun,
            Sign::Sagittarius | Sign::Pisces => Planet::Jupiter,
            Sign::Capricorn | Sign::Aquarius => Planet::Saturn,
        }
    }

    /// Index into [`ALL_SIGNS`] (0 = Aries).
    pub const fn index(self) -> usize {
        match self {
            Sign::Aries => 0,
            Sign::Taurus => 1,
            Sign::Gemini => 2,
            Sign::Cancer => 3,
            Sign::Leo => 4,
            Sign::Virgo => 5,
            Sign::Libra => 6,
            Sign::Scorpio => 7,
            Sign::Sagittarius => 8,
            Sign::Capricorn => 9,
            Sign::Aquarius => 10,
            Sign::Pisces => 11,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    pub sign: Sign,
    /// 0 = Aries, 11 = Pisces.
    pub sign_index: u8,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
}

/// Resolve an ecliptic longitude to its zodiac sign.
///
/// The longitude is normalized first, so any finite input is valid. The
/// index is clamped to 11 to absorb floating-point spill at exactly 360°.
pub fn sign_from_longitude(lon_deg: f64) -> ZodiacPlacement {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / SIGN_SPAN) as usize).min(11);
    ZodiacPlacement {
        sign: ALL_SIGNS[idx],
        sign_index: idx as u8,
        degree_in_sign: lon - idx as f64 * SIGN_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_45_is_taurus_15() {
        let p = sign_from_longitude(45.0);
        assert_eq!(p.sign, Sign::Taurus);
        assert_eq!(p.sign_index, 1);
        assert!((p.degree_in_sign - 15.0).abs() < 1e-12);
    }

    #[test]
    fn wraparound_invariance() {
        for &lon in &[0.0, 29.999, 45.0, 180.0, 359.999, -10.0, 725.0] {
            let a = sign_from_longitude(lon);
            let b = sign_from_longitude(normalize_360(lon));
            assert_eq!(a.sign, b.sign, "lon = {lon}");
        }
    }

    #[test]
    fn boundaries_belong_to_upper_sign() {
        assert_eq!(sign_from_longitude(30.0).sign, Sign::Taurus);
        assert_eq!(sign_from_longitude(330.0).sign, Sign::Pisces);
    }

    #[test]
    fn index_clamped_at_top_edge() {
        // 359.9999999999999 / 30 can round to 12.0 in floating point
        let p = sign_from_longitude(359.999_999_999_999_94);
        assert_eq!(p.sign, Sign::Pisces);
    }

    #[test]
    fn lordship_table() {
        assert_eq!(Sign::Aries.lord(), Planet::Mars);
        assert_eq!(Sign::Cancer.lord(), Planet::Moon);
        assert_eq!(Sign::Leo.lord(), Planet::Sun);
        assert_eq!(Sign::Pisces.lord(), Planet::Jupiter);
        assert_eq!(Sign::Aquarius.lord(), Planet::Saturn);
    }

    #[test]
    fn each_element_has_three_signs() {
        let fire = ALL_SIGNS.iter().filter(|s| s.element() == Element::Fire).count();
        assert_eq!(fire, 3);
    }
}
