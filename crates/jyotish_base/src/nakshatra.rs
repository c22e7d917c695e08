//! The 27 nakshatras (lunar mansions) and pada resolution.
//!
//! Each nakshatra spans 13°20′ (360/27); each divides into four padas of
//! 3°20′. Derived solely from the Moon's ecliptic longitude.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::normalize_360;

/// Span of one nakshatra in degrees: 13°20′.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada in degrees: 3°20′.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras in zodiacal order, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in zodiacal order.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Index into [`ALL_NAKSHATRAS`], 0 = Ashwini.
    pub fn index(self) -> usize {
        ALL_NAKSHATRAS.iter().position(|&n| n == self).unwrap_or(0)
    }

    /// Vimshottari dasha lord of this nakshatra.
    ///
    /// The nine lords repeat three times across the 27 mansions, so the lord
    /// is the nakshatra index modulo 9 into the fixed cycle.
    pub fn dasha_lord(self) -> Planet {
        crate::dasha::VIMSHOTTARI_LORDS[self.index() % 9]
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lunar longitude resolved to nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 0–26.
    pub index: u8,
    /// 1–4.
    pub pada: u8,
}

/// Resolve an ecliptic longitude (normally the Moon's) to nakshatra + pada.
///
/// Indices are clamped at the top edge to absorb floating-point spill at
/// exactly 360°.
pub fn nakshatra_from_longitude(lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN) as usize).min(26);
    let within = lon - idx as f64 * NAKSHATRA_SPAN;
    let pada = ((within / PADA_SPAN) as usize).min(3) as u8 + 1;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[idx],
        index: idx as u8,
        pada,
    }
}
