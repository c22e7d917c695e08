//! The nine planets (grahas) of the traditional chart, with static metadata.

use serde::{Deserialize, Serialize};

use crate::sign::Sign;

/// The nine grahas: Sun through Saturn plus the shadow planets Rahu/Ketu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine planets, in conventional chart order.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// The seven classical planets; aspects and dignity exclude the nodes.
pub const CLASSICAL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

impl Planet {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    /// Astrological glyph.
    pub const fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
            Planet::Saturn => "♄",
            Planet::Rahu => "☊",
            Planet::Ketu => "☋",
        }
    }

    /// Sanskrit name in Devanagari.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Planet::Sun => "सूर्य",
            Planet::Moon => "चंद्र",
            Planet::Mercury => "बुध",
            Planet::Venus => "शुक्र",
            Planet::Mars => "मंगल",
            Planet::Jupiter => "गुरु",
            Planet::Saturn => "शनि",
            Planet::Rahu => "राहु",
            Planet::Ketu => "केतु",
        }
    }

    /// Index into [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        match self {
            Planet::Sun => 0,
            Planet::Moon => 1,
            Planet::Mercury => 2,
            Planet::Venus => 3,
            Planet::Mars => 4,
            Planet::Jupiter => 5,
            Planet::Saturn => 6,
            Planet::Rahu => 7,
            Planet::Ketu => 8,
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A planet placed in the chart: longitude plus derived house number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub planet: Planet,
    /// Ecliptic longitude, degrees in [0, 360).
    pub lon_deg: f64,
    /// House number, 1–12.
    pub house: u8,
}

impl PlanetPlacement {
    /// Zodiac sign occupied by this placement.
    pub fn sign(&self) -> Sign {
        crate::sign::sign_from_longitude(self.lon_deg).sign
    }
}
