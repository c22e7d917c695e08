//! The aggregate chart report and its non-fatal warnings.
//!
//! Everything here is plain serializable data with no live resources, so a
//! persistence or presentation layer can take it as-is.

use serde::{Deserialize, Serialize};

use jyotish_base::{
    Aspect, DashaPeriod, Dignity, LalKitabAnalysis, NakshatraPosition, NumerologyProfile, Planet,
    Sign, Yoga, ZodiacPlacement,
};

use crate::geo::GeoCoordinate;

/// Non-fatal degradations recorded while the chart was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// The birth place did not match the city table; the default coordinate
    /// was substituted.
    UnresolvedPlace {
        input: String,
        fallback_latitude: f64,
        fallback_longitude: f64,
    },
    /// One body's position could not be computed; a placeholder at 0° Aries
    /// was substituted.
    EphemerisFallback { body: Planet, reason: String },
    /// Latitude beyond the Placidus limit; equal houses were used instead.
    HighLatitudeEqualHouses { latitude: f64 },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnresolvedPlace { input, fallback_latitude, fallback_longitude } => {
                write!(
                    f,
                    "place '{input}' not found, using default coordinate \
                     ({fallback_latitude}, {fallback_longitude})"
                )
            }
            Warning::EphemerisFallback { body, reason } => {
                write!(f, "{body} position unavailable ({reason}), using 0° Aries")
            }
            Warning::HighLatitudeEqualHouses { latitude } => {
                write!(f, "latitude {latitude}° beyond Placidus limit, using equal houses")
            }
        }
    }
}

/// The birth tuple the engine is asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local clock time, `HH:MM`. Treated as UT at the birth place; no
    /// timezone lookup is performed.
    pub time: String,
    pub place: BirthPlace,
}

/// Free-text place name or explicit coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BirthPlace {
    Named(String),
    Coordinate(GeoCoordinate),
}

/// One body's computed position with its chart-derived views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialPosition {
    pub planet: Planet,
    /// Ecliptic longitude, degrees in [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude, degrees.
    pub lat_deg: f64,
    /// Geocentric distance, AU.
    pub dist_au: f64,
    /// Daily motion, degrees per day.
    pub speed_deg_per_day: f64,
    pub retrograde: bool,
    pub placement: ZodiacPlacement,
    /// House number, 1–12.
    pub house: u8,
}

/// One of the twelve houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1–12.
    pub number: u8,
    /// Cusp longitude, degrees in [0, 360).
    pub cusp_deg: f64,
    /// Sign on the cusp.
    pub sign: Sign,
    /// Ruling planet of the cusp sign.
    pub lord: Planet,
    /// Bodies whose longitudes fall inside this house's arc.
    pub occupants: Vec<Planet>,
}

/// Dignity grade of one planet in its occupied sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetDignity {
    pub planet: Planet,
    pub sign: Sign,
    pub dignity: Dignity,
}

/// The aggregate result of one chart computation.
///
/// Built fresh per request; every section references the same instant and
/// coordinate. Degradations taken along the way are listed in `warnings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub input: BirthInput,
    pub coordinate: GeoCoordinate,
    /// Birth instant as a Julian Date (local time treated as UT).
    pub jd_birth: f64,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub positions: Vec<CelestialPosition>,
    pub houses: Vec<House>,
    pub aspects: Vec<Aspect>,
    pub nakshatra: NakshatraPosition,
    pub dasha: DashaPeriod,
    pub numerology: NumerologyProfile,
    pub dignities: Vec<PlanetDignity>,
    pub yogas: Vec<Yoga>,
    pub lal_kitab: LalKitabAnalysis,
    pub warnings: Vec<Warning>,
}

impl ChartReport {
    /// True when nothing degraded during computation.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
