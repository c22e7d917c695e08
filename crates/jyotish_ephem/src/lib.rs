//! Compact analytical ephemeris for birth-chart computation.
//!
//! Provides geocentric ecliptic longitude, latitude, distance, and daily
//! motion for the nine bodies of the traditional chart: Sun, Moon, the five
//! naked-eye planets, and the lunar nodes Rahu/Ketu. Everything is computed
//! from closed-form series and mean orbital elements; there are no data
//! files and no I/O.
//!
//! Validity window: 1800–2050 (the mean-element approximation range).
//! Epochs outside it are rejected with [`EphemError::EpochOutOfRange`].

pub mod julian;
pub mod lunar;
pub mod nodes;
pub mod planets;
pub mod sidereal;
pub mod solar;
pub mod util;

mod error;

pub use error::EphemError;
pub use julian::{J2000_JD, calendar_to_jd, jd_from_calendar_time, jd_to_calendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use util::{normalize_360, signed_delta_deg};

use planets::TablePlanet;

/// First epoch covered by the mean-element tables (1800-01-01).
pub const MIN_JD: f64 = 2_378_496.5;

/// Last epoch covered by the mean-element tables (2050-12-31).
pub const MAX_JD: f64 = 2_469_807.5;

/// Mean geocentric lunar distance in AU, used for the nodes.
const MEAN_LUNAR_DIST_AU: f64 = 0.00257;

/// The nine bodies of the traditional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
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

/// All nine bodies, in conventional chart order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

/// The seven classical bodies (nodes excluded), used for aspects and dignity.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    /// Index into [`ALL_BODIES`].
    pub const fn index(self) -> usize {
        match self {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::Rahu => 7,
            Body::Ketu => 8,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geocentric state of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Ecliptic longitude, degrees in [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude, degrees.
    pub lat_deg: f64,
    /// Geocentric distance, AU.
    pub dist_au: f64,
    /// Daily motion in longitude, degrees per day (negative = retrograde).
    pub speed_deg_per_day: f64,
}

impl BodyState {
    /// True when the body's longitude is decreasing.
    pub fn retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Instantaneous longitude/latitude/distance without speed. Infallible once
/// the epoch has been validated.
fn lon_lat_dist(body: Body, jd: f64) -> (f64, f64, f64) {
    match body {
        Body::Sun => {
            let (lon, dist) = solar::sun_longitude_distance(jd);
            (lon, 0.0, dist)
        }
        Body::Moon => lunar::moon_longitude_latitude_distance(jd),
        Body::Mercury => planets::planet_longitude_latitude_distance(TablePlanet::Mercury, jd),
        Body::Venus => planets::planet_longitude_latitude_distance(TablePlanet::Venus, jd),
        Body::Mars => planets::planet_longitude_latitude_distance(TablePlanet::Mars, jd),
        Body::Jupiter => planets::planet_longitude_latitude_distance(TablePlanet::Jupiter, jd),
        Body::Saturn => planets::planet_longitude_latitude_distance(TablePlanet::Saturn, jd),
        Body::Rahu => (nodes::mean_rahu_deg(jd), 0.0, MEAN_LUNAR_DIST_AU),
        Body::Ketu => (nodes::mean_ketu_deg(jd), 0.0, MEAN_LUNAR_DIST_AU),
    }
}

/// Geocentric state of `body` at UT Julian Date `jd`.
///
/// Speed is a symmetric finite difference over ±0.5 day, which also settles
/// the retrograde flag.
pub fn position(body: Body, jd: f64) -> Result<BodyState, EphemError> {
    if !jd.is_finite() {
        return Err(EphemError::NonFiniteEpoch(jd));
    }
    if !(MIN_JD..=MAX_JD).contains(&jd) {
        return Err(EphemError::EpochOutOfRange {
            jd,
            min_jd: MIN_JD,
            max_jd: MAX_JD,
        });
    }

    let (lon, lat, dist) = lon_lat_dist(body, jd);
    let (lon_before, _, _) = lon_lat_dist(body, jd - 0.5);
    let (lon_after, _, _) = lon_lat_dist(body, jd + 0.5);
    let speed = signed_delta_deg(lon_after, lon_before);

    Ok(BodyState {
        lon_deg: lon,
        lat_deg: lat,
        dist_au: dist,
        speed_deg_per_day: speed,
    })
}
