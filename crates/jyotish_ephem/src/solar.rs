//! Geocentric solar position from the low-precision series.
//!
//! Accuracy ~0.01° in longitude over 1800–2050, well inside what sign and
//! house classification needs.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.

use crate::julian::centuries_since_j2000;
use crate::util::normalize_360;

/// Geometric geocentric solar longitude (degrees, [0,360)) and distance (AU).
pub fn sun_longitude_distance(jd: f64) -> (f64, f64) {
    let t = centuries_since_j2000(jd);

    // Mean longitude and mean anomaly.
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m_deg = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m = m_deg.to_radians();

    // Eccentricity of Earth's orbit.
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    // Equation of center.
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = normalize_360(l0 + c);
    let v = (m_deg + c).to_radians();
    let dist_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());

    (true_lon, dist_au)
}
