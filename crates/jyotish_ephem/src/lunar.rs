//! Geocentric lunar position from a truncated periodic-term series.
//!
//! Carries the dominant terms of the full theory; accuracy ~0.05–0.3° in
//! longitude, a few hundredths of a degree in latitude. Sufficient for
//! nakshatra (13°20′ segments) and sign classification.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47,
//! tables 47.A / 47.B (leading terms).

use crate::julian::centuries_since_j2000;
use crate::util::normalize_360;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// One periodic term: multiples of (D, M, M′, F) and the coefficient.
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

/// Longitude terms, coefficients in degrees.
const LON_TERMS: [Term; 16] = [
    Term { d: 0, m: 0, mp: 1, f: 0, coeff: 6.288774 },
    Term { d: 2, m: 0, mp: -1, f: 0, coeff: 1.274027 },
    Term { d: 2, m: 0, mp: 0, f: 0, coeff: 0.658314 },
    Term { d: 0, m: 0, mp: 2, f: 0, coeff: 0.213618 },
    Term { d: 0, m: 1, mp: 0, f: 0, coeff: -0.185116 },
    Term { d: 0, m: 0, mp: 0, f: 2, coeff: -0.114332 },
    Term { d: 2, m: 0, mp: -2, f: 0, coeff: 0.058793 },
    Term { d: 2, m: -1, mp: -1, f: 0, coeff: 0.057066 },
    Term { d: 2, m: 0, mp: 1, f: 0, coeff: 0.053322 },
    Term { d: 2, m: -1, mp: 0, f: 0, coeff: 0.045758 },
    Term { d: 0, m: 1, mp: -1, f: 0, coeff: -0.040923 },
    Term { d: 1, m: 0, mp: 0, f: 0, coeff: -0.034720 },
    Term { d: 0, m: 1, mp: 1, f: 0, coeff: -0.030383 },
    Term { d: 2, m: 0, mp: 0, f: -2, coeff: 0.015327 },
    Term { d: 0, m: 0, mp: 1, f: 2, coeff: -0.012528 },
    Term { d: 0, m: 0, mp: 1, f: -2, coeff: 0.010980 },
];

/// Latitude terms, coefficients in degrees.
const LAT_TERMS: [Term; 8] = [
    Term { d: 0, m: 0, mp: 0, f: 1, coeff: 5.128122 },
    Term { d: 0, m: 0, mp: 1, f: 1, coeff: 0.280602 },
    Term { d: 0, m: 0, mp: 1, f: -1, coeff: 0.277693 },
    Term { d: 2, m: 0, mp: 0, f: -1, coeff: 0.173237 },
    Term { d: 2, m: 0, mp: -1, f: 1, coeff: 0.055413 },
    Term { d: 2, m: 0, mp: -1, f: -1, coeff: 0.046271 },
    Term { d: 2, m: 0, mp: 0, f: 1, coeff: 0.032573 },
    Term { d: 0, m: 0, mp: 2, f: 1, coeff: 0.017198 },
];

/// Distance terms, coefficients in kilometres (cosine series).
const DIST_TERMS: [Term; 5] = [
    Term { d: 0, m: 0, mp: 1, f: 0, coeff: -20905.355 },
    Term { d: 2, m: 0, mp: -1, f: 0, coeff: -3699.111 },
    Term { d: 2, m: 0, mp: 0, f: 0, coeff: -2955.968 },
    Term { d: 0, m: 0, mp: 2, f: 0, coeff: -569.925 },
    Term { d: 0, m: 1, mp: 0, f: 0, coeff: 48.888 },
];

/// Geocentric lunar longitude (deg, [0,360)), latitude (deg), distance (AU).
pub fn moon_longitude_latitude_distance(jd: f64) -> (f64, f64, f64) {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;

    // Fundamental arguments (degrees).
    let lp = 218.3164477 + 481_267.88123421 * t - 0.0015786 * t2;
    let d = 297.8501921 + 445_267.1114034 * t - 0.0018819 * t2;
    let m = 357.5291092 + 35_999.0502909 * t - 0.0001536 * t2;
    let mp = 134.9633964 + 477_198.8675055 * t + 0.0087414 * t2;
    let f = 93.2720950 + 483_202.0175233 * t - 0.0036539 * t2;

    // Eccentricity damping applied to terms involving the solar anomaly.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let arg = |term: &Term| -> f64 {
        (term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f)
            .to_radians()
    };
    let damping = |term: &Term| -> f64 {
        match term.m.abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        }
    };

    let mut sum_lon = 0.0;
    for term in &LON_TERMS {
        sum_lon += term.coeff * damping(term) * arg(term).sin();
    }
    // Planetary additives (Venus, Jupiter, flattening).
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_lon += 0.003958 * a1.sin() + 0.001962 * (lp - f).to_radians().sin() + 0.000318 * a2.sin();

    let mut sum_lat = 0.0;
    for term in &LAT_TERMS {
        sum_lat += term.coeff * damping(term) * arg(term).sin();
    }
    sum_lat -= 0.002235 * lp.to_radians().sin();

    let mut dist_km = 385_000.56;
    for term in &DIST_TERMS {
        dist_km += term.coeff * damping(term) * arg(term).cos();
    }

    (normalize_360(lp + sum_lon), sum_lat, dist_km / KM_PER_AU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: λ ≈ 133.163°, β ≈ −3.229°, Δ ≈ 368 409.7 km
        let jd = calendar_to_jd(1992, 4, 12.0);
        let (lon, lat, dist) = moon_longitude_latitude_distance(jd);
        assert!((lon - 133.163).abs() < 0.3, "lon = {lon}");
        assert!((lat - -3.229).abs() < 0.1, "lat = {lat}");
        let dist_km = dist * KM_PER_AU;
        assert!((dist_km - 368_409.7).abs() < 1_500.0, "dist = {dist_km} km");
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for day in 0..60 {
            let jd = crate::julian::J2000_JD + day as f64;
            let (_, lat, _) = moon_longitude_latitude_distance(jd);
            assert!(lat.abs() < 6.0, "lat = {lat} at day {day}");
        }
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for day in 0..60 {
            let jd = crate::julian::J2000_JD + day as f64;
            let (_, _, dist) = moon_longitude_latitude_distance(jd);
            let km = dist * KM_PER_AU;
            assert!((350_000.0..410_000.0).contains(&km), "dist = {km} km");
        }
    }

    #[test]
    fn moon_moves_about_13_degrees_per_day() {
        let jd = calendar_to_jd(2024, 2, 10.0);
        let (a, _, _) = moon_longitude_latitude_distance(jd);
        let (b, _, _) = moon_longitude_latitude_distance(jd + 1.0);
        let step = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&step), "daily motion = {step}°");
    }
}
