//! Geocentric positions for Mercury–Saturn from mean Keplerian elements.
//!
//! Elements and centennial rates are the 1800 AD–2050 AD approximation set;
//! the Kepler equation is solved by Newton iteration and heliocentric
//! coordinates are differenced against Earth's to give geocentric ecliptic
//! longitude, latitude, and distance. Accuracy is at the arcminute level,
//! sufficient for sign/house classification.
//!
//! Source: Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets" (JPL), Table 1.

use crate::julian::centuries_since_j2000;
use crate::util::normalize_360;

/// Mean Keplerian elements at J2000.0 plus centennial rates.
///
/// Units: AU, degrees; rates per Julian century.
struct Elements {
    a: f64,
    e: f64,
    incl: f64,
    mean_lon: f64,
    peri_lon: f64,
    node_lon: f64,
    da: f64,
    de: f64,
    dincl: f64,
    dmean_lon: f64,
    dperi_lon: f64,
    dnode_lon: f64,
}

const MERCURY: Elements = Elements {
    a: 0.38709927, e: 0.20563593, incl: 7.00497902,
    mean_lon: 252.25032350, peri_lon: 77.45779628, node_lon: 48.33076593,
    da: 0.00000037, de: 0.00001906, dincl: -0.00594749,
    dmean_lon: 149472.67411175, dperi_lon: 0.16047689, dnode_lon: -0.12534081,
};

const VENUS: Elements = Elements {
    a: 0.72333566, e: 0.00677672, incl: 3.39467605,
    mean_lon: 181.97909950, peri_lon: 131.60246718, node_lon: 76.67984255,
    da: 0.00000390, de: -0.00004107, dincl: -0.00078890,
    dmean_lon: 58517.81538729, dperi_lon: 0.00268329, dnode_lon: -0.27769418,
};

const EARTH_MOON_BARY: Elements = Elements {
    a: 1.00000261, e: 0.01671123, incl: -0.00001531,
    mean_lon: 100.46457166, peri_lon: 102.93768193, node_lon: 0.0,
    da: 0.00000562, de: -0.00004392, dincl: -0.01294668,
    dmean_lon: 35999.37244981, dperi_lon: 0.32327364, dnode_lon: 0.0,
};

const MARS: Elements = Elements {
    a: 1.52371034, e: 0.09339410, incl: 1.84969142,
    mean_lon: -4.55343205, peri_lon: -23.94362959, node_lon: 49.55953891,
    da: 0.00001847, de: 0.00007882, dincl: -0.00813131,
    dmean_lon: 19140.30268499, dperi_lon: 0.44441088, dnode_lon: -0.29257343,
};

const JUPITER: Elements = Elements {
    a: 5.20288700, e: 0.04838624, incl: 1.30439695,
    mean_lon: 34.39644051, peri_lon: 14.72847983, node_lon: 100.47390909,
    da: -0.00011607, de: -0.00013253, dincl: -0.00183714,
    dmean_lon: 3034.74612775, dperi_lon: 0.21252668, dnode_lon: 0.20469106,
};

const SATURN: Elements = Elements {
    a: 9.53667594, e: 0.05386179, incl: 2.48599187,
    mean_lon: 49.95424423, peri_lon: 92.59887831, node_lon: 113.66242448,
    da: -0.00125060, de: -0.00050991, dincl: 0.00193609,
    dmean_lon: 1222.49362201, dperi_lon: -0.41897216, dnode_lon: -0.28867794,
};

/// Planets covered by the element table, in element-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePlanet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

fn elements(planet: TablePlanet) -> &'static Elements {
    match planet {
        TablePlanet::Mercury => &MERCURY,
        TablePlanet::Venus => &VENUS,
        TablePlanet::Mars => &MARS,
        TablePlanet::Jupiter => &JUPITER,
        TablePlanet::Saturn => &SATURN,
    }
}

/// Solve Kepler's equation M = E − e·sin E by Newton iteration.
///
/// All angles in radians; converges in a handful of steps for e < 0.25.
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut big_e = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..20 {
        let delta = (big_e - e * big_e.sin() - mean_anomaly) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    big_e
}

/// Heliocentric ecliptic-J2000 position (AU) from mean elements at time T.
fn heliocentric_xyz(el: &Elements, t: f64) -> [f64; 3] {
    let a = el.a + el.da * t;
    let e = el.e + el.de * t;
    let incl = (el.incl + el.dincl * t).to_radians();
    let mean_lon = el.mean_lon + el.dmean_lon * t;
    let peri_lon = el.peri_lon + el.dperi_lon * t;
    let node_lon = (el.node_lon + el.dnode_lon * t).to_radians();

    let arg_peri = (peri_lon).to_radians() - node_lon;
    let mean_anomaly = normalize_360(mean_lon - peri_lon).to_radians();

    let big_e = eccentric_anomaly(mean_anomaly, e);
    let x_orb = a * (big_e.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * big_e.sin();

    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_o, cos_o) = node_lon.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_w * cos_o - sin_w * sin_o * cos_i) * x_orb
            + (-sin_w * cos_o - cos_w * sin_o * cos_i) * y_orb,
        (cos_w * sin_o + sin_w * cos_o * cos_i) * x_orb
            + (-sin_w * sin_o + cos_w * cos_o * cos_i) * y_orb,
        sin_w * sin_i * x_orb + cos_w * sin_i * y_orb,
    ]
}

/// Earth's heliocentric position (Earth–Moon barycenter approximation).
pub fn earth_heliocentric_xyz(jd: f64) -> [f64; 3] {
    heliocentric_xyz(&EARTH_MOON_BARY, centuries_since_j2000(jd))
}

/// Geocentric ecliptic longitude (deg, [0,360)), latitude (deg), distance (AU).
pub fn planet_longitude_latitude_distance(planet: TablePlanet, jd: f64) -> (f64, f64, f64) {
    let t = centuries_since_j2000(jd);
    let p = heliocentric_xyz(elements(planet), t);
    let earth = heliocentric_xyz(&EARTH_MOON_BARY, t);

    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];

    let dist = (x * x + y * y + z * z).sqrt();
    let lon = normalize_360(y.atan2(x).to_degrees());
    let lat = (z / dist).asin().to_degrees();
    (lon, lat, dist)
}
