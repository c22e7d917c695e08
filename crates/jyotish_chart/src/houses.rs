//! Ascendant, Midheaven, and house cusp computation.
//!
//! Placidus cusps via iterative semi-arc trisection, with an equal-house
//! fallback above the polar limit where Placidus degenerates.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use jyotish_ephem::{gmst_rad, local_sidereal_time_rad};

use crate::report::Warning;

/// Mean obliquity of the ecliptic at J2000.0 (23.4392911 deg), radians.
pub const OBLIQUITY_J2000_RAD: f64 = 0.409_092_804_222_329;

/// Maximum latitude (degrees) at which Placidus cusps are computed.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

/// House division method actually used for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseSystem {
    Placidus,
    Equal,
}

/// The twelve cusp longitudes plus the two angles they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// Cusp longitudes in degrees, index 0 = house 1. Cusp 1 is the
    /// Ascendant and cusp 10 the MC in both systems.
    pub cusps: [f64; 12],
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub system: HouseSystem,
}

/// Compute house cusps for an instant and location.
///
/// Uses Placidus within the polar limit; beyond it, falls back to equal
/// houses from the Ascendant and reports the degradation as a warning
/// rather than failing the chart.
pub fn compute_cusps(
    jd_ut: f64,
    latitude_deg: f64,
    longitude_east_deg: f64,
) -> (HouseCusps, Option<Warning>) {
    let gmst = gmst_rad(jd_ut);
    let lst = local_sidereal_time_rad(gmst, longitude_east_deg.to_radians());
    let lat_rad = latitude_deg.to_radians();

    let (asc_rad, mc_rad, ramc) = asc_mc_ramc_from_lst(lst, lat_rad);
    let asc_deg = asc_rad.to_degrees().rem_euclid(360.0);
    let mc_deg = mc_rad.to_degrees().rem_euclid(360.0);

    if latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        return (
            HouseCusps {
                cusps: equal_cusps(asc_deg),
                ascendant_deg: asc_deg,
                mc_deg,
                system: HouseSystem::Equal,
            },
            Some(Warning::HighLatitudeEqualHouses { latitude: latitude_deg }),
        );
    }

    let cusps = placidus_cusps(asc_deg, mc_deg, ramc, lat_rad, OBLIQUITY_J2000_RAD);
    (
        HouseCusps { cusps, ascendant_deg: asc_deg, mc_deg, system: HouseSystem::Placidus },
        None,
    )
}

/// Ascendant, MC, and RAMC from a pre-computed LST.
///
/// `Asc = atan2(-cos(LST), sin(LST)*cos(eps) + tan(phi)*sin(eps))` and
/// `MC = atan2(sin(LST), cos(LST)*cos(eps))` (Meeus Ch. 13). RAMC equals
/// LST by definition.
///
/// The `atan2` Ascendant carries a half-turn ambiguity between the rising
/// and setting points of the horizon. The Ascendant proper is the point
/// east of the meridian, so the forward ecliptic arc MC -> Asc must stay
/// under 180 deg; otherwise the result is flipped onto the rising side.
fn asc_mc_ramc_from_lst(lst_rad: f64, latitude_rad: f64) -> (f64, f64, f64) {
    let eps = OBLIQUITY_J2000_RAD;

    let mut asc = f64::atan2(
        -lst_rad.cos(),
        lst_rad.sin() * eps.cos() + latitude_rad.tan() * eps.sin(),
    )
    .rem_euclid(TAU);
    let mc = f64::atan2(lst_rad.sin(), lst_rad.cos() * eps.cos()).rem_euclid(TAU);

    if (asc - mc).rem_euclid(TAU) >= PI {
        asc = (asc + PI).rem_euclid(TAU);
    }

    (asc, mc, lst_rad.rem_euclid(TAU))
}

/// Equal house division: cusp[i] = Asc + i*30.
fn equal_cusps(asc_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (asc_deg + (i as f64) * 30.0).rem_euclid(360.0);
    }
    cusps
}

/// Placidus cusps by time-based semi-arc trisection.
///
/// Cusps 1 = Asc, 4 = IC, 7 = Desc, 10 = MC. Cusps 11, 12, 2, 3 are found
/// iteratively; 5, 6, 8, 9 are their opposites.
fn placidus_cusps(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let desc_deg = (asc_deg + 180.0).rem_euclid(360.0);
    let ic_deg = (mc_deg + 180.0).rem_euclid(360.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    // Cusps 11, 12: MC -> Asc, diurnal semi-arc forward from the MC
    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true);
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true);

    // Cusps 2, 3: Asc -> IC, nocturnal semi-arc short of the IC
    cusps[1] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false);
    cusps[2] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false);

    // Cusps 5, 6, 8, 9 are opposite 11, 12, 2, 3
    cusps[4] = (cusps[10] + 180.0).rem_euclid(360.0);
    cusps[5] = (cusps[11] + 180.0).rem_euclid(360.0);
    cusps[7] = (cusps[1] + 180.0).rem_euclid(360.0);
    cusps[8] = (cusps[2] + 180.0).rem_euclid(360.0);

    cusps
}

/// One Placidus cusp by iterative semi-arc trisection.
///
/// Diurnal cusps (houses 11, 12) sit `fraction` of the semi-diurnal arc
/// past the MC: `RA = RAMC + fraction * SA_d`. Nocturnal cusps (houses
/// 2, 3) sit `fraction` of the semi-nocturnal arc short of the IC:
/// `RA = RAMC + pi - fraction * SA_n`. Both reduce to 30 deg steps in RA
/// at the equator, where every semi-arc is a quadrant.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let mut ra = if above_horizon {
        ramc + fraction * PI / 2.0
    } else {
        ramc + PI - fraction * PI / 2.0
    };

    for _ in 0..50 {
        let dec = (eps.sin() * ra.sin()).asin();
        let semi_arc = semi_arc_rad(dec, lat, above_horizon);
        let f = fraction * semi_arc;

        let new_ra = if above_horizon { ramc + f } else { ramc + PI - f };

        if (new_ra - ra).abs() < 1e-10 {
            ra = new_ra;
            break;
        }
        ra = new_ra;
    }

    equator_to_ecliptic_longitude_rad(ra, eps).to_degrees().rem_euclid(360.0)
}

/// Diurnal or nocturnal semi-arc in radians.
///
/// `semi_arc = acos(-tan(dec) * tan(lat))`; nocturnal is its complement.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Convert equatorial RA to ecliptic longitude for a point whose
/// declination satisfies `dec = asin(sin(eps)*sin(RA))`.
fn equator_to_ecliptic_longitude_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    let cos_lon = ra.cos();
    f64::atan2(sin_lon, cos_lon).rem_euclid(TAU)
}

/// Forward arc from a to b in degrees, always in [0, 360).
fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

/// House number (1-12) containing an ecliptic longitude.
///
/// A body sits in house `i` when its longitude lies on the forward arc from
/// cusp `i` to cusp `i+1`, wrap-around included.
pub fn house_of(cusps: &[f64; 12], lon_deg: f64) -> u8 {
    let lon = lon_deg.rem_euclid(360.0);
    for i in 0..12 {
        let next = (i + 1) % 12;
        let width = arc_forward(cusps[i], cusps[next]);
        let offset = arc_forward(cusps[i], lon);
        if offset < width {
            return (i as u8) + 1;
        }
    }
    // Unreachable for any proper cusp ring; degenerate input lands in 1.
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    const MUMBAI_LAT: f64 = 19.0760;
    const MUMBAI_LON: f64 = 72.8777;

    #[test]
    fn equal_cusps_30_deg_apart() {
        let cusps = equal_cusps(100.0);
        for (i, cusp) in cusps.iter().enumerate() {
            let expected = (100.0 + (i as f64) * 30.0).rem_euclid(360.0);
            assert!((cusp - expected).abs() < 1e-10, "cusp[{i}] = {cusp}");
        }
    }

    #[test]
    fn equal_cusps_wrap_around() {
        let cusps = equal_cusps(350.0);
        assert!((cusps[1] - 20.0).abs() < 1e-10);
        assert!((cusps[11] - 320.0).abs() < 1e-10);
    }

    #[test]
    fn placidus_angular_cusps_match_angles() {
        let (houses, warning) = compute_cusps(2_451_545.0, MUMBAI_LAT, MUMBAI_LON);
        assert!(warning.is_none());
        assert_eq!(houses.system, HouseSystem::Placidus);
        assert!((houses.cusps[0] - houses.ascendant_deg).abs() < 1e-10);
        assert!((houses.cusps[9] - houses.mc_deg).abs() < 1e-10);
    }

    #[test]
    fn placidus_opposite_cusps() {
        let (houses, _) = compute_cusps(2_451_545.0, MUMBAI_LAT, MUMBAI_LON);
        for i in 0..6 {
            let diff = arc_forward(houses.cusps[i], houses.cusps[i + 6]);
            assert!(
                (diff - 180.0).abs() < 1e-8,
                "cusp {} vs {}: arc = {diff}",
                i + 1,
                i + 7
            );
        }
    }

    #[test]
    fn placidus_cusps_partition_the_ecliptic_across_epochs_and_latitudes() {
        // Twelve forward arcs summing to one full turn means the ring is
        // ordered with no overlap and no gap, at every sidereal time.
        for step in 0..36 {
            let jd = 2_440_000.0 + step as f64 * 500.25;
            for lat in [-60.0, -40.0, -19.5, 0.0, 19.0760, 40.0, 51.5, 60.0] {
                let (houses, warning) = compute_cusps(jd, lat, MUMBAI_LON);
                assert!(warning.is_none());
                let mut total = 0.0;
                for i in 0..12 {
                    let next = (i + 1) % 12;
                    total += arc_forward(houses.cusps[i], houses.cusps[next]);
                }
                assert!(
                    (total - 360.0).abs() < 1e-8,
                    "jd {jd} lat {lat}: arcs sum to {total}"
                );
            }
        }
    }

    #[test]
    fn ascendant_is_east_of_the_meridian() {
        // The rising point's hour angle relative to the RAMC must stay in
        // (0, pi); the setting point would land in (pi, 2 pi).
        let eps = OBLIQUITY_J2000_RAD;
        for step in 0..48 {
            let lst = step as f64 * TAU / 48.0;
            for lat_deg in [-66.0, -45.0, -20.0, 0.0, 20.0, 45.0, 66.0] {
                let (asc, _, ramc) = asc_mc_ramc_from_lst(lst, f64::to_radians(lat_deg));
                let ra_asc = f64::atan2(asc.sin() * eps.cos(), asc.cos()).rem_euclid(TAU);
                let hour_angle = (ra_asc - ramc).rem_euclid(TAU);
                assert!(
                    hour_angle > 0.0 && hour_angle < PI,
                    "lst {lst:.3} lat {lat_deg}: hour angle {:.2} deg",
                    hour_angle.to_degrees()
                );
            }
        }
    }

    #[test]
    fn high_latitude_falls_back_to_equal() {
        let (houses, warning) = compute_cusps(2_451_545.0, 70.0, 25.0);
        assert_eq!(houses.system, HouseSystem::Equal);
        assert!(matches!(warning, Some(Warning::HighLatitudeEqualHouses { .. })));
        for i in 0..12 {
            let next = (i + 1) % 12;
            let width = arc_forward(houses.cusps[i], houses.cusps[next]);
            assert!((width - 30.0).abs() < 1e-10);
        }
    }

    #[test]
    fn polar_limit_is_inclusive() {
        let (houses, warning) = compute_cusps(2_451_545.0, 66.5, 25.0);
        assert_eq!(houses.system, HouseSystem::Placidus);
        assert!(warning.is_none());
    }

    #[test]
    fn house_of_partitions_the_circle() {
        let (houses, _) = compute_cusps(2_451_545.0, MUMBAI_LAT, MUMBAI_LON);
        let mut step = 0.0;
        while step < 360.0 {
            let h = house_of(&houses.cusps, step);
            assert!((1..=12).contains(&h), "lon {step} landed in house {h}");
            step += 0.5;
        }
    }

    #[test]
    fn house_of_cusp_belongs_to_its_house() {
        let cusps = equal_cusps(100.0);
        assert_eq!(house_of(&cusps, 100.0), 1);
        assert_eq!(house_of(&cusps, 129.999), 1);
        assert_eq!(house_of(&cusps, 130.0), 2);
        assert_eq!(house_of(&cusps, 99.999), 12);
    }

    #[test]
    fn house_of_wraps_across_zero() {
        let cusps = equal_cusps(350.0);
        assert_eq!(house_of(&cusps, 355.0), 1);
        assert_eq!(house_of(&cusps, 5.0), 1);
        assert_eq!(house_of(&cusps, 25.0), 2);
    }

    #[test]
    fn semi_arc_equator_equinox() {
        let sa = semi_arc_rad(0.0, 0.0, true);
        assert!((sa - PI / 2.0).abs() < 1e-10);
    }

    #[test]
    fn semi_arc_nocturnal_complement() {
        let dec = 10.0_f64.to_radians();
        let lat = 40.0_f64.to_radians();
        assert!((semi_arc_rad(dec, lat, true) + semi_arc_rad(dec, lat, false) - PI).abs() < 1e-10);
    }

    #[test]
    fn equator_to_ecliptic_fixed_points() {
        // The equinoxes and solstices map to themselves.
        assert!(equator_to_ecliptic_longitude_rad(0.0, OBLIQUITY_J2000_RAD).abs() < 1e-10);
        let lon = equator_to_ecliptic_longitude_rad(PI / 2.0, OBLIQUITY_J2000_RAD);
        assert!((lon - PI / 2.0).abs() < 1e-10);
    }

    #[test]
    fn equator_ascendant_is_the_point_rising_a_quadrant_past_the_ramc() {
        // At latitude 0 the horizon meets the equator at RA = RAMC + 90 deg,
        // so the Ascendant is that point projected onto the ecliptic.
        for step in 0..24 {
            let lst = step as f64 * TAU / 24.0;
            let (asc, _, ramc) = asc_mc_ramc_from_lst(lst, 0.0);
            let expected = equator_to_ecliptic_longitude_rad(ramc + PI / 2.0, OBLIQUITY_J2000_RAD);
            let diff = (asc - expected).rem_euclid(TAU).min((expected - asc).rem_euclid(TAU));
            assert!(diff < 1e-9, "lst {lst:.3}: asc {asc:.6} vs {expected:.6}");
        }
    }

    #[test]
    fn mc_to_ascendant_arc_stays_under_a_half_turn() {
        for step in 0..48 {
            let lst = step as f64 * TAU / 48.0;
            for lat_deg in [-66.0, -30.0, 0.0, 30.0, 66.0] {
                let (asc, mc, _) = asc_mc_ramc_from_lst(lst, f64::to_radians(lat_deg));
                let arc = (asc - mc).rem_euclid(TAU);
                assert!(
                    arc > 0.0 && arc < PI,
                    "lst {lst:.3} lat {lat_deg}: MC->Asc arc {:.2} deg",
                    arc.to_degrees()
                );
            }
        }
    }
}
