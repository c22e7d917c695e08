//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Needed to derive the local sidereal time that anchors the Ascendant and
//! house cusps. Input epochs are UT Julian Dates; the UT1−UTC offset is
//! below a second and ignored at this precision.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Arcseconds to radians: 1″ = π / (180 × 3600).
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT Julian Date, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T), T in Julian centuries from J2000.0.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
