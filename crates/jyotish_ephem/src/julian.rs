//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7,
//! formulas 7.1 and the inverse algorithm. Gregorian calendar only.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may carry a fractional part for the time of day.
/// Valid for all Gregorian dates (year > -4712).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * ((m + 1) as f64)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Pack a clock time into a fractional day and convert to Julian Date.
pub fn jd_from_calendar_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    let day_frac = day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0;
    calendar_to_jd(year, month, day_frac)
}

/// Julian centuries of the given JD from J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
