//! Simplified Vimshottari dasha: the current ruling-planet period.
//!
//! The cycle assigns each of nine lords a fixed number of years, totalling
//! 120. The starting lord comes from the Moon's birth nakshatra; elapsed
//! time is measured from birth to the query instant and wrapped modulo 120.
//!
//! This is deliberately the simplified "moving current dasha" model: it does
//! not compute the true natal balance from the fractional position within
//! the birth nakshatra, so the reported period shifts with the query date.

use serde::{Deserialize, Serialize};

use crate::nakshatra::nakshatra_from_longitude;
use crate::planet::Planet;

/// Vimshottari lords in cycle order.
pub const VIMSHOTTARI_LORDS: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// Years allotted to each lord, matching [`VIMSHOTTARI_LORDS`] order.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full cycle length in years.
pub const CYCLE_YEARS: f64 = 120.0;

/// Mean solar days per year used for elapsed-time conversion.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// The ruling period at a query instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Current ruling planet.
    pub lord: Planet,
    /// Birth nakshatra's lord, where the cycle starts.
    pub starting_lord: Planet,
    /// Years elapsed within the current 120-year cycle.
    pub elapsed_in_cycle: f64,
    /// Start of the ruling segment, years from cycle start.
    pub segment_start: f64,
    /// End of the ruling segment, years from cycle start.
    pub segment_end: f64,
    /// Years left in the ruling segment.
    pub years_remaining: f64,
}

/// Current dasha from the Moon's birth longitude and the birth/query epochs.
///
/// `jd_birth`/`jd_now` are Julian Dates; `jd_now` earlier than birth is
/// clamped to birth (elapsed 0).
pub fn current_dasha(moon_lon_at_birth: f64, jd_birth: f64, jd_now: f64) -> DashaPeriod {
    let starting_lord = nakshatra_from_longitude(moon_lon_at_birth).nakshatra.dasha_lord();
    let start_idx = VIMSHOTTARI_LORDS
        .iter()
        .position(|&p| p == starting_lord)
        .unwrap_or(0);

    let elapsed_years = ((jd_now - jd_birth).max(0.0) / DAYS_PER_YEAR) % CYCLE_YEARS;

    let mut accumulated = 0.0;
    for k in 0..9 {
        let idx = (start_idx + k) % 9;
        let years = VIMSHOTTARI_YEARS[idx];
        if elapsed_years < accumulated + years {
            return DashaPeriod {
                lord: VIMSHOTTARI_LORDS[idx],
                starting_lord,
                elapsed_in_cycle: elapsed_years,
                segment_start: accumulated,
                segment_end: accumulated + years,
                years_remaining: accumulated + years - elapsed_years,
            };
        }
        accumulated += years;
    }

    // Unreachable: elapsed_years < 120 and the segments cover [0, 120).
    DashaPeriod {
        lord: starting_lord,
        starting_lord,
        elapsed_in_cycle: elapsed_years,
        segment_start: 0.0,
        segment_end: VIMSHOTTARI_YEARS[start_idx],
        years_remaining: 0.0,
    }
}
