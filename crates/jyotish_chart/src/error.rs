//! Fatal input errors for chart computation.
//!
//! Everything recoverable (unresolved place, per-body ephemeris gaps, high
//! latitude) is carried as a [`crate::report::Warning`] inside the report
//! instead; only inputs from which no instant can be derived at all fail.

use std::error::Error;
use std::fmt;

/// Errors returned by [`crate::compute_chart`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` clock time.
    InvalidTime(String),
    /// Explicit coordinate outside the valid latitude/longitude ranges.
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            ChartError::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM"),
            ChartError::InvalidCoordinate { latitude, longitude } => {
                write!(f, "coordinate ({latitude}, {longitude}) out of range")
            }
        }
    }
}

impl Error for ChartError {}
