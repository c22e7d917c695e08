//! Error type for ephemeris queries.

use std::error::Error;
use std::fmt;

/// Errors produced by [`crate::position`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The epoch is NaN or infinite.
    NonFiniteEpoch(f64),
    /// The epoch falls outside the validity window of the element tables.
    EpochOutOfRange { jd: f64, min_jd: f64, max_jd: f64 },
}

impl fmt::Display for EphemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EphemError::NonFiniteEpoch(jd) => {
                write!(f, "epoch is not finite: {jd}")
            }
            EphemError::EpochOutOfRange { jd, min_jd, max_jd } => {
                write!(
                    f,
                    "epoch JD {jd} outside supported range [{min_jd}, {max_jd}]"
                )
            }
        }
    }
}

impl Error for EphemError {}
