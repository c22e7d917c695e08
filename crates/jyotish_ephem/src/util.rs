//! Small angle helpers shared across the series modules.

/// Normalize degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest signed difference `a − b` in degrees, result in (−180, 180].
pub fn signed_delta_deg(a: f64, b: f64) -> f64 {
    let mut d = normalize_360(a) - normalize_360(b);
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_over_360() {
        assert!((normalize_360(725.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn signed_delta_wraps() {
        assert!((signed_delta_deg(359.0, 1.0) - -2.0).abs() < 1e-12);
        assert!((signed_delta_deg(1.0, 359.0) - 2.0).abs() < 1e-12);
    }
}
