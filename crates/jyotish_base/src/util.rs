//! Angle utilities shared by the index calculators.

/// Normalize degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Smaller angular separation of two longitudes: `min(|a−b|, 360−|a−b|)`.
pub fn min_separation_deg(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_negative_wraps_up() {
        assert!((normalize_360(-45.0) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large_wraps_down() {
        assert!((normalize_360(400.0) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn separation_is_symmetric() {
        assert_eq!(min_separation_deg(10.0, 70.0), min_separation_deg(70.0, 10.0));
    }

    #[test]
    fn separation_takes_short_way_round() {
        assert!((min_separation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn separation_max_is_180() {
        assert!((min_separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
    }
}
