//! Mean lunar node longitudes (Rahu and Ketu).
//!
//! Uses the mean longitude of the Moon's ascending node; the node regresses
//! through the zodiac with a period of ~18.6 years. Ketu is the descending
//! node, diametrically opposite Rahu.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47
//! (fundamental argument Ω).

use crate::julian::centuries_since_j2000;
use crate::util::normalize_360;

/// Mean longitude of the ascending node (Rahu), degrees in [0, 360).
pub fn mean_rahu_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let omega = 125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t3 / 467_441.0;
    normalize_360(omega)
}

/// Mean longitude of the descending node (Ketu): Rahu + 180°.
pub fn mean_ketu_deg(jd: f64) -> f64 {
    normalize_360(mean_rahu_deg(jd) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn rahu_at_j2000() {
        let rahu = mean_rahu_deg(J2000_JD);
        assert!((rahu - 125.04).abs() < 0.05, "rahu = {rahu}");
    }

    #[test]
    fn ketu_opposite_rahu() {
        for k in 0..8 {
            let jd = J2000_JD + k as f64 * 500.0;
            let diff = (mean_ketu_deg(jd) - mean_rahu_deg(jd)).rem_euclid(360.0);
            assert!((diff - 180.0).abs() < 1e-9, "diff = {diff}");
        }
    }

    #[test]
    fn node_regresses() {
        // ~ -0.053°/day
        let a = mean_rahu_deg(J2000_JD);
        let b = mean_rahu_deg(J2000_JD + 1.0);
        let step = crate::util::signed_delta_deg(b, a);
        assert!((-0.06..-0.04).contains(&step), "daily motion = {step}");
    }

    #[test]
    fn full_revolution_in_about_18_6_years() {
        let a = mean_rahu_deg(J2000_JD);
        let b = mean_rahu_deg(J2000_JD + 18.6 * 365.25);
        assert!(
            crate::util::signed_delta_deg(b, a).abs() < 1.0,
            "node did not return after 18.6 years"
        );
    }
}
