//! Golden checks for the analytical ephemeris against well-known geometry.

use jyotish_ephem::{ALL_BODIES, Body, calendar_to_jd, position, signed_delta_deg};

#[test]
fn inner_planets_respect_maximum_elongation() {
    // Mercury never strays more than ~28.5° from the Sun, Venus ~47.5°.
    for k in 0..40 {
        let jd = calendar_to_jd(2015, 1, 1.0) + k as f64 * 67.0;
        let sun = position(Body::Sun, jd).unwrap();
        let mercury = position(Body::Mercury, jd).unwrap();
        let venus = position(Body::Venus, jd).unwrap();

        let elong_mercury = signed_delta_deg(mercury.lon_deg, sun.lon_deg).abs();
        let elong_venus = signed_delta_deg(venus.lon_deg, sun.lon_deg).abs();
        assert!(elong_mercury < 30.0, "jd {jd}: Mercury elongation {elong_mercury}");
        assert!(elong_venus < 49.0, "jd {jd}: Venus elongation {elong_venus}");
    }
}

#[test]
fn mars_retrograde_at_2022_opposition() {
    // Mars was retrograde from 2022-10-30 through 2023-01-12.
    let jd = calendar_to_jd(2022, 12, 8.0);
    let mars = position(Body::Mars, jd).unwrap();
    assert!(mars.retrograde(), "Mars speed = {}", mars.speed_deg_per_day);

    // And direct well away from opposition.
    let jd = calendar_to_jd(2022, 6, 1.0);
    let mars = position(Body::Mars, jd).unwrap();
    assert!(!mars.retrograde(), "Mars speed = {}", mars.speed_deg_per_day);
}

#[test]
fn outer_planet_at_opposition_is_retrograde() {
    // Jupiter's 2023-11-03 opposition: the Sun is opposite and the planet
    // retrogrades around that date.
    let jd = calendar_to_jd(2023, 11, 3.0);
    let sun = position(Body::Sun, jd).unwrap();
    let jupiter = position(Body::Jupiter, jd).unwrap();
    let sep = signed_delta_deg(jupiter.lon_deg, sun.lon_deg).abs();
    assert!((170.0..=180.0).contains(&sep), "separation {sep}");
    assert!(jupiter.retrograde());
}

#[test]
fn moon_outpaces_every_planet() {
    let jd = calendar_to_jd(2024, 3, 10.0);
    let moon = position(Body::Moon, jd).unwrap();
    for body in ALL_BODIES {
        if body == Body::Moon {
            continue;
        }
        let other = position(body, jd).unwrap();
        assert!(
            moon.speed_deg_per_day.abs() > other.speed_deg_per_day.abs(),
            "{body} faster than Moon"
        );
    }
}

#[test]
fn nodes_stay_opposite_across_the_century() {
    for k in 0..20 {
        let jd = calendar_to_jd(1950, 1, 1.0) + k as f64 * 1_800.0;
        let rahu = position(Body::Rahu, jd).unwrap();
        let ketu = position(Body::Ketu, jd).unwrap();
        let sep = signed_delta_deg(ketu.lon_deg, rahu.lon_deg).abs();
        assert!((sep - 180.0).abs() < 1e-9, "jd {jd}: separation {sep}");
    }
}
