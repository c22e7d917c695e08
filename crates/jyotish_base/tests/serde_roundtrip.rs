//! The index types are plain serializable data; spot-check JSON round-trips.

use jyotish_base::{
    Aspect, AspectKind, AspectStrength, DashaPeriod, Planet, PlanetPlacement,
    nakshatra_from_longitude, numerology_profile,
};

#[test]
fn aspect_roundtrips_through_json() {
    let aspect = Aspect {
        a: Planet::Sun,
        b: Planet::Moon,
        kind: AspectKind::Trine,
        orb: 2.5,
        strength: AspectStrength::Strong,
    };
    let json = serde_json::to_string(&aspect).unwrap();
    let back: Aspect = serde_json::from_str(&json).unwrap();
    assert_eq!(aspect, back);
}

#[test]
fn nakshatra_position_roundtrips() {
    let pos = nakshatra_from_longitude(123.45);
    let json = serde_json::to_string(&pos).unwrap();
    let back: jyotish_base::NakshatraPosition = serde_json::from_str(&json).unwrap();
    assert_eq!(pos, back);
}

#[test]
fn dasha_period_roundtrips() {
    let d = jyotish_base::current_dasha(45.0, 2_451_545.0, 2_460_000.0);
    let json = serde_json::to_string(&d).unwrap();
    let back: DashaPeriod = serde_json::from_str(&json).unwrap();
    assert_eq!(d, back);
}

#[test]
fn placement_and_profile_serialize() {
    let p = PlanetPlacement { planet: Planet::Mars, lon_deg: 280.0, house: 10 };
    assert!(serde_json::to_string(&p).is_ok());

    let n = numerology_profile("Asha Sharma", 3, 5, 2001);
    let json = serde_json::to_string(&n).unwrap();
    assert!(json.contains("life_path"));
}
