//! The chart pipeline: parse the birth input, resolve the place, compute
//! positions and houses, then run every derived-index pass and assemble the
//! aggregate report.
//!
//! Fail-soft by construction: only an unparseable date/time or an
//! out-of-range explicit coordinate aborts. Everything else (unknown place,
//! per-body ephemeris gaps, polar latitudes) degrades to a documented
//! fallback plus a warning in the report.

use jyotish_base::{
    ALL_PLANETS, CLASSICAL_PLANETS, Planet, PlanetPlacement, Sign, current_dasha, detect_aspects,
    detect_yogas, dignity, lal_kitab, nakshatra_from_longitude, numerology_profile,
    sign_from_longitude,
};
use jyotish_ephem::{ALL_BODIES, Body, jd_from_calendar_time, position};

use crate::error::ChartError;
use crate::geo::{self, CITY_TABLE, CityEntry, GeoCoordinate};
use crate::houses::{compute_cusps, house_of};
use crate::report::{
    BirthInput, BirthPlace, CelestialPosition, ChartReport, House, PlanetDignity, Warning,
};

/// Lookup tables the pipeline consults, passed in rather than read from
/// globals so callers can substitute their own.
pub struct Rules {
    pub cities: &'static [CityEntry],
}

impl Rules {
    /// The built-in rule set.
    pub fn standard() -> Self {
        Self { cities: &CITY_TABLE }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parsed `YYYY-MM-DD`.
struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

fn parse_date(s: &str) -> Result<CalendarDate, ChartError> {
    let invalid = || ChartError::InvalidDate(s.to_string());

    let mut parts = s.split('-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(invalid());
    }
    Ok(CalendarDate { year, month, day })
}

fn parse_time(s: &str) -> Result<(u32, u32), ChartError> {
    let invalid = || ChartError::InvalidTime(s.to_string());

    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Parse a `YYYY-MM-DD` date and `HH:MM` time into a UT Julian Date.
///
/// Applies full calendar validation (month/day ranges, leap years, clock
/// bounds); every entry point that turns user text into an instant goes
/// through here.
pub fn parse_instant(date: &str, time: &str) -> Result<f64, ChartError> {
    let date = parse_date(date)?;
    let (hour, minute) = parse_time(time)?;
    Ok(jd_from_calendar_time(date.year, date.month, date.day, hour, minute))
}

/// Chart-side planet for an ephemeris body. The two enums list the same
/// nine bodies in the same order.
fn planet_for_body(body: Body) -> Planet {
    match body {
        Body::Sun => Planet::Sun,
        Body::Moon => Planet::Moon,
        Body::Mercury => Planet::Mercury,
        Body::Venus => Planet::Venus,
        Body::Mars => Planet::Mars,
        Body::Jupiter => Planet::Jupiter,
        Body::Saturn => Planet::Saturn,
        Body::Rahu => Planet::Rahu,
        Body::Ketu => Planet::Ketu,
    }
}

/// Resolve the birth place to a coordinate, or fail for an out-of-range
/// explicit coordinate.
fn resolve_place(
    place: &BirthPlace,
    rules: &Rules,
    warnings: &mut Vec<Warning>,
) -> Result<GeoCoordinate, ChartError> {
    match place {
        BirthPlace::Named(name) => {
            let (coord, warning) = geo::resolve(name, rules.cities);
            warnings.extend(warning);
            Ok(coord)
        }
        BirthPlace::Coordinate(coord) => {
            if !coord.is_valid() {
                return Err(ChartError::InvalidCoordinate {
                    latitude: coord.latitude,
                    longitude: coord.longitude,
                });
            }
            Ok(*coord)
        }
    }
}

/// Compute the full chart report for a birth input.
///
/// `jd_now` is the evaluation instant for the dasha section; everything else
/// refers to the birth instant. The birth time is treated as UT.
pub fn compute_chart(
    input: &BirthInput,
    rules: &Rules,
    jd_now: f64,
) -> Result<ChartReport, ChartError> {
    let date = parse_date(&input.date)?;
    let (hour, minute) = parse_time(&input.time)?;

    let mut warnings = Vec::new();
    let coordinate = resolve_place(&input.place, rules, &mut warnings)?;

    let jd_birth = jd_from_calendar_time(date.year, date.month, date.day, hour, minute);

    let (house_cusps, house_warning) = compute_cusps(jd_birth, coordinate.latitude, coordinate.longitude);
    warnings.extend(house_warning);

    // Positions for all nine bodies. A body the ephemeris cannot place gets
    // a stationary placeholder at 0° Aries and a warning; the chart goes on.
    let mut positions = Vec::with_capacity(ALL_BODIES.len());
    let mut placements = Vec::with_capacity(ALL_BODIES.len());
    for body in ALL_BODIES {
        let planet = planet_for_body(body);
        let (lon, lat, dist, speed) = match position(body, jd_birth) {
            Ok(state) => (state.lon_deg, state.lat_deg, state.dist_au, state.speed_deg_per_day),
            Err(err) => {
                warnings.push(Warning::EphemerisFallback { body: planet, reason: err.to_string() });
                (0.0, 0.0, 0.0, 0.0)
            }
        };
        let house = house_of(&house_cusps.cusps, lon);
        positions.push(CelestialPosition {
            planet,
            lon_deg: lon,
            lat_deg: lat,
            dist_au: dist,
            speed_deg_per_day: speed,
            retrograde: speed < 0.0,
            placement: sign_from_longitude(lon),
            house,
        });
        placements.push(PlanetPlacement { planet, lon_deg: lon, house });
    }

    let house_signs: [Sign; 12] =
        std::array::from_fn(|i| sign_from_longitude(house_cusps.cusps[i]).sign);

    let houses = (0..12)
        .map(|i| {
            let sign = house_signs[i];
            House {
                number: (i as u8) + 1,
                cusp_deg: house_cusps.cusps[i],
                sign,
                lord: sign.lord(),
                occupants: placements
                    .iter()
                    .filter(|p| p.house == (i as u8) + 1)
                    .map(|p| p.planet)
                    .collect(),
            }
        })
        .collect();

    // Aspects and dignity are classical-planet concerns; the nodes still get
    // a dignity row (always Neutral) so the section covers every body.
    let classical_longitudes: Vec<(Planet, f64)> = placements
        .iter()
        .filter(|p| CLASSICAL_PLANETS.contains(&p.planet))
        .map(|p| (p.planet, p.lon_deg))
        .collect();
    let aspects = detect_aspects(&classical_longitudes);

    let dignities = ALL_PLANETS
        .iter()
        .map(|&planet| {
            let sign = placements[planet.index()].sign();
            PlanetDignity { planet, sign, dignity: dignity(planet, sign) }
        })
        .collect();

    let moon_lon = placements[Planet::Moon.index()].lon_deg;
    let nakshatra = nakshatra_from_longitude(moon_lon);
    let dasha = current_dasha(moon_lon, jd_birth, jd_now);
    let numerology = numerology_profile(&input.name, date.day, date.month, date.year as u32);
    let yogas = detect_yogas(&placements, &house_signs);
    let lal_kitab = lal_kitab::analyze(&placements);

    Ok(ChartReport {
        input: input.clone(),
        coordinate,
        jd_birth,
        ascendant_deg: house_cusps.ascendant_deg,
        mc_deg: house_cusps.mc_deg,
        positions,
        houses,
        aspects,
        nakshatra,
        dasha,
        numerology,
        dignities,
        yogas,
        lal_kitab,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, time: &str, place: BirthPlace) -> BirthInput {
        BirthInput {
            name: "Asha Sharma".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            place,
        }
    }

    #[test]
    fn parse_date_accepts_leap_day() {
        assert!(parse_date("2000-02-29").is_ok());
        assert!(parse_date("1900-02-29").is_err());
        assert!(parse_date("2001-02-29").is_err());
    }

    #[test]
    fn parse_date_rejects_malformed() {
        for s in ["", "1990", "1990-13-01", "1990-00-10", "1990-04-31", "1990-1-1-1", "abcd-ef-gh"]
        {
            assert!(parse_date(s).is_err(), "{s:?} parsed");
        }
    }

    #[test]
    fn parse_instant_validates_both_components() {
        assert!(parse_instant("1990-13-40", "08:30").is_err());
        assert!(parse_instant("1990-05-15", "25:00").is_err());
        assert!(parse_instant("1990-05-15-1", "08:30").is_err());
        // 2000-01-01 12:00 UT is exactly J2000.0.
        let jd = parse_instant("2000-01-01", "12:00").unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn parse_time_bounds() {
        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn invalid_date_is_fatal() {
        let err = compute_chart(
            &input("1990-02-30", "12:00", BirthPlace::Named("Mumbai, India".into())),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidDate(_)));
    }

    #[test]
    fn invalid_explicit_coordinate_is_fatal() {
        let err = compute_chart(
            &input("1990-05-15", "08:30", BirthPlace::Coordinate(GeoCoordinate::new(95.0, 10.0))),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::InvalidCoordinate { .. }));
    }

    #[test]
    fn unknown_place_warns_but_succeeds() {
        let report = compute_chart(
            &input("1990-05-15", "08:30", BirthPlace::Named("Atlantis".into())),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap();
        assert_eq!(report.coordinate, geo::DEFAULT_COORDINATE);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| matches!(w, Warning::UnresolvedPlace { .. }))
        );
    }

    #[test]
    fn report_sections_are_complete() {
        let report = compute_chart(
            &input("1990-05-15", "08:30", BirthPlace::Named("Delhi, India".into())),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap();

        assert_eq!(report.positions.len(), 9);
        assert_eq!(report.houses.len(), 12);
        assert_eq!(report.dignities.len(), 9);
        assert!(report.is_clean());

        // Every body is in exactly one house and the occupant lists agree.
        let occupant_total: usize = report.houses.iter().map(|h| h.occupants.len()).sum();
        assert_eq!(occupant_total, 9);
        for pos in &report.positions {
            let house = &report.houses[(pos.house - 1) as usize];
            assert!(house.occupants.contains(&pos.planet), "{} not in house {}", pos.planet, pos.house);
        }
    }

    #[test]
    fn aspects_never_involve_the_nodes() {
        let report = compute_chart(
            &input("1985-11-02", "19:45", BirthPlace::Named("London, UK".into())),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap();
        for aspect in &report.aspects {
            assert_ne!(aspect.a, Planet::Rahu);
            assert_ne!(aspect.a, Planet::Ketu);
            assert_ne!(aspect.b, Planet::Rahu);
            assert_ne!(aspect.b, Planet::Ketu);
        }
    }

    #[test]
    fn out_of_range_epoch_degrades_to_aries_placeholders() {
        let report = compute_chart(
            &input("1750-06-01", "12:00", BirthPlace::Named("Paris, France".into())),
            &Rules::standard(),
            2_460_000.0,
        )
        .unwrap();

        let fallback_count = report
            .warnings
            .iter()
            .filter(|w| matches!(w, Warning::EphemerisFallback { .. }))
            .count();
        assert_eq!(fallback_count, 9);
        for pos in &report.positions {
            assert_eq!(pos.lon_deg, 0.0);
            assert_eq!(pos.placement.sign, jyotish_base::Sign::Aries);
        }
        // The Moon placeholder lands in Ashwini.
        assert_eq!(report.nakshatra.index, 0);
    }

    #[test]
    fn dasha_uses_birth_moon_and_evaluation_instant() {
        let birth = input("1990-05-15", "08:30", BirthPlace::Named("Mumbai, India".into()));
        let early = compute_chart(&birth, &Rules::standard(), 2_450_000.0).unwrap();
        let late = compute_chart(&birth, &Rules::standard(), 2_465_000.0).unwrap();
        assert_eq!(early.dasha.starting_lord, late.dasha.starting_lord);
        assert!(late.dasha.elapsed_in_cycle > early.dasha.elapsed_in_cycle);
    }
}
