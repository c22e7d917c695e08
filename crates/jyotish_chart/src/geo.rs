//! Offline place-name resolution against a compiled-in city table.
//!
//! Deliberately crude best-effort matching: exact key, then bidirectional
//! substring on the city token, then a fixed default (Mumbai) with a
//! non-fatal warning. No network access, no error path.

use serde::{Deserialize, Serialize};

use crate::report::Warning;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude, [-90, 90].
    pub latitude: f64,
    /// East longitude, [-180, 180].
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Range check for explicitly supplied coordinates.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Fallback coordinate when a place cannot be resolved: Mumbai.
pub const DEFAULT_COORDINATE: GeoCoordinate = GeoCoordinate::new(19.0760, 72.8777);

/// One city table row: lowercase "city, country" key plus coordinate.
pub struct CityEntry {
    pub key: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn city(key: &'static str, latitude: f64, longitude: f64) -> CityEntry {
    CityEntry { key, latitude, longitude }
}

/// The offline city table. Keys are lowercase `"city, country"`.
pub const CITY_TABLE: [CityEntry; 60] = [
    city("mumbai, india", 19.0760, 72.8777),
    city("delhi, india", 28.7041, 77.1025),
    city("bangalore, india", 12.9716, 77.5946),
    city("hyderabad, india", 17.3850, 78.4867),
    city("ahmedabad, india", 23.0225, 72.5714),
    city("chennai, india", 13.0827, 80.2707),
    city("kolkata, india", 22.5726, 88.3639),
    city("pune, india", 18.5204, 73.8567),
    city("jaipur, india", 26.9124, 75.7873),
    city("lucknow, india", 26.8467, 80.9462),
    city("kanpur, india", 26.4499, 80.3319),
    city("nagpur, india", 21.1458, 79.0882),
    city("indore, india", 22.7196, 75.8577),
    city("thane, india", 19.2183, 72.9781),
    city("bhopal, india", 23.2599, 77.4126),
    city("visakhapatnam, india", 17.6868, 83.2185),
    city("pimpri-chinchwad, india", 18.6298, 73.7997),
    city("patna, india", 25.5941, 85.1376),
    city("vadodara, india", 22.3072, 73.1812),
    city("ghaziabad, india", 28.6692, 77.4538),
    city("new york, usa", 40.7128, -74.0060),
    city("london, uk", 51.5074, -0.1278),
    city("tokyo, japan", 35.6762, 139.6503),
    city("paris, france", 48.8566, 2.3522),
    city("sydney, australia", -33.8688, 151.2093),
    city("toronto, canada", 43.6532, -79.3832),
    city("dubai, uae", 25.2048, 55.2708),
    city("singapore", 1.3521, 103.8198),
    city("hong kong", 22.3193, 114.1694),
    city("los angeles, usa", 34.0522, -118.2437),
    city("chicago, usa", 41.8781, -87.6298),
    city("berlin, germany", 52.5200, 13.4050),
    city("madrid, spain", 40.4168, -3.7038),
    city("rome, italy", 41.9028, 12.4964),
    city("moscow, russia", 55.7558, 37.6176),
    city("beijing, china", 39.9042, 116.4074),
    city("shanghai, china", 31.2304, 121.4737),
    city("seoul, south korea", 37.5665, 126.9780),
    city("bangkok, thailand", 13.7563, 100.5018),
    city("kuala lumpur, malaysia", 3.1390, 101.6869),
    city("jakarta, indonesia", -6.2088, 106.8456),
    city("manila, philippines", 14.5995, 120.9842),
    city("cairo, egypt", 30.0444, 31.2357),
    city("johannesburg, south africa", -26.2041, 28.0473),
    city("lagos, nigeria", 6.5244, 3.3792),
    city("nairobi, kenya", -1.2921, 36.8219),
    city("buenos aires, argentina", -34.6118, -58.3960),
    city("sao paulo, brazil", -23.5558, -46.6396),
    city("mexico city, mexico", 19.4326, -99.1332),
    city("lima, peru", -12.0464, -77.0428),
    city("bogota, colombia", 4.7110, -74.0721),
    city("santiago, chile", -33.4489, -70.6693),
    city("caracas, venezuela", 10.4806, -66.9036),
    city("montevideo, uruguay", -34.9011, -56.1645),
    city("quito, ecuador", -0.1807, -78.4678),
    city("la paz, bolivia", -16.5000, -68.1193),
    city("asuncion, paraguay", -25.2637, -57.5759),
    city("georgetown, guyana", 6.8013, -58.1551),
    city("paramaribo, suriname", 5.8520, -55.2038),
    city("cayenne, french guiana", 4.9333, -52.3333),
];

/// True when `word` occurs in `haystack` bounded by non-alphanumerics.
fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(word) {
        let at = start + pos;
        let end = at + word.len();
        let left_ok = at == 0
            || !haystack[..at].chars().next_back().is_some_and(char::is_alphanumeric);
        let right_ok = end == haystack.len()
            || !haystack[end..].chars().next().is_some_and(char::is_alphanumeric);
        if left_ok && right_ok {
            return true;
        }
        start = at + 1;
    }
    false
}

/// Resolve a free-text place name to a coordinate.
///
/// Never fails: an unmatched input returns [`DEFAULT_COORDINATE`] plus a
/// [`Warning::UnresolvedPlace`] for the caller to surface.
pub fn resolve(place: &str, cities: &[CityEntry]) -> (GeoCoordinate, Option<Warning>) {
    let needle = place.to_lowercase().trim().to_string();

    for entry in cities {
        if entry.key == needle {
            return (GeoCoordinate::new(entry.latitude, entry.longitude), None);
        }
    }

    // Substring pass on the city token (the part before the comma). Matches
    // are word-bounded so a trailing typo ("mumbaii") does not silently hit.
    for entry in cities {
        let city_name = entry.key.split(',').next().unwrap_or(entry.key).trim();
        if contains_word(&needle, city_name) || contains_word(city_name, &needle) {
            return (GeoCoordinate::new(entry.latitude, entry.longitude), None);
        }
    }

    (
        DEFAULT_COORDINATE,
        Some(Warning::UnresolvedPlace {
            input: place.to_string(),
            fallback_latitude: DEFAULT_COORDINATE.latitude,
            fallback_longitude: DEFAULT_COORDINATE.longitude,
        }),
    )
}
