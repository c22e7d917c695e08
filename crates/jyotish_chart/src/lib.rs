//! Birth chart computation: place resolution, houses, and the aggregate
//! analysis report.
//!
//! The entry point is [`compute_chart`], which takes a [`BirthInput`] and a
//! [`Rules`] table set and returns a [`ChartReport`] covering positions,
//! houses, aspects, and the derived indices from [`jyotish_base`]. The
//! pipeline is fail-soft: recoverable problems become [`report::Warning`]s
//! inside the report, and only unusable inputs return a [`ChartError`].

pub mod builder;
pub mod geo;
pub mod houses;
pub mod report;

mod error;

pub use builder::{Rules, compute_chart, parse_instant};
pub use error::ChartError;
pub use geo::{CITY_TABLE, CityEntry, DEFAULT_COORDINATE, GeoCoordinate};
pub use houses::{HouseCusps, HouseSystem, house_of};
pub use report::{
    BirthInput, BirthPlace, CelestialPosition, ChartReport, House, PlanetDignity, Warning,
};
