//! Derived astrological indices over ecliptic longitudes.
//!
//! Everything here is pure arithmetic over longitudes and static tables:
//! signs, nakshatras, aspects, dignity, yogas, the simplified Vimshottari
//! dasha, numerology, and Lal Kitab indicators. No ephemeris access, no
//! I/O, no shared mutable state; every function is safe for concurrent use.

pub mod aspect;
pub mod dasha;
pub mod dignity;
pub mod lal_kitab;
pub mod nakshatra;
pub mod numerology;
pub mod planet;
pub mod sign;
pub mod util;
pub mod yoga;

pub use aspect::{Aspect, AspectKind, AspectStrength, detect_aspects};
pub use dasha::{DashaPeriod, VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS, current_dasha};
pub use dignity::{Dignity, dignity};
pub use lal_kitab::LalKitabAnalysis;
pub use nakshatra::{Nakshatra, NakshatraPosition, nakshatra_from_longitude};
pub use numerology::{NumerologyProfile, numerology_profile};
pub use planet::{ALL_PLANETS, CLASSICAL_PLANETS, Planet, PlanetPlacement};
pub use sign::{ALL_SIGNS, Sign, ZodiacPlacement, sign_from_longitude};
pub use util::{min_separation_deg, normalize_360};
pub use yoga::{Yoga, YogaKind, YogaStrength, detect_yogas};
