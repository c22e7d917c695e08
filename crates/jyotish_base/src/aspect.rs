//! Pairwise angular aspects between the classical planets.
//!
//! Five major aspects with per-aspect orb tolerances; the first target angle
//! within orb wins, iterating from conjunction upward. Strength grades on
//! how tight the orb is.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::min_separation_deg;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// All aspects in detection order (smallest target angle first).
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Square",
            AspectKind::Trine => "Trine",
            AspectKind::Opposition => "Opposition",
        }
    }

    /// Exact target angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Orb tolerance in degrees.
    pub const fn orb_limit(self) -> f64 {
        match self {
            AspectKind::Conjunction => 10.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Square => 8.0,
            AspectKind::Trine => 8.0,
            AspectKind::Opposition => 10.0,
        }
    }

    /// Short interpretation used by the presentation layer.
    pub const fn influence(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Intense, focused energy",
            AspectKind::Sextile => "Harmonious, supportive",
            AspectKind::Square => "Challenging, dynamic",
            AspectKind::Trine => "Harmonious, flowing",
            AspectKind::Opposition => "Polarizing, awareness",
        }
    }
}

/// How tight the aspect's orb is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
}

impl AspectStrength {
    /// Grade an orb deviation in degrees.
    pub fn from_orb(orb: f64) -> Self {
        if orb <= 2.0 {
            AspectStrength::VeryStrong
        } else if orb <= 5.0 {
            AspectStrength::Strong
        } else if orb <= 8.0 {
            AspectStrength::Moderate
        } else {
            AspectStrength::Weak
        }
    }
}

/// A detected aspect between an unordered pair of planets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub a: Planet,
    pub b: Planet,
    pub kind: AspectKind,
    /// Deviation from the exact target angle, degrees.
    pub orb: f64,
    pub strength: AspectStrength,
}

/// Classify a single angular separation, if it falls within any orb.
pub fn classify_separation(sep_deg: f64) -> Option<(AspectKind, f64)> {
    for kind in ALL_ASPECT_KINDS {
        let orb = (sep_deg - kind.angle()).abs();
        if orb <= kind.orb_limit() {
            return Some((kind, orb));
        }
    }
    None
}

/// Detect aspects over every unordered pair of the given placements.
///
/// Callers pass the seven classical planets; the function itself accepts any
/// list and never pairs a planet with itself.
pub fn detect_aspects(positions: &[(Planet, f64)]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (i, &(pa, lon_a)) in positions.iter().enumerate() {
        for &(pb, lon_b) in positions.iter().skip(i + 1) {
            let sep = min_separation_deg(lon_a, lon_b);
            if let Some((kind, orb)) = classify_separation(sep) {
                aspects.push(Aspect {
                    a: pa,
                    b: pb,
                    kind,
                    orb,
                    strength: AspectStrength::from_orb(orb),
                });
            }
        }
    }
    aspects
}
