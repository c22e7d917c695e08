//! Yoga detection: named favorable patterns over planetary placements.
//!
//! Each rule is evaluated independently; several yogas may co-occur and an
//! empty result is the normal no-match outcome.

use serde::{Deserialize, Serialize};

use crate::planet::{Planet, PlanetPlacement};
use crate::sign::Sign;
use crate::util::min_separation_deg;

/// Named yogas this detector knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaKind {
    Gajakesari,
    BudhAditya,
    Shasha,
    DharmaKarmadhipati,
}

impl YogaKind {
    pub const fn name(self) -> &'static str {
        match self {
            YogaKind::Gajakesari => "Gajakesari Yoga",
            YogaKind::BudhAditya => "Budh-Aditya Yoga",
            YogaKind::Shasha => "Shasha Yoga",
            YogaKind::DharmaKarmadhipati => "Dharma Karmadhipati Yoga",
        }
    }

    /// Short interpretation used by the presentation layer.
    pub const fn description(self) -> &'static str {
        match self {
            YogaKind::Gajakesari => "Jupiter and Moon in angular positions bring wisdom and prosperity",
            YogaKind::BudhAditya => "Mercury-Sun conjunction brings intelligence and communication skills",
            YogaKind::Shasha => "Saturn-Moon proximity brings discipline and patience",
            YogaKind::DharmaKarmadhipati => "Lords of the 1st and 9th houses combine for success and recognition",
        }
    }
}

/// Pattern strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YogaStrength {
    Strong,
    Moderate,
}

/// A detected yoga.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    pub kind: YogaKind,
    pub strength: YogaStrength,
}

fn placement(placements: &[PlanetPlacement], planet: Planet) -> Option<&PlanetPlacement> {
    placements.iter().find(|p| p.planet == planet)
}

/// House distance counted on the 12-house wheel, 0–6.
fn house_distance(a: u8, b: u8) -> u8 {
    let d = (a as i16 - b as i16).rem_euclid(12) as u8;
    d.min(12 - d)
}

/// Run every yoga rule over the placements.
///
/// `house_signs[i]` is the sign on the cusp of house `i + 1`, needed for the
/// lordship-based rules.
pub fn detect_yogas(placements: &[PlanetPlacement], house_signs: &[Sign; 12]) -> Vec<Yoga> {
    let mut yogas = Vec::new();

    // Gajakesari: Jupiter and Moon in mutual kendra (house distance 0/3/6/9
    // on the wheel, i.e. 0, 3, or 6 apart counted the short way).
    if let (Some(jupiter), Some(moon)) =
        (placement(placements, Planet::Jupiter), placement(placements, Planet::Moon))
    {
        let d = house_distance(jupiter.house, moon.house);
        if d == 0 || d == 3 || d == 6 {
            let sep = min_separation_deg(jupiter.lon_deg, moon.lon_deg);
            yogas.push(Yoga {
                kind: YogaKind::Gajakesari,
                strength: if sep < 10.0 { YogaStrength::Strong } else { YogaStrength::Moderate },
            });
        }
    }

    // Budh-Aditya: Mercury within 15° of the Sun.
    if let (Some(mercury), Some(sun)) =
        (placement(placements, Planet::Mercury), placement(placements, Planet::Sun))
    {
        let sep = min_separation_deg(mercury.lon_deg, sun.lon_deg);
        if sep < 15.0 {
            yogas.push(Yoga {
                kind: YogaKind::BudhAditya,
                strength: if sep < 5.0 { YogaStrength::Strong } else { YogaStrength::Moderate },
            });
        }
    }

    // Shasha: Saturn within 30° of the Moon.
    if let (Some(saturn), Some(moon)) =
        (placement(placements, Planet::Saturn), placement(placements, Planet::Moon))
    {
        let sep = min_separation_deg(saturn.lon_deg, moon.lon_deg);
        if sep < 30.0 {
            yogas.push(Yoga {
                kind: YogaKind::Shasha,
                strength: if sep < 10.0 { YogaStrength::Strong } else { YogaStrength::Moderate },
            });
        }
    }

    // Dharma Karmadhipati: the lords of houses 1 and 9 occupy the same house.
    let first_lord = house_signs[0].lord();
    let ninth_lord = house_signs[8].lord();
    if let (Some(a), Some(b)) =
        (placement(placements, first_lord), placement(placements, ninth_lord))
    {
        if a.house == b.house {
            yogas.push(Yoga {
                kind: YogaKind::DharmaKarmadhipati,
                strength: YogaStrength::Strong,
            });
        }
    }

    yogas
}
