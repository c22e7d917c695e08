//! Simplified Lal Kitab indicators: Manglik status and planetary debts.
//!
//! Follows the popular simplified rule set: Mars in houses 1, 2, 4, 7, 8,
//! or 12 marks the chart Manglik; a small table of sign occupancies marks
//! ancestral debts. Each finding carries a remedy line for the presentation
//! layer, plus a few general remedies that are always included.

use serde::{Deserialize, Serialize};

use crate::planet::{Planet, PlanetPlacement};
use crate::sign::Sign;

/// Houses whose Mars occupancy makes a chart Manglik.
pub const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Remedies suggested for every chart.
pub const GENERAL_REMEDIES: [&str; 3] = [
    "Keep a piece of silver with you",
    "Feed crows regularly",
    "Donate to the needy on Saturdays",
];

/// Planetary debts (rina).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Debt {
    /// Ancestral debt: Sun in Libra.
    Pitru,
    /// Mother's debt: Moon in Scorpio.
    Matru,
}

impl Debt {
    pub const fn name(self) -> &'static str {
        match self {
            Debt::Pitru => "Pitru Rin (Ancestral debt)",
            Debt::Matru => "Matru Rin (Mother's debt)",
        }
    }

    pub const fn remedy(self) -> &'static str {
        match self {
            Debt::Pitru => "Offer water to Sun daily",
            Debt::Matru => "Donate milk and rice",
        }
    }
}

/// Outcome of the Lal Kitab pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LalKitabAnalysis {
    pub manglik: bool,
    /// Mars's house, when Mars is placed in the chart.
    pub mars_house: Option<u8>,
    pub debts: Vec<Debt>,
}

impl LalKitabAnalysis {
    /// All remedy lines: condition-specific first, then the general ones.
    pub fn remedies(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.manglik {
            out.push("Donate red lentils on Tuesday");
        }
        for debt in &self.debts {
            out.push(debt.remedy());
        }
        out.extend(GENERAL_REMEDIES);
        out
    }
}

/// Run the Lal Kitab rules over the chart placements.
pub fn analyze(placements: &[PlanetPlacement]) -> LalKitabAnalysis {
    let mars_house = placements
        .iter()
        .find(|p| p.planet == Planet::Mars)
        .map(|p| p.house);
    let manglik = mars_house.is_some_and(|h| MANGLIK_HOUSES.contains(&h));

    let mut debts = Vec::new();
    for p in placements {
        match (p.planet, p.sign()) {
            (Planet::Sun, Sign::Libra) => debts.push(Debt::Pitru),
            (Planet::Moon, Sign::Scorpio) => debts.push(Debt::Matru),
            _ => {}
        }
    }

    LalKitabAnalysis { manglik, mars_house, debts }
}
