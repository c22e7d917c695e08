//! Planetary dignity: how favorably a planet sits in its occupied sign.
//!
//! Classification priority: exalted > debilitated > own sign > friendly >
//! enemy > neutral. The sign sets follow the classical naisargika (natural)
//! friendship scheme; friendly/enemy signs are the signs ruled by a planet's
//! natural friends/enemies. The nodes take no dignity and grade Neutral.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::sign::Sign;

/// Dignity grades. Debilitated ranks right after exalted in classification
/// priority, not favorability; both override the sign sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Friendly,
    Enemy,
    Neutral,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Dignity::Exalted => "Exalted",
            Dignity::Debilitated => "Debilitated",
            Dignity::OwnSign => "Own Sign",
            Dignity::Friendly => "Friendly",
            Dignity::Enemy => "Enemy",
            Dignity::Neutral => "Neutral",
        }
    }
}

/// Static dignity data for one planet.
struct DignityRow {
    exaltation: Sign,
    debilitation: Sign,
    own: &'static [Sign],
    friendly: &'static [Sign],
    enemy: &'static [Sign],
}

fn dignity_row(planet: Planet) -> Option<&'static DignityRow> {
    use Sign::*;
    static SUN: DignityRow = DignityRow {
        exaltation: Aries,
        debilitation: Libra,
        own: &[Leo],
        friendly: &[Cancer, Aries, Scorpio, Sagittarius, Pisces],
        enemy: &[Taurus, Libra, Capricorn, Aquarius],
    };
    static MOON: DignityRow = DignityRow {
        exaltation: Taurus,
        debilitation: Scorpio,
        own: &[Cancer],
        friendly: &[Leo, Gemini, Virgo],
        enemy: &[],
    };
    static MERCURY: DignityRow = DignityRow {
        exaltation: Virgo,
        debilitation: Pisces,
        own: &[Gemini, Virgo],
        friendly: &[Leo, Taurus, Libra],
        enemy: &[Cancer],
    };
    static VENUS: DignityRow = DignityRow {
        exaltation: Pisces,
        debilitation: Virgo,
        own: &[Taurus, Libra],
        friendly: &[Gemini, Virgo, Capricorn, Aquarius],
        enemy: &[Leo, Cancer],
    };
    static MARS: DignityRow = DignityRow {
        exaltation: Capricorn,
        debilitation: Cancer,
        own: &[Aries, Scorpio],
        friendly: &[Leo, Cancer, Sagittarius, Pisces],
        enemy: &[Gemini, Virgo],
    };
    static JUPITER: DignityRow = DignityRow {
        exaltation: Cancer,
        debilitation: Capricorn,
        own: &[Sagittarius, Pisces],
        friendly: &[Leo, Cancer, Aries, Scorpio],
        enemy: &[Gemini, Virgo, Taurus, Libra],
    };
    static SATURN: DignityRow = DignityRow {
        exaltation: Libra,
        debilitation: Aries,
        own: &[Capricorn, Aquarius],
        friendly: &[Gemini, Virgo, Taurus, Libra],
        enemy: &[Leo, Cancer, Aries, Scorpio],
    };

    match planet {
        Planet::Sun => Some(&SUN),
        Planet::Moon => Some(&MOON),
        Planet::Mercury => Some(&MERCURY),
        Planet::Venus => Some(&VENUS),
        Planet::Mars => Some(&MARS),
        Planet::Jupiter => Some(&JUPITER),
        Planet::Saturn => Some(&SATURN),
        Planet::Rahu | Planet::Ketu => None,
    }
}

/// Classify a planet's dignity in the given sign.
pub fn dignity(planet: Planet, sign: Sign) -> Dignity {
    let Some(row) = dignity_row(planet) else {
        return Dignity::Neutral;
    };
    if sign == row.exaltation {
        Dignity::Exalted
    } else if sign == row.debilitation {
        Dignity::Debilitated
    } else if row.own.contains(&sign) {
        Dignity::OwnSign
    } else if row.friendly.contains(&sign) {
        Dignity::Friendly
    } else if row.enemy.contains(&sign) {
        Dignity::Enemy
    } else {
        Dignity::Neutral
    }
}
