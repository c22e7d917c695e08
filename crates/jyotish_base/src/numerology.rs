//! Numerology: life-path, destiny, and soul numbers.
//!
//! All three reduce a digit total to a single digit, except that the master
//! numbers 11, 22, and 33 are kept as-is. Destiny uses the Pythagorean
//! letter map over every letter of the name; soul uses the vowels only.

use serde::{Deserialize, Serialize};

/// The three core numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub destiny: u32,
    pub soul: u32,
}

/// Reduce by repeated digit summing, stopping at ≤9 or a master number.
pub fn reduce_number(mut n: u32) -> u32 {
    while n > 9 && n != 11 && n != 22 && n != 33 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Pythagorean letter value: A=1 to I=9, J=1 to R=9, S=1 to Z=8.
fn letter_value(c: char) -> u32 {
    if c.is_ascii_alphabetic() {
        (c.to_ascii_uppercase() as u32 - 'A' as u32) % 9 + 1
    } else {
        0
    }
}

/// Vowel value for the soul number (A=1, E=5, I=9, O=6, U=3).
fn vowel_value(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        'A' => 1,
        'E' => 5,
        'I' => 9,
        'O' => 6,
        'U' => 3,
        _ => 0,
    }
}

/// Life-path number from the digits of day, month, and year.
pub fn life_path_number(day: u32, month: u32, year: u32) -> u32 {
    reduce_number(digit_sum(day) + digit_sum(month) + digit_sum(year))
}

/// Destiny number from every letter of the full name.
pub fn destiny_number(full_name: &str) -> u32 {
    reduce_number(full_name.chars().map(letter_value).sum())
}

/// Soul number from the vowels of the full name.
pub fn soul_number(full_name: &str) -> u32 {
    reduce_number(full_name.chars().map(vowel_value).sum())
}

/// Full profile for a name and birth date.
pub fn numerology_profile(full_name: &str, day: u32, month: u32, year: u32) -> NumerologyProfile {
    NumerologyProfile {
        life_path: life_path_number(day, month, year),
        destiny: destiny_number(full_name),
        soul: soul_number(full_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_is_idempotent_at_fixpoints() {
        for n in [1, 5, 9, 11, 22, 33] {
            assert_eq!(reduce_number(n), n);
            assert_eq!(reduce_number(reduce_number(n)), reduce_number(n));
        }
    }

    #[test]
    fn master_numbers_survive() {
        // 29 → 11, which is kept.
        assert_eq!(reduce_number(29), 11);
        assert_eq!(reduce_number(22), 22);
        // 39 → 12 → 3 (39 is not a master number).
        assert_eq!(reduce_number(39), 3);
    }

    #[test]
    fn life_path_master_number_preserved() {
        // 2001-05-03: 3 + 5 + (2+0+0+1) = 11, kept as a master number.
        assert_eq!(life_path_number(3, 5, 2001), 11);
    }

    #[test]
    fn pythagorean_letter_map() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Z'), 8);
        assert_eq!(letter_value(' '), 0);
        assert_eq!(letter_value('3'), 0);
    }

    #[test]
    fn destiny_ignores_non_letters() {
        assert_eq!(destiny_number("ab"), destiny_number("a-b 12"));
    }

    #[test]
    fn soul_counts_vowels_only() {
        // "AEU" → 1 + 5 + 3 = 9
        assert_eq!(soul_number("AEU"), 9);
        assert_eq!(soul_number("xyz"), 0);
    }

    #[test]
    fn profile_is_consistent_with_parts() {
        let p = numerology_profile("John Smith", 15, 6, 1990);
        assert_eq!(p.life_path, life_path_number(15, 6, 1990));
        assert_eq!(p.destiny, destiny_number("John Smith"));
        assert_eq!(p.soul, soul_number("John Smith"));
    }
}
