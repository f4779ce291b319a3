//! Sign Resolver - Calendar date to zodiac sign
//!
//! Fixed inclusive (month, day) ranges; no astronomical computation.

use chrono::Datelike;

use crate::domain::value_objects::Sign;

/// Inclusive (start, end) ranges as (month, day), checked in this order
const SIGN_RANGES: [(Sign, (u32, u32), (u32, u32)); 12] = [
    (Sign::Capricorne, (12, 22), (1, 19)),
    (Sign::Verseau, (1, 20), (2, 18)),
    (Sign::Poissons, (2, 19), (3, 20)),
    (Sign::Belier, (3, 21), (4, 19)),
    (Sign::Taureau, (4, 20), (5, 20)),
    (Sign::Gemeaux, (5, 21), (6, 20)),
    (Sign::Cancer, (6, 21), (7, 22)),
    (Sign::Lion, (7, 23), (8, 22)),
    (Sign::Vierge, (8, 23), (9, 22)),
    (Sign::Balance, (9, 23), (10, 22)),
    (Sign::Scorpion, (10, 23), (11, 21)),
    (Sign::Sagittaire, (11, 22), (12, 21)),
];

/// Resolve the zodiac sign of a calendar date
pub fn resolve_sign(date: &impl Datelike) -> Sign {
    let (month, day) = (date.month(), date.day());

    for (sign, (start_month, start_day), (end_month, end_day)) in SIGN_RANGES {
        let matches = if start_month > end_month {
            // Wraps over the new year
            (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
        } else {
            let after_start = (month, day) >= (start_month, start_day);
            let before_end = (month, day) <= (end_month, end_day);
            after_start && before_end
        };

        if matches {
            return sign;
        }
    }

    Sign::Unknown
}
