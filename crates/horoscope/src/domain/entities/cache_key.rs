//! CacheKey - Fingerprint of an AI generation

use chrono::NaiveDate;

use crate::domain::value_objects::{Length, Sign, Style};

/// (sign, style, length, UTC day of the request)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub sign: Sign,
    pub style: Style,
    pub length: Length,
    pub day: NaiveDate,
}

impl CacheKey {
    pub fn new(sign: Sign, style: Style, length: Length, day: NaiveDate) -> Self {
        Self {
            sign,
            style,
            length,
            day,
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}::{}::{}::{}",
            self.sign,
            self.style,
            self.length,
            self.day.format("%Y-%m-%d")
        )
    }
}
