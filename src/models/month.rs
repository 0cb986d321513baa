//! Month key representation
//!
//! Month keys are stored as `<EnglishMonthName>-<YYYY>` strings, e.g.
//! `August-2024`. The repository treats them as opaque; month arithmetic
//! for navigation lives here and is used by the UI and CLI only.

use chrono::{Datelike, Month};
use std::fmt;

/// A calendar month used to build month keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Parse a key such as `August-2024`
    pub fn parse(key: &str) -> Option<Self> {
        let (name, year) = key.trim().rsplit_once('-')?;
        let month: Month = name.parse().ok()?;
        if year.len() != 4 {
            return None;
        }
        let year: i32 = year.parse().ok()?;
        Self::new(year, month.number_from_month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// English name of the month, e.g. "August"
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("January")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.month_name(), self.year)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let key = MonthKey::new(2024, 8).unwrap();
        assert_eq!(key.to_string(), "August-2024");
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthKey::new(2024, 0).is_none());
        assert!(MonthKey::new(2024, 13).is_none());
    }

    #[test]
    fn test_parse() {
        let key = MonthKey::parse("September-2024").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 9);

        assert!(MonthKey::parse("nonexistent").is_none());
        assert!(MonthKey::parse("Smarch-2024").is_none());
        assert!(MonthKey::parse("May-24").is_none());
    }

    #[test]
    fn test_year_boundaries() {
        let december = MonthKey::new(2024, 12).unwrap();
        assert_eq!(december.next().to_string(), "January-2025");

        let january = MonthKey::new(2025, 1).unwrap();
        assert_eq!(january.prev().to_string(), "December-2024");
        assert_eq!(january.prev().next(), january);
    }

    #[test]
    fn test_parse_display_agree() {
        let key = MonthKey::new(2023, 5).unwrap();
        assert_eq!(MonthKey::parse(&key.to_string()), Some(key));
    }
}
