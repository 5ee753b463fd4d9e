//! Canonical composite keys.
//!
//! Joins and groupings over the model go through these types instead of ad
//! hoc tuples, so both sides of a join agree on field order.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Location key shared by customers and suppliers.
///
/// Borrows from the entity it was taken from. Equality is structural:
/// two keys are equal iff country and city are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CountryCity<'a> {
    /// Country name
    pub country: &'a str,
    /// City name
    pub city: &'a str,
}

impl<'a> CountryCity<'a> {
    /// Build a key from its parts.
    pub fn new(country: &'a str, city: &'a str) -> Self {
        Self { country, city }
    }
}

impl fmt::Display for CountryCity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Calendar month of an order date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    /// Calendar year
    pub year: i32,
    /// Month, 1 through 12
    pub month: u32,
}

impl YearMonth {
    /// Build a key from its parts.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub fn of(date: &NaiveDateTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl From<NaiveDateTime> for YearMonth {
    fn from(date: NaiveDateTime) -> Self {
        Self::of(&date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
