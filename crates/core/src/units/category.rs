//! Unit categories and their conversion tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::transform::Conversion;
use super::{temperature, time, weight};

/// Category of a table-driven conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// seconds through years.
    Time,
    /// grams, kilograms, pounds.
    Weight,
    /// celsius, fahrenheit, kelvin.
    Temperature,
}

impl Category {
    /// All table-driven categories.
    pub const ALL: [Self; 3] = [Self::Time, Self::Weight, Self::Temperature];

    /// Decimal places results are rounded to.
    #[must_use]
    pub const fn precision(self) -> u32 {
        match self {
            Self::Time | Self::Weight => 10,
            Self::Temperature => 2,
        }
    }

    /// The pairwise conversion table.
    #[must_use]
    pub fn table(self) -> &'static [Conversion] {
        match self {
            Self::Time => time::TABLE,
            Self::Weight => weight::TABLE,
            Self::Temperature => temperature::TABLE,
        }
    }

    /// The unit names known to this category.
    #[must_use]
    pub const fn units(self) -> &'static [&'static str] {
        match self {
            Self::Time => time::UNITS,
            Self::Weight => weight::UNITS,
            Self::Temperature => temperature::UNITS,
        }
    }

    /// Finds the conversion from `from` to `to`, if the table has one.
    #[must_use]
    pub fn lookup(self, from: &str, to: &str) -> Option<&'static Conversion> {
        self.table()
            .iter()
            .find(|conversion| conversion.from == from && conversion.to == to)
    }

    /// Returns the lowercase category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
