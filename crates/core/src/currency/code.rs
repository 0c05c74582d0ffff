//! Supported currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported currency (ISO 4217).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Mexican peso.
    Mxn,
    /// Swiss franc.
    Chf,
}

impl Currency {
    /// All supported currencies, in matrix order.
    pub const ALL: [Self; 4] = [Self::Usd, Self::Eur, Self::Mxn, Self::Chf];

    /// Returns the ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Mxn => "MXN",
            Self::Chf => "CHF",
        }
    }

    /// Position of the currency in a rate matrix.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency '{0}'")]
pub struct UnsupportedCurrency(pub String);

impl FromStr for Currency {
    type Err = UnsupportedCurrency;

    /// Codes are case-sensitive: `"usd"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| UnsupportedCurrency(s.to_string()))
    }
}
