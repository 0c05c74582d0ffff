//! Exchange rate matrix over the supported currencies.

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use super::code::Currency;
use super::provider::RateProviderError;

const N: usize = Currency::ALL.len();

/// Fixed rates used when the provider cannot be reached.
///
/// Rows are the base currency, columns the target, in [`Currency::ALL`] order.
const FALLBACK_RATES: [[f64; N]; N] = [
    // USD  EUR    MXN   CHF
    [1.0, 0.85, 17.5, 0.92],   // USD
    [1.18, 1.0, 20.6, 1.08],   // EUR
    [0.057, 0.048, 1.0, 0.052], // MXN
    [1.09, 0.93, 19.2, 1.0],   // CHF
];

/// Square matrix of exchange rates: 1 `from` = `rate(from, to)` `to`.
///
/// The diagonal is never served; identical currencies are short-circuited
/// before a lookup and omitted when serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct RateMatrix {
    rates: [[f64; N]; N],
}

impl RateMatrix {
    /// The fixed fallback matrix.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            rates: FALLBACK_RATES,
        }
    }

    /// Derives the full matrix from rates quoted against USD.
    ///
    /// `usd_rates[X]` is the amount of X bought by 1 USD. USD itself is
    /// implicitly 1; every other pair is a cross rate through USD:
    /// `rate(X, Y) = usd_rates[Y] / usd_rates[X]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a supported currency is absent, non-finite or not positive.
    pub fn from_usd_rates(usd_rates: &HashMap<String, f64>) -> Result<Self, RateProviderError> {
        let mut per_usd = [1.0; N];
        for currency in Currency::ALL.into_iter().filter(|c| *c != Currency::Usd) {
            let rate = usd_rates
                .get(currency.code())
                .copied()
                .ok_or(RateProviderError::MissingRate(currency))?;
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateProviderError::InvalidRate { currency, rate });
            }
            per_usd[currency.index()] = rate;
        }

        let mut rates = [[1.0; N]; N];
        for from in Currency::ALL {
            for to in Currency::ALL {
                if from != to {
                    rates[from.index()][to.index()] = per_usd[to.index()] / per_usd[from.index()];
                }
            }
        }

        Ok(Self { rates })
    }

    /// Returns the rate to convert 1 `from` into `to`.
    #[must_use]
    pub const fn rate(&self, from: Currency, to: Currency) -> f64 {
        self.rates[from.index()][to.index()]
    }

    /// Nested `base -> target -> rate` view without the diagonal.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Currency, BTreeMap<Currency, f64>> {
        Currency::ALL
            .into_iter()
            .map(|from| {
                let row = Currency::ALL
                    .into_iter()
                    .filter(|to| *to != from)
                    .map(|to| (to, self.rate(from, to)))
                    .collect();
                (from, row)
            })
            .collect()
    }
}

impl Serialize for RateMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
