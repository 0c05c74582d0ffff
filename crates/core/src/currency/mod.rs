//! Currency conversion with cached exchange rates.

pub mod cache;
pub mod code;
pub mod error;
pub mod matrix;
pub mod provider;


pub use cache::{CurrencyConversion, DEFAULT_TTL, RateCache, RateSnapshot, RateSource};
pub use code::{Currency, UnsupportedCurrency};
pub use error::CurrencyError;
pub use matrix::RateMatrix;
pub use provider::{HttpRateProvider, RateProvider, RateProviderError};
