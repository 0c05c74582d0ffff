//! Currency conversion error types.

use convertly_shared::AppError;
use thiserror::Error;

/// Currency conversion errors.
///
/// Provider failures never show up here; the cache falls back to fixed rates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// A currency code is empty or the value is not a finite number.
    #[error("missing or invalid conversion parameters")]
    MissingParameter,

    /// A currency code is not supported.
    #[error("no currency conversion from '{from}' to '{to}'")]
    InvalidConversion {
        /// Source code as given.
        from: String,
        /// Target code as given.
        to: String,
    },
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::MissingParameter => Self::MissingParameter,
            CurrencyError::InvalidConversion { .. } => Self::InvalidConversion(err.to_string()),
        }
    }
}
