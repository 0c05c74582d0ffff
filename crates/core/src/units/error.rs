//! Unit conversion error types.

use convertly_shared::AppError;
use thiserror::Error;

use super::Category;

/// Unit conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A unit name is empty or the value is not a finite number.
    #[error("missing or invalid conversion parameters")]
    MissingParameter,

    /// The unit pair is not in the category's table.
    #[error("no {category} conversion from '{from}' to '{to}'")]
    InvalidConversion {
        /// Category that was searched.
        category: Category,
        /// Source unit.
        from: String,
        /// Target unit.
        to: String,
    },
}

impl From<UnitError> for AppError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::MissingParameter => Self::MissingParameter,
            UnitError::InvalidConversion { .. } => Self::InvalidConversion(err.to_string()),
        }
    }
}
