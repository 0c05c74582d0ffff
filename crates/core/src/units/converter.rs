//! Table-driven unit conversion.

use crate::rounding::round_dp;

use super::{Category, UnitError};

/// Converts `value` from one unit to another within a category.
///
/// Identical unit names return `value` untouched, even when the name is not
/// in the table. Other results are rounded to [`Category::precision`].
///
/// # Errors
///
/// - [`UnitError::MissingParameter`] if a unit name is empty or `value` is not finite.
/// - [`UnitError::InvalidConversion`] if the pair is not in the table.
///
/// # Example
///
/// ```
/// use convertly_core::units::{Category, convert};
///
/// let hours = convert(Category::Time, "segundos", "horas", 3600.0).unwrap();
/// assert!((hours - 1.0).abs() < f64::EPSILON);
/// ```
pub fn convert(category: Category, from: &str, to: &str, value: f64) -> Result<f64, UnitError> {
    if from.is_empty() || to.is_empty() || !value.is_finite() {
        return Err(UnitError::MissingParameter);
    }

    if from == to {
        return Ok(value);
    }

    let conversion = category
        .lookup(from, to)
        .ok_or_else(|| UnitError::InvalidConversion {
            category,
            from: from.to_string(),
            to: to.to_string(),
        })?;

    Ok(round_dp(
        conversion.transform.apply(value),
        category.precision(),
    ))
}
