//! Fixed-precision rounding for conversion results.
//!
//! Results go through `Decimal` and are rounded half away from zero, so float
//! noise such as `2.2046200000000003` comes back as `2.20462`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `decimal_places` digits after the decimal point.
///
/// Values outside the range of `Decimal` are returned unchanged.
#[must_use]
pub fn round_dp(value: f64, decimal_places: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.204_620_000_000_000_3, 10, 2.20462)]
    #[case(373.149_999_999_999_98, 2, 373.15)]
    #[case(8.500_000_000_000_001, 2, 8.5)]
    #[case(0.016_666_666_666_666_666, 10, 0.016_666_666_7)]
    #[case(-17.777_777_777_777_78, 2, -17.78)]
    #[case(1.005, 0, 1.0)]
    #[case(2.5, 0, 3.0)]
    #[case(-2.5, 0, -3.0)]
    fn test_round_dp(#[case] value: f64, #[case] dp: u32, #[case] expected: f64) {
        assert!((round_dp(value, dp) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_is_unchanged() {
        let huge = 1e40;
        assert!((round_dp(huge, 2) - huge).abs() < f64::EPSILON * huge);
    }
}
