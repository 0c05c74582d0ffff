//! Temperature units.

use super::transform::{Conversion, Transform};

/// Temperature unit names.
pub const UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];

const KELVIN_OFFSET: f64 = 273.15;

const fn affine(shift: f64, numerator: f64, denominator: f64, offset: f64) -> Transform {
    Transform::Affine {
        shift,
        numerator,
        denominator,
        offset,
    }
}

/// Pairwise temperature conversions.
pub static TABLE: &[Conversion] = &[
    Conversion::new("celsius", "fahrenheit", affine(0.0, 9.0, 5.0, 32.0)),
    Conversion::new("celsius", "kelvin", affine(0.0, 1.0, 1.0, KELVIN_OFFSET)),
    Conversion::new("fahrenheit", "celsius", affine(-32.0, 5.0, 9.0, 0.0)),
    Conversion::new("fahrenheit", "kelvin", affine(-32.0, 5.0, 9.0, KELVIN_OFFSET)),
    Conversion::new("kelvin", "celsius", affine(-KELVIN_OFFSET, 1.0, 1.0, 0.0)),
    Conversion::new("kelvin", "fahrenheit", affine(-KELVIN_OFFSET, 9.0, 5.0, 32.0)),
];
