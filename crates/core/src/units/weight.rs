//! Weight units.
//!
//! Pounds use the 2.20462 lb/kg constant rather than the exact SI ratio so
//! results stay compatible with previously published outputs.

use super::transform::{Conversion, Transform::Divide, Transform::Multiply};

/// Weight unit names.
pub const UNITS: &[&str] = &["gramos", "kilogramos", "libras"];

/// Pairwise weight conversions.
pub static TABLE: &[Conversion] = &[
    Conversion::new("gramos", "kilogramos", Divide(1000.0)),
    Conversion::new("gramos", "libras", Multiply(0.002_204_62)),
    Conversion::new("kilogramos", "gramos", Multiply(1000.0)),
    Conversion::new("kilogramos", "libras", Multiply(2.204_62)),
    Conversion::new("libras", "gramos", Divide(0.002_204_62)),
    Conversion::new("libras", "kilogramos", Divide(2.204_62)),
];
