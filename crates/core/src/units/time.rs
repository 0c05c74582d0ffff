//! Time units.
//!
//! Months and years use Gregorian averages (30.4368 and 365.242 days).
//! Every pair has its own published constant; nothing is chained through seconds.

use super::transform::{Conversion, Transform::Divide, Transform::Multiply};

/// Time unit names.
pub const UNITS: &[&str] = &["segundos", "minutos", "horas", "dias", "meses", "años"];

/// Pairwise time conversions.
pub static TABLE: &[Conversion] = &[
    Conversion::new("segundos", "minutos", Divide(60.0)),
    Conversion::new("segundos", "horas", Divide(3600.0)),
    Conversion::new("segundos", "dias", Divide(86_400.0)),
    Conversion::new("segundos", "meses", Divide(2_629_746.0)),
    Conversion::new("segundos", "años", Divide(31_556_952.0)),
    Conversion::new("minutos", "segundos", Multiply(60.0)),
    Conversion::new("minutos", "horas", Divide(60.0)),
    Conversion::new("minutos", "dias", Divide(1440.0)),
    Conversion::new("minutos", "meses", Divide(43_829.1)),
    Conversion::new("minutos", "años", Divide(525_949.0)),
    Conversion::new("horas", "segundos", Multiply(3600.0)),
    Conversion::new("horas", "minutos", Multiply(60.0)),
    Conversion::new("horas", "dias", Divide(24.0)),
    Conversion::new("horas", "meses", Divide(730.484)),
    Conversion::new("horas", "años", Divide(8765.81)),
    Conversion::new("dias", "segundos", Multiply(86_400.0)),
    Conversion::new("dias", "minutos", Multiply(1440.0)),
    Conversion::new("dias", "horas", Multiply(24.0)),
    Conversion::new("dias", "meses", Divide(30.4368)),
    Conversion::new("dias", "años", Divide(365.242)),
    Conversion::new("meses", "segundos", Multiply(2_629_746.0)),
    Conversion::new("meses", "minutos", Multiply(43_829.1)),
    Conversion::new("meses", "horas", Multiply(730.484)),
    Conversion::new("meses", "dias", Multiply(30.4368)),
    Conversion::new("meses", "años", Divide(12.0)),
    Conversion::new("años", "segundos", Multiply(31_556_952.0)),
    Conversion::new("años", "minutos", Multiply(525_949.0)),
    Conversion::new("años", "horas", Multiply(8765.81)),
    Conversion::new("años", "dias", Multiply(365.242)),
    Conversion::new("años", "meses", Multiply(12.0)),
];
