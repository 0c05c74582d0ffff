//! Conversion table entries.

/// A pure numeric transform from one unit to another.
///
/// Multiplication and division are kept apart so each entry evaluates
/// with the same floating-point operations as its published formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// `value * factor`
    Multiply(f64),
    /// `value / divisor`
    Divide(f64),
    /// `(value + shift) * numerator / denominator + offset`
    Affine {
        /// Added before scaling.
        shift: f64,
        /// Scale numerator.
        numerator: f64,
        /// Scale denominator.
        denominator: f64,
        /// Added after scaling.
        offset: f64,
    },
}

impl Transform {
    /// Applies the transform to a value.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Multiply(factor) => value * factor,
            Self::Divide(divisor) => value / divisor,
            Self::Affine {
                shift,
                numerator,
                denominator,
                offset,
            } => (value + shift) * numerator / denominator + offset,
        }
    }
}

/// One entry of a conversion table.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    /// Source unit name.
    pub from: &'static str,
    /// Target unit name.
    pub to: &'static str,
    /// Transform from `from` to `to`.
    pub transform: Transform,
}

impl Conversion {
    pub(crate) const fn new(from: &'static str, to: &'static str, transform: Transform) -> Self {
        Self {
            from,
            to,
            transform,
        }
    }
}
