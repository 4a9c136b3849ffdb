//! Numeric tolerances used when validating rotation inputs.

use crate::scalar::Real;

/// Tolerances applied by the checked constructors.
///
/// The defaults depend on the precision: `1e-4` for `f32` and `1e-9` for `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T: Real> {
    /// Allowed deviation of a quaternion norm from one.
    pub unit_norm: T,
    /// Allowed max-abs deviation of `R^T R` from the identity.
    pub orthonormality: T,
}

impl<T: Real> Tolerance<T> {
    /// Use the same tolerance for every check.
    pub fn uniform(tolerance: T) -> Self {
        Self {
            unit_norm: tolerance,
            orthonormality: tolerance,
        }
    }
}

impl<T: Real> Default for Tolerance<T> {
    fn default() -> Self {
        Self {
            unit_norm: T::DEFAULT_UNIT_NORM_TOLERANCE,
            orthonormality: T::DEFAULT_ORTHONORMALITY_TOLERANCE,
        }
    }
}
