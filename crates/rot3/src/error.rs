//! Errors raised when building a rotation from an external representation.

use thiserror::Error;

/// Error type for rotation construction and conversion.
///
/// The group operations themselves are total and never fail; only the constructors
/// in [`crate::conversions`] and [`crate::Rot3::from_storage`] return this error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rot3Error {
    /// The supplied representation cannot be turned into a valid rotation.
    #[error("invalid rotation input: {0}")]
    InvalidRotationInput(#[from] InvalidInput),
}

/// The reason a representation was rejected.
///
/// Numeric fields are widened to `f64` regardless of the scalar the rotation was built with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// At least one component is NaN or infinite.
    #[error("input contains non-finite values")]
    NonFinite,

    /// The quaternion is zero and has no direction to normalize to.
    #[error("quaternion has zero norm")]
    ZeroNorm,

    /// The quaternion norm is further from one than the configured tolerance.
    #[error("quaternion norm {norm} deviates from 1 by more than {tolerance}")]
    NotUnitNorm {
        /// Norm of the supplied quaternion.
        norm: f64,
        /// Allowed deviation from one.
        tolerance: f64,
    },

    /// The matrix is not orthonormal within the configured tolerance.
    #[error("matrix is not orthonormal: max |R^T R - I| = {error}, tolerance {tolerance}")]
    NotOrthonormal {
        /// Largest absolute entry of `R^T R - I`.
        error: f64,
        /// Allowed deviation.
        tolerance: f64,
    },

    /// The matrix is orthonormal but has a negative determinant.
    #[error("matrix is a reflection (determinant {determinant})")]
    Reflection {
        /// Determinant of the supplied matrix.
        determinant: f64,
    },

    /// The rotation axis is the zero vector.
    #[error("rotation axis has zero length")]
    ZeroAxis,

    /// A flat storage slice has the wrong number of elements.
    #[error("storage has wrong size: expected {expected}, got {got}")]
    WrongStorageSize {
        /// Required number of elements.
        expected: usize,
        /// Number of elements supplied.
        got: usize,
    },
}
