//! Scalar types accepted by the rotation group.
//!
//! The group code is written once against [`Real`] and monomorphised for `f32` and `f64`.
//! Each precision is also tied to its `glam` family so conversions hand back the vector and
//! matrix types callers already use: `Vec3`/`Mat3`/`Quat` for `f32` and
//! `DVec3`/`DMat3`/`DQuat` for `f64`.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// A real scalar the rotation group can be instantiated with.
pub trait Real: Float + FloatConst + Debug + Display + Default + Send + Sync + 'static {
    /// The `glam` 3-vector of this precision.
    type Vec3: Copy + Debug + PartialEq;

    /// The `glam` 3x3 matrix of this precision (column-major).
    type Mat3: Copy + Debug + PartialEq;

    /// The `glam` quaternion of this precision.
    type Quat: Copy + Debug + PartialEq;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Default allowed deviation of a quaternion norm from one.
    const DEFAULT_UNIT_NORM_TOLERANCE: Self;

    /// Default allowed deviation of `R^T R` from the identity, in max-abs norm.
    const DEFAULT_ORTHONORMALITY_TOLERANCE: Self;

    /// Convert from `f64`, rounding to this precision.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    /// Build a 3-vector from `[x, y, z]`.
    fn vec3_from_array(arr: [Self; 3]) -> Self::Vec3;

    /// Return `[x, y, z]`.
    fn vec3_to_array(v: &Self::Vec3) -> [Self; 3];

    /// Build a 3x3 matrix from a column-major array.
    fn mat3_from_cols_array(arr: &[Self; 9]) -> Self::Mat3;

    /// Return the column-major array of a 3x3 matrix.
    fn mat3_to_cols_array(m: &Self::Mat3) -> [Self; 9];

    /// Build a quaternion from `[x, y, z, w]`.
    fn quat_from_xyzw(arr: [Self; 4]) -> Self::Quat;

    /// Return `[x, y, z, w]`.
    fn quat_to_xyzw(q: &Self::Quat) -> [Self; 4];
}

macro_rules! impl_real {
    (
        $scalar:ty,
        $vec3:ty,
        $mat3:ty,
        $quat:ty,
        unit_norm_tol = $unit_norm_tol:expr,
        orthonormality_tol = $ortho_tol:expr
    ) => {
        impl Real for $scalar {
            type Vec3 = $vec3;
            type Mat3 = $mat3;
            type Quat = $quat;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const DEFAULT_UNIT_NORM_TOLERANCE: Self = $unit_norm_tol;
            const DEFAULT_ORTHONORMALITY_TOLERANCE: Self = $ortho_tol;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $scalar
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn vec3_from_array(arr: [Self; 3]) -> Self::Vec3 {
                <$vec3>::from_array(arr)
            }

            #[inline]
            fn vec3_to_array(v: &Self::Vec3) -> [Self; 3] {
                v.to_array()
            }

            #[inline]
            fn mat3_from_cols_array(arr: &[Self; 9]) -> Self::Mat3 {
                <$mat3>::from_cols_array(arr)
            }

            #[inline]
            fn mat3_to_cols_array(m: &Self::Mat3) -> [Self; 9] {
                m.to_cols_array()
            }

            #[inline]
            fn quat_from_xyzw(arr: [Self; 4]) -> Self::Quat {
                <$quat>::from_array(arr)
            }

            #[inline]
            fn quat_to_xyzw(q: &Self::Quat) -> [Self; 4] {
                q.to_array()
            }
        }
    };
}

impl_real!(
    f32,
    glam::Vec3,
    glam::Mat3,
    glam::Quat,
    unit_norm_tol = 1e-4,
    orthonormality_tol = 1e-4
);

impl_real!(
    f64,
    glam::DVec3,
    glam::DMat3,
    glam::DQuat,
    unit_norm_tol = 1e-9,
    orthonormality_tol = 1e-9
);
