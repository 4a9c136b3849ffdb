//! Conversions between [`Rot3`] and other rotation representations.
//!
//! Every constructor here validates its input and fails with
//! [`Rot3Error::InvalidRotationInput`] instead of coercing bad input to a nearby rotation.
//! The one exception is [`Rot3::from_quaternion_normalized`], where the caller explicitly asks
//! for normalization.

use crate::{
    error::{InvalidInput, Rot3Error},
    quaternion::Quaternion,
    rot3::Rot3,
    scalar::Real,
    tolerance::Tolerance,
};

fn reject(reason: InvalidInput) -> Rot3Error {
    log::debug!("rejecting rotation input: {reason}");
    Rot3Error::InvalidRotationInput(reason)
}

impl<T: Real> Rot3<T> {
    /// Create a rotation from a unit quaternion, using the default [`Tolerance`].
    ///
    /// See [`Rot3::from_quaternion_with`].
    #[inline]
    pub fn from_quaternion(q: Quaternion<T>) -> Result<Self, Rot3Error> {
        Self::from_quaternion_with(q, &Tolerance::default())
    }

    /// Create a rotation from a unit quaternion.
    ///
    /// The norm of `q` must be within `tolerance.unit_norm` of one; the accepted quaternion is
    /// renormalized so the stored value is unit norm to working precision.
    pub fn from_quaternion_with(
        q: Quaternion<T>,
        tolerance: &Tolerance<T>,
    ) -> Result<Self, Rot3Error> {
        if !q.is_finite() {
            return Err(reject(InvalidInput::NonFinite));
        }

        let norm = q.norm();
        if norm == T::ZERO {
            return Err(reject(InvalidInput::ZeroNorm));
        }
        // written negated so a NaN tolerance rejects
        if !((norm - T::ONE).abs() <= tolerance.unit_norm) {
            return Err(reject(InvalidInput::NotUnitNorm {
                norm: norm.as_f64(),
                tolerance: tolerance.unit_norm.as_f64(),
            }));
        }

        Ok(Self::new_unchecked(q.scale(norm.recip())))
    }

    /// Create a rotation from any finite, non-zero quaternion by normalizing it.
    pub fn from_quaternion_normalized(q: Quaternion<T>) -> Result<Self, Rot3Error> {
        if !q.is_finite() {
            return Err(reject(InvalidInput::NonFinite));
        }
        q.normalize()
            .map(Self::new_unchecked)
            .ok_or_else(|| reject(InvalidInput::ZeroNorm))
    }

    /// Create a rotation from the scalar-first components `w, x, y, z`.
    #[inline]
    pub fn from_wxyz(w: T, x: T, y: T, z: T) -> Result<Self, Rot3Error> {
        Self::from_quaternion(Quaternion::new(w, x, y, z))
    }

    /// Create a rotation from the scalar-last components `x, y, z, w`.
    #[inline]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Result<Self, Rot3Error> {
        Self::from_quaternion(Quaternion::new(w, x, y, z))
    }

    /// Create a rotation from a `glam` quaternion.
    #[inline]
    pub fn from_glam(q: &T::Quat) -> Result<Self, Rot3Error> {
        Self::from_quaternion(Quaternion::from_xyzw(T::quat_to_xyzw(q)))
    }

    /// The rotation as a `glam` quaternion.
    #[inline]
    pub fn to_glam(&self) -> T::Quat {
        T::quat_from_xyzw(self.to_storage())
    }

    /// Create a rotation from a 3x3 rotation matrix, using the default [`Tolerance`].
    #[inline]
    pub fn from_rotation_matrix(mat: &T::Mat3) -> Result<Self, Rot3Error> {
        Self::from_rotation_matrix_with(mat, &Tolerance::default())
    }

    /// Create a rotation from a 3x3 rotation matrix.
    ///
    /// The matrix must be orthonormal within `tolerance.orthonormality` and have a positive
    /// determinant.
    pub fn from_rotation_matrix_with(
        mat: &T::Mat3,
        tolerance: &Tolerance<T>,
    ) -> Result<Self, Rot3Error> {
        let cols = T::mat3_to_cols_array(mat);
        if cols.iter().any(|v| !v.is_finite()) {
            return Err(reject(InvalidInput::NonFinite));
        }

        let col = |j: usize| [cols[3 * j], cols[3 * j + 1], cols[3 * j + 2]];
        let c = [col(0), col(1), col(2)];

        // max |R^T R - I|
        let mut error = T::ZERO;
        for j in 0..3 {
            for k in j..3 {
                let expected = if j == k { T::ONE } else { T::ZERO };
                error = error.max((dot3(&c[j], &c[k]) - expected).abs());
            }
        }
        if !(error <= tolerance.orthonormality) {
            return Err(reject(InvalidInput::NotOrthonormal {
                error: error.as_f64(),
                tolerance: tolerance.orthonormality.as_f64(),
            }));
        }

        let determinant = dot3(&c[0], &cross3(&c[1], &c[2]));
        if determinant <= T::ZERO {
            return Err(reject(InvalidInput::Reflection {
                determinant: determinant.as_f64(),
            }));
        }

        // r(i, j) is row i, column j
        let r = |i: usize, j: usize| c[j][i];
        let q = quaternion_from_rows(
            [r(0, 0), r(0, 1), r(0, 2)],
            [r(1, 0), r(1, 1), r(1, 2)],
            [r(2, 0), r(2, 1), r(2, 2)],
        );

        q.normalize()
            .map(Self::new_unchecked)
            .ok_or_else(|| reject(InvalidInput::ZeroNorm))
    }

    /// The rotation as a column-major 3x3 matrix.
    pub fn to_rotation_matrix(&self) -> T::Mat3 {
        let q = self.quaternion();
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);
        let one = T::ONE;
        let two = one + one;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        T::mat3_from_cols_array(&[
            one - two * (yy + zz),
            two * (xy + wz),
            two * (xz - wy),
            two * (xy - wz),
            one - two * (xx + zz),
            two * (yz + wx),
            two * (xz + wy),
            two * (yz - wx),
            one - two * (xx + yy),
        ])
    }

    /// Create a rotation of `angle` radians about `axis`.
    ///
    /// The axis only contributes its direction and must be finite and non-zero.
    pub fn from_axis_angle(axis: &T::Vec3, angle: T) -> Result<Self, Rot3Error> {
        let axis = T::vec3_to_array(axis);
        if !angle.is_finite() || axis.iter().any(|v| !v.is_finite()) {
            return Err(reject(InvalidInput::NonFinite));
        }

        let m = axis[0].abs().max(axis[1].abs()).max(axis[2].abs());
        if m == T::ZERO {
            return Err(reject(InvalidInput::ZeroAxis));
        }

        // unit max component keeps the squared length in [1, 3]
        let axis = [axis[0] / m, axis[1] / m, axis[2] / m];
        let norm = dot3(&axis, &axis).sqrt();

        let half = angle * T::from_f64(0.5);
        let s = half.sin() / norm;
        let q = Quaternion::new(half.cos(), axis[0] * s, axis[1] * s, axis[2] * s);

        q.normalize()
            .map(Self::new_unchecked)
            .ok_or_else(|| reject(InvalidInput::ZeroAxis))
    }

    /// Unit axis and angle in `[0, pi]` of this rotation.
    ///
    /// The identity returns the x axis with a zero angle.
    pub fn to_axis_angle(&self) -> (T::Vec3, T) {
        let mut q = self.quaternion();
        if q.w < T::ZERO {
            q = -q;
        }

        let v = [q.x, q.y, q.z];
        let sin_half = dot3(&v, &v).sqrt();
        if sin_half == T::ZERO {
            return (T::vec3_from_array([T::ONE, T::ZERO, T::ZERO]), T::ZERO);
        }

        let angle = (T::ONE + T::ONE) * sin_half.atan2(q.w);
        let axis = T::vec3_from_array([v[0] / sin_half, v[1] / sin_half, v[2] / sin_half]);
        (axis, angle)
    }
}

#[inline]
fn dot3<T: Real>(a: &[T; 3], b: &[T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross3<T: Real>(a: &[T; 3], b: &[T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Shepperd's method: pick the branch with the largest diagonal term so the square root never
/// sees a value close to zero.
fn quaternion_from_rows<T: Real>(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Quaternion<T> {
    let one = T::ONE;
    let two = one + one;
    let quarter = T::from_f64(0.25);
    let trace = r0[0] + r1[1] + r2[2];

    if trace > T::ZERO {
        let s = (trace + one).sqrt() * two;
        Quaternion::new(
            quarter * s,
            (r2[1] - r1[2]) / s,
            (r0[2] - r2[0]) / s,
            (r1[0] - r0[1]) / s,
        )
    } else if r0[0] > r1[1] && r0[0] > r2[2] {
        let s = (one + r0[0] - r1[1] - r2[2]).sqrt() * two;
        Quaternion::new(
            (r2[1] - r1[2]) / s,
            quarter * s,
            (r0[1] + r1[0]) / s,
            (r0[2] + r2[0]) / s,
        )
    } else if r1[1] > r2[2] {
        let s = (one + r1[1] - r0[0] - r2[2]).sqrt() * two;
        Quaternion::new(
            (r0[2] - r2[0]) / s,
            (r0[1] + r1[0]) / s,
            quarter * s,
            (r1[2] + r2[1]) / s,
        )
    } else {
        let s = (one + r2[2] - r0[0] - r1[1]).sqrt() * two;
        Quaternion::new(
            (r1[0] - r0[1]) / s,
            (r0[2] + r2[0]) / s,
            (r1[2] + r2[1]) / s,
            quarter * s,
        )
    }
}
