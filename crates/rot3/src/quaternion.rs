//! Raw quaternion arithmetic.
//!
//! [`Quaternion`] carries no unit-norm guarantee. It is the working type the rotation group is
//! built on and the input type of the checked [`Rot3`](crate::Rot3) constructors.

use crate::scalar::Real;

/// A quaternion `w + x i + y j + z k`, generic over the scalar type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T: Real> {
    /// Scalar (real) part.
    pub w: T,
    /// First imaginary component.
    pub x: T,
    /// Second imaginary component.
    pub y: T,
    /// Third imaginary component.
    pub z: T,
}

impl<T: Real> Quaternion<T> {
    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    pub const IDENTITY: Self = Self {
        w: T::ONE,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    /// Create a quaternion from its scalar part followed by its vector part.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Create a quaternion from the `[x, y, z, w]` layout.
    #[inline]
    pub fn from_xyzw(arr: [T; 4]) -> Self {
        Self::new(arr[3], arr[0], arr[1], arr[2])
    }

    /// Return the `[x, y, z, w]` layout.
    #[inline]
    pub fn to_xyzw(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Return the `[w, x, y, z]` layout.
    #[inline]
    pub fn to_wxyz(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Negate the vector part. Preserves the norm exactly.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean norm.
    ///
    /// Components are scaled by the largest magnitude first, so the result is finite and
    /// non-zero for every finite, non-zero quaternion.
    #[inline]
    pub fn norm(&self) -> T {
        let m = self.max_abs();
        if m == T::ZERO || !m.is_finite() {
            return m;
        }
        m * self.unscale(m).norm_squared().sqrt()
    }

    /// Largest absolute component. NaN components are skipped.
    #[inline]
    pub fn max_abs(&self) -> T {
        self.w.abs().max(self.x.abs()).max(self.y.abs()).max(self.z.abs())
    }

    /// Scale every component by `s`.
    #[inline]
    pub fn scale(&self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Divide every component by `s`.
    #[inline]
    fn unscale(&self, s: T) -> Self {
        Self::new(self.w / s, self.x / s, self.y / s, self.z / s)
    }

    /// Divide by the norm. Returns `None` when the quaternion is zero or not finite.
    #[inline]
    pub fn normalize(&self) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        let m = self.max_abs();
        if m == T::ZERO {
            return None;
        }
        // unit max component keeps the squared norm in [1, 4]
        let u = self.unscale(m);
        Some(u.scale(u.norm_squared().sqrt().recip()))
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Largest absolute component-wise difference to `other`.
    #[inline]
    pub(crate) fn max_abs_diff(&self, other: &Self) -> T {
        (self.w - other.w)
            .abs()
            .max((self.x - other.x).abs())
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> std::ops::Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

// Hamilton product
impl<T: Real> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layouts() {
        let q = Quaternion::<f64>::from_xyzw([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.w, 4.0);
        assert_eq!(q.to_xyzw(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.to_wxyz(), [4.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_hamilton_units() {
        let i = Quaternion::<f64>::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::<f64>::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::<f64>::new(0.0, 0.0, 0.0, 1.0);

        // i j = k, j i = -k, i i = -1
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quaternion::IDENTITY);
        assert_eq!(i * j * k, -Quaternion::IDENTITY);
    }

    #[test]
    fn test_conjugate_product_is_norm_squared() {
        let q = Quaternion::<f32>::new(0.9, 0.1, -0.3, 0.2);
        let p = q * q.conjugate();
        assert_relative_eq!(p.w, q.norm_squared(), epsilon = 1e-6);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
        assert_eq!(q.conjugate().norm(), q.norm());
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::<f64>::new(3.5, 4.0, -2.0, 1.0).normalize();
        let q = q.expect("non-zero quaternion normalizes");
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);

        assert!(Quaternion::<f64>::new(0.0, 0.0, 0.0, 0.0).normalize().is_none());
        assert!(Quaternion::<f32>::new(f32::NAN, 0.0, 0.0, 1.0).normalize().is_none());
        assert!(Quaternion::<f32>::new(f32::INFINITY, 0.0, 0.0, 1.0)
            .normalize()
            .is_none());
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        let half = std::f64::consts::FRAC_1_SQRT_2;

        let huge = Quaternion::<f64>::new(1e200, 1e200, 0.0, 0.0);
        assert_relative_eq!(huge.norm(), 1e200 * std::f64::consts::SQRT_2, max_relative = 1e-15);
        let q = huge.normalize().expect("finite quaternion normalizes");
        assert_relative_eq!(q.w, half, epsilon = 1e-15);
        assert_relative_eq!(q.x, half, epsilon = 1e-15);

        let tiny = Quaternion::<f64>::new(0.0, 0.0, 1e-200, -1e-200);
        assert!(tiny.norm() > 0.0);
        let q = tiny.normalize().expect("non-zero quaternion normalizes");
        assert_relative_eq!(q.y, half, epsilon = 1e-15);
        assert_relative_eq!(q.z, -half, epsilon = 1e-15);

        let subnormal = Quaternion::<f64>::new(5e-324, 0.0, 0.0, 0.0);
        assert_eq!(subnormal.normalize(), Some(Quaternion::IDENTITY));

        let q = Quaternion::<f32>::new(0.0, 3e30, 4e30, 0.0).normalize().unwrap();
        assert_relative_eq!(q.x, 0.6, epsilon = 1e-6);
        assert_relative_eq!(q.y, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Quaternion::<f64>::new(1.0, 0.0, 0.5, 0.0);
        let b = Quaternion::<f64>::new(0.5, 0.0, 0.0, 0.25);
        assert_eq!(a.max_abs_diff(&b), 0.5);
        assert_eq!(a.max_abs_diff(&a), 0.0);
    }
}
