//! Rotation equality up to the quaternion double cover.
//!
//! `q` and `-q` encode the same rotation. [`Rot3::is_equivalent`] is the single place where that
//! ambiguity is resolved; everything else treats rotations as plain values.

use crate::{rot3::Rot3, scalar::Real};

impl<T: Real> Rot3<T> {
    /// True when `self` and `other` are the same rotation within `tolerance`.
    ///
    /// Compares quaternion components in max-abs norm against both `other` and its negation.
    #[inline]
    pub fn is_equivalent(&self, other: &Self, tolerance: T) -> bool {
        let (a, b) = (self.quaternion(), other.quaternion());
        a.max_abs_diff(&b).min(a.max_abs_diff(&-b)) <= tolerance
    }
}

#[cfg(feature = "approx")]
impl<T> approx::AbsDiffEq for Rot3<T>
where
    T: Real + approx::AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.is_equivalent(other, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T> approx::RelativeEq for Rot3<T>
where
    T: Real + approx::RelativeEq<Epsilon = T>,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        let a = self.quaternion().to_wxyz();
        let b = other.quaternion().to_wxyz();
        let same = |sign: T| {
            a.iter()
                .zip(b.iter())
                .all(|(x, y)| T::relative_eq(x, &(sign * *y), epsilon, max_relative))
        };
        same(T::ONE) || same(-T::ONE)
    }
}

#[cfg(test)]
mod tests {
    use crate::{quaternion::Quaternion, GroupOps, Rot3};

    #[test]
    fn test_equivalent_up_to_sign() {
        let r = Rot3::<f64>::from_wxyz(0.5, 0.5, 0.5, -0.5).unwrap();
        let neg = Rot3::<f64>::from_quaternion(-r.quaternion()).unwrap();

        assert_ne!(r, neg);
        assert!(r.is_equivalent(&neg, 0.0));
        assert!(neg.is_equivalent(&r, 0.0));
        assert!(r.is_equivalent(&r, 0.0));
    }

    #[test]
    fn test_not_equivalent() {
        let a = Rot3::<f32>::IDENTITY;
        let b = Rot3::<f32>::from_wxyz(0.0, 1.0, 0.0, 0.0).unwrap();
        assert!(!a.is_equivalent(&b, 1e-3));
        assert!(!a.is_equivalent(&b.inverse(), 1e-3));
    }

    #[test]
    fn test_tolerance_is_respected() {
        let a = Rot3::<f64>::IDENTITY;
        let q = Quaternion::new(1.0, 1e-6, 0.0, 0.0);
        let b = Rot3::<f64>::from_quaternion_normalized(q).unwrap();
        assert!(a.is_equivalent(&b, 1e-5));
        assert!(!a.is_equivalent(&b, 1e-7));
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_approx_traits() {
        use approx::{assert_abs_diff_eq, assert_relative_eq, assert_relative_ne};

        let r = Rot3::<f64>::from_wxyz(0.5, 0.5, 0.5, -0.5).unwrap();
        let neg = Rot3::<f64>::from_quaternion(-r.quaternion()).unwrap();
        assert_abs_diff_eq!(r, neg, epsilon = 1e-12);
        assert_relative_eq!(r, neg);
        assert_relative_ne!(r, Rot3::IDENTITY);
    }
}
