//! # Rot3 — elements of SO(3)
//!
//! [`Rot3`] stores a rotation as a unit quaternion. Unit quaternions double cover SO(3): `q` and
//! `-q` are the same rotation, so two elements should be compared with
//! [`Rot3::is_equivalent`] rather than `==`, which compares storage.
//!
//! ## Composition order
//!
//! `a.compose(&b)` (or `a * b`) applies `b` first and then `a`, matching matrix products:
//! `(a * b).to_rotation_matrix() == a.to_rotation_matrix() * b.to_rotation_matrix()`.
//!
//! ## Drift
//!
//! Every composition divides the Hamilton product by its norm, so chains of any length stay on
//! the unit sphere. Inversion is an exact conjugation and is never renormalized.

use rand::Rng;

use crate::{
    error::{InvalidInput, Rot3Error},
    group::GroupOps,
    quaternion::Quaternion,
    scalar::Real,
};

/// A 3D rotation, stored as a unit quaternion.
///
/// Construct one with [`Rot3::IDENTITY`], one of the checked constructors such as
/// [`Rot3::from_quaternion`] or [`Rot3::from_rotation_matrix`], or by composing existing elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot3<T: Real> {
    q: Quaternion<T>,
}

impl<T: Real> Rot3<T> {
    /// The rotation that leaves every vector unchanged.
    pub const IDENTITY: Self = Self {
        q: Quaternion::IDENTITY,
    };

    /// Number of scalars in the flat storage layout.
    pub const STORAGE_DIM: usize = 4;

    /// Wrap a quaternion that is already known to have unit norm.
    #[inline]
    pub(crate) fn new_unchecked(q: Quaternion<T>) -> Self {
        Self { q }
    }

    /// The underlying unit quaternion.
    #[inline]
    pub fn quaternion(&self) -> Quaternion<T> {
        self.q
    }

    /// Scalar part of the quaternion.
    #[inline]
    pub fn w(&self) -> T {
        self.q.w
    }

    /// First vector component of the quaternion.
    #[inline]
    pub fn x(&self) -> T {
        self.q.x
    }

    /// Second vector component of the quaternion.
    #[inline]
    pub fn y(&self) -> T {
        self.q.y
    }

    /// Third vector component of the quaternion.
    #[inline]
    pub fn z(&self) -> T {
        self.q.z
    }

    /// Flat storage as `[x, y, z, w]`.
    #[inline]
    pub fn to_storage(&self) -> [T; 4] {
        self.q.to_xyzw()
    }

    /// Build a rotation from flat `[x, y, z, w]` storage.
    ///
    /// The slice must hold exactly [`Self::STORAGE_DIM`] values forming a unit quaternion
    /// within the default tolerance.
    pub fn from_storage(storage: &[T]) -> Result<Self, Rot3Error> {
        let arr: [T; 4] = storage.try_into().map_err(|_| {
            log::debug!(
                "rejecting rotation storage of length {}, expected {}",
                storage.len(),
                Self::STORAGE_DIM
            );
            InvalidInput::WrongStorageSize {
                expected: Self::STORAGE_DIM,
                got: storage.len(),
            }
        })?;
        Self::from_quaternion(Quaternion::from_xyzw(arr))
    }

    /// True when the quaternion norm is within `tolerance` of one.
    #[inline]
    pub fn is_valid(&self, tolerance: T) -> bool {
        (self.q.norm_squared().sqrt() - T::ONE).abs() <= tolerance
    }

    /// Rotate a point.
    pub fn rotate(&self, v: &T::Vec3) -> T::Vec3 {
        let [vx, vy, vz] = T::vec3_to_array(v);
        let (w, x, y, z) = (self.q.w, self.q.x, self.q.y, self.q.z);
        let two = T::ONE + T::ONE;

        // t = 2 (u x v), v' = v + w t + u x t
        let tx = two * (y * vz - z * vy);
        let ty = two * (z * vx - x * vz);
        let tz = two * (x * vy - y * vx);

        T::vec3_from_array([
            vx + w * tx + (y * tz - z * ty),
            vy + w * ty + (z * tx - x * tz),
            vz + w * tz + (x * ty - y * tx),
        ])
    }

    /// Convert to another scalar precision. The result is renormalized in the target precision.
    pub fn cast<U: Real>(&self) -> Rot3<U> {
        let q = Quaternion::new(
            U::from_f64(self.q.w.as_f64()),
            U::from_f64(self.q.x.as_f64()),
            U::from_f64(self.q.y.as_f64()),
            U::from_f64(self.q.z.as_f64()),
        );
        Rot3::new_unchecked(q.normalize().unwrap_or(Quaternion::IDENTITY))
    }

    /// Sample a rotation uniformly from SO(3) with the thread-local generator.
    pub fn from_random() -> Self {
        Self::from_random_with(&mut rand::rng())
    }

    /// Sample a rotation uniformly from SO(3) (Shoemake's method).
    pub fn from_random_with<R: Rng>(rng: &mut R) -> Self {
        let r1 = T::from_f64(rng.random::<f64>());
        let r2 = T::from_f64(rng.random::<f64>());
        let r3 = T::from_f64(rng.random::<f64>());

        let two_pi = T::PI() + T::PI();
        let one_minus_r1_sqrt = (T::ONE - r1).sqrt();
        let r1_sqrt = r1.sqrt();

        let q = Quaternion::new(
            r1_sqrt * (two_pi * r3).cos(),
            one_minus_r1_sqrt * (two_pi * r2).sin(),
            one_minus_r1_sqrt * (two_pi * r2).cos(),
            r1_sqrt * (two_pi * r3).sin(),
        );

        Self::new_unchecked(q.normalize().unwrap_or(Quaternion::IDENTITY))
    }
}

impl<T: Real> GroupOps for Rot3<T> {
    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn inverse(&self) -> Self {
        Self {
            q: self.q.conjugate(),
        }
    }

    #[inline]
    fn compose(&self, other: &Self) -> Self {
        let q = self.q * other.q;
        Self {
            q: q.scale(q.norm_squared().sqrt().recip()),
        }
    }
}

impl<T: Real> Default for Rot3<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Real> std::ops::Mul<Rot3<T>> for Rot3<T> {
    type Output = Rot3<T>;

    #[inline]
    fn mul(self, rhs: Rot3<T>) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<T: Real> std::ops::MulAssign<Rot3<T>> for Rot3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Rot3<T>) {
        *self = self.compose(&rhs);
    }
}
