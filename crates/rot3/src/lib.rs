#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Rot3
//!
//! Group operations for the 3D rotation group SO(3), stored as unit quaternions and generic over
//! the scalar type (`f32` and `f64`).
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | [`GroupOps::identity`] | rotation that leaves every vector unchanged |
//! | [`GroupOps::inverse`] | conjugate quaternion, exact |
//! | [`GroupOps::compose`] | `a ∘ b`: apply `b`, then `a`; renormalized |
//! | [`GroupOps::between`] | `a⁻¹ ∘ b` |
//!
//! Rotations are immutable `Copy` values. They are created through checked constructors that
//! return [`Rot3Error`] for input that is not a valid rotation.
//!
//! ## Example
//!
//! ```rust
//! use rot3::{GroupOps, Rot3F64};
//!
//! let axis = glam::DVec3::X;
//! let a = Rot3F64::from_axis_angle(&axis, std::f64::consts::FRAC_PI_2)?;
//! let b = Rot3F64::from_axis_angle(&glam::DVec3::Y, 0.3)?;
//!
//! let c = a.between(&b);
//! assert!(a.compose(&c).is_equivalent(&b, 1e-12));
//!
//! let rotated = a.rotate(&glam::DVec3::Y);
//! assert!((rotated - glam::DVec3::Z).length() < 1e-12);
//! # Ok::<(), rot3::Rot3Error>(())
//! ```

/// Conversions from and to quaternions, rotation matrices and axis-angle pairs.
pub mod conversions;

/// Equivalence of rotations up to the quaternion sign.
pub mod equivalence;

/// Error types.
pub mod error;

/// The abstract group trait.
pub mod group;

/// Raw quaternion arithmetic.
pub mod quaternion;

/// The SO(3) element type.
pub mod rot3;

/// Scalar trait tying each precision to its `glam` types.
pub mod scalar;

/// Validation tolerances.
pub mod tolerance;

pub use error::{InvalidInput, Rot3Error};
pub use group::GroupOps;
pub use quaternion::Quaternion;
pub use rot3::Rot3;
pub use scalar::Real;
pub use tolerance::Tolerance;

/// Single precision rotation.
pub type Rot3F32 = Rot3<f32>;

/// Double precision rotation.
pub type Rot3F64 = Rot3<f64>;
