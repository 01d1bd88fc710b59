// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! twist-geom: deterministic geometry kernel for the twist rotation core.
//!
//! This crate provides:
//! - Cartesian vectors ([`Vec2`], [`Vec3`]) and canonical spherical
//!   directions ([`SphericalVec`]).
//! - Planes and parametric lines with intersection and half-space queries.
//! - 3×3 rotation matrices ([`RotationMatrix`]) built from axis/angle pairs
//!   and decomposable back to Euler form.
//! - A circular comparator ([`CircularOrder`]) producing deterministic
//!   counter-clockwise orderings around a plane.
//!
//! Design notes:
//! - `f64` throughout; equality, zero, and parallelism tests go through the
//!   single tolerance policy in [`scalar`] (`EPSILON = 1e-10`). Coordinates
//!   are assumed to stay in a small bounded range (unit-ish magnitudes), so
//!   an absolute epsilon is sufficient; this is not a general-purpose
//!   numeric library.
//! - All operations are pure functions over value types; there is no
//!   mutable state and no I/O anywhere in this crate.
//! - Angles are clockwise-positive when looking along the rotation axis;
//!   rotation constructors negate the angle before trig evaluation.

pub mod error;
pub mod line;
pub mod matrix;
pub mod ordering;
pub mod plane;
pub mod scalar;
pub mod spherical;
pub mod vec2;
pub mod vec3;

pub use error::GeomError;
pub use line::ParametricLine;
pub use matrix::{AxisRotation, RotationMatrix};
pub use ordering::CircularOrder;
pub use plane::Plane;
pub use scalar::{approx_eq, approx_zero, EPSILON};
pub use spherical::SphericalVec;
pub use vec2::Vec2;
pub use vec3::Vec3;
