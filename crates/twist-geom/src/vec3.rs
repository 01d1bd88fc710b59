// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Cartesian 3D vectors: arithmetic, products, and Rodrigues rotation.
use crate::scalar::{approx_eq, approx_zero, clamp_unit};
use crate::spherical::SphericalVec;

/// Cartesian 3D vector, the workhorse type of the kernel.
///
/// * Components may represent either points (positions relative to the
///   puzzle center) or directions, depending on the calling context.
/// * Equality and zero tests use the workspace epsilon to absorb the drift
///   accumulated by chained rotations.
/// * Angles are clockwise-positive when looking along the rotation axis.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector. Never a valid direction (axis, normal, face).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Normalizes the vector; a no-op on an (epsilon-)zero vector so the
    /// degenerate case stays detectable by the caller.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if approx_zero(len) {
            return *self;
        }
        self.scale(1.0 / len)
    }

    /// Component-wise epsilon equality.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }

    /// Returns `true` when every component is within epsilon of zero.
    pub fn approx_zero(&self) -> bool {
        approx_zero(self.x) && approx_zero(self.y) && approx_zero(self.z)
    }

    /// Angle to another vector in radians, in `[0, π]`.
    ///
    /// The normalized dot product is clamped to `[-1, 1]` so rounding past
    /// ±1 cannot produce NaN.
    pub fn angle_to(&self, other: &Self) -> f64 {
        clamp_unit(self.normalize().dot(&other.normalize())).acos()
    }

    /// Returns `true` when the two vectors point along the same line
    /// (same or opposite direction), within epsilon.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normalize().cross(&other.normalize()).approx_zero()
    }

    /// Rotates around the X axis by `theta` (clockwise-positive).
    pub fn rotate_around_x(&self, theta: f64) -> Self {
        let (sin, cos) = (-theta).sin_cos();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    /// Rotates around the Y axis by `theta` (clockwise-positive).
    pub fn rotate_around_y(&self, theta: f64) -> Self {
        let (sin, cos) = (-theta).sin_cos();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            self.z * cos - self.x * sin,
        )
    }

    /// Rotates around the Z axis by `theta` (clockwise-positive).
    pub fn rotate_around_z(&self, theta: f64) -> Self {
        let (sin, cos) = (-theta).sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Rotates around an arbitrary `axis` by `theta` (clockwise-positive)
    /// using Rodrigues' formula:
    /// `v·cosθ + (k×v)·sinθ + k·(k·v)·(1−cosθ)` with `k` the unit axis.
    ///
    /// The axis is normalized here; an (epsilon-)zero axis leaves the vector
    /// unchanged, matching the degenerate-axis policy of
    /// [`crate::RotationMatrix::from_axis_angle`].
    pub fn rotate_around(&self, axis: &Self, theta: f64) -> Self {
        if axis.approx_zero() {
            return *self;
        }
        let k = axis.normalize();
        let (sin, cos) = (-theta).sin_cos();
        self.scale(cos)
            .add(&k.cross(self).scale(sin))
            .add(&k.scale(k.dot(self) * (1.0 - cos)))
    }

    /// Converts to the canonical spherical direction.
    ///
    /// The vector must be non-zero; direction-constructing call sites guard
    /// that invariant before converting.
    pub fn to_spherical(&self) -> SphericalVec {
        let unit = self.normalize();
        let theta = clamp_unit(unit.z).acos();
        let phi = unit.y.atan2(unit.x);
        SphericalVec::new(phi, theta)
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<SphericalVec> for Vec3 {
    fn from(value: SphericalVec) -> Self {
        value.to_cartesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn cross_follows_right_hand_rule() {
        assert!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y).approx_eq(&Vec3::UNIT_Z));
        assert!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X)
            .approx_eq(&Vec3::UNIT_Z.scale(-1.0)));
    }

    #[test]
    fn normalize_is_noop_on_zero() {
        assert!(Vec3::ZERO.normalize().approx_eq(&Vec3::ZERO));
        let v = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!(crate::scalar::approx_eq(v.length(), 1.0));
    }

    #[test]
    fn angle_to_is_clamped() {
        // Parallel unit vectors can round past 1.0; acos must not NaN.
        let v = Vec3::new(0.1 + 0.2, 0.0, 0.0);
        let w = Vec3::new(0.3, 0.0, 0.0);
        assert!(crate::scalar::approx_zero(v.angle_to(&w)));
        assert!(crate::scalar::approx_eq(
            Vec3::UNIT_X.angle_to(&Vec3::UNIT_Y),
            FRAC_PI_2
        ));
    }

    #[test]
    fn principal_axis_rotation_matches_rodrigues() {
        let v = Vec3::new(0.3, -0.7, 0.2);
        for theta in [0.4, FRAC_PI_2, PI, 2.5] {
            assert!(v
                .rotate_around_x(theta)
                .approx_eq(&v.rotate_around(&Vec3::UNIT_X, theta)));
            assert!(v
                .rotate_around_y(theta)
                .approx_eq(&v.rotate_around(&Vec3::UNIT_Y, theta)));
            assert!(v
                .rotate_around_z(theta)
                .approx_eq(&v.rotate_around(&Vec3::UNIT_Z, theta)));
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, -3.0);
        let axis = Vec3::new(1.0, 1.0, 1.0);
        let rotated = v.rotate_around(&axis, 1.234);
        assert!(crate::scalar::approx_eq(rotated.length(), v.length()));
    }

    #[test]
    fn rotation_around_zero_axis_is_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(v.rotate_around(&Vec3::ZERO, 1.0).approx_eq(&v));
    }

    #[test]
    fn spherical_roundtrip_for_unit_directions() {
        for v in [
            Vec3::UNIT_X,
            Vec3::UNIT_Y,
            Vec3::UNIT_Z,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.5, 0.25, -0.8).normalize(),
        ] {
            assert!(v.to_spherical().to_cartesian().approx_eq(&v));
        }
    }
}
