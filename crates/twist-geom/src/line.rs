// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Parametric lines, mainly produced by plane–plane intersection.
use crate::error::GeomError;
use crate::scalar::approx_zero;
use crate::vec3::Vec3;

/// Line in parametric form: `origin + t · direction`.
///
/// Used for plane intersections and perpendicular-projection queries. The
/// direction is never zero; construction enforces it.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricLine {
    origin: Vec3,
    direction: Vec3,
}

impl ParametricLine {
    /// Creates a line through `origin` along `direction`.
    ///
    /// # Errors
    /// [`GeomError::DegenerateDirection`] when `direction` is
    /// (epsilon-)zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, GeomError> {
        if direction.approx_zero() {
            return Err(GeomError::DegenerateDirection);
        }
        Ok(Self { origin, direction })
    }

    /// A point the line passes through.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// The (non-zero, not necessarily unit) direction of the line.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The point at parameter `t`.
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin.add(&self.direction.scale(t))
    }

    /// Foot of the perpendicular from `point` onto the line.
    pub fn closest_point_to(&self, point: &Vec3) -> Vec3 {
        let t = self.direction.dot(&point.sub(&self.origin)) / self.direction.length_squared();
        self.point_at(t)
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to_point(&self, point: &Vec3) -> f64 {
        self.closest_point_to(point).sub(point).length()
    }

    /// Returns `true` when `point` lies on the line within epsilon.
    pub fn contains(&self, point: &Vec3) -> bool {
        approx_zero(self.distance_to_point(point))
    }

    /// Returns `true` when the directions are parallel (either sign).
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    /// Returns `true` when both values describe the same geometric line:
    /// parallel directions and each origin on the other line.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.is_parallel_to(other) && self.contains(&other.origin) && other.contains(&self.origin)
    }
}
