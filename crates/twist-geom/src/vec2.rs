// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Planar vectors for plane-local projections.
use crate::scalar::{approx_eq, approx_zero};

/// Planar vector used by the circular comparator's local-frame projection.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component in the local frame.
    pub x: f64,
    /// Vertical component in the local frame.
    pub y: f64,
}

impl Vec2 {
    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Component-wise epsilon equality.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Returns `true` when both components are within epsilon of zero.
    pub fn approx_zero(&self) -> bool {
        approx_zero(self.x) && approx_zero(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_roundtrip() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.5, 2.0);
        assert!(a.add(&b).approx_eq(&Vec2::new(2.0, 0.0)));
        assert!(a.add(&b).sub(&b).approx_eq(&a));
        assert!(a.scale(2.0).approx_eq(&Vec2::new(3.0, -4.0)));
    }

    #[test]
    fn length_and_zero() {
        assert!(approx_eq(Vec2::new(3.0, 4.0).length(), 5.0));
        assert!(Vec2::new(0.0, 0.0).approx_zero());
        assert!(!Vec2::new(1e-9, 0.0).approx_zero());
    }
}
