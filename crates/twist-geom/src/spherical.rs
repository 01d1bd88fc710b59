// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical spherical directions, so equivalent angle pairs compare equal.
use core::f64::consts::{PI, TAU};

use crate::scalar::approx_zero;
use crate::vec3::Vec3;

/// Canonical direction on the unit sphere, ISO convention.
///
/// * `phi` is the azimuthal angle in `[0, 2π)`.
/// * `theta` is the polar angle from the +Z pole in `[0, π]`.
///
/// The constructor normalizes any `(phi, theta)` pair to a single canonical
/// representative: angles are wrapped, a `theta` past the half-circle is
/// folded back under π with `phi` mirrored to the complementary azimuth, and
/// any direction at a pole collapses `phi` to 0. Two `SphericalVec` values
/// therefore compare equal exactly when they denote the same direction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalVec {
    phi: f64,
    theta: f64,
}

impl SphericalVec {
    /// Creates a canonical spherical direction from raw angles.
    pub fn new(phi: f64, theta: f64) -> Self {
        let mut theta = theta.rem_euclid(TAU);
        let mut phi = phi;
        if theta > PI {
            // Past the half-circle: fold back under π, mirror the azimuth.
            theta = TAU - theta;
            phi += PI;
        }
        let mut phi = phi.rem_euclid(TAU);
        if approx_zero(theta) || approx_zero(theta - PI) {
            // At a pole every azimuth is the same direction.
            phi = 0.0;
        }
        Self { phi, theta }
    }

    /// Azimuthal angle in `[0, 2π)`.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Polar angle from the +Z pole in `[0, π]`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Converts to the cartesian unit vector for this direction.
    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }

    /// Epsilon equality on the canonical angle pair.
    pub fn approx_eq(&self, other: &Self) -> bool {
        crate::scalar::approx_eq(self.phi, other.phi)
            && crate::scalar::approx_eq(self.theta, other.theta)
    }
}

/// Converts a non-zero cartesian vector into its canonical direction.
impl From<Vec3> for SphericalVec {
    fn from(value: Vec3) -> Self {
        value.to_spherical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::approx_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn wraps_phi_into_range() {
        let s = SphericalVec::new(TAU + FRAC_PI_4, FRAC_PI_2);
        assert!(approx_eq(s.phi(), FRAC_PI_4));
        let s = SphericalVec::new(-FRAC_PI_4, FRAC_PI_2);
        assert!(approx_eq(s.phi(), TAU - FRAC_PI_4));
    }

    #[test]
    fn folds_theta_past_half_circle() {
        // theta = 3π/2 points along −Z-ish on the opposite azimuth.
        let folded = SphericalVec::new(0.0, 3.0 * FRAC_PI_2);
        assert!(approx_eq(folded.theta(), FRAC_PI_2));
        assert!(approx_eq(folded.phi(), PI));
        // Same direction built directly.
        let direct = SphericalVec::new(PI, FRAC_PI_2);
        assert!(folded.approx_eq(&direct));
    }

    #[test]
    fn pole_collapses_phi() {
        let north = SphericalVec::new(1.23, 0.0);
        assert!(approx_zero(north.phi()));
        let south = SphericalVec::new(4.56, PI);
        assert!(approx_zero(south.phi()));
        assert!(north.to_cartesian().approx_eq(&Vec3::UNIT_Z));
        assert!(south.to_cartesian().approx_eq(&Vec3::UNIT_Z.scale(-1.0)));
    }

    #[test]
    fn one_canonical_pair_per_direction() {
        let a = SphericalVec::new(FRAC_PI_4, FRAC_PI_4);
        let b = SphericalVec::new(FRAC_PI_4 - TAU, FRAC_PI_4 + TAU);
        assert!(a.approx_eq(&b));
        assert!(a.to_cartesian().approx_eq(&b.to_cartesian()));
    }
}
