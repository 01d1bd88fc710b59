// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar tolerance policy shared by every geometric predicate.
//!
//! Repeated rotations accumulate floating-point drift; a block rotated a few
//! hundred quarter-turns no longer lands on bit-exact coordinates. Every
//! equality, zero, and parallelism test in the workspace therefore routes
//! through these helpers instead of comparing raw floats.

/// Absolute tolerance used by all geometric comparisons.
///
/// Valid because puzzle coordinates stay within unit-ish magnitudes; an
/// absolute epsilon would be wrong for a general-purpose numeric library.
pub const EPSILON: f64 = 1e-10;

/// Returns `true` when `a` and `b` differ by at most [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Returns `true` when `value` is within [`EPSILON`] of zero.
pub fn approx_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Clamps `value` to `[-1, 1]` before an `acos`/`asin` call.
///
/// Normalized dot products round past ±1 by a few ulps; without the clamp
/// the inverse trig functions return NaN.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_within_epsilon() {
        assert!(approx_eq(1.0, 1.0 + EPSILON * 0.5));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 10.0));
    }

    #[test]
    fn approx_zero_is_symmetric() {
        assert!(approx_zero(EPSILON * 0.9));
        assert!(approx_zero(-EPSILON * 0.9));
        assert!(!approx_zero(EPSILON * 1.5));
    }

    #[test]
    fn clamp_unit_bounds() {
        assert!((clamp_unit(1.0 + 1e-15) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_unit(-1.0 - 1e-15) + 1.0).abs() < f64::EPSILON);
        assert!((clamp_unit(0.5) - 0.5).abs() < f64::EPSILON);
    }
}
