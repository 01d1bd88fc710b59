// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rotation matrices: Rodrigues construction, composition, and Euler
//! decomposition.
use crate::scalar::EPSILON;
use crate::vec3::Vec3;

/// One step of an Euler decomposition: a principal axis and an angle in the
/// workspace's clockwise-positive convention.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRotation {
    /// Principal rotation axis (unit X, Y, or Z).
    pub axis: Vec3,
    /// Rotation angle, clockwise-positive.
    pub angle: f64,
}

/// 3×3 orthonormal rotation matrix, column-major storage.
///
/// Represents an accumulated orientation. Composition is matrix
/// multiplication; [`RotationMatrix::multiply`] applies the argument first
/// and `self` second. Construction from axis/angle uses Rodrigues' matrix
/// form with the workspace's clockwise-positive angle convention (the angle
/// is negated before trig evaluation).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    data: [f64; 9],
}

impl RotationMatrix {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Element at `(row, col)`.
    fn m(&self, row: usize, col: usize) -> f64 {
        self.data[col * 3 + row]
    }

    fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let mut data = [0.0; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                data[c * 3 + r] = *value;
            }
        }
        Self { data }
    }

    /// Builds the Rodrigues rotation matrix for `axis` and `theta`
    /// (clockwise-positive).
    ///
    /// The axis is normalized here. An (epsilon-)zero axis yields the
    /// identity so degenerate input cannot produce an undefined
    /// orientation.
    pub fn from_axis_angle(axis: &Vec3, theta: f64) -> Self {
        if axis.approx_zero() {
            return Self::identity();
        }
        let k = axis.normalize();
        let (sin, cos) = (-theta).sin_cos();
        let t = 1.0 - cos;
        let (x, y, z) = (k.x, k.y, k.z);
        Self::from_rows([
            [
                cos + x * x * t,
                x * y * t - z * sin,
                x * z * t + y * sin,
            ],
            [
                y * x * t + z * sin,
                cos + y * y * t,
                y * z * t - x * sin,
            ],
            [
                z * x * t - y * sin,
                z * y * t + x * sin,
                cos + z * z * t,
            ],
        ])
    }

    /// Matrix product `self · other`: the rotation equivalent to applying
    /// `other` first and `self` second. Non-commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut data = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.m(row, k) * other.m(k, col);
                }
                data[col * 3 + row] = sum;
            }
        }
        Self { data }
    }

    /// Applies the rotation to a vector.
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        Vec3::new(
            self.m(0, 0) * v.x + self.m(0, 1) * v.y + self.m(0, 2) * v.z,
            self.m(1, 0) * v.x + self.m(1, 1) * v.y + self.m(1, 2) * v.z,
            self.m(2, 0) * v.x + self.m(2, 1) * v.y + self.m(2, 2) * v.z,
        )
    }

    /// Transpose; for an orthonormal rotation matrix this is the inverse.
    pub fn transpose(&self) -> Self {
        Self::from_rows([
            [self.m(0, 0), self.m(1, 0), self.m(2, 0)],
            [self.m(0, 1), self.m(1, 1), self.m(2, 1)],
            [self.m(0, 2), self.m(1, 2), self.m(2, 2)],
        ])
    }

    /// Element-wise epsilon equality.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| crate::scalar::approx_eq(*a, *b))
    }

    /// Decomposes the orientation into an ordered list of principal-axis
    /// rotations (Euler ZYX form), in application order: X first, then Y,
    /// then Z. Angles use the same clockwise-positive convention as
    /// [`RotationMatrix::from_axis_angle`], so composing the returned steps
    /// in order reproduces this matrix.
    ///
    /// When the cosine of the middle (Y) angle is within epsilon of zero
    /// the decomposition is degenerate (gimbal lock) and admits infinitely
    /// many equivalent solutions; the canonical choice here zeroes the Z
    /// angle and returns at most two rotations. This is a documented design
    /// choice, not an approximation: the inherent ambiguity cannot be
    /// resolved, only pinned.
    pub fn decompose(&self) -> Vec<AxisRotation> {
        // Internal angles are counter-clockwise; negate on output.
        let cos_y = (self.m(0, 0) * self.m(0, 0) + self.m(1, 0) * self.m(1, 0)).sqrt();
        if cos_y <= EPSILON {
            // Gimbal lock: Y is ±π/2, Z pinned to zero.
            let y = (-self.m(2, 0)).atan2(cos_y);
            let x = if self.m(2, 0) < 0.0 {
                self.m(0, 1).atan2(self.m(0, 2))
            } else {
                (-self.m(0, 1)).atan2(-self.m(0, 2))
            };
            return vec![
                AxisRotation {
                    axis: Vec3::UNIT_X,
                    angle: -x,
                },
                AxisRotation {
                    axis: Vec3::UNIT_Y,
                    angle: -y,
                },
            ];
        }
        let x = self.m(2, 1).atan2(self.m(2, 2));
        let y = (-self.m(2, 0)).atan2(cos_y);
        let z = self.m(1, 0).atan2(self.m(0, 0));
        vec![
            AxisRotation {
                axis: Vec3::UNIT_X,
                angle: -x,
            },
            AxisRotation {
                axis: Vec3::UNIT_Y,
                angle: -y,
            },
            AxisRotation {
                axis: Vec3::UNIT_Z,
                angle: -z,
            },
        ]
    }

    /// Recomposes a matrix from decomposition steps, applying them in list
    /// order.
    pub fn compose(steps: &[AxisRotation]) -> Self {
        steps.iter().fold(Self::identity(), |acc, step| {
            Self::from_axis_angle(&step.axis, step.angle).multiply(&acc)
        })
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    #[test]
    fn matrix_matches_vector_rodrigues() {
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let v = Vec3::new(0.3, 0.7, -0.2);
        for theta in [0.0, 0.4, FRAC_PI_2, 2.8, -1.1] {
            let m = RotationMatrix::from_axis_angle(&axis, theta);
            assert!(m.transform(&v).approx_eq(&v.rotate_around(&axis, theta)));
        }
    }

    #[test]
    fn multiply_applies_argument_first() {
        let a = RotationMatrix::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_3);
        let b = RotationMatrix::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_4);
        let v = Vec3::new(0.2, -0.5, 0.9);
        let chained = a.transform(&b.transform(&v));
        assert!(a.multiply(&b).transform(&v).approx_eq(&chained));
    }

    #[test]
    fn transpose_inverts() {
        let m = RotationMatrix::from_axis_angle(&Vec3::new(1.0, 1.0, 1.0), 1.3);
        assert!(m.multiply(&m.transpose()).approx_eq(&RotationMatrix::identity()));
    }

    #[test]
    fn zero_axis_yields_identity() {
        let m = RotationMatrix::from_axis_angle(&Vec3::ZERO, 1.0);
        assert!(m.approx_eq(&RotationMatrix::identity()));
    }

    #[test]
    fn decompose_recomposes_generic_orientation() {
        let m = RotationMatrix::from_axis_angle(&Vec3::UNIT_Z, FRAC_PI_6)
            .multiply(&RotationMatrix::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_4))
            .multiply(&RotationMatrix::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_3));
        let steps = m.decompose();
        assert_eq!(steps.len(), 3);
        assert!(RotationMatrix::compose(&steps).approx_eq(&m));
    }

    #[test]
    fn decompose_recomposes_arbitrary_axis() {
        let m = RotationMatrix::from_axis_angle(&Vec3::new(0.3, -0.8, 0.6), 2.1);
        assert!(RotationMatrix::compose(&m.decompose()).approx_eq(&m));
    }

    #[test]
    fn gimbal_lock_returns_two_steps_with_z_pinned() {
        // Middle angle at ±π/2 collapses X and Z into one degree of
        // freedom; the canonical branch zeroes Z.
        let m = RotationMatrix::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2)
            .multiply(&RotationMatrix::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_6));
        let steps = m.decompose();
        assert_eq!(steps.len(), 2);
        assert!(steps[0].axis.approx_eq(&Vec3::UNIT_X));
        assert!(steps[1].axis.approx_eq(&Vec3::UNIT_Y));
        assert!(RotationMatrix::compose(&steps).approx_eq(&m));
    }
}
