// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Planes in normal/offset form: half-space predicates and the line and
//! plane intersection queries built on them.
use crate::error::GeomError;
use crate::line::ParametricLine;
use crate::scalar::{approx_zero, EPSILON};
use crate::vec3::Vec3;

/// Axis index used by the plane–plane elimination cascade.
#[derive(Debug, Copy, Clone)]
enum FixedAxis {
    X,
    Y,
    Z,
}

/// Plane in implicit form: `normal · p + d = 0` for points `p` on the plane.
///
/// The normal is never zero (enforced at construction) and is not required
/// to be unit length; multiple `(normal, d)` pairs may denote the same
/// geometric plane. Use [`Plane::approx_eq`] for geometric equality and
/// [`Plane::is_parallel_to`] for orientation-only comparison.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    d: f64,
}

impl Plane {
    /// Creates a plane from its implicit-form coefficients.
    ///
    /// # Errors
    /// [`GeomError::DegenerateDirection`] when `normal` is (epsilon-)zero.
    pub fn new(normal: Vec3, d: f64) -> Result<Self, GeomError> {
        if normal.approx_zero() {
            return Err(GeomError::DegenerateDirection);
        }
        Ok(Self { normal, d })
    }

    /// Creates the plane through `point` with the given `normal`.
    ///
    /// # Errors
    /// [`GeomError::DegenerateDirection`] when `normal` is (epsilon-)zero.
    pub fn from_normal_and_point(normal: Vec3, point: &Vec3) -> Result<Self, GeomError> {
        let d = -normal.dot(point);
        Self::new(normal, d)
    }

    /// The (non-zero) plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// The scalar offset `d` of the implicit form.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Evaluates `normal · p + d`. Zero on the plane, positive strictly
    /// above (on the normal's side), negative below. Not normalized, so the
    /// magnitude is a distance scaled by `|normal|`.
    pub fn signed_distance_factor(&self, point: &Vec3) -> f64 {
        self.normal.dot(point) + self.d
    }

    /// Half-space test: `true` when `point` lies strictly above the plane.
    ///
    /// Boundary points are deliberately *not* above: layer-agnostic center
    /// blocks sit exactly on separator planes and must not silently rotate.
    pub fn is_above(&self, point: &Vec3) -> bool {
        self.signed_distance_factor(point) > EPSILON
    }

    /// Returns `true` when `point` lies on the plane within epsilon.
    pub fn contains(&self, point: &Vec3) -> bool {
        approx_zero(self.signed_distance_factor(point))
    }

    /// Returns `true` when the planes' normals are parallel (either sign).
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        let a = self.normal.normalize();
        let b = other.normal.normalize();
        a.approx_eq(&b) || a.approx_eq(&b.scale(-1.0))
    }

    /// Geometric equality: same orientation and same point set, regardless
    /// of how the `(normal, d)` pair is scaled or signed.
    pub fn approx_eq(&self, other: &Self) -> bool {
        let len_a = self.normal.length();
        let len_b = other.normal.length();
        let a = self.normal.scale(1.0 / len_a);
        let b = other.normal.scale(1.0 / len_b);
        let da = self.d / len_a;
        let db = other.d / len_b;
        (a.approx_eq(&b) && crate::scalar::approx_eq(da, db))
            || (a.approx_eq(&b.scale(-1.0)) && crate::scalar::approx_eq(da, -db))
    }

    /// Intersects the plane with a parametric line.
    ///
    /// Solves `normal · (origin + t · direction) + d = 0` for `t`.
    ///
    /// # Errors
    /// [`GeomError::ParallelLinePlane`] when the line is parallel to the
    /// plane (zero denominator within epsilon).
    pub fn intersect_line(&self, line: &ParametricLine) -> Result<Vec3, GeomError> {
        let denominator = self.normal.dot(&line.direction());
        if approx_zero(denominator) {
            return Err(GeomError::ParallelLinePlane);
        }
        let t = -self.signed_distance_factor(&line.origin()) / denominator;
        Ok(line.point_at(t))
    }

    /// Intersects two planes into a parametric line.
    ///
    /// The direction is the cross product of the normals. A point on the
    /// line is found by fixing one coordinate to zero and solving the
    /// remaining 2×2 system by Gaussian elimination; because any single
    /// elimination order can divide by zero depending on the planes'
    /// orientation, up to six orders are tried in sequence (each fixed
    /// coordinate with either equation leading) until one yields non-zero
    /// divisors.
    ///
    /// # Errors
    /// - [`GeomError::ParallelPlanes`] when the normals are parallel.
    /// - [`GeomError::EliminationExhausted`] when every elimination order
    ///   degenerates; treated as a missing case to add, not a true
    ///   geometric impossibility.
    pub fn intersect_plane(&self, other: &Self) -> Result<ParametricLine, GeomError> {
        let direction = self.normal.cross(&other.normal);
        if direction.approx_zero() {
            return Err(GeomError::ParallelPlanes);
        }
        const ORDERS: [(FixedAxis, bool); 6] = [
            (FixedAxis::Z, true),
            (FixedAxis::Z, false),
            (FixedAxis::Y, true),
            (FixedAxis::Y, false),
            (FixedAxis::X, true),
            (FixedAxis::X, false),
        ];
        for (fixed, lead_with_self) in ORDERS {
            if let Some(point) = self.eliminate(other, fixed, lead_with_self) {
                return ParametricLine::new(point, direction);
            }
        }
        Err(GeomError::EliminationExhausted)
    }

    /// One elimination attempt: fix `fixed` to zero and solve the remaining
    /// two coordinates from the two plane equations, leading with either
    /// this plane's equation or the other's. Returns `None` when a divisor
    /// is (epsilon-)zero.
    fn eliminate(&self, other: &Self, fixed: FixedAxis, lead_with_self: bool) -> Option<Vec3> {
        // Reduce both equations to `a·u + b·v = e` in the free coordinates.
        let coefficients = |plane: &Self| match fixed {
            FixedAxis::X => (plane.normal.y, plane.normal.z, -plane.d),
            FixedAxis::Y => (plane.normal.x, plane.normal.z, -plane.d),
            FixedAxis::Z => (plane.normal.x, plane.normal.y, -plane.d),
        };
        let (first, second) = if lead_with_self {
            (coefficients(self), coefficients(other))
        } else {
            (coefficients(other), coefficients(self))
        };
        let (a1, b1, e1) = first;
        let (a2, b2, e2) = second;
        if approx_zero(a1) {
            return None;
        }
        let pivot = b2 - a2 * b1 / a1;
        if approx_zero(pivot) {
            return None;
        }
        let v = (e2 - a2 * e1 / a1) / pivot;
        let u = (e1 - b1 * v) / a1;
        Some(match fixed {
            FixedAxis::X => Vec3::new(0.0, u, v),
            FixedAxis::Y => Vec3::new(u, 0.0, v),
            FixedAxis::Z => Vec3::new(u, v, 0.0),
        })
    }
}
