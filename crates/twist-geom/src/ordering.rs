// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic counter-clockwise ordering of points around a plane.
//!
//! Points are projected into a plane-local 2D frame, the angle to the local
//! X axis is computed, and angles are realigned by the sign of the local Y
//! coordinate so the ordering never jumps across the X axis. The topology
//! builder uses this to sort face directions into a canonical cycle.
use core::cmp::Ordering;

use crate::plane::Plane;
use crate::scalar::clamp_unit;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Comparator producing a counter-clockwise order around a reference
/// plane's normal.
#[derive(Debug, Copy, Clone)]
pub struct CircularOrder {
    local_x: Vec3,
    local_y: Vec3,
}

impl CircularOrder {
    /// Builds the comparator for `plane`.
    ///
    /// World-axis-aligned normals get the matching coordinate-pair frame;
    /// any other normal gets a generic projection frame built from the
    /// world axis least aligned with it. Every frame satisfies
    /// `local_x × local_y = normal`, so "counter-clockwise" always means
    /// the same turning sense when looking down the normal; a left-handed
    /// frame would silently reverse the order for mirrored normals.
    pub fn around(plane: &Plane) -> Self {
        let normal = plane.normal().normalize();
        if normal.is_parallel_to(&Vec3::UNIT_X) {
            return Self {
                local_x: Vec3::UNIT_Y,
                local_y: Vec3::UNIT_Z.scale(normal.x.signum()),
            };
        }
        if normal.is_parallel_to(&Vec3::UNIT_Y) {
            return Self {
                local_x: Vec3::UNIT_Z,
                local_y: Vec3::UNIT_X.scale(normal.y.signum()),
            };
        }
        if normal.is_parallel_to(&Vec3::UNIT_Z) {
            return Self {
                local_x: Vec3::UNIT_X,
                local_y: Vec3::UNIT_Y.scale(normal.z.signum()),
            };
        }
        // Generic frame: cross with the least-aligned world axis, then
        // close the right-handed triple.
        let candidates = [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];
        let mut least = Vec3::UNIT_X;
        let mut least_alignment = f64::INFINITY;
        for axis in candidates {
            let alignment = normal.dot(&axis).abs();
            if alignment < least_alignment {
                least_alignment = alignment;
                least = axis;
            }
        }
        let local_x = normal.cross(&least).normalize();
        let local_y = normal.cross(&local_x).normalize();
        Self { local_x, local_y }
    }

    /// Projects a point into the plane-local 2D frame.
    pub fn project(&self, point: &Vec3) -> Vec2 {
        Vec2::new(point.dot(&self.local_x), point.dot(&self.local_y))
    }

    /// Angle of `point` around the normal, in `[0, 2π)`.
    ///
    /// The raw angle to the local X axis covers only `[0, π]`; points with
    /// a negative local Y are realigned to `2π − angle` so the full turn is
    /// ordered monotonically.
    pub fn angle_of(&self, point: &Vec3) -> f64 {
        let projected = self.project(point);
        if projected.approx_zero() {
            return 0.0;
        }
        let angle = clamp_unit(projected.x / projected.length()).acos();
        if projected.y < 0.0 {
            core::f64::consts::TAU - angle
        } else {
            angle
        }
    }

    /// Counter-clockwise comparison of two points.
    ///
    /// Identity fast paths short-circuit when the points coincide in 3D or
    /// after projection, avoiding angle-computation noise at the reference
    /// point itself.
    pub fn compare(&self, a: &Vec3, b: &Vec3) -> Ordering {
        if a.approx_eq(b) {
            return Ordering::Equal;
        }
        let pa = self.project(a);
        let pb = self.project(b);
        if pa.approx_eq(&pb) {
            return Ordering::Equal;
        }
        self.angle_of(a).total_cmp(&self.angle_of(b))
    }

    /// Sorts `points` counter-clockwise in place.
    pub fn sort_ccw(&self, points: &mut [Vec3]) {
        points.sort_by(|a, b| self.compare(a, b));
    }
}
