// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error surface of the geometry kernel.
use thiserror::Error;

/// Failures raised by geometric constructions and queries.
///
/// Degenerate-direction errors are caller bugs surfaced at construction;
/// the intersection variants are recoverable geometric impossibilities that
/// callers routinely catch and skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A zero-length vector was supplied where a direction is required
    /// (axis, plane normal, line direction, face direction).
    #[error("zero-length vector is not a valid direction")]
    DegenerateDirection,
    /// Line and plane are parallel; no intersection point exists.
    #[error("line is parallel to plane")]
    ParallelLinePlane,
    /// The planes are parallel; no intersection line exists.
    #[error("planes are parallel")]
    ParallelPlanes,
    /// Every coordinate-pair elimination order hit a zero divisor while
    /// intersecting two planes. Signals a missing elimination case, not a
    /// true geometric impossibility.
    #[error("plane intersection: all elimination orders degenerate")]
    EliminationExhausted,
}
