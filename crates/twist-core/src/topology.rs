// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Canonical, rotation-invariant structural ids.
//!
//! Two blocks occupying symmetric roles in the structure (say, the eight
//! corners of a cube) must produce the same id, and the id must not change
//! when the *entire* structure is rotated. External state-classification
//! tooling keys on these strings.
use core::f64::consts::FRAC_PI_2;

use twist_geom::{CircularOrder, Plane, Vec3};

use crate::block::Block;
use crate::rotation_core::RotationCore;
use crate::validator::BandageValidator;

/// Produces a canonical structural id per block.
pub trait TopologyBuilder {
    /// The topology id of `block`.
    fn topologic_id(&self, block: &Block) -> String;
}

/// Angle-sequence topology builder.
///
/// The id is built from angles measured in the block's *own* reference
/// frame — the plane through the puzzle center perpendicular to the block's
/// initial position — which is what makes it invariant under whole-structure
/// rotation rather than dependent on any particular orientation:
///
/// 1. Face directions are sorted counter-clockwise around that plane.
/// 2. An alternating sequence of (face tilt out of the plane, angular gap
///    to the next face in cyclic order) is collected.
/// 3. Each angle is stringified as `round(angle × 100)`, coarse enough to
///    absorb floating-point noise while preserving discriminating
///    precision.
/// 4. The cyclic sequence is canonicalized to its lexicographically
///    smallest pair-aligned rotation, since the comparator's starting face
///    depends on the projection frame and is not itself rotation-invariant.
/// 5. Blocks bonded into a bandage get a composite id: each extension's
///    base id is appended, prefixed by the extension's angular offset from
///    the principal block, under a distinct delimiter.
#[derive(Debug, Clone, Copy)]
pub struct AngularTopologyBuilder<'a> {
    core: &'a RotationCore,
    bandages: Option<&'a BandageValidator>,
}

impl<'a> AngularTopologyBuilder<'a> {
    /// Creates a builder over `core` without bandage awareness.
    pub fn new(core: &'a RotationCore) -> Self {
        Self {
            core,
            bandages: None,
        }
    }

    /// Enables composite ids for the bonded groups of `bandages`.
    #[must_use]
    pub fn with_bandages(mut self, bandages: &'a BandageValidator) -> Self {
        self.bandages = Some(bandages);
        self
    }

    /// The base (single-block) id: the canonicalized angle sequence.
    fn base_id(block: &Block) -> String {
        let Ok(reference) = Plane::new(block.initial_position(), 0.0) else {
            // Block construction rejects zero positions; unreachable.
            return String::new();
        };
        let mut directions: Vec<Vec3> = block.faces().map(|f| f.direction_vector()).collect();
        if directions.is_empty() {
            return String::new();
        }
        let order = CircularOrder::around(&reference);
        order.sort_ccw(&mut directions);

        let normal = reference.normal();
        let pairs: Vec<(i64, i64)> = directions
            .iter()
            .enumerate()
            .map(|(i, direction)| {
                let next = &directions[(i + 1) % directions.len()];
                let tilt = FRAC_PI_2 - direction.angle_to(&normal);
                let gap = direction.angle_to(next);
                (round_angle(tilt), round_angle(gap))
            })
            .collect();

        canonical_cycle(&pairs)
            .iter()
            .flat_map(|(tilt, gap)| [tilt.to_string(), gap.to_string()])
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Rounds an angle to the id's integer resolution.
///
/// Inputs are tilts and gaps bounded by ±2π, so the scaled value stays
/// within a few hundred and the cast cannot truncate.
#[allow(clippy::cast_possible_truncation)]
fn round_angle(angle: f64) -> i64 {
    // `-0.0` must stringify like `0`.
    let rounded = (angle * 100.0).round();
    if rounded == 0.0 {
        0
    } else {
        rounded as i64
    }
}

/// Lexicographically smallest rotation of a cyclic pair sequence.
fn canonical_cycle(pairs: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let n = pairs.len();
    let mut best: Option<Vec<(i64, i64)>> = None;
    for start in 0..n {
        let rotated: Vec<(i64, i64)> = (0..n).map(|i| pairs[(start + i) % n]).collect();
        if best.as_ref().map_or(true, |current| rotated < *current) {
            best = Some(rotated);
        }
    }
    best.unwrap_or_default()
}

impl TopologyBuilder for AngularTopologyBuilder<'_> {
    fn topologic_id(&self, block: &Block) -> String {
        let base = Self::base_id(block);
        let Some(group) = self
            .bandages
            .and_then(|validator| validator.group_for(block.id()))
        else {
            return base;
        };
        let Some(principal) = self.core.block(group.principal()) else {
            return base;
        };
        let mut parts: Vec<String> = group
            .extensions()
            .iter()
            .filter_map(|extension_id| {
                let extension = self.core.block(extension_id)?;
                let offset = principal
                    .initial_position()
                    .angle_to(&extension.initial_position());
                Some(format!("{}>{}", round_angle(offset), Self::base_id(extension)))
            })
            .collect();
        parts.sort();
        let mut id = base;
        for part in parts {
            id.push('|');
            id.push_str(&part);
        }
        id
    }
}
