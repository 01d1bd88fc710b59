// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Movable puzzle pieces and their accumulated orientation.
use std::collections::BTreeMap;

use tracing::trace;
use twist_geom::{RotationMatrix, Vec3};

use crate::error::ConstructionError;
use crate::face::BlockFace;

/// Rigid, independently rotatable piece of the puzzle.
///
/// * `initial_position` (the direction from the puzzle center) is immutable
///   for the block's lifetime.
/// * The orientation is an accumulated [`RotationMatrix`], starting at
///   identity and only ever composed in place — never recomputed from
///   scratch. Each rotation is an O(1) matrix multiply regardless of how
///   many moves preceded it.
/// * Faces are keyed (and therefore iterated) by id, making traversal
///   deterministic.
///
/// Blocks are created once at puzzle construction and never destroyed
/// during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: String,
    initial_position: Vec3,
    orientation: RotationMatrix,
    faces: BTreeMap<String, BlockFace>,
}

impl Block {
    /// Creates a block at `initial_position` carrying `faces`.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] for an empty block id,
    /// [`ConstructionError::DegenerateDirection`] for a zero position,
    /// [`ConstructionError::DuplicateId`] when two faces share an id.
    pub fn new(
        id: impl Into<String>,
        initial_position: Vec3,
        faces: Vec<BlockFace>,
    ) -> Result<Self, ConstructionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConstructionError::EmptyId);
        }
        if initial_position.approx_zero() {
            return Err(ConstructionError::DegenerateDirection(id));
        }
        let mut keyed = BTreeMap::new();
        for face in faces {
            let face_id = face.id().to_owned();
            if keyed.insert(face_id.clone(), face).is_some() {
                return Err(ConstructionError::DuplicateId(face_id));
            }
        }
        Ok(Self {
            id,
            initial_position,
            orientation: RotationMatrix::identity(),
            faces: keyed,
        })
    }

    /// The block id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The immutable initial position (direction from the puzzle center).
    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    /// The accumulated orientation.
    pub fn orientation(&self) -> &RotationMatrix {
        &self.orientation
    }

    /// Current world position: the orientation applied to the initial
    /// position.
    pub fn position(&self) -> Vec3 {
        self.orientation.transform(&self.initial_position)
    }

    /// Composes a rotation around `axis` by `theta` (clockwise-positive)
    /// onto the stored orientation.
    pub fn rotate_around(&mut self, axis: &Vec3, theta: f64) {
        self.orientation = RotationMatrix::from_axis_angle(axis, theta).multiply(&self.orientation);
        trace!(block = %self.id, "orientation composed");
    }

    /// Finds the face whose *rotated* direction matches `direction` within
    /// kernel tolerance; `None` when no face points that way.
    ///
    /// Callers routinely probe for faces that may not exist on a given
    /// block, so a miss is an absence, not an error. Matching uses the same
    /// epsilon as the vector kernel — a tighter tolerance causes false
    /// negatives after several chained rotations.
    pub fn face(&self, direction: &Vec3) -> Option<&BlockFace> {
        let wanted = direction.normalize();
        self.faces.values().find(|face| {
            self.orientation
                .transform(&face.direction_vector())
                .approx_eq(&wanted)
        })
    }

    /// Looks a face up by id.
    pub fn face_by_id(&self, id: &str) -> Option<&BlockFace> {
        self.faces.get(id)
    }

    /// Iterates over the faces in id order.
    pub fn faces(&self) -> impl Iterator<Item = &BlockFace> {
        self.faces.values()
    }

    /// Number of faces on this block.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
