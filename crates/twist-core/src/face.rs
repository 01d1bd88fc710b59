// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Face value types: per-block faces and whole-puzzle faces.
use twist_geom::{Plane, SphericalVec, Vec3};

use crate::error::ConstructionError;

/// Labelled direction on a block, relative to the block's own center.
///
/// The declared direction never changes; only the owning block's
/// orientation does. Stored as a canonical spherical direction so two faces
/// declared with equivalent angle pairs compare equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockFace {
    id: String,
    direction: SphericalVec,
}

impl BlockFace {
    /// Creates a face from its id and relative direction.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] when `id` is empty.
    pub fn new(id: impl Into<String>, direction: SphericalVec) -> Result<Self, ConstructionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConstructionError::EmptyId);
        }
        Ok(Self { id, direction })
    }

    /// Creates a face from a cartesian relative direction.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] for an empty id,
    /// [`ConstructionError::DegenerateDirection`] for a zero direction.
    pub fn from_cartesian(
        id: impl Into<String>,
        direction: Vec3,
    ) -> Result<Self, ConstructionError> {
        let id = id.into();
        if direction.approx_zero() {
            return Err(ConstructionError::DegenerateDirection(id));
        }
        Self::new(id, direction.to_spherical())
    }

    /// The face id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared direction relative to the block center.
    pub fn direction(&self) -> SphericalVec {
        self.direction
    }

    /// The declared direction as a cartesian unit vector.
    pub fn direction_vector(&self) -> Vec3 {
        self.direction.to_cartesian()
    }
}

/// A whole-puzzle face: an id plus the plane that defines it.
///
/// Constructed by external definition loaders and handed to the core; used
/// by accessors to answer "which blocks sit on this side".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreFace {
    id: String,
    plane: Plane,
}

impl CoreFace {
    /// Creates a core face from its id and defining plane.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] when `id` is empty.
    pub fn new(id: impl Into<String>, plane: Plane) -> Result<Self, ConstructionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConstructionError::EmptyId);
        }
        Ok(Self { id, plane })
    }

    /// The face id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The plane defining this face.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }
}
