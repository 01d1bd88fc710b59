// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rotation axes, their layer separators, and shell selection intervals.
use twist_geom::{Plane, Vec3};

use crate::error::ConstructionError;

/// Directed line through the puzzle center around which layers rotate.
///
/// The layer separators partition blocks into rotatable concentric shells
/// along the axis, ordered outermost-first: separator 0 bounds the outer
/// shell, separator 1 the next shell inward, and so on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationAxis {
    id: String,
    direction: Vec3,
    layer_separators: Vec<Plane>,
}

impl RotationAxis {
    /// Creates an axis from its id, direction, and separator planes.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] for an empty id,
    /// [`ConstructionError::DegenerateDirection`] for a zero direction,
    /// [`ConstructionError::MissingSeparators`] when no separator is given.
    pub fn new(
        id: impl Into<String>,
        direction: Vec3,
        layer_separators: Vec<Plane>,
    ) -> Result<Self, ConstructionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConstructionError::EmptyId);
        }
        if direction.approx_zero() {
            return Err(ConstructionError::DegenerateDirection(id));
        }
        if layer_separators.is_empty() {
            return Err(ConstructionError::MissingSeparators(id));
        }
        Ok(Self {
            id,
            direction,
            layer_separators,
        })
    }

    /// The axis id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The (non-zero) axis direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// All layer separators, outermost-first.
    pub fn separators(&self) -> &[Plane] {
        &self.layer_separators
    }

    /// The separator at `index`, or `None` when the axis has fewer shells.
    pub fn separator(&self, index: usize) -> Option<&Plane> {
        self.layer_separators.get(index)
    }
}

/// Which shell(s) of an axis a rotation affects.
///
/// Blocks are selected when strictly above separator `above`; when `below`
/// is set, blocks strictly above separator `below` are excluded again,
/// leaving the band between the two planes. A single index (no `below`)
/// selects a single outer shell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerInterval {
    /// Index of the separator the selection must be strictly above.
    pub above: usize,
    /// Optional index of a separator the selection must not be above.
    pub below: Option<usize>,
}

impl LayerInterval {
    /// The outermost shell: everything above separator 0.
    pub const fn outer() -> Self {
        Self {
            above: 0,
            below: None,
        }
    }

    /// The single shell above separator `index`.
    pub const fn single(index: usize) -> Self {
        Self {
            above: index,
            below: None,
        }
    }

    /// The band above separator `above` but not above separator `below`.
    pub const fn between(above: usize, below: usize) -> Self {
        Self {
            above,
            below: Some(below),
        }
    }
}

impl Default for LayerInterval {
    fn default() -> Self {
        Self::outer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_guards() {
        let sep = Plane::new(Vec3::UNIT_Z, -0.5).unwrap();
        assert_eq!(
            RotationAxis::new("", Vec3::UNIT_Z, vec![sep]),
            Err(ConstructionError::EmptyId)
        );
        assert_eq!(
            RotationAxis::new("U", Vec3::ZERO, vec![sep]),
            Err(ConstructionError::DegenerateDirection("U".into()))
        );
        assert_eq!(
            RotationAxis::new("U", Vec3::UNIT_Z, vec![]),
            Err(ConstructionError::MissingSeparators("U".into()))
        );
    }

    #[test]
    fn separator_lookup() {
        let outer = Plane::new(Vec3::UNIT_Z, -0.5).unwrap();
        let inner = Plane::new(Vec3::UNIT_Z, 0.5).unwrap();
        let axis = RotationAxis::new("U", Vec3::UNIT_Z, vec![outer, inner]).unwrap();
        assert!(axis.separator(0).unwrap().approx_eq(&outer));
        assert!(axis.separator(1).unwrap().approx_eq(&inner));
        assert!(axis.separator(2).is_none());
    }
}
