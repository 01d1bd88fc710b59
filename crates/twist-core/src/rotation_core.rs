// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The rotation orchestrator: layer selection, validation, and the only
//! mutation path through the structure.
use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::debug;
use twist_geom::{approx_zero, Plane, Vec3};

use crate::axis::{LayerInterval, RotationAxis};
use crate::block::Block;
use crate::error::{ConstructionError, RotationError};
use crate::face::CoreFace;
use crate::validator::RotationValidator;

/// Owner and single mutator of the puzzle structure.
///
/// The block collection is fixed for the lifetime of the core; only block
/// orientations mutate, and only through [`RotationCore::rotate_around`].
/// Axes and faces are keyed by id in `BTreeMap`s so every iteration the
/// core performs is deterministic.
#[derive(Debug)]
pub struct RotationCore {
    blocks: Vec<Block>,
    axes: BTreeMap<String, RotationAxis>,
    faces: BTreeMap<String, CoreFace>,
    validators: Vec<Box<dyn RotationValidator>>,
}

impl RotationCore {
    /// Assembles a core from blocks, axes, and faces built by an external
    /// definition loader.
    ///
    /// # Errors
    /// [`ConstructionError::DuplicateId`] when two blocks, two axes, or two
    /// faces share an id.
    pub fn new(
        blocks: Vec<Block>,
        axes: Vec<RotationAxis>,
        faces: Vec<CoreFace>,
    ) -> Result<Self, ConstructionError> {
        let mut seen = FxHashSet::default();
        for block in &blocks {
            if !seen.insert(block.id().to_owned()) {
                return Err(ConstructionError::DuplicateId(block.id().to_owned()));
            }
        }
        let mut axis_map = BTreeMap::new();
        for axis in axes {
            let id = axis.id().to_owned();
            if axis_map.insert(id.clone(), axis).is_some() {
                return Err(ConstructionError::DuplicateId(id));
            }
        }
        let mut face_map = BTreeMap::new();
        for face in faces {
            let id = face.id().to_owned();
            if face_map.insert(id.clone(), face).is_some() {
                return Err(ConstructionError::DuplicateId(id));
            }
        }
        Ok(Self {
            blocks,
            axes: axis_map,
            faces: face_map,
            validators: Vec::new(),
        })
    }

    /// Registers a rotation validator. Validators compose by logical AND:
    /// every registered validator must approve a selection before it moves.
    #[must_use]
    pub fn with_validator(mut self, validator: Box<dyn RotationValidator>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Rotates the blocks of one layer around an axis.
    ///
    /// Pipeline: resolve the axis and its separator plane(s) for the
    /// requested interval (default: outermost shell), select blocks whose
    /// *current* position is strictly above the separator (boundary blocks
    /// are layer-agnostic centers and must not silently rotate), ask every
    /// validator, then — only if all approve — compose the rotation onto
    /// each selected block. Blocks outside the selection are never touched;
    /// an epsilon-zero `theta` is a validated no-op.
    ///
    /// # Errors
    /// [`RotationError::UnknownAxis`], [`RotationError::UnknownLayer`], or
    /// [`RotationError::Rejected`]. On any error the structure is exactly
    /// as it was before the call.
    pub fn rotate_around(
        &mut self,
        axis_id: &str,
        theta: f64,
        interval: Option<LayerInterval>,
    ) -> Result<(), RotationError> {
        let axis = self
            .axes
            .get(axis_id)
            .ok_or_else(|| RotationError::UnknownAxis(axis_id.to_owned()))?;
        let interval = interval.unwrap_or_default();
        let selected = Self::select(&self.blocks, axis, interval)?;

        let selection: Vec<&Block> = selected.iter().map(|idx| &self.blocks[*idx]).collect();
        for validator in &self.validators {
            if !validator.can_rotate(axis, theta, &selection) {
                debug!(axis = %axis_id, theta, "rotation rejected by validator");
                return Err(RotationError::Rejected(axis_id.to_owned()));
            }
        }

        if approx_zero(theta) {
            debug!(axis = %axis_id, "zero-angle rotation is a no-op");
            return Ok(());
        }

        let direction = axis.direction();
        debug!(axis = %axis_id, theta, selected = selected.len(), "applying rotation");
        for idx in selected {
            self.blocks[idx].rotate_around(&direction, theta);
        }
        Ok(())
    }

    /// Non-mutating legality probe: `true` when [`Self::rotate_around`]
    /// with the same arguments would succeed. Unknown axes or layers probe
    /// as `false`.
    pub fn can_rotate_around(
        &self,
        axis_id: &str,
        theta: f64,
        interval: Option<LayerInterval>,
    ) -> bool {
        let Some(axis) = self.axes.get(axis_id) else {
            return false;
        };
        let Ok(selected) = Self::select(&self.blocks, axis, interval.unwrap_or_default()) else {
            return false;
        };
        let selection: Vec<&Block> = selected.iter().map(|idx| &self.blocks[*idx]).collect();
        self.validators
            .iter()
            .all(|validator| validator.can_rotate(axis, theta, &selection))
    }

    /// The blocks the given axis/interval pair would rotate, in block
    /// order. Exposed for validators, analyzers, and tests.
    ///
    /// # Errors
    /// [`RotationError::UnknownAxis`] or [`RotationError::UnknownLayer`].
    pub fn selection(
        &self,
        axis_id: &str,
        interval: LayerInterval,
    ) -> Result<Vec<&Block>, RotationError> {
        let axis = self
            .axes
            .get(axis_id)
            .ok_or_else(|| RotationError::UnknownAxis(axis_id.to_owned()))?;
        let selected = Self::select(&self.blocks, axis, interval)?;
        Ok(selected.iter().map(|idx| &self.blocks[*idx]).collect())
    }

    /// Half-space layer selection over current block positions.
    fn select(
        blocks: &[Block],
        axis: &RotationAxis,
        interval: LayerInterval,
    ) -> Result<Vec<usize>, RotationError> {
        let above = axis
            .separator(interval.above)
            .ok_or_else(|| RotationError::UnknownLayer {
                axis: axis.id().to_owned(),
                layer: interval.above,
            })?;
        let below: Option<&Plane> = match interval.below {
            Some(index) => Some(axis.separator(index).ok_or_else(|| {
                RotationError::UnknownLayer {
                    axis: axis.id().to_owned(),
                    layer: index,
                }
            })?),
            None => None,
        };
        Ok(blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| {
                let position = block.position();
                above.is_above(&position)
                    && below.map_or(true, |plane| !plane.is_above(&position))
            })
            .map(|(idx, _)| idx)
            .collect())
    }

    /// All blocks, in construction order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Looks an axis up by id.
    pub fn axis(&self, id: &str) -> Option<&RotationAxis> {
        self.axes.get(id)
    }

    /// Iterates over the axes in id order.
    pub fn axes(&self) -> impl Iterator<Item = &RotationAxis> {
        self.axes.values()
    }

    /// Looks a block up by id.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    /// The block whose *initial* position matches `position` within kernel
    /// tolerance.
    pub fn block_for_initial_position(&self, position: &Vec3) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|block| block.initial_position().approx_eq(position))
    }

    /// Looks a core face up by id.
    pub fn face(&self, id: &str) -> Option<&CoreFace> {
        self.faces.get(id)
    }

    /// Iterates over the faces in id order.
    pub fn faces(&self) -> impl Iterator<Item = &CoreFace> {
        self.faces.values()
    }

    /// Blocks currently sitting on the face's plane or above it (boundary
    /// inclusive — a face layer includes the blocks whose centers lie in
    /// its plane). Unknown face ids yield an empty set.
    pub fn blocks_for_face(&self, face_id: &str) -> Vec<&Block> {
        let Some(face) = self.faces.get(face_id) else {
            return Vec::new();
        };
        self.blocks
            .iter()
            .filter(|block| {
                let position = block.position();
                face.plane().is_above(&position) || face.plane().contains(&position)
            })
            .collect()
    }

    /// Blocks exposing a block face whose rotated direction matches
    /// `direction` within kernel tolerance.
    pub fn blocks_for_direction(&self, direction: &Vec3) -> Vec<&Block> {
        self.blocks
            .iter()
            .filter(|block| block.face(direction).is_some())
            .collect()
    }
}
