// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error surface of the rotation core.
//!
//! Two distinct taxonomies: [`ConstructionError`] marks caller bugs caught
//! while assembling the structure and is never recovered internally;
//! [`RotationError::Rejected`] is an expected outcome ("move not allowed"),
//! not a bug, and callers surface it rather than crash on it.
use thiserror::Error;

/// Invalid structural definition, raised at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A block, axis, face, or bandage id was empty.
    #[error("empty identifier")]
    EmptyId,
    /// Two entities of the same kind share an id, or a block belongs to
    /// more than one bandage.
    #[error("duplicate identifier `{0}`")]
    DuplicateId(String),
    /// A direction vector (block position, axis direction, face direction)
    /// was (epsilon-)zero.
    #[error("zero-length direction for `{0}`")]
    DegenerateDirection(String),
    /// A rotation axis was declared without layer-separator planes.
    #[error("rotation axis `{0}` has no layer separators")]
    MissingSeparators(String),
}

/// Failure of a rotation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// No axis with the requested id is registered.
    #[error("unknown rotation axis `{0}`")]
    UnknownAxis(String),
    /// The layer interval referenced a separator index the axis does not
    /// have.
    #[error("axis `{axis}` has no layer separator {layer}")]
    UnknownLayer {
        /// The axis the request named.
        axis: String,
        /// The separator index that was out of range.
        layer: usize,
    },
    /// A registered validator refused the selected block set. The structure
    /// is left untouched; no partial rotation is ever applied.
    #[error("rotation around `{0}` rejected by a validator")]
    Rejected(String),
}
