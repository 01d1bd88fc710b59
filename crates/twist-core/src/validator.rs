// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pluggable rotation legality checks.
//!
//! [`RotationCore`](crate::RotationCore) consults every registered
//! [`RotationValidator`] before mutating anything; validators compose by
//! logical AND, and a single refusal rejects the whole operation with no
//! partial effect.
use core::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::axis::RotationAxis;
use crate::block::Block;
use crate::error::ConstructionError;

/// Capability interface deciding whether a selected block set may rotate.
///
/// Implementors must be pure with respect to the structure: the decision may
/// depend only on the axis, angle, and selection passed in.
pub trait RotationValidator: fmt::Debug {
    /// Returns `true` when this exact selection may rotate around `axis` by
    /// `theta`.
    fn can_rotate(&self, axis: &RotationAxis, theta: f64, selection: &[&Block]) -> bool;
}

/// Group of blocks rigidly bonded to move only as one unit: a principal
/// block plus its extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bandage {
    principal: String,
    extensions: Vec<String>,
}

impl Bandage {
    /// Creates a bonded group.
    ///
    /// # Errors
    /// [`ConstructionError::EmptyId`] when the principal or any extension
    /// id is empty, [`ConstructionError::DuplicateId`] when a block id
    /// appears twice within the group.
    pub fn new(
        principal: impl Into<String>,
        extensions: Vec<String>,
    ) -> Result<Self, ConstructionError> {
        let principal = principal.into();
        if principal.is_empty() || extensions.iter().any(String::is_empty) {
            return Err(ConstructionError::EmptyId);
        }
        let mut seen = FxHashSet::default();
        seen.insert(principal.clone());
        for extension in &extensions {
            if !seen.insert(extension.clone()) {
                return Err(ConstructionError::DuplicateId(extension.clone()));
            }
        }
        Ok(Self {
            principal,
            extensions,
        })
    }

    /// The principal block id.
    pub fn principal(&self) -> &str {
        &self.principal
    }

    /// The extension block ids.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Iterates over every member id, principal first.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.principal.as_str()).chain(self.extensions.iter().map(String::as_str))
    }

    /// Returns `true` when `block_id` belongs to this group.
    pub fn contains(&self, block_id: &str) -> bool {
        self.members().any(|member| member == block_id)
    }
}

/// Validator enforcing that bonded groups rotate in their entirety or not
/// at all.
///
/// The check expands the selected id set by substituting, for every member
/// of a bandage, the full bonded group; the rotation is legal only when the
/// original selection equals that expansion exactly. A partial overlap —
/// some but not all members selected — is rejected.
#[derive(Debug, Clone)]
pub struct BandageValidator {
    bandages: Vec<Bandage>,
    index: FxHashMap<String, usize>,
}

impl BandageValidator {
    /// Creates the validator from bonded groups.
    ///
    /// # Errors
    /// [`ConstructionError::DuplicateId`] when a block id belongs to more
    /// than one group.
    pub fn new(bandages: Vec<Bandage>) -> Result<Self, ConstructionError> {
        let mut index = FxHashMap::default();
        for (slot, bandage) in bandages.iter().enumerate() {
            for member in bandage.members() {
                if index.insert(member.to_owned(), slot).is_some() {
                    return Err(ConstructionError::DuplicateId(member.to_owned()));
                }
            }
        }
        Ok(Self { bandages, index })
    }

    /// The group containing `block_id`, if any.
    pub fn group_for(&self, block_id: &str) -> Option<&Bandage> {
        self.index.get(block_id).map(|slot| &self.bandages[*slot])
    }

    /// All bonded groups.
    pub fn bandages(&self) -> &[Bandage] {
        &self.bandages
    }
}

impl RotationValidator for BandageValidator {
    fn can_rotate(&self, axis: &RotationAxis, _theta: f64, selection: &[&Block]) -> bool {
        let selected: FxHashSet<&str> = selection.iter().map(|block| block.id()).collect();
        let mut expanded: FxHashSet<&str> = FxHashSet::default();
        for id in &selected {
            match self.group_for(id) {
                Some(bandage) => expanded.extend(bandage.members()),
                None => {
                    expanded.insert(*id);
                }
            }
        }
        let legal = expanded == selected;
        if !legal {
            debug!(
                axis = %axis.id(),
                selected = selected.len(),
                expanded = expanded.len(),
                "bandage validator rejected partial group selection"
            );
        }
        legal
    }
}

/// Validator accepting everything; useful as an explicit "no constraints"
/// registration and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconstrained;

impl RotationValidator for Unconstrained {
    fn can_rotate(&self, _axis: &RotationAxis, _theta: f64, _selection: &[&Block]) -> bool {
        true
    }
}
