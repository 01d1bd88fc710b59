// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! twist-core: the structural rotation model sitting on the twist-geom
//! kernel.
//!
//! A puzzle is a rigid-body assembly: a fixed center, movable [`Block`]s
//! each carrying labelled [`BlockFace`]s, [`RotationAxis`] definitions with
//! layer-separator planes, and optional [`Bandage`] groups of blocks bonded
//! to move as one unit. [`RotationCore`] owns the assembly and is the only
//! mutator: it selects blocks by half-space test, consults the registered
//! [`RotationValidator`]s, and composes each selected block's orientation.
//!
//! External collaborators (move-notation parsers, definition loaders, mesh
//! materialization, presentation) construct the value types and hand them to
//! [`RotationCore::new`]; their formats are out of this crate's scope.
//!
//! Concurrency: single-threaded by design. `rotate_around` is a non-atomic
//! select-then-mutate over a batch of blocks; callers needing concurrent
//! access must synchronize externally.

pub mod axis;
pub mod block;
pub mod error;
pub mod face;
pub mod rotation_core;
pub mod topology;
pub mod validator;

pub use axis::{LayerInterval, RotationAxis};
pub use block::Block;
pub use rotation_core::RotationCore;
pub use error::{ConstructionError, RotationError};
pub use face::{BlockFace, CoreFace};
pub use topology::{AngularTopologyBuilder, TopologyBuilder};
pub use validator::{Bandage, BandageValidator, RotationValidator};
