// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures: a small two-layer puzzle used across the core tests.
#![allow(dead_code)]

use twist_core::{Block, BlockFace, CoreFace, RotationAxis, RotationCore};
use twist_geom::{Plane, Vec3};

/// A corner block at `position` with one face per non-zero coordinate,
/// pointing along that coordinate's sign.
pub fn corner(id: &str, position: [f64; 3]) -> Block {
    let position = Vec3::from(position);
    let mut faces = Vec::new();
    for (axis, label) in [
        (Vec3::UNIT_X, "x"),
        (Vec3::UNIT_Y, "y"),
        (Vec3::UNIT_Z, "z"),
    ] {
        let component = position.dot(&axis);
        if component.abs() > 1e-9 {
            faces.push(
                BlockFace::from_cartesian(label, axis.scale(component.signum())).unwrap(),
            );
        }
    }
    Block::new(id, position, faces).unwrap()
}

/// Eight corner blocks at (±1, ±1, ±1).
pub fn eight_corners() -> Vec<Block> {
    let mut blocks = Vec::new();
    for (idx, (x, y, z)) in [
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, -1.0),
        (1.0, -1.0, -1.0),
    ]
    .into_iter()
    .enumerate()
    {
        blocks.push(corner(&format!("c{idx}"), [x, y, z]));
    }
    blocks
}

/// The up axis: +Z with a single separator above the equator.
pub fn up_axis() -> RotationAxis {
    let separator = Plane::new(Vec3::UNIT_Z, -0.5).unwrap();
    RotationAxis::new("U", Vec3::UNIT_Z, vec![separator]).unwrap()
}

/// The right axis: +X with a single separator.
pub fn right_axis() -> RotationAxis {
    let separator = Plane::new(Vec3::UNIT_X, -0.5).unwrap();
    RotationAxis::new("R", Vec3::UNIT_X, vec![separator]).unwrap()
}

/// A two-layer core: eight corners, U and R axes, and the "up" core face
/// at z = 1.
pub fn two_layer_core() -> RotationCore {
    let up_face = CoreFace::new("up", Plane::new(Vec3::UNIT_Z, -1.0).unwrap()).unwrap();
    RotationCore::new(eight_corners(), vec![up_axis(), right_axis()], vec![up_face]).unwrap()
}

/// Ids of the given blocks, sorted.
pub fn ids(blocks: &[&Block]) -> Vec<String> {
    let mut ids: Vec<String> = blocks.iter().map(|b| b.id().to_owned()).collect();
    ids.sort();
    ids
}
