//! # Block Side Module
//!
//! This module defines the six faces of a voxel block together with the
//! unit-cube corner layout each face uses when it is emitted into a mesh.

/// Represents the six faces of a voxel block.
///
/// The variant order is the order faces are emitted for a voxel during a
/// mesh pass: [TOP, BOTTOM, FRONT, RIGHT, BACK, LEFT].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y).
    TOP = 0,

    /// The bottom face (facing negative Y).
    BOTTOM = 1,

    /// The front face (facing negative Z).
    FRONT = 2,

    /// The right face (facing positive X).
    RIGHT = 3,

    /// The back face (facing positive Z).
    BACK = 4,

    /// The left face (facing negative X).
    LEFT = 5,
}

impl BlockSide {
    /// Returns all six faces in emission order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::RIGHT,
            BlockSide::BACK,
            BlockSide::LEFT,
        ]
    }

    /// Returns the four corners of this face on a unit cube whose local
    /// origin is the voxel's minimum corner.
    ///
    /// The corners are listed in the fixed emission order `v0..v3`; two
    /// triangles `(v0, v1, v2)` and `(v0, v2, v3)` cover the quad, and the
    /// resulting face normal points out of the cube.
    pub const fn corners(self) -> [[f32; 3]; 4] {
        match self {
            BlockSide::TOP => [
                [0.0, 1.0, 0.0],
                [0.0, 1.0, 1.0],
                [1.0, 1.0, 1.0],
                [1.0, 1.0, 0.0],
            ],
            BlockSide::BOTTOM => [
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0],
            ],
            BlockSide::FRONT => [
                [0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
            ],
            BlockSide::RIGHT => [
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [1.0, 1.0, 1.0],
                [1.0, 0.0, 1.0],
            ],
            BlockSide::BACK => [
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [0.0, 1.0, 1.0],
                [0.0, 0.0, 1.0],
            ],
            BlockSide::LEFT => [
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
            ],
        }
    }

    /// Returns the outward unit normal of this face.
    pub const fn normal(self) -> [f32; 3] {
        match self {
            BlockSide::TOP => [0.0, 1.0, 0.0],
            BlockSide::BOTTOM => [0.0, -1.0, 0.0],
            BlockSide::FRONT => [0.0, 0.0, -1.0],
            BlockSide::RIGHT => [1.0, 0.0, 0.0],
            BlockSide::BACK => [0.0, 0.0, 1.0],
            BlockSide::LEFT => [-1.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector3};

    #[test]
    fn corner_winding_matches_outward_normal() {
        for side in BlockSide::all() {
            let c = side.corners();
            let a = Vector3::from(c[0]);
            let b = Vector3::from(c[1]);
            let d = Vector3::from(c[2]);
            let cross = (b - a).cross(d - a).normalize();
            let expected = Vector3::from(side.normal());
            assert!(
                (cross - expected).magnitude() < 1e-6,
                "side {:?} winds the wrong way",
                side
            );
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            let normal = side.normal();
            let axis = normal
                .iter()
                .position(|component| component.abs() > 0.0)
                .unwrap();
            let plane = if normal[axis] > 0.0 { 1.0 } else { 0.0 };
            for corner in side.corners() {
                assert_eq!(corner[axis], plane);
            }
        }
    }
}
