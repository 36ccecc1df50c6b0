//! # Block Type Module
//!
//! This module defines the different types of blocks a voxel grid can hold.
//! It provides functionality for block type identification, conversion from
//! the compact storage form, and random generation.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct type of block. The `FromPrimitive`
/// derive allows conversion from the compact integer storage form used by
/// the chunk array.
///
/// `AIR` is the empty cell: it has no face definition and is never rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and never rendered.
    AIR,

    /// A basic dirt block with the same texture on all faces.
    DIRT,

    /// A grass block with different textures on top, sides and bottom.
    GRASS,

    /// A plain stone block.
    STONE,

    /// A tree trunk: ring texture on top and bottom, bark on the sides.
    TRUNK,

    /// A leaf block with the same texture on all faces.
    LEAVES,
}

/// Number of block types that carry a face definition (everything but `AIR`).
pub const NUM_SOLID_BLOCK_TYPES: usize = 5;

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is used when reading the compact storage form out of a chunk's
    /// block array.
    ///
    /// # Panics
    /// Panics if the input value doesn't correspond to a valid `BlockType`.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Self {
        let btype_option = num::FromPrimitive::from_u8(btype as BlockTypeSize);
        btype_option.unwrap()
    }

    /// Generates a random solid block type (excluding `AIR`).
    ///
    /// This is primarily used for testing and demo chunk fills.
    pub fn get_random_type() -> Self {
        num::FromPrimitive::from_u8(fastrand::u8(1..=NUM_SOLID_BLOCK_TYPES as u8)).unwrap()
    }

    /// Returns `true` for `AIR`.
    pub fn is_air(self) -> bool {
        self == BlockType::AIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage_form() {
        for btype in [
            BlockType::AIR,
            BlockType::DIRT,
            BlockType::GRASS,
            BlockType::STONE,
            BlockType::TRUNK,
            BlockType::LEAVES,
        ] {
            assert_eq!(
                BlockType::get_block_type_from_int(btype as BlockTypeSize),
                btype
            );
        }
    }

    #[test]
    fn random_type_is_never_air() {
        for _ in 0..256 {
            assert!(!BlockType::get_random_type().is_air());
        }
    }
}
