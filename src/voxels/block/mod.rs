//! # Block Module
//!
//! This module provides the core block-related functionality for the mesher:
//! block type definitions, block face handling, the material tile atlas and
//! the compact per-voxel storage form.

use block_side::BlockSide;
use block_type::BlockType;
use tile::{Tile, TileUv, TILE_UVS};

pub mod block_side;
pub mod block_type;
pub mod tile;

/// The underlying integer type used to represent block types in memory.
/// This is what the chunk's dense voxel array actually stores.
pub type BlockTypeSize = u8;

/// Represents a single voxel cell in a chunk.
///
/// This is a lightweight structure that stores only the block type in its
/// compact form; face and texture data are looked up from the static
/// definition table.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute plus `bytemuck::Pod` keep the layout stable so
/// whole chunk arrays can be allocated zeroed (all air) and copied around as
/// raw bytes.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The empty cell. Zero-initialized storage reads as air.
    pub const AIR: Block = Block {
        block_type: BlockType::AIR as BlockTypeSize,
    };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Returns `true` if this cell holds air.
    #[inline]
    pub fn is_air(self) -> bool {
        self.block_type == BlockType::AIR as BlockTypeSize
    }

    /// Decodes the compact storage form back into a `BlockType`.
    ///
    /// # Panics
    /// Panics if the stored value doesn't correspond to a valid `BlockType`.
    pub fn get_block_type(self) -> BlockType {
        BlockType::get_block_type_from_int(self.block_type)
    }
}

/// The face definition of one solid block type: which tile each face uses
/// and the resolved UV quad for each of the three distinct face groups.
///
/// All four horizontal faces share `side` / `side_uv`; there is no
/// per-direction texture rotation.
#[derive(Copy, Clone, Debug)]
pub struct BlockFaces {
    /// Tile used by the top face.
    pub top: Tile,
    /// Tile shared by the four side faces.
    pub side: Tile,
    /// Tile used by the bottom face.
    pub bottom: Tile,
    /// Resolved UV quad for the top face.
    pub top_uv: TileUv,
    /// Resolved UV quad for the side faces.
    pub side_uv: TileUv,
    /// Resolved UV quad for the bottom face.
    pub bottom_uv: TileUv,
}

impl BlockFaces {
    /// Builds a definition with distinct top, side and bottom tiles.
    pub const fn new(top: Tile, side: Tile, bottom: Tile) -> Self {
        BlockFaces {
            top,
            side,
            bottom,
            top_uv: TILE_UVS[top as usize],
            side_uv: TILE_UVS[side as usize],
            bottom_uv: TILE_UVS[bottom as usize],
        }
    }

    /// Builds a definition that uses the same tile on every face.
    pub const fn uniform(tile: Tile) -> Self {
        BlockFaces::new(tile, tile, tile)
    }

    /// Looks up the face definition for a solid block type.
    ///
    /// Total over all non-air types. `AIR` carries no definition and must be
    /// filtered out by the caller; the mesher never passes it here.
    ///
    /// # Panics
    /// Panics if called with `BlockType::AIR`.
    pub fn of(block_type: BlockType) -> &'static BlockFaces {
        debug_assert!(!block_type.is_air(), "air blocks have no face definition");
        &BLOCK_FACES[block_type as usize - 1]
    }

    /// Returns the UV quad the given face of this block should sample.
    pub fn uv_for_side(&self, side: BlockSide) -> &TileUv {
        match side {
            BlockSide::TOP => &self.top_uv,
            BlockSide::BOTTOM => &self.bottom_uv,
            _ => &self.side_uv,
        }
    }
}

/// Maps each solid block type to its face definition.
///
/// Indexed by `BlockType` discriminant minus one (air has no entry). The
/// table is a compile-time constant, never rebuilt per lookup.
pub static BLOCK_FACES: [BlockFaces; block_type::NUM_SOLID_BLOCK_TYPES] = [
    BlockFaces::uniform(Tile::Dirt),                            // DIRT
    BlockFaces::new(Tile::Grass, Tile::GrassSide, Tile::Dirt),  // GRASS
    BlockFaces::uniform(Tile::Stone),                           // STONE
    BlockFaces::new(Tile::TreeCore, Tile::TreeSide, Tile::TreeCore), // TRUNK
    BlockFaces::uniform(Tile::Leaves),                          // LEAVES
];

#[cfg(test)]
mod tests {
    use super::*;

    const SOLID_TYPES: [BlockType; 5] = [
        BlockType::DIRT,
        BlockType::GRASS,
        BlockType::STONE,
        BlockType::TRUNK,
        BlockType::LEAVES,
    ];

    #[test]
    fn every_solid_type_has_consistent_uv_rectangles() {
        for btype in SOLID_TYPES {
            let faces = BlockFaces::of(btype);
            for uv in [faces.top_uv, faces.side_uv, faces.bottom_uv] {
                assert_eq!(uv.uv0[0], uv.uv1[0]);
                assert_eq!(uv.uv2[0], uv.uv3[0]);
                assert_eq!(uv.uv0[1], uv.uv3[1]);
                assert_eq!(uv.uv1[1], uv.uv2[1]);
                for corner in [uv.uv0, uv.uv1, uv.uv2, uv.uv3] {
                    assert!((0.0..=1.0).contains(&corner[0]));
                    assert!((0.0..=1.0).contains(&corner[1]));
                }
            }
        }
    }

    #[test]
    fn horizontal_faces_share_the_side_uv() {
        let faces = BlockFaces::of(BlockType::GRASS);
        for side in [
            BlockSide::FRONT,
            BlockSide::RIGHT,
            BlockSide::BACK,
            BlockSide::LEFT,
        ] {
            assert_eq!(*faces.uv_for_side(side), faces.side_uv);
        }
        assert_eq!(*faces.uv_for_side(BlockSide::TOP), faces.top_uv);
        assert_eq!(*faces.uv_for_side(BlockSide::BOTTOM), faces.bottom_uv);
    }

    #[test]
    fn grass_uses_dirt_underneath() {
        let faces = BlockFaces::of(BlockType::GRASS);
        assert_eq!(faces.bottom, Tile::Dirt);
        assert_eq!(faces.bottom_uv, Tile::Dirt.uv());
    }

    #[test]
    fn zeroed_block_is_air() {
        let block: Block = bytemuck::Zeroable::zeroed();
        assert!(block.is_air());
        assert_eq!(block, Block::AIR);
    }
}
