//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a padded, row-major dense 3-D
//! array of block types plus the index math the mesher relies on.
//!
//! ## Padded Border
//!
//! The two horizontal axes carry one extra cell on each side, so the stored
//! grid is `(CHUNK_WIDTH + 2) x CHUNK_HEIGHT x (CHUNK_WIDTH + 2)`. The
//! renderable interior lives at `x, z in [1, CHUNK_WIDTH]`; the cells at
//! `0` and `CHUNK_WIDTH + 1` are border cells reserved for neighbor-chunk
//! data so boundary voxels can query "what is beyond my edge" without
//! bounds-checking. Default initialization leaves the border as air, which
//! means every voxel on the chunk's outer boundary renders its outward face.
//! The vertical axis is not padded: the top and bottom of the chunk are real
//! world boundaries.

use log::trace;

use super::block::{block_type::BlockType, Block};

/// Interior width of a chunk along the two horizontal axes, in voxels.
pub const CHUNK_WIDTH: usize = 16;
/// Height of a chunk, in voxels. The vertical axis carries no padding.
pub const CHUNK_HEIGHT: usize = 64;
/// Horizontal extent of the stored grid including the one-cell border.
pub const CHUNK_WIDTH_PADDED: usize = CHUNK_WIDTH + 2;
/// Total number of cells in the stored grid, border included.
pub const CHUNK_VOLUME_PADDED: usize = CHUNK_WIDTH_PADDED * CHUNK_HEIGHT * CHUNK_WIDTH_PADDED;

/// A padded, dense 3-D grid of voxels.
///
/// The chunk exclusively owns its block storage for its whole lifetime. It
/// is mutated externally (terrain generation and edits are out of scope
/// here) and read-only from the mesher's perspective; the caller is
/// responsible for sequencing edits against in-flight mesh passes.
pub struct Chunk {
    /// The block storage in row-major order; see [`Chunk::array_index`].
    blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a chunk whose every cell, border included, is air.
    pub fn empty() -> Self {
        Chunk {
            blocks: vec![Block::AIR; CHUNK_VOLUME_PADDED],
        }
    }

    /// Creates a chunk whose entire interior is dirt (for testing).
    #[allow(dead_code)]
    pub fn solid() -> Self {
        let mut chunk = Chunk::empty();
        for x in 1..=CHUNK_WIDTH {
            for y in 0..CHUNK_HEIGHT {
                for z in 1..=CHUNK_WIDTH {
                    chunk.set(x, y, z, BlockType::DIRT);
                }
            }
        }
        chunk
    }

    /// Creates a chunk with sparse random solid blocks (for testing and the
    /// demo).
    pub fn random() -> Self {
        let sparseness = 0.9;

        let mut chunk = Chunk::empty();
        for x in 1..=CHUNK_WIDTH {
            for y in 0..CHUNK_HEIGHT {
                for z in 1..=CHUNK_WIDTH {
                    if fastrand::f64() >= sparseness {
                        chunk.set(x, y, z, BlockType::get_random_type());
                    }
                }
            }
        }
        chunk
    }

    /// Creates a chunk with flat layered terrain: stone at depth, a few
    /// layers of dirt, grass on top.
    ///
    /// # Arguments
    /// * `surface_height` - Number of solid layers, clamped to the chunk
    ///   height.
    pub fn flat(surface_height: usize) -> Self {
        let surface_height = surface_height.min(CHUNK_HEIGHT);

        let mut chunk = Chunk::empty();
        for x in 1..=CHUNK_WIDTH {
            for z in 1..=CHUNK_WIDTH {
                for y in 0..surface_height {
                    let btype = if y + 1 == surface_height {
                        BlockType::GRASS
                    } else if y + 4 >= surface_height {
                        BlockType::DIRT
                    } else {
                        BlockType::STONE
                    };
                    chunk.set(x, y, z, btype);
                }
            }
        }

        trace!("filled flat chunk, surface height {}", surface_height);
        chunk
    }

    /// Computes the linear offset of the cell at (x, y, z).
    ///
    /// Row-major layout: `x * CHUNK_HEIGHT * CHUNK_WIDTH_PADDED +
    /// y * CHUNK_WIDTH_PADDED + z`. The z axis has stride 1, so iterating z
    /// innermost walks the storage sequentially.
    #[inline]
    pub const fn array_index(x: usize, y: usize, z: usize) -> usize {
        x * CHUNK_HEIGHT * CHUNK_WIDTH_PADDED + y * CHUNK_WIDTH_PADDED + z
    }

    /// Reads the cell at (x, y, z), border cells included.
    ///
    /// Valid for `x, z in [0, CHUNK_WIDTH + 1]` and `y in [0, CHUNK_HEIGHT)`;
    /// anything outside is a programming error and panics.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Block {
        debug_assert!(x < CHUNK_WIDTH_PADDED && y < CHUNK_HEIGHT && z < CHUNK_WIDTH_PADDED);
        self.blocks[Self::array_index(x, y, z)]
    }

    /// Writes the cell at (x, y, z), border cells included.
    ///
    /// Border writes are accepted so an embedding application can mirror
    /// neighbor-chunk data into the padding; nothing in this crate does.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, block_type: BlockType) {
        debug_assert!(x < CHUNK_WIDTH_PADDED && y < CHUNK_HEIGHT && z < CHUNK_WIDTH_PADDED);
        self.blocks[Self::array_index(x, y, z)] = Block::new(block_type);
    }
}
