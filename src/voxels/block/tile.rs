//! # Tile Module
//!
//! This module maps material tile identifiers to texture coordinates inside
//! the atlas. The atlas is a single image subdivided into a fixed 16x16 grid
//! of equally sized tiles, addressed by (column, row).
//!
//! Every `Tile` resolves to exactly one `TileUv`, computed deterministically
//! from its grid position at compile time. There is no failure path: lookups
//! outside the table fall back to the tile at (0, 0).

/// Number of tiles along each axis of the texture atlas.
pub const ATLAS_GRID_SIZE: f32 = 16.0;

/// Inward inset applied to every tile edge, in UV units.
///
/// Sampling exactly on a tile border bleeds into the neighboring tile under
/// linear filtering, so each quad is shrunk by this amount on all sides.
pub const TILE_UV_INSET: f32 = 0.001;

/// Identifies one texture tile inside the atlas.
///
/// This is a closed set, fixed at compile time. The discriminant doubles as
/// the index into [`TILE_UVS`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Plain dirt, also the fallback tile at atlas position (0, 0).
    Dirt,
    /// Grass as seen from above.
    Grass,
    /// Grass-over-dirt transition used for the sides of grass blocks.
    GrassSide,
    /// Plain stone.
    Stone,
    /// Bark texture for the sides of tree trunks.
    TreeSide,
    /// Ring cross-section for the top and bottom of tree trunks.
    TreeCore,
    /// Leaf texture.
    Leaves,
}

/// Texture coordinates of one atlas tile, as a quad of four UV corners.
///
/// The ordering is fixed and matches the vertex winding used by the mesher:
/// `uv0 = (u, v)`, `uv1 = (u, v')`, `uv2 = (u', v')`, `uv3 = (u', v)` where
/// `u < u'` and `v < v'` — a counter-clockwise quad in (u, v) space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TileUv {
    /// Corner at (u, v).
    pub uv0: [f32; 2],
    /// Corner at (u, v').
    pub uv1: [f32; 2],
    /// Corner at (u', v').
    pub uv2: [f32; 2],
    /// Corner at (u', v).
    pub uv3: [f32; 2],
}

impl TileUv {
    /// Computes the UV quad for the tile at the given atlas grid position.
    ///
    /// # Arguments
    /// * `col` - Column of the tile in the atlas grid (0..16)
    /// * `row` - Row of the tile in the atlas grid (0..16)
    pub const fn from_atlas_position(col: u32, row: u32) -> Self {
        let u_min = col as f32 / ATLAS_GRID_SIZE + TILE_UV_INSET;
        let u_max = (col + 1) as f32 / ATLAS_GRID_SIZE - TILE_UV_INSET;
        let v_min = row as f32 / ATLAS_GRID_SIZE + TILE_UV_INSET;
        let v_max = (row + 1) as f32 / ATLAS_GRID_SIZE - TILE_UV_INSET;

        TileUv {
            uv0: [u_min, v_min],
            uv1: [u_min, v_max],
            uv2: [u_max, v_max],
            uv3: [u_max, v_min],
        }
    }
}

/// Maps each tile to its UV quad, indexed by `Tile` discriminant.
///
/// The whole table is a compile-time constant; lookups never rebuild it.
pub const TILE_UVS: [TileUv; 7] = [
    TileUv::from_atlas_position(0, 0), // Dirt
    TileUv::from_atlas_position(1, 0), // Grass
    TileUv::from_atlas_position(0, 1), // GrassSide
    TileUv::from_atlas_position(0, 2), // Stone
    TileUv::from_atlas_position(0, 4), // TreeSide
    TileUv::from_atlas_position(0, 3), // TreeCore
    TileUv::from_atlas_position(0, 5), // Leaves
];

impl Tile {
    /// Looks up the UV quad for this tile.
    ///
    /// Total and deterministic. A tile without a table entry (which cannot
    /// occur for this closed enum, but is handled anyway) resolves to the
    /// quad at atlas position (0, 0).
    pub fn uv(self) -> TileUv {
        TILE_UVS
            .get(self as usize)
            .copied()
            .unwrap_or(TILE_UVS[Tile::Dirt as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TILES: [Tile; 7] = [
        Tile::Dirt,
        Tile::Grass,
        Tile::GrassSide,
        Tile::Stone,
        Tile::TreeSide,
        Tile::TreeCore,
        Tile::Leaves,
    ];

    #[test]
    fn uv_quads_are_axis_aligned_rectangles() {
        for tile in ALL_TILES {
            let uv = tile.uv();
            assert_eq!(uv.uv0[0], uv.uv1[0]);
            assert_eq!(uv.uv2[0], uv.uv3[0]);
            assert_eq!(uv.uv0[1], uv.uv3[1]);
            assert_eq!(uv.uv1[1], uv.uv2[1]);
        }
    }

    #[test]
    fn uv_quads_stay_inside_unit_square() {
        for tile in ALL_TILES {
            let uv = tile.uv();
            for corner in [uv.uv0, uv.uv1, uv.uv2, uv.uv3] {
                assert!((0.0..=1.0).contains(&corner[0]));
                assert!((0.0..=1.0).contains(&corner[1]));
            }
        }
    }

    #[test]
    fn inset_shrinks_each_tile_edge() {
        let uv = Tile::Stone.uv();
        let tile_extent = 1.0 / ATLAS_GRID_SIZE - 2.0 * TILE_UV_INSET;
        assert!((uv.uv2[0] - uv.uv0[0] - tile_extent).abs() < 1e-6);
        assert!((uv.uv2[1] - uv.uv0[1] - tile_extent).abs() < 1e-6);
    }
}
