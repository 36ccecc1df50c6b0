//! Core mesh buffers and the visibility-culled face emission pass.
//!
//! This module converts a chunk's padded voxel grid into three parallel
//! buffers — positions, UVs and triangle indices — by walking the interior
//! of the grid and emitting one quad per exposed face. A face is exposed iff
//! the single adjacent cell along its axis is air.

use std::time::Instant;

use cgmath::{InnerSpace, Vector3, Zero};
use log::debug;

use crate::voxels::{
    block::{block_side::BlockSide, BlockFaces},
    chunk::{Chunk, CHUNK_HEIGHT, CHUNK_WIDTH},
};

/// The three parallel buffers produced by one mesh pass.
///
/// Positions and UVs are index-aligned; `indices` references positions by
/// offset, three entries per triangle. The buffers are transient: built
/// incrementally during one pass, consumed exactly once by the orchestrator,
/// then dropped.
#[derive(Debug, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions in chunk-relative coordinates, padding subtracted.
    pub positions: Vec<[f32; 3]>,
    /// One texture coordinate per vertex.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices into `positions`, length a multiple of 3.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Creates an empty buffer triple.
    pub fn new() -> Self {
        MeshData::default()
    }

    /// Returns `true` if the pass emitted no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Tests whether one face of the voxel at (x, y, z) borders air.
///
/// Top and bottom are guarded at the chunk's vertical extremes — the world
/// has no lid and no underside, so neither face is ever emitted at
/// `y == CHUNK_HEIGHT - 1` (top) or `y == 0` (bottom). The four horizontal
/// reads always land inside the padded grid and need no guard; border cells
/// read as air, so boundary voxels always expose their outward faces.
#[inline]
fn face_borders_air(chunk: &Chunk, side: BlockSide, x: usize, y: usize, z: usize) -> bool {
    match side {
        BlockSide::TOP => y < CHUNK_HEIGHT - 1 && chunk.get(x, y + 1, z).is_air(),
        BlockSide::BOTTOM => y > 0 && chunk.get(x, y - 1, z).is_air(),
        BlockSide::FRONT => chunk.get(x, y, z - 1).is_air(),
        BlockSide::RIGHT => chunk.get(x + 1, y, z).is_air(),
        BlockSide::BACK => chunk.get(x, y, z + 1).is_air(),
        BlockSide::LEFT => chunk.get(x - 1, y, z).is_air(),
    }
}

/// Runs one full mesh pass over the chunk's interior.
///
/// For every non-air interior voxel, zero to six quads are emitted — one per
/// face bordering air — each as 4 vertices, 4 UVs copied from the block's
/// face definition, and 6 triangle indices winding `0,1,2` / `0,2,3`.
/// Vertex positions are chunk-relative: the stored x and z have the padding
/// offset subtracted, y is unchanged.
///
/// The pass is pure over the grid: same input, byte-identical output. The
/// loop runs z innermost because z is the stride-1 axis of the storage.
pub fn fill_mesh_data(chunk: &Chunk) -> MeshData {
    let started = Instant::now();
    let mut data = MeshData::new();

    for x in 1..=CHUNK_WIDTH {
        for y in 0..CHUNK_HEIGHT {
            for z in 1..=CHUNK_WIDTH {
                let block = chunk.get(x, y, z);
                if block.is_air() {
                    continue;
                }

                let faces = BlockFaces::of(block.get_block_type());
                let block_pos = [(x - 1) as f32, y as f32, (z - 1) as f32];
                let mut num_faces = 0u32;

                for side in BlockSide::all() {
                    if !face_borders_air(chunk, side, x, y, z) {
                        continue;
                    }

                    for corner in side.corners() {
                        data.positions.push([
                            block_pos[0] + corner[0],
                            block_pos[1] + corner[1],
                            block_pos[2] + corner[2],
                        ]);
                    }

                    let uv = faces.uv_for_side(side);
                    data.uvs.extend_from_slice(&[uv.uv0, uv.uv1, uv.uv2, uv.uv3]);

                    num_faces += 1;
                }

                let first_vertex = data.positions.len() as u32 - 4 * num_faces;
                for i in 0..num_faces {
                    let base = first_vertex + 4 * i;
                    data.indices
                        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
                }
            }
        }
    }

    debug!(
        "mesh pass emitted {} vertices / {} triangles in {:?}",
        data.positions.len(),
        data.indices.len() / 3,
        started.elapsed()
    );

    data
}

/// Derives per-vertex normals from the emitted triangle set.
///
/// Standard area-weighted accumulation: each triangle's cross-product normal
/// (whose magnitude is twice the triangle's area) is added to its three
/// vertices, then each sum is normalized. A vertex whose accumulated normal
/// is zero keeps the zero vector rather than an invented direction; mesher
/// output never produces one, since every emitted vertex belongs to a
/// non-degenerate quad.
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accumulated = vec![Vector3::<f32>::zero(); positions.len()];

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let a = Vector3::from(positions[i0]);
        let b = Vector3::from(positions[i1]);
        let c = Vector3::from(positions[i2]);
        let face_normal = (b - a).cross(c - a);

        accumulated[i0] += face_normal;
        accumulated[i1] += face_normal;
        accumulated[i2] += face_normal;
    }

    accumulated
        .into_iter()
        .map(|normal| {
            if normal.magnitude2() > 0.0 {
                normal.normalize().into()
            } else {
                [0.0; 3]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;

    fn lone_voxel(x: usize, y: usize, z: usize) -> Chunk {
        let mut chunk = Chunk::empty();
        chunk.set(x, y, z, BlockType::STONE);
        chunk
    }

    fn assert_valid_buffers(data: &MeshData) {
        assert_eq!(data.positions.len(), data.uvs.len());
        assert_eq!(data.indices.len() % 3, 0);
        for &index in &data.indices {
            assert!((index as usize) < data.positions.len());
        }
    }

    #[test]
    fn air_filled_chunk_emits_nothing() {
        let data = fill_mesh_data(&Chunk::empty());
        assert!(data.is_empty());
        assert!(data.uvs.is_empty());
        assert!(data.indices.is_empty());
    }

    #[test]
    fn floor_voxel_emits_five_faces() {
        // y == 0 suppresses the bottom face; the other five border air.
        let data = fill_mesh_data(&lone_voxel(1, 0, 1));
        assert_eq!(data.positions.len(), 20);
        assert_eq!(data.uvs.len(), 20);
        assert_eq!(data.indices.len(), 30);
        assert_valid_buffers(&data);
    }

    #[test]
    fn ceiling_voxel_emits_five_faces() {
        // y == CHUNK_HEIGHT - 1 suppresses the top face.
        let data = fill_mesh_data(&lone_voxel(1, CHUNK_HEIGHT - 1, 1));
        assert_eq!(data.positions.len(), 20);
        assert_eq!(data.indices.len(), 30);
        assert_valid_buffers(&data);
    }

    #[test]
    fn interior_voxel_emits_six_faces() {
        let data = fill_mesh_data(&lone_voxel(8, 30, 8));
        assert_eq!(data.positions.len(), 24);
        assert_eq!(data.indices.len(), 36);
        assert_valid_buffers(&data);
    }

    #[test]
    fn enclosed_voxel_emits_nothing() {
        let mut chunk = Chunk::empty();
        let (x, y, z) = (8, 30, 8);
        chunk.set(x, y, z, BlockType::DIRT);
        chunk.set(x + 1, y, z, BlockType::STONE);
        chunk.set(x - 1, y, z, BlockType::STONE);
        chunk.set(x, y + 1, z, BlockType::STONE);
        chunk.set(x, y - 1, z, BlockType::STONE);
        chunk.set(x, y, z + 1, BlockType::STONE);
        chunk.set(x, y, z - 1, BlockType::STONE);

        let data = fill_mesh_data(&chunk);
        // The six neighbors each contribute their own exposed faces, but
        // nothing belongs to the enclosed voxel: every face touching it or
        // its neighbors' shared boundaries is elided, leaving 5 exposed
        // faces per neighbor.
        assert_eq!(data.positions.len(), 6 * 5 * 4);
        assert_valid_buffers(&data);
    }

    #[test]
    fn stacked_voxels_elide_the_shared_face() {
        let mut chunk = Chunk::empty();
        chunk.set(5, 10, 5, BlockType::DIRT);
        chunk.set(5, 11, 5, BlockType::DIRT);

        let data = fill_mesh_data(&chunk);
        // Lower voxel: four sides + bottom. Upper voxel: four sides + top.
        // The shared boundary at y = 10/11 emits nothing.
        assert_eq!(data.positions.len(), 10 * 4);
        assert_eq!(data.indices.len(), 10 * 6);
        assert_valid_buffers(&data);
    }

    #[test]
    fn boundary_voxel_renders_its_outward_face() {
        // Interior x == CHUNK_WIDTH abuts the padded border, which reads as
        // air, so the +x face is always exposed regardless of any neighbor
        // chunk.
        let data = fill_mesh_data(&lone_voxel(CHUNK_WIDTH, 30, 8));
        assert_eq!(data.positions.len(), 24);

        let max_x = CHUNK_WIDTH as f32;
        assert!(data.positions.iter().any(|position| position[0] == max_x));
    }

    #[test]
    fn solid_chunk_exposes_only_the_shell() {
        let chunk = Chunk::solid();
        let data = fill_mesh_data(&chunk);

        // Only the four side walls survive: interior faces between solids
        // are elided, and the vertical guards suppress the ceiling and
        // floor faces at the world's extremes.
        let wall_faces = 4 * CHUNK_WIDTH * CHUNK_HEIGHT;
        assert_eq!(data.positions.len(), wall_faces * 4);
        assert_valid_buffers(&data);
    }

    #[test]
    fn geometry_stays_inside_interior_bounds() {
        let data = fill_mesh_data(&Chunk::random());
        for position in &data.positions {
            assert!((0.0..=CHUNK_WIDTH as f32).contains(&position[0]));
            assert!((0.0..=CHUNK_HEIGHT as f32).contains(&position[1]));
            assert!((0.0..=CHUNK_WIDTH as f32).contains(&position[2]));
        }
    }

    #[test]
    fn meshing_is_deterministic() {
        let chunk = Chunk::random();
        let first = fill_mesh_data(&chunk);
        let second = fill_mesh_data(&chunk);
        assert_eq!(first, second);
    }

    #[test]
    fn lone_cube_normals_point_outward() {
        let data = fill_mesh_data(&lone_voxel(8, 30, 8));
        let normals = compute_vertex_normals(&data.positions, &data.indices);

        // Faces are emitted in BlockSide::all() order, four vertices each;
        // no vertex is shared across faces, so every vertex normal equals
        // its face's outward normal.
        for (face_index, side) in BlockSide::all().into_iter().enumerate() {
            let expected = side.normal();
            for corner in 0..4 {
                let normal = normals[face_index * 4 + corner];
                for axis in 0..3 {
                    assert!(
                        (normal[axis] - expected[axis]).abs() < 1e-6,
                        "{:?} face normal mismatch",
                        side
                    );
                }
            }
        }
    }

    #[test]
    fn uvs_follow_the_block_definition() {
        let mut chunk = Chunk::empty();
        chunk.set(8, 30, 8, BlockType::GRASS);
        let data = fill_mesh_data(&chunk);

        let faces = BlockFaces::of(BlockType::GRASS);
        // First emitted face is TOP.
        assert_eq!(data.uvs[0], faces.top_uv.uv0);
        assert_eq!(data.uvs[1], faces.top_uv.uv1);
        assert_eq!(data.uvs[2], faces.top_uv.uv2);
        assert_eq!(data.uvs[3], faces.top_uv.uv3);
        // Second is BOTTOM.
        assert_eq!(data.uvs[4], faces.bottom_uv.uv0);
        // Third is FRONT, a side face.
        assert_eq!(data.uvs[8], faces.side_uv.uv0);
    }
}
