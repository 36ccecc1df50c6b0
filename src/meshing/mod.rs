//! # Meshing Module
//!
//! Mesh generation and publication for voxel chunks.
//!
//! ## Architecture
//! - `mesh`: the core meshing pass — buffer layout, face-visibility culling
//!   and per-vertex normal derivation.
//! - `MeshBuilder`: the orchestrator. It owns the output buffers' lifetime,
//!   runs the pass either inline on the calling thread or as a scheduled job
//!   with an explicit completion barrier, and hands the finished buffers to
//!   the rendering and collision backends.
//!
//! Both execution modes are functionally identical: one pure meshing
//! function over the grid, invoked from a thin front that picks
//! synchronous-call vs. scheduled-task-with-wait. A build always completes
//! fully before anything is published; partial results are never exposed.

use std::sync::mpsc::channel;
use std::sync::Arc;

use log::debug;

use crate::tasks::{JobHandle, TaskScheduler};
use crate::voxels::chunk::Chunk;

pub mod mesh;

pub use mesh::{compute_vertex_normals, fill_mesh_data, MeshData};

/// A finished, publishable chunk mesh.
///
/// Holds the permanent copies of the buffers a mesh pass produced, plus the
/// derived per-vertex normals. The transient pass buffers are consumed when
/// this is constructed.
#[derive(Debug, PartialEq)]
pub struct ChunkMesh {
    /// Vertex positions in chunk-relative coordinates.
    pub positions: Vec<[f32; 3]>,
    /// One texture coordinate per vertex, index-aligned with `positions`.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices into `positions`, three per triangle.
    pub indices: Vec<u32>,
    /// Area-weighted per-vertex normals derived from the triangle set.
    pub normals: Vec<[f32; 3]>,
}

impl ChunkMesh {
    /// Finalizes transient pass buffers into a publishable mesh, deriving
    /// the per-vertex normals.
    pub fn from_data(data: MeshData) -> Self {
        let normals = compute_vertex_normals(&data.positions, &data.indices);
        ChunkMesh {
            positions: data.positions,
            uvs: data.uvs,
            indices: data.indices,
            normals,
        }
    }

    /// Returns `true` if the mesh carries no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Views the position buffer as raw bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Views the UV buffer as raw bytes for GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Views the normal buffer as raw bytes for GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Views the index buffer as raw bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Hands the finished buffers to the rendering and collision backends.
    ///
    /// This core only produces the data the backends need; building GPU or
    /// physics resources from it is their concern.
    pub fn publish(&self, render: &mut dyn RenderMesh, collision: &mut dyn CollisionMesh) {
        render.assign_buffers(&self.positions, &self.uvs, &self.normals, &self.indices);
        collision.assign_buffers(&self.positions, &self.indices);
        debug!(
            "published chunk mesh: {} vertices / {} triangles",
            self.positions.len(),
            self.indices.len() / 3
        );
    }
}

/// Receives the renderable buffers of a finished chunk mesh.
///
/// Implemented by the rendering backend; this crate never constructs GPU
/// resources itself.
pub trait RenderMesh {
    /// Accepts the full buffer set of one chunk mesh. Positions, UVs and
    /// normals are index-aligned; `indices` triples form triangles.
    fn assign_buffers(
        &mut self,
        positions: &[[f32; 3]],
        uvs: &[[f32; 2]],
        normals: &[[f32; 3]],
        indices: &[u32],
    );
}

/// Receives the collision-relevant buffers of a finished chunk mesh.
pub trait CollisionMesh {
    /// Accepts the triangle soup of one chunk mesh.
    fn assign_buffers(&mut self, positions: &[[f32; 3]], indices: &[u32]);
}

/// Orchestrates mesh builds over a chunk's voxel grid.
///
/// The two entry points share one meshing function and differ only in where
/// it runs. No internal locking is performed: the grid is read-only for the
/// duration of a pass, and the caller sequences edits against builds (in
/// scheduled mode, via the upstream `JobHandle`).
pub struct MeshBuilder;

impl MeshBuilder {
    /// Builds a chunk mesh synchronously on the calling thread.
    ///
    /// The pass buffers live only for the duration of the call and are moved
    /// into the returned mesh.
    pub fn build(chunk: &Chunk) -> ChunkMesh {
        ChunkMesh::from_data(fill_mesh_data(chunk))
    }

    /// Builds a chunk mesh as a scheduled job with an explicit completion
    /// barrier.
    ///
    /// If `grid_ready` is given, the orchestrator first blocks on it so the
    /// upstream producer (e.g. the task that last wrote the grid) has
    /// finished before the grid is read. It then submits the mesh pass,
    /// blocks on the pass's own completion handle, and only afterwards
    /// assembles the result — fire-and-wait, never fire-and-forget.
    ///
    /// # Panics
    /// Panics if the scheduled pass is lost to a dead worker; a mesh pass
    /// that started cannot fail, so a missing result is a programming error.
    pub fn build_scheduled(
        scheduler: &mut TaskScheduler,
        chunk: Arc<Chunk>,
        grid_ready: Option<JobHandle>,
    ) -> ChunkMesh {
        if let Some(dependency) = grid_ready {
            dependency.complete();
        }

        let (data_tx, data_rx) = channel::<MeshData>();
        let handle = scheduler.submit(move || {
            let data = fill_mesh_data(&chunk);
            let _ = data_tx.send(data);
        });

        handle.complete();
        let data = data_rx
            .recv()
            .expect("scheduled mesh pass completed without producing buffers");
        ChunkMesh::from_data(data)
    }
}
