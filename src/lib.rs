#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! Converts a dense 3-D grid of typed voxels (a chunk) into a renderable
//! triangle surface. Only the faces that border empty space are emitted,
//! each face carries texture-atlas coordinates derived from the voxel's
//! material, and the result is a flat vertex/UV/index buffer triple with
//! derived normals, ready for a graphics pipeline and a collision system.
//!
//! ## Key Modules
//!
//! * `voxels` - Block types, material tiles, the atlas table and the padded
//!   chunk grid the mesher reads.
//! * `meshing` - The face-culling mesh pass, normal derivation and the
//!   build orchestrator with its two execution modes.
//! * `tasks` - The worker-thread scheduler and the completion handle used
//!   to sequence grid writes against scheduled mesh builds.
//!
//! ## Execution Modes
//!
//! A chunk can be meshed synchronously on the calling thread or as a
//! scheduled job on a worker pool. Both modes run the same pure pass and
//! always complete fully before the buffers are published; the scheduled
//! mode additionally accepts an upstream completion handle so the pass
//! never reads a grid that is still being written.
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_mesher::meshing::MeshBuilder;
//! use voxel_mesher::voxels::chunk::Chunk;
//!
//! let chunk = Chunk::flat(40);
//! let mesh = MeshBuilder::build(&chunk);
//! assert_eq!(mesh.positions.len(), mesh.uvs.len());
//! ```

use std::sync::Arc;

use log::info;

pub mod meshing;
pub mod tasks;
pub mod voxels;

use meshing::{CollisionMesh, MeshBuilder, RenderMesh};
use tasks::TaskScheduler;
use voxels::chunk::Chunk;

/// A stand-in rendering backend that just keeps the assigned buffer sizes.
struct DemoRenderMesh {
    vertex_count: usize,
    triangle_count: usize,
}

impl RenderMesh for DemoRenderMesh {
    fn assign_buffers(
        &mut self,
        positions: &[[f32; 3]],
        _uvs: &[[f32; 2]],
        _normals: &[[f32; 3]],
        indices: &[u32],
    ) {
        self.vertex_count = positions.len();
        self.triangle_count = indices.len() / 3;
    }
}

/// A stand-in collision backend counterpart to [`DemoRenderMesh`].
struct DemoCollisionMesh {
    triangle_count: usize,
}

impl CollisionMesh for DemoCollisionMesh {
    fn assign_buffers(&mut self, _positions: &[[f32; 3]], indices: &[u32]) {
        self.triangle_count = indices.len() / 3;
    }
}

/// Runs the demo: meshes a couple of chunks in both execution modes and
/// logs the resulting buffer sizes.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    // Synchronous build on the calling thread.
    let flat = Chunk::flat(40);
    let mesh = MeshBuilder::build(&flat);
    info!(
        "synchronous build: {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.indices.len() / 3
    );

    let mut render = DemoRenderMesh {
        vertex_count: 0,
        triangle_count: 0,
    };
    let mut collision = DemoCollisionMesh { triangle_count: 0 };
    mesh.publish(&mut render, &mut collision);
    info!(
        "published to backends: {} vertices, {} render / {} collision triangles",
        render.vertex_count, render.triangle_count, collision.triangle_count
    );

    // Scheduled build gated on an upstream producer's completion handle.
    let mut scheduler = TaskScheduler::with_available_parallelism();
    let chunk = Arc::new(Chunk::random());
    let producer = scheduler.submit(|| {
        // The task that last wrote the grid would live here.
    });

    let mesh = MeshBuilder::build_scheduled(&mut scheduler, chunk, Some(producer));
    info!(
        "scheduled build: {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.indices.len() / 3
    );
}
