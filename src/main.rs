//! # Voxel Mesher Demo Entry Point
//!
//! Meshes a couple of chunks in both execution modes and logs the resulting
//! buffer sizes. Set `RUST_LOG=debug` to see per-pass timings.
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_mesher::run();
}
