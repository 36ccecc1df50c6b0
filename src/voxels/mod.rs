//! # Voxels Module
//!
//! Data model for the voxel world: block types, material tiles, face
//! definitions and the padded chunk grid the mesher reads.

pub mod block;
pub mod chunk;
