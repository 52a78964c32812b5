//! Sparse voxel storage for the cobble pipeline.
//!
//! This crate holds the intermediate representation between the
//! voxeliser and the block assigner:
//!
//! - [`VoxelCoord`] - integer grid coordinates (hash keys)
//! - [`GridBounds`] - inclusive bounds in grid space
//! - [`Voxel`] - accumulated colour plus a Moore neighbour mask
//! - [`VoxelMesh`] - the sparse container with deterministic
//!   [`VoxelMesh::scan_order`] and render buffer generation
//!
//! # Coordinate Systems
//!
//! The grid uses a **right-handed, Y-up coordinate system**:
//! - X: width (east/west)
//! - Y: height (up/down)
//! - Z: depth (north/south)
//!
//! World coordinates are continuous `f64` values; grid coordinates are
//! discrete `i32` values. A voxel at coordinate `c` is centred at
//! `c * voxel_size` in world space.
//!
//! # Example
//!
//! ```
//! use cobble_types::Rgb;
//! use voxel_mesh::{VoxelCoord, VoxelMesh};
//!
//! let mut mesh = VoxelMesh::new(0.5);
//! mesh.add_voxel(VoxelCoord::new(0, 0, 0), Rgb::WHITE);
//! mesh.add_voxel(VoxelCoord::new(0, 0, 0), Rgb::BLACK);
//!
//! // Re-insertion averages colour samples.
//! let voxel = mesh.voxel_at(VoxelCoord::new(0, 0, 0)).unwrap();
//! assert!((voxel.colour().r - 0.5).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod buffer;
mod coord;
mod mesh;
mod voxel;

pub use bounds::GridBounds;
pub use buffer::VoxelMeshBuffer;
pub use coord::{MOORE_OFFSETS, VoxelCoord};
pub use mesh::VoxelMesh;
pub use voxel::Voxel;
