//! Ray-cast voxelisation of surface meshes.
//!
//! This crate turns a [`mesh_surface::SurfaceMesh`] into a sparse
//! [`voxel_mesh::VoxelMesh`] by casting axis-aligned rays through the
//! mesh and pairing intersections even-odd into inside spans:
//!
//! - [`voxelise`] - the single entry point
//! - [`VoxeliseParams`] / [`VoxeliserKind`] - configuration and
//!   strategy selection
//! - [`Bvh`] - flat bounding volume hierarchy used by the accelerated
//!   strategy
//! - [`Ray`], [`ray_triangle_intersect`], [`ray_aabb_intersect`] - the
//!   intersection primitives
//!
//! # Strategies
//!
//! The **basic** strategy casts rays along all three principal axes
//! against every triangle. The **normal-corrected** strategy first
//! groups triangles by the axis most parallel to their face normal and
//! casts each group only along that axis, which reduces stray hits on
//! glancing surfaces. The **BVH** strategy is the basic strategy with
//! candidate lookup through a bounding volume hierarchy built for the
//! call; it produces the same voxels, faster on large meshes.
//!
//! Open (non-watertight) meshes voxelise best effort: rows with an odd
//! intersection count drop their trailing span and are reported through
//! the returned diagnostics rather than failing the call.
//!
//! # Example
//!
//! ```
//! use cobble_types::Rgb;
//! use mesh_surface::SurfaceMesh;
//! use voxel_cast::{VoxeliseParams, VoxeliserKind, voxelise};
//!
//! let cube = SurfaceMesh::unit_cube(Rgb::new(0.3, 0.6, 0.9));
//! let params = VoxeliseParams::new(8).strategy(VoxeliserKind::Bvh);
//! let outcome = voxelise(&cube, &params).unwrap();
//!
//! assert!(!outcome.mesh.is_empty());
//! assert!(!outcome.diagnostics.has_warnings());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bvh;
mod engine;
mod error;
mod outcome;
mod params;
mod ray;

pub use bvh::Bvh;
pub use engine::voxelise;
pub use error::{VoxeliseError, VoxeliseResult};
pub use outcome::VoxeliseOutcome;
pub use params::{VoxeliseParams, VoxeliserKind};
pub use ray::{INTERSECT_EPSILON, Ray, RayHit, ray_aabb_intersect, ray_triangle_intersect};
