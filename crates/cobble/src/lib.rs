//! Surface mesh to voxel mesh to block mesh conversion.
//!
//! This umbrella crate re-exports the whole pipeline under short module
//! names. The stages compose left to right: a frozen [`surface`] mesh is
//! voxelised by [`cast`] into a sparse [`voxel`] mesh, which [`block`]
//! maps onto a textured block palette. Every stage is synchronous and
//! returns its data-quality diagnostics alongside the result.
//!
//! The coordinate convention is Y-up: `desired_height` counts voxels
//! along Y, and block face names (`up`, `down`, north/south/east/west)
//! follow the same axes.
//!
//! # Quick start
//!
//! ```
//! use cobble::prelude::*;
//!
//! // A coloured cube, eight voxels tall.
//! let surface = SurfaceMesh::unit_cube(Rgb::new(0.55, 0.55, 0.55));
//! let voxelised = voxelise(&surface, &VoxeliseParams::new(8)).unwrap();
//!
//! // Map every voxel onto a one-block palette.
//! let atlas = TextureAtlas::new(
//!     vec![AtlasBlock {
//!         name: "stone".into(),
//!         colour: Rgb::new(0.5, 0.5, 0.5),
//!         faces: BlockFaces::default(),
//!     }],
//!     16,
//! );
//! let palette = BlockPalette::new(["stone"]);
//! let assigned = assign_blocks(
//!     &voxelised.mesh,
//!     &palette,
//!     &atlas,
//!     &AssignParams::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(assigned.mesh.len(), voxelised.mesh.len());
//! ```
//!
//! # Module organization
//!
//! - [`types`] - colours, UVs, triangles, bounds, diagnostics
//! - [`surface`] - the frozen input mesh with materials and textures
//! - [`voxel`] - the sparse voxel container and its render buffer
//! - [`cast`] - the three voxelisation strategies and the BVH
//! - [`block`] - palette documents, assignment, and the block mesh

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use block_mesh as block;
pub use cobble_types as types;
pub use mesh_surface as surface;
pub use voxel_cast as cast;
pub use voxel_mesh as voxel;

/// The common types of every pipeline stage.
///
/// ```
/// use cobble::prelude::*;
///
/// let quad = SurfaceMesh::unit_quad(Rgb::WHITE);
/// let outcome = voxelise(&quad, &VoxeliseParams::new(1)).unwrap();
/// assert!(!outcome.mesh.is_empty());
/// ```
pub mod prelude {
    pub use block_mesh::{
        AssignError, AssignOutcome, AssignParams, AtlasBlock, BlockFaces, BlockMesh,
        BlockMeshBuffer, BlockPalette, PaletteEntry, TextureAtlas, assign_blocks,
    };
    pub use cobble_types::{
        Aabb, ColourSpace, Diagnostics, Lab, Point3, Rgb, Triangle, Uv, UvTriangle, Vector3,
    };
    pub use mesh_surface::{Material, SurfaceMesh, Texture, TextureFiltering};
    pub use voxel_cast::{
        VoxeliseError, VoxeliseOutcome, VoxeliseParams, VoxeliserKind, voxelise,
    };
    pub use voxel_mesh::{GridBounds, Voxel, VoxelCoord, VoxelMesh, VoxelMeshBuffer};
}
