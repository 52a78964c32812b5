//! Block palette assignment for voxel meshes.
//!
//! This crate maps every voxel of a [`voxel_mesh::VoxelMesh`] to a block
//! from a textured palette:
//!
//! - [`TextureAtlas`] / [`BlockPalette`] - the provider documents
//!   (serde-deserialisable behind the `serde` feature)
//! - [`assign_blocks`] - the single entry point
//! - [`AssignParams`] - colour space and dithering configuration
//! - [`BlockMesh`] / [`BlockMeshBuffer`] - the assigned result and its
//!   flat render buffer
//!
//! Matching is a linear nearest-colour scan over the palette entries
//! resolved against the atlas, in RGB or CIE LAB. With dithering
//! enabled, the quantisation error of every match is diffused to the
//! occupied forward neighbours, trading flat colour runs for a closer
//! average colour.
//!
//! # Example
//!
//! ```
//! use block_mesh::{
//!     AssignParams, AtlasBlock, BlockFaces, BlockPalette, TextureAtlas, assign_blocks,
//! };
//! use cobble_types::{ColourSpace, Rgb};
//! use voxel_mesh::{VoxelCoord, VoxelMesh};
//!
//! let atlas = TextureAtlas::new(
//!     vec![AtlasBlock {
//!         name: "stone".into(),
//!         colour: Rgb::new(0.5, 0.5, 0.5),
//!         faces: BlockFaces::default(),
//!     }],
//!     16,
//! );
//! let palette = BlockPalette::new(["stone"]);
//!
//! let mut voxels = VoxelMesh::new(1.0);
//! voxels.add_voxel(VoxelCoord::origin(), Rgb::new(0.45, 0.5, 0.55));
//!
//! let params = AssignParams::new().colour_space(ColourSpace::Lab);
//! let outcome = assign_blocks(&voxels, &palette, &atlas, &params).unwrap();
//! assert_eq!(outcome.mesh.len(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assign;
mod atlas;
mod buffer;
mod error;
mod mesh;
mod outcome;
mod params;

pub use assign::assign_blocks;
pub use atlas::{AtlasBlock, BlockFaces, BlockPalette, TextureAtlas};
pub use buffer::BlockMeshBuffer;
pub use error::{AssignError, AssignResult};
pub use mesh::{BlockMesh, PaletteEntry};
pub use outcome::AssignOutcome;
pub use params::AssignParams;
