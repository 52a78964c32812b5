//! Surface mesh input for the cobble pipeline.
//!
//! This crate defines the frozen triangle surface the voxeliser consumes:
//!
//! - [`SurfaceMesh`] - triangles with per-vertex UVs bound to named
//!   materials, validated at construction
//! - [`Material`] - a solid colour or a [`Texture`]
//! - [`Texture`] - decoded texel grid with nearest and bilinear sampling
//!   and tiling UV wrap
//!
//! # Example
//!
//! ```
//! use cobble_types::{Rgb, Uv};
//! use mesh_surface::{SurfaceMesh, TextureFiltering};
//!
//! let mesh = SurfaceMesh::unit_cube(Rgb::new(0.9, 0.3, 0.1));
//! let colour = mesh
//!     .sample_material("default", Uv::new(0.5, 0.5), TextureFiltering::Nearest)
//!     .unwrap();
//! assert!((colour.r - 0.9).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod material;
mod mesh;

pub use error::{SurfaceError, SurfaceResult};
pub use material::{Material, Texture, TextureFiltering};
pub use mesh::SurfaceMesh;
