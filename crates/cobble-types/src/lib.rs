//! Foundation types for the cobble mesh-to-block pipeline.
//!
//! This crate provides the value types shared by every stage of the
//! pipeline:
//!
//! - [`Rgb`], [`Lab`], [`ColourSpace`] - colour values and the colour
//!   space used for nearest-colour matching
//! - [`Uv`] - texture coordinates with tiling wrap and interpolation
//! - [`Triangle`], [`UvTriangle`] - geometry with barycentric queries
//!   and material binding
//! - [`Aabb`] - axis-aligned bounds in world space
//! - [`Diagnostics`] - the data-quality report returned by operations
//!
//! # Layer 0 Crate
//!
//! This crate has no dependency on any other workspace crate and no I/O.
//! It can be used in CLI tools, WASM, servers, and bindings.
//!
//! # Coordinate System
//!
//! The pipeline uses a **right-handed, Y-up coordinate system**:
//! - X: width (east/west)
//! - Y: height (up/down)
//! - Z: depth (north/south)
//!
//! World coordinates are continuous `f64` values (`Point3<f64>`).
//!
//! # Example
//!
//! ```
//! use cobble_types::{Point3, Rgb, Triangle};
//!
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! );
//! assert!((tri.area() - 0.5).abs() < 1e-10);
//!
//! let lab = Rgb::new(0.5, 0.5, 0.5).to_lab();
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod colour;
mod diagnostics;
mod triangle;
mod uv;

pub use bounds::Aabb;
pub use colour::{ColourSpace, Lab, Rgb};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use triangle::{Triangle, UvTriangle};
pub use uv::Uv;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
