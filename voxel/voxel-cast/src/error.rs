//! Error types for voxelisation.

use thiserror::Error;

/// Result type alias for voxelise operations.
pub type VoxeliseResult<T> = Result<T, VoxeliseError>;

/// Errors that can occur during voxelisation.
///
/// These are programming-invariant violations: the call returns early
/// and never produces a partial voxel mesh. Data-quality problems in
/// otherwise valid input (open seams, degenerate triangles) are reported
/// through diagnostics instead.
#[derive(Debug, Error)]
pub enum VoxeliseError {
    /// Input mesh has no triangles, or no spatial extent at all.
    #[error("input mesh has no voxelisable geometry")]
    EmptyMesh,

    /// The requested output height was zero.
    #[error("desired height must be at least 1")]
    InvalidHeight,

    /// Material sampling failed inside the colour pipeline.
    #[error(transparent)]
    Surface(#[from] mesh_surface::SurfaceError),
}

impl VoxeliseError {
    /// Create an empty mesh error.
    #[must_use]
    pub const fn empty_mesh() -> Self {
        Self::EmptyMesh
    }

    /// Create an invalid height error.
    #[must_use]
    pub const fn invalid_height() -> Self {
        Self::InvalidHeight
    }
}
