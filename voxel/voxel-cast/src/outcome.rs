//! Result of a voxelise call.

use cobble_types::Diagnostics;
use voxel_mesh::VoxelMesh;

/// The voxel mesh produced by a call plus everything the engine had to
/// say about the input data.
///
/// A call either fails with a [`crate::VoxeliseError`] or returns a
/// complete outcome; diagnostics never stand in for a missing result.
#[derive(Debug, Clone)]
pub struct VoxeliseOutcome {
    /// The produced voxel mesh.
    pub mesh: VoxelMesh,
    /// Data-quality notes collected while casting.
    pub diagnostics: Diagnostics,
}

impl VoxeliseOutcome {
    /// Split the outcome into its parts.
    #[must_use]
    pub fn into_parts(self) -> (VoxelMesh, Diagnostics) {
        (self.mesh, self.diagnostics)
    }
}
