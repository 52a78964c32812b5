//! Result of a block assignment call.

use cobble_types::Diagnostics;

use crate::mesh::BlockMesh;

/// The block mesh produced by a call plus everything the engine had to
/// say about the input data.
///
/// A call either fails with a [`crate::AssignError`] or returns a
/// complete outcome; diagnostics never stand in for a missing result.
#[derive(Debug, Clone)]
pub struct AssignOutcome {
    /// The produced block mesh.
    pub mesh: BlockMesh,
    /// Data-quality notes collected while assigning.
    pub diagnostics: Diagnostics,
}

impl AssignOutcome {
    /// Split the outcome into its parts.
    #[must_use]
    pub fn into_parts(self) -> (BlockMesh, Diagnostics) {
        (self.mesh, self.diagnostics)
    }
}
