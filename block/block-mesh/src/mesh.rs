//! The assigned block mesh.

use std::collections::HashMap;

use cobble_types::Rgb;
use voxel_mesh::VoxelCoord;

use crate::atlas::BlockFaces;
use crate::buffer::BlockMeshBuffer;

/// A palette entry resolved against the atlas.
///
/// Assignment indices in a [`BlockMesh`] point into the mesh's entry
/// list; consumers read the name, colour, and face coordinates from
/// there.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Atlas block name.
    pub name: String,
    /// Average block colour used for matching.
    pub colour: Rgb,
    /// Per-face texture coordinates into the atlas image.
    pub faces: BlockFaces,
}

/// Every occupied voxel mapped to a resolved palette entry.
///
/// The key set is identical to the occupied set of the voxel mesh the
/// assignment ran over. Immutable after the call that produced it.
///
/// # Example
///
/// ```
/// use block_mesh::{AssignParams, BlockPalette, assign_blocks};
/// use cobble_types::Rgb;
/// use voxel_mesh::{VoxelCoord, VoxelMesh};
///
/// # let atlas = block_mesh::TextureAtlas::new(
/// #     vec![block_mesh::AtlasBlock {
/// #         name: "stone".into(),
/// #         colour: Rgb::new(0.5, 0.5, 0.5),
/// #         faces: block_mesh::BlockFaces::default(),
/// #     }],
/// #     16,
/// # );
/// let mut voxels = VoxelMesh::new(1.0);
/// voxels.add_voxel(VoxelCoord::origin(), Rgb::new(0.4, 0.4, 0.4));
///
/// let palette = BlockPalette::new(["stone"]);
/// let outcome = assign_blocks(&voxels, &palette, &atlas, &AssignParams::new()).unwrap();
///
/// let entry = outcome.mesh.entry_at(VoxelCoord::origin()).unwrap();
/// assert_eq!(entry.name, "stone");
/// ```
#[derive(Debug, Clone)]
pub struct BlockMesh {
    assignments: HashMap<VoxelCoord, usize>,
    entries: Vec<PaletteEntry>,
    voxel_size: f64,
}

impl BlockMesh {
    pub(crate) fn new(
        assignments: HashMap<VoxelCoord, usize>,
        entries: Vec<PaletteEntry>,
        voxel_size: f64,
    ) -> Self {
        Self {
            assignments,
            entries,
            voxel_size,
        }
    }

    /// The resolved palette entries, in palette order.
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// World-space edge length of one block.
    #[must_use]
    pub const fn voxel_size(&self) -> f64 {
        self.voxel_size
    }

    /// The entry index assigned to a coordinate, if occupied.
    #[must_use]
    pub fn index_at(&self, coord: VoxelCoord) -> Option<usize> {
        self.assignments.get(&coord).copied()
    }

    /// The resolved entry assigned to a coordinate, if occupied.
    #[must_use]
    pub fn entry_at(&self, coord: VoxelCoord) -> Option<&PaletteEntry> {
        self.index_at(coord).map(|index| &self.entries[index])
    }

    /// Number of assigned blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no blocks were assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate over assignments in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&VoxelCoord, usize)> {
        self.assignments.iter().map(|(coord, index)| (coord, *index))
    }

    /// Assigned coordinates in deterministic scan order.
    ///
    /// Same ordering as [`voxel_mesh::VoxelMesh::scan_order`]: ascending
    /// z, then y, then x.
    #[must_use]
    pub fn scan_order(&self) -> Vec<VoxelCoord> {
        let mut coords: Vec<_> = self.assignments.keys().copied().collect();
        coords.sort_unstable_by_key(|c| (c.z, c.y, c.x));
        coords
    }

    /// Generate a flat render buffer for the assigned set.
    ///
    /// Blocks are emitted in [`BlockMesh::scan_order`].
    #[must_use]
    pub fn create_buffer(&self) -> BlockMeshBuffer {
        let coords = self.scan_order();
        let mut buffer = BlockMeshBuffer::with_capacity(coords.len(), self.voxel_size);
        for coord in coords {
            if let Some(index) = self.index_at(coord) {
                buffer.push(coord, index, &self.entries[index].faces);
            }
        }
        buffer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use cobble_types::Uv;

    use super::*;

    fn two_entry_mesh() -> BlockMesh {
        let entries = vec![
            PaletteEntry {
                name: "stone".into(),
                colour: Rgb::new(0.5, 0.5, 0.5),
                faces: BlockFaces::uniform(Uv::new(0.0, 0.0)),
            },
            PaletteEntry {
                name: "dirt".into(),
                colour: Rgb::new(0.4, 0.3, 0.2),
                faces: BlockFaces::uniform(Uv::new(0.5, 0.0)),
            },
        ];
        let mut assignments = HashMap::new();
        assignments.insert(VoxelCoord::new(0, 0, 0), 0);
        assignments.insert(VoxelCoord::new(1, 0, 0), 1);
        assignments.insert(VoxelCoord::new(0, 1, 0), 0);
        BlockMesh::new(assignments, entries, 0.5)
    }

    #[test]
    fn entry_lookup() {
        let mesh = two_entry_mesh();
        assert_eq!(mesh.len(), 3);
        assert_eq!(mesh.entry_at(VoxelCoord::new(1, 0, 0)).unwrap().name, "dirt");
        assert_eq!(mesh.index_at(VoxelCoord::new(0, 1, 0)), Some(0));
        assert!(mesh.entry_at(VoxelCoord::new(5, 5, 5)).is_none());
    }

    #[test]
    fn scan_order_matches_voxel_convention() {
        let mesh = two_entry_mesh();
        assert_eq!(
            mesh.scan_order(),
            vec![
                VoxelCoord::new(0, 0, 0),
                VoxelCoord::new(1, 0, 0),
                VoxelCoord::new(0, 1, 0),
            ]
        );
    }

    #[test]
    fn buffer_emits_scan_order() {
        let mesh = two_entry_mesh();
        let buffer = mesh.create_buffer();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.block_indices, vec![0, 1, 0]);
        assert_eq!(buffer.positions[..3], [0.0, 0.0, 0.0]);
        assert_eq!(buffer.positions[3..6], [1.0, 0.0, 0.0]);
    }
}
