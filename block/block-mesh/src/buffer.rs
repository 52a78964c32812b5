//! Flat render buffer generated from a block mesh.

use voxel_mesh::VoxelCoord;

use crate::atlas::BlockFaces;

/// Flat per-block arrays for a renderer.
///
/// Entries are parallel: block `i` occupies `positions[3*i..3*i+3]`,
/// `block_indices[i]`, and `face_uvs[12*i..12*i+12]`. Face coordinates
/// are packed as `(u, v)` pairs in up, down, north, south, east, west
/// order. Positions are voxel-space centres; multiply by
/// [`BlockMeshBuffer::voxel_size`] for world units. Generated on demand,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct BlockMeshBuffer {
    /// Block centre positions, three floats per block.
    pub positions: Vec<f32>,
    /// Resolved palette entry index per block.
    pub block_indices: Vec<u32>,
    /// Per-face atlas coordinates, twelve floats per block.
    pub face_uvs: Vec<f32>,
    /// World-space edge length of one block.
    pub voxel_size: f64,
}

impl BlockMeshBuffer {
    pub(crate) fn with_capacity(block_count: usize, voxel_size: f64) -> Self {
        Self {
            positions: Vec::with_capacity(block_count * 3),
            block_indices: Vec::with_capacity(block_count),
            face_uvs: Vec::with_capacity(block_count * 12),
            voxel_size,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push(&mut self, coord: VoxelCoord, entry_index: usize, faces: &BlockFaces) {
        self.positions.push(coord.x as f32);
        self.positions.push(coord.y as f32);
        self.positions.push(coord.z as f32);
        self.block_indices.push(entry_index as u32);
        for uv in faces.in_order() {
            self.face_uvs.push(uv.u as f32);
            self.face_uvs.push(uv.v as f32);
        }
    }

    /// Number of blocks in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.block_indices.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.block_indices.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use cobble_types::Uv;

    use super::*;

    #[test]
    fn push_keeps_arrays_parallel() {
        let mut buffer = BlockMeshBuffer::with_capacity(1, 0.25);
        let faces = BlockFaces {
            up: Uv::new(0.0, 0.1),
            down: Uv::new(0.2, 0.3),
            north: Uv::new(0.4, 0.5),
            south: Uv::new(0.6, 0.7),
            east: Uv::new(0.8, 0.9),
            west: Uv::new(1.0, 0.0),
        };
        buffer.push(VoxelCoord::new(1, 2, 3), 4, &faces);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(buffer.block_indices, vec![4]);
        assert_eq!(buffer.face_uvs.len(), 12);
        assert_eq!(buffer.face_uvs[0], 0.0);
        assert_eq!(buffer.face_uvs[1], 0.1);
        assert_eq!(buffer.face_uvs[10], 1.0);
        assert!((buffer.voxel_size - 0.25).abs() < 1e-12);
    }

    #[test]
    fn default_is_empty() {
        let buffer = BlockMeshBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}
