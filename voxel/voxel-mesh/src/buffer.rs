//! Flat render buffers generated from a voxel mesh.

use cobble_types::Rgb;

use crate::coord::VoxelCoord;

/// Flat per-voxel arrays for a renderer.
///
/// Entries are parallel: voxel `i` occupies `positions[3*i..3*i+3]`,
/// `colours[3*i..3*i+3]`, and `occupancy[i]`. Positions are voxel-space
/// centres; multiply by [`VoxelMeshBuffer::voxel_size`] for world units.
/// Generated on demand, never persisted.
#[derive(Debug, Clone, Default)]
pub struct VoxelMeshBuffer {
    /// Voxel centre positions, three floats per voxel.
    pub positions: Vec<f32>,
    /// Averaged voxel colours, three floats per voxel.
    pub colours: Vec<f32>,
    /// Moore neighbour occupancy mask per voxel (zero when ambient
    /// occlusion was not requested).
    pub occupancy: Vec<u32>,
    /// World-space edge length of one voxel.
    pub voxel_size: f64,
}

impl VoxelMeshBuffer {
    pub(crate) fn with_capacity(voxel_count: usize, voxel_size: f64) -> Self {
        Self {
            positions: Vec::with_capacity(voxel_count * 3),
            colours: Vec::with_capacity(voxel_count * 3),
            occupancy: Vec::with_capacity(voxel_count),
            voxel_size,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push(&mut self, coord: VoxelCoord, colour: Rgb, mask: u32) {
        self.positions.push(coord.x as f32);
        self.positions.push(coord.y as f32);
        self.positions.push(coord.z as f32);
        self.colours.push(colour.r as f32);
        self.colours.push(colour.g as f32);
        self.colours.push(colour.b as f32);
        self.occupancy.push(mask);
    }

    /// Number of voxels in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupancy.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_arrays_parallel() {
        let mut buffer = VoxelMeshBuffer::with_capacity(2, 1.0);
        buffer.push(VoxelCoord::new(1, 2, 3), Rgb::new(0.5, 0.25, 0.0), 7);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(buffer.colours[0], 0.5);
        assert_eq!(buffer.occupancy, vec![7]);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn default_is_empty() {
        let buffer = VoxelMeshBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }
}
