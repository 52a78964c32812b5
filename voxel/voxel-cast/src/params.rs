//! Parameters for voxelisation.

use mesh_surface::TextureFiltering;

/// Which voxelisation strategy to run.
///
/// All three produce a sparse [`voxel_mesh::VoxelMesh`] from the same
/// ray-cast parity pipeline; they differ in which rays are cast and how
/// ray/triangle candidates are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoxeliserKind {
    /// Cast rays along all three principal axes against every triangle.
    #[default]
    Basic,
    /// Group triangles by the axis most parallel to their normal and
    /// cast each group only along that axis.
    NormalCorrected,
    /// Like [`VoxeliserKind::Basic`] but with candidate lookup through a
    /// bounding volume hierarchy built for the call.
    Bvh,
}

/// Parameters for a voxelise call.
///
/// # Example
///
/// ```
/// use voxel_cast::{VoxeliseParams, VoxeliserKind};
///
/// // Default parameters target an 80-voxel-tall output.
/// let params = VoxeliseParams::default();
/// assert_eq!(params.desired_height, 80);
///
/// let params = VoxeliseParams::new(32)
///     .strategy(VoxeliserKind::Bvh)
///     .multisample(false);
/// assert_eq!(params.desired_height, 32);
/// assert!(!params.multisample);
/// ```
#[derive(Debug, Clone)]
pub struct VoxeliseParams {
    /// Target output height in voxels along Y. Must be at least 1; the
    /// voxel size is derived as mesh height / `desired_height`.
    pub desired_height: u32,

    /// Which strategy casts the rays.
    pub strategy: VoxeliserKind,

    /// Whether each surface hit contributes four extra sub-cell colour
    /// samples in addition to the centre sample.
    pub multisample: bool,

    /// Filtering used when sampling textured materials.
    pub texture_filtering: TextureFiltering,
}

impl Default for VoxeliseParams {
    fn default() -> Self {
        Self::new(80)
    }
}

impl VoxeliseParams {
    /// Create params targeting the given output height in voxels.
    #[must_use]
    pub const fn new(desired_height: u32) -> Self {
        Self {
            desired_height,
            strategy: VoxeliserKind::Basic,
            multisample: true,
            texture_filtering: TextureFiltering::Nearest,
        }
    }

    /// Set the voxelisation strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: VoxeliserKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable multisample colouring.
    #[must_use]
    pub const fn multisample(mut self, multisample: bool) -> Self {
        self.multisample = multisample;
        self
    }

    /// Set the texture filtering mode.
    #[must_use]
    pub const fn texture_filtering(mut self, filtering: TextureFiltering) -> Self {
        self.texture_filtering = filtering;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = VoxeliseParams::default();
        assert_eq!(params.desired_height, 80);
        assert_eq!(params.strategy, VoxeliserKind::Basic);
        assert!(params.multisample);
        assert_eq!(params.texture_filtering, TextureFiltering::Nearest);
    }

    #[test]
    fn builder_pattern() {
        let params = VoxeliseParams::new(16)
            .strategy(VoxeliserKind::NormalCorrected)
            .multisample(false)
            .texture_filtering(TextureFiltering::Linear);
        assert_eq!(params.desired_height, 16);
        assert_eq!(params.strategy, VoxeliserKind::NormalCorrected);
        assert!(!params.multisample);
        assert_eq!(params.texture_filtering, TextureFiltering::Linear);
    }
}
