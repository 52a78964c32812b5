//! Configuration for a block assignment call.

use cobble_types::ColourSpace;

/// Parameters controlling palette matching.
///
/// # Example
///
/// ```
/// use block_mesh::AssignParams;
/// use cobble_types::ColourSpace;
///
/// let params = AssignParams::new()
///     .colour_space(ColourSpace::Lab)
///     .dithering(true);
/// assert_eq!(params.colour_space, ColourSpace::Lab);
/// assert!(params.dithering);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignParams {
    /// Colour space used for nearest-colour matching.
    pub colour_space: ColourSpace,
    /// Whether quantisation error diffuses to forward neighbours.
    pub dithering: bool,
}

impl AssignParams {
    /// Parameters with RGB matching and dithering off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colour_space: ColourSpace::Rgb,
            dithering: false,
        }
    }

    /// Set the matching colour space.
    #[must_use]
    pub const fn colour_space(mut self, colour_space: ColourSpace) -> Self {
        self.colour_space = colour_space;
        self
    }

    /// Enable or disable error diffusion.
    #[must_use]
    pub const fn dithering(mut self, dithering: bool) -> Self {
        self.dithering = dithering;
        self
    }
}

impl Default for AssignParams {
    fn default() -> Self {
        Self::new()
    }
}
