//! Texture atlas documents from the palette/atlas provider.

use cobble_types::{Rgb, Uv};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Texture coordinates for the six faces of a block.
///
/// Coordinates point into the atlas image; the renderer pairs them with
/// [`TextureAtlas::texels_per_block`] to cut out each face tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockFaces {
    /// Top face (+y).
    pub up: Uv,
    /// Bottom face (-y).
    pub down: Uv,
    /// North face (-z).
    pub north: Uv,
    /// South face (+z).
    pub south: Uv,
    /// East face (+x).
    pub east: Uv,
    /// West face (-x).
    pub west: Uv,
}

impl BlockFaces {
    /// The same coordinate on every face.
    #[must_use]
    pub const fn uniform(uv: Uv) -> Self {
        Self {
            up: uv,
            down: uv,
            north: uv,
            south: uv,
            east: uv,
            west: uv,
        }
    }

    /// Face coordinates in buffer emission order: up, down, north,
    /// south, east, west.
    #[must_use]
    pub const fn in_order(&self) -> [Uv; 6] {
        [
            self.up,
            self.down,
            self.north,
            self.south,
            self.east,
            self.west,
        ]
    }
}

/// One block in the atlas: a name, an average colour, and the face
/// coordinates into the atlas image.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtlasBlock {
    /// Unique block name, the key palettes select by.
    pub name: String,
    /// Average colour of the block's textures.
    pub colour: Rgb,
    /// Per-face texture coordinates.
    pub faces: BlockFaces,
}

/// A read-only atlas document listing every known block.
///
/// # Example
///
/// ```
/// use block_mesh::{AtlasBlock, BlockFaces, TextureAtlas};
/// use cobble_types::{Rgb, Uv};
///
/// let atlas = TextureAtlas::new(
///     vec![AtlasBlock {
///         name: "stone".into(),
///         colour: Rgb::new(0.5, 0.5, 0.5),
///         faces: BlockFaces::uniform(Uv::new(0.0, 0.0)),
///     }],
///     16,
/// );
/// assert!(atlas.block("stone").is_some());
/// assert!(atlas.block("lava").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureAtlas {
    /// Every block the atlas knows about.
    pub blocks: Vec<AtlasBlock>,
    /// Edge length of one face tile in the atlas image, in texels.
    pub texels_per_block: u32,
}

impl TextureAtlas {
    /// Create an atlas from its parts.
    #[must_use]
    pub const fn new(blocks: Vec<AtlasBlock>, texels_per_block: u32) -> Self {
        Self {
            blocks,
            texels_per_block,
        }
    }

    /// Look up a block by name.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&AtlasBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Number of blocks in the atlas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the atlas lists no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// An ordered selection of atlas blocks by name.
///
/// Order matters: when two blocks are equally close to a voxel colour,
/// the one listed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockPalette {
    /// Names of the atlas blocks the palette selects, in priority order.
    pub block_names: Vec<String>,
}

impl BlockPalette {
    /// Create a palette from block names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            block_names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of names in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.block_names.len()
    }

    /// Whether the palette selects no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.block_names.is_empty()
    }
}
