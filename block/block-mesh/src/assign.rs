//! Nearest-colour palette assignment with optional error diffusion.

use std::collections::HashMap;

use cobble_types::{Diagnostics, Rgb};
use voxel_mesh::{VoxelCoord, VoxelMesh};

use crate::atlas::{BlockPalette, TextureAtlas};
use crate::error::{AssignError, AssignResult};
use crate::mesh::{BlockMesh, PaletteEntry};
use crate::outcome::AssignOutcome;
use crate::params::AssignParams;

/// Error diffusion weights for the forward neighbours, in
/// (dx, dy, dz, weight) form. Targets all lie later in scan order than
/// the voxel the error came from.
const DIFFUSION_KERNEL: [(i32, i32, i32, f64); 4] = [
    (1, 0, 0, 7.0 / 16.0),
    (0, 1, 0, 5.0 / 16.0),
    (0, 0, 1, 3.0 / 16.0),
    (1, 1, 0, 1.0 / 16.0),
];

/// Assign a palette block to every occupied voxel.
///
/// Voxels are visited in [`VoxelMesh::scan_order`] and matched against
/// the palette entries resolved from the atlas; the entry with the
/// strictly smallest colour distance wins, so earlier palette entries
/// win exact ties. With `params.dithering` set, the quantisation error
/// of each match is diffused to occupied forward neighbours before they
/// are matched themselves.
///
/// Palette names missing from the atlas are skipped with a diagnostics
/// warning each; a palette that resolves to no entries at all fails with
/// [`AssignError::EmptyPalette`] before any voxel is processed.
///
/// # Errors
///
/// Returns [`AssignError::EmptyPalette`] when no palette name resolves
/// against the atlas.
///
/// # Example
///
/// ```
/// use block_mesh::{
///     AssignParams, AtlasBlock, BlockFaces, BlockPalette, TextureAtlas, assign_blocks,
/// };
/// use cobble_types::Rgb;
/// use voxel_mesh::{VoxelCoord, VoxelMesh};
///
/// let atlas = TextureAtlas::new(
///     vec![
///         AtlasBlock {
///             name: "snow".into(),
///             colour: Rgb::new(0.95, 0.95, 0.95),
///             faces: BlockFaces::default(),
///         },
///         AtlasBlock {
///             name: "coal".into(),
///             colour: Rgb::new(0.1, 0.1, 0.1),
///             faces: BlockFaces::default(),
///         },
///     ],
///     16,
/// );
/// let palette = BlockPalette::new(["snow", "coal"]);
///
/// let mut voxels = VoxelMesh::new(1.0);
/// voxels.add_voxel(VoxelCoord::origin(), Rgb::new(0.9, 0.9, 0.9));
///
/// let outcome = assign_blocks(&voxels, &palette, &atlas, &AssignParams::new()).unwrap();
/// assert_eq!(outcome.mesh.entry_at(VoxelCoord::origin()).unwrap().name, "snow");
/// ```
pub fn assign_blocks(
    voxels: &VoxelMesh,
    palette: &BlockPalette,
    atlas: &TextureAtlas,
    params: &AssignParams,
) -> AssignResult<AssignOutcome> {
    let mut diagnostics = Diagnostics::new();
    let entries = resolve_palette(palette, atlas, &mut diagnostics);
    if entries.is_empty() {
        return Err(AssignError::EmptyPalette);
    }

    let coords = voxels.scan_order();
    let mut assignments = HashMap::with_capacity(coords.len());
    let mut carried: HashMap<VoxelCoord, Rgb> = HashMap::new();

    for coord in coords {
        let Some(voxel) = voxels.voxel_at(coord) else {
            continue;
        };
        let true_colour = if params.dithering {
            let error = carried.remove(&coord).unwrap_or_default();
            (voxel.colour() + error).clamped()
        } else {
            voxel.colour()
        };

        let index = nearest_entry(&entries, true_colour, params);
        assignments.insert(coord, index);

        if params.dithering {
            let error = true_colour - entries[index].colour;
            for (dx, dy, dz, weight) in DIFFUSION_KERNEL {
                let target = coord.offset(dx, dy, dz);
                if voxels.is_voxel_at(target) {
                    *carried.entry(target).or_default() += error * weight;
                }
            }
        }
    }

    let mesh = BlockMesh::new(assignments, entries, voxels.voxel_size());
    tracing::info!(
        voxels = mesh.len(),
        palette_entries = mesh.entries().len(),
        colour_space = ?params.colour_space,
        dithering = params.dithering,
        "assigned palette blocks"
    );
    Ok(AssignOutcome { mesh, diagnostics })
}

/// Resolve palette names against the atlas, preserving palette order.
///
/// Unknown names warn and are skipped.
fn resolve_palette(
    palette: &BlockPalette,
    atlas: &TextureAtlas,
    diagnostics: &mut Diagnostics,
) -> Vec<PaletteEntry> {
    let mut entries = Vec::with_capacity(palette.block_names.len());
    for name in &palette.block_names {
        if let Some(block) = atlas.block(name) {
            entries.push(PaletteEntry {
                name: block.name.clone(),
                colour: block.colour,
                faces: block.faces,
            });
        } else {
            diagnostics.warn(format!("palette block '{name}' is not in the atlas"));
        }
    }
    entries
}

/// Index of the entry nearest to `colour` in the configured space.
/// Strictly smaller distance wins, so the first of equally distant
/// entries keeps the slot. `entries` must be non-empty.
fn nearest_entry(entries: &[PaletteEntry], colour: Rgb, params: &AssignParams) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, entry) in entries.iter().enumerate() {
        let distance = params.colour_space.distance_squared(colour, entry.colour);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}
