//! End-to-end regression tests for the cobble pipeline.
//!
//! Organized in three tiers of increasing integration depth:
//!
//! - Tier 1: Foundation (types, colour conversion, triangles)
//! - Tier 2: Voxelisation (strategies, fill properties, diagnostics)
//! - Tier 3: Block assignment (palette matching over voxelised meshes)
//!
//! A failure here after an API change indicates a break in the public
//! pipeline surface, not just in one member crate.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::HashMap;

use approx::assert_relative_eq;
use cobble::prelude::*;

// =====================================================================
// TIER 1: Foundation
// =====================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn colour_types_round_trip() {
        let colour = Rgb::from_u8(200, 100, 50);
        assert_eq!(colour.to_u8(), [200, 100, 50]);

        let lab = Rgb::WHITE.to_lab();
        assert_relative_eq!(lab.l, 100.0, max_relative = 1e-4);

        let d = ColourSpace::Rgb.distance_squared(Rgb::BLACK, Rgb::WHITE);
        assert_relative_eq!(d, 3.0, max_relative = 1e-12);
    }

    #[test]
    fn triangle_queries() {
        let triangle = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        assert_relative_eq!(triangle.area(), 2.0, max_relative = 1e-12);
        let normal = triangle.normal().unwrap();
        assert_relative_eq!(normal.z.abs(), 1.0, max_relative = 1e-12);

        let aabb = triangle.aabb();
        assert!(aabb.contains(&triangle.centroid()));
    }

    #[test]
    fn uv_triangle_interpolates() {
        let uv_triangle = UvTriangle::new(
            Triangle::new(
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ),
            [Uv::new(0.0, 0.0), Uv::new(1.0, 0.0), Uv::new(0.0, 1.0)],
            "default",
        );
        let uv = uv_triangle.uv_at(&Point3::new(0.25, 0.25, 0.0));
        assert_relative_eq!(uv.u, 0.25, max_relative = 1e-9);
        assert_relative_eq!(uv.v, 0.25, max_relative = 1e-9);
    }

    #[test]
    fn diagnostics_accumulate_across_merges() {
        let mut first = Diagnostics::new();
        first.info("grouped 12 triangles");
        let mut second = Diagnostics::new();
        second.warn("1 row had an odd intersection count");
        first.merge(second);
        assert_eq!(first.len(), 2);
        assert!(first.has_warnings());
    }
}

// =====================================================================
// TIER 2: Voxelisation
// =====================================================================

mod tier2_voxelisation {
    use super::*;

    fn occupied(mesh: &VoxelMesh) -> Vec<VoxelCoord> {
        mesh.scan_order()
    }

    #[test]
    fn cube_height_tracks_desired_height() {
        for height in [2u32, 5, 9] {
            let surface = SurfaceMesh::unit_cube(Rgb::new(0.4, 0.4, 0.4));
            let outcome = voxelise(&surface, &VoxeliseParams::new(height)).unwrap();
            let bounds = outcome.mesh.bounds().unwrap();
            let (_, dy, _) = bounds.size();
            assert!(
                dy == height || dy == height + 1,
                "height {height} produced {dy} voxel rows"
            );
            assert!(!outcome.diagnostics.has_warnings());
        }
    }

    #[test]
    fn all_strategies_agree_on_cube() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.2, 0.7, 0.4));
        let reference = voxelise(&surface, &VoxeliseParams::new(6)).unwrap();
        for strategy in [VoxeliserKind::NormalCorrected, VoxeliserKind::Bvh] {
            let params = VoxeliseParams::new(6).strategy(strategy);
            let outcome = voxelise(&surface, &params).unwrap();
            assert_eq!(
                occupied(&outcome.mesh),
                occupied(&reference.mesh),
                "strategy {strategy:?} disagrees with basic"
            );
        }
    }

    #[test]
    fn solid_colour_survives_voxelisation() {
        let colour = Rgb::new(0.15, 0.55, 0.85);
        let surface = SurfaceMesh::unit_cube(colour);
        let outcome = voxelise(&surface, &VoxeliseParams::new(4)).unwrap();
        for coord in outcome.mesh.scan_order() {
            let sampled = outcome.mesh.voxel_at(coord).unwrap().colour();
            assert_relative_eq!(sampled.r, colour.r, max_relative = 1e-9);
            assert_relative_eq!(sampled.g, colour.g, max_relative = 1e-9);
            assert_relative_eq!(sampled.b, colour.b, max_relative = 1e-9);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.3, 0.3, 0.9));
        let params = VoxeliseParams::new(7).strategy(VoxeliserKind::Bvh);
        let first = voxelise(&surface, &params).unwrap();
        let second = voxelise(&surface, &params).unwrap();
        assert_eq!(occupied(&first.mesh), occupied(&second.mesh));
        for coord in first.mesh.scan_order() {
            let a = first.mesh.voxel_at(coord).unwrap().colour();
            let b = second.mesh.voxel_at(coord).unwrap().colour();
            assert_eq!(a.to_u8(), b.to_u8());
            assert_eq!(a.r, b.r);
            assert_eq!(a.g, b.g);
            assert_eq!(a.b, b.b);
        }
    }

    #[test]
    fn flat_quad_fills_exactly_its_own_row() {
        // A unit quad on the XZ plane at y = 0, voxelised one cell tall,
        // occupies the y = 0 row only and keeps its material colour.
        let colour = Rgb::new(0.8, 0.2, 0.1);
        let quad = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        );
        let other = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 0.0),
        );
        let flat_uv = [Uv::new(0.0, 0.0); 3];
        let mut materials = HashMap::new();
        materials.insert("cloth".to_owned(), Material::solid(colour));
        let surface = SurfaceMesh::from_parts(
            vec![
                UvTriangle::new(quad, flat_uv, "cloth"),
                UvTriangle::new(other, flat_uv, "cloth"),
            ],
            materials,
        )
        .unwrap();

        let outcome = voxelise(&surface, &VoxeliseParams::new(1)).unwrap();
        assert!(!outcome.mesh.is_empty());
        for coord in outcome.mesh.scan_order() {
            assert_eq!(coord.y, 0, "voxel escaped the quad's row: {coord:?}");
            let sampled = outcome.mesh.voxel_at(coord).unwrap().colour();
            assert_relative_eq!(sampled.r, colour.r, max_relative = 1e-9);
        }
        // Open geometry: the unpaired hits are reported, not fatal.
        assert!(outcome.diagnostics.has_warnings());
    }

    #[test]
    fn voxel_buffer_arrays_stay_parallel() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.6, 0.6, 0.6));
        let mut outcome = voxelise(&surface, &VoxeliseParams::new(3)).unwrap();
        let buffer = outcome.mesh.create_buffer(true);
        assert_eq!(buffer.len(), outcome.mesh.len());
        assert_eq!(buffer.positions.len(), buffer.len() * 3);
        assert_eq!(buffer.colours.len(), buffer.len() * 3);
        assert_eq!(buffer.occupancy.len(), buffer.len());
        // An interior voxel of a filled cube has neighbours on all sides.
        assert!(buffer.occupancy.iter().any(|&mask| mask != 0));
    }

    #[test]
    fn zero_height_and_empty_mesh_are_rejected() {
        let surface = SurfaceMesh::unit_cube(Rgb::WHITE);
        assert!(matches!(
            voxelise(&surface, &VoxeliseParams::new(0)),
            Err(VoxeliseError::InvalidHeight)
        ));

        let empty = SurfaceMesh::from_parts(Vec::new(), HashMap::new()).unwrap();
        assert!(matches!(
            voxelise(&empty, &VoxeliseParams::new(4)),
            Err(VoxeliseError::EmptyMesh)
        ));
    }
}

// =====================================================================
// TIER 3: Block assignment
// =====================================================================

mod tier3_block_assignment {
    use super::*;

    fn grey_atlas() -> TextureAtlas {
        TextureAtlas::new(
            vec![
                AtlasBlock {
                    name: "chalk".into(),
                    colour: Rgb::new(0.9, 0.9, 0.9),
                    faces: BlockFaces::uniform(Uv::new(0.0, 0.0)),
                },
                AtlasBlock {
                    name: "slate".into(),
                    colour: Rgb::new(0.3, 0.3, 0.3),
                    faces: BlockFaces::uniform(Uv::new(0.5, 0.0)),
                },
            ],
            16,
        )
    }

    #[test]
    fn block_keys_match_voxel_keys() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.35, 0.35, 0.35));
        let voxelised = voxelise(&surface, &VoxeliseParams::new(5)).unwrap();

        let palette = BlockPalette::new(["chalk", "slate"]);
        let assigned = assign_blocks(
            &voxelised.mesh,
            &palette,
            &grey_atlas(),
            &AssignParams::new(),
        )
        .unwrap();

        assert_eq!(assigned.mesh.len(), voxelised.mesh.len());
        for coord in voxelised.mesh.scan_order() {
            let entry = assigned.mesh.entry_at(coord).unwrap();
            assert_eq!(entry.name, "slate");
        }
    }

    #[test]
    fn assignment_without_dithering_is_bit_identical() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.6, 0.5, 0.4));
        let voxelised = voxelise(&surface, &VoxeliseParams::new(6)).unwrap();
        let palette = BlockPalette::new(["chalk", "slate"]);
        let params = AssignParams::new().colour_space(ColourSpace::Lab);

        let first = assign_blocks(&voxelised.mesh, &palette, &grey_atlas(), &params).unwrap();
        let second = assign_blocks(&voxelised.mesh, &palette, &grey_atlas(), &params).unwrap();
        for coord in first.mesh.scan_order() {
            assert_eq!(first.mesh.index_at(coord), second.mesh.index_at(coord));
        }
    }

    #[test]
    fn block_buffer_carries_face_coordinates() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.85, 0.85, 0.85));
        let voxelised = voxelise(&surface, &VoxeliseParams::new(3)).unwrap();
        let palette = BlockPalette::new(["chalk"]);
        let assigned = assign_blocks(
            &voxelised.mesh,
            &palette,
            &grey_atlas(),
            &AssignParams::new(),
        )
        .unwrap();

        let buffer = assigned.mesh.create_buffer();
        assert_eq!(buffer.len(), assigned.mesh.len());
        assert_eq!(buffer.positions.len(), buffer.len() * 3);
        assert_eq!(buffer.face_uvs.len(), buffer.len() * 12);
        assert!(buffer.block_indices.iter().all(|&index| index == 0));
    }

    #[test]
    fn unknown_palette_names_surface_as_warnings() {
        let surface = SurfaceMesh::unit_cube(Rgb::new(0.4, 0.4, 0.4));
        let voxelised = voxelise(&surface, &VoxeliseParams::new(2)).unwrap();
        let palette = BlockPalette::new(["obsidian", "slate"]);
        let assigned = assign_blocks(
            &voxelised.mesh,
            &palette,
            &grey_atlas(),
            &AssignParams::new(),
        )
        .unwrap();
        assert_eq!(assigned.diagnostics.warnings().count(), 1);
        assert_eq!(assigned.mesh.entries().len(), 1);
    }

    #[test]
    fn empty_palette_fails_before_processing() {
        let surface = SurfaceMesh::unit_cube(Rgb::WHITE);
        let voxelised = voxelise(&surface, &VoxeliseParams::new(2)).unwrap();
        let result = assign_blocks(
            &voxelised.mesh,
            &BlockPalette::default(),
            &grey_atlas(),
            &AssignParams::new(),
        );
        assert!(matches!(result, Err(AssignError::EmptyPalette)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn provider_documents_deserialise() {
        let atlas: TextureAtlas = serde_json::from_str(
            r#"{
                "blocks": [
                    {
                        "name": "chalk",
                        "colour": { "r": 0.9, "g": 0.9, "b": 0.9 },
                        "faces": {
                            "up": { "u": 0.0, "v": 0.0 },
                            "down": { "u": 0.0, "v": 0.0 },
                            "north": { "u": 0.0, "v": 0.0 },
                            "south": { "u": 0.0, "v": 0.0 },
                            "east": { "u": 0.0, "v": 0.0 },
                            "west": { "u": 0.0, "v": 0.0 }
                        }
                    }
                ],
                "texels_per_block": 16
            }"#,
        )
        .unwrap();
        let palette: BlockPalette =
            serde_json::from_str(r#"{ "block_names": ["chalk"] }"#).unwrap();

        let surface = SurfaceMesh::unit_cube(Rgb::new(0.9, 0.9, 0.9));
        let voxelised = voxelise(&surface, &VoxeliseParams::new(2)).unwrap();
        let assigned =
            assign_blocks(&voxelised.mesh, &palette, &atlas, &AssignParams::new()).unwrap();
        assert_eq!(assigned.mesh.len(), voxelised.mesh.len());
    }
}
