//! The voxelisation engine shared by all strategies.

use cobble_types::{Aabb, Diagnostics, Point3, Rgb, Triangle};
use mesh_surface::{SurfaceMesh, TextureFiltering};
use voxel_mesh::{VoxelCoord, VoxelMesh};

use crate::bvh::Bvh;
use crate::error::{VoxeliseError, VoxeliseResult};
use crate::outcome::VoxeliseOutcome;
use crate::params::{VoxeliseParams, VoxeliserKind};
use crate::ray::{Axis, Ray, RayHit, ray_triangle_intersect};

/// Hits closer than this along a ray collapse into one. Guards against
/// double counting when a ray grazes a shared edge or vertex.
const HIT_MERGE_EPSILON: f64 = 1e-6;

/// Below this world-space extent an axis counts as flat.
const FLAT_EXTENT_EPSILON: f64 = 1e-9;

/// Sub-cell offsets used for multisample colouring, in the two axes
/// orthogonal to the ray.
const SUB_CELL_OFFSETS: [(f64, f64); 4] = [(-0.25, -0.25), (-0.25, 0.25), (0.25, -0.25), (0.25, 0.25)];

/// Voxelise a surface mesh.
///
/// The mesh is scaled into voxel space (cell centres at integer
/// coordinates, cell edge 1), rays are cast along principal axes per
/// the chosen strategy, and intersections are paired even-odd into
/// inside spans. Every cell centre inside a span becomes a voxel, and
/// each surface hit also claims its nearest cell, so thin and open
/// geometry still produces voxels. Voxel colours come from the nearest
/// span-endpoint triangle through barycentric UV interpolation and
/// material sampling.
///
/// # Errors
///
/// - [`VoxeliseError::InvalidHeight`] when `params.desired_height` is 0.
/// - [`VoxeliseError::EmptyMesh`] when the mesh has no triangles or no
///   spatial extent on any axis.
/// - [`VoxeliseError::Surface`] when material sampling fails.
///
/// # Example
///
/// ```
/// use cobble_types::Rgb;
/// use mesh_surface::SurfaceMesh;
/// use voxel_cast::{VoxeliseParams, voxelise};
///
/// let cube = SurfaceMesh::unit_cube(Rgb::new(0.8, 0.2, 0.2));
/// let outcome = voxelise(&cube, &VoxeliseParams::new(8)).unwrap();
/// let (_, height, _) = outcome.mesh.bounds().unwrap().size();
/// assert!((8..=9).contains(&height));
/// ```
pub fn voxelise(surface: &SurfaceMesh, params: &VoxeliseParams) -> VoxeliseResult<VoxeliseOutcome> {
    if params.desired_height == 0 {
        return Err(VoxeliseError::invalid_height());
    }
    if surface.is_empty() {
        return Err(VoxeliseError::empty_mesh());
    }

    let mut diagnostics = Diagnostics::new();
    let voxel_size = resolve_voxel_size(surface, params.desired_height, &mut diagnostics)?;

    let scale = 1.0 / voxel_size;
    let scaled: Vec<Triangle> = surface
        .triangles()
        .iter()
        .map(|uv_triangle| scale_triangle(&uv_triangle.triangle, scale))
        .collect();

    let mut caster = Caster {
        surface,
        scaled: &scaled,
        voxel_size,
        multisample: params.multisample,
        filtering: params.texture_filtering,
        mesh: VoxelMesh::new(voxel_size),
        odd_rows: 0,
    };

    match params.strategy {
        VoxeliserKind::Basic => {
            for axis in Axis::ALL {
                caster.cast_rows(axis, &HitSource::All)?;
            }
        }
        VoxeliserKind::NormalCorrected => {
            let groups = group_by_dominant_axis(&scaled, &mut diagnostics);
            for axis in Axis::ALL {
                let group = &groups[axis.index()];
                if !group.is_empty() {
                    caster.cast_rows(axis, &HitSource::Subset(group))?;
                }
            }
        }
        VoxeliserKind::Bvh => {
            let (bvh, skipped) = Bvh::build(&scaled);
            if skipped > 0 {
                diagnostics
                    .warn(format!("{skipped} triangles without a finite bounding box were skipped"));
            }
            for axis in Axis::ALL {
                caster.cast_rows(axis, &HitSource::Tree(&bvh))?;
            }
        }
    }

    if caster.odd_rows > 0 {
        diagnostics.warn(format!(
            "{} rows had an odd intersection count; their trailing spans were dropped",
            caster.odd_rows
        ));
    }

    let mesh = caster.mesh;
    tracing::info!(
        triangles = surface.triangle_count(),
        voxels = mesh.len(),
        voxel_size,
        strategy = ?params.strategy,
        "voxelised surface mesh"
    );
    Ok(VoxeliseOutcome { mesh, diagnostics })
}

/// Derive the voxel edge length from the mesh bounds.
///
/// Flat meshes with no height take the widest extent instead so a
/// single sheet of geometry still voxelises.
fn resolve_voxel_size(
    surface: &SurfaceMesh,
    desired_height: u32,
    diagnostics: &mut Diagnostics,
) -> VoxeliseResult<f64> {
    let size = surface.bounds().size();
    if size.y > FLAT_EXTENT_EPSILON {
        return Ok(size.y / f64::from(desired_height));
    }
    let widest = size.x.max(size.y).max(size.z);
    if widest <= FLAT_EXTENT_EPSILON {
        return Err(VoxeliseError::empty_mesh());
    }
    diagnostics.info("mesh has no height; voxel size derived from the widest extent");
    Ok(widest / f64::from(desired_height))
}

fn scale_triangle(triangle: &Triangle, scale: f64) -> Triangle {
    let s = |p: &Point3<f64>| Point3::new(p.x * scale, p.y * scale, p.z * scale);
    Triangle::new(s(&triangle.v0), s(&triangle.v1), s(&triangle.v2))
}

/// Partition triangle indices by the axis most parallel to the face
/// normal. Degenerate triangles fall back to the Y group.
fn group_by_dominant_axis(triangles: &[Triangle], diagnostics: &mut Diagnostics) -> [Vec<usize>; 3] {
    let mut groups: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut degenerate = 0usize;
    for (index, triangle) in triangles.iter().enumerate() {
        match triangle.normal() {
            Some(normal) => groups[Axis::dominant(&normal).index()].push(index),
            None => {
                degenerate += 1;
                groups[Axis::Y.index()].push(index);
            }
        }
    }
    if degenerate > 0 {
        diagnostics.warn(format!(
            "{degenerate} degenerate triangles fell back to the y axis group"
        ));
    }
    diagnostics.info(format!(
        "{} triangles grouped along x, {} along y, {} along z",
        groups[0].len(),
        groups[1].len(),
        groups[2].len()
    ));
    groups
}

/// Where a row's ray/triangle candidates come from.
enum HitSource<'a> {
    /// Test every triangle.
    All,
    /// Test only the listed triangle indices.
    Subset(&'a [usize]),
    /// Query a prebuilt hierarchy.
    Tree(&'a Bvh),
}

impl HitSource<'_> {
    fn collect(&self, ray: &Ray, triangles: &[Triangle]) -> Vec<RayHit> {
        match self {
            Self::All => triangles
                .iter()
                .enumerate()
                .filter_map(|(index, triangle)| {
                    ray_triangle_intersect(ray, triangle).map(|t| RayHit { t, triangle: index })
                })
                .collect(),
            Self::Subset(indices) => indices
                .iter()
                .filter_map(|&index| {
                    ray_triangle_intersect(ray, &triangles[index]).map(|t| RayHit { t, triangle: index })
                })
                .collect(),
            Self::Tree(bvh) => bvh.intersections(ray, triangles),
        }
    }

    fn bounds(&self, triangles: &[Triangle]) -> Aabb {
        let union_of = |indices: &mut dyn Iterator<Item = usize>| {
            indices.fold(Aabb::empty(), |acc, index| acc.union(&triangles[index].aabb()))
        };
        match self {
            Self::All | Self::Tree(_) => union_of(&mut (0..triangles.len())),
            Self::Subset(indices) => union_of(&mut indices.iter().copied()),
        }
    }
}

/// Mutable state threaded through one voxelise call.
struct Caster<'a> {
    surface: &'a SurfaceMesh,
    scaled: &'a [Triangle],
    voxel_size: f64,
    multisample: bool,
    filtering: TextureFiltering,
    mesh: VoxelMesh,
    odd_rows: usize,
}

impl Caster<'_> {
    /// Cast one ray per integer grid row orthogonal to `axis` and feed
    /// every row with hits through the parity pipeline.
    fn cast_rows(&mut self, axis: Axis, source: &HitSource<'_>) -> VoxeliseResult<()> {
        let aabb = source.bounds(self.scaled);
        if aabb.is_empty() {
            return Ok(());
        }
        let (row_a, row_b) = axis.orthogonal();
        let (a_min, a_max) = grid_span(&aabb, row_a);
        let (b_min, b_max) = grid_span(&aabb, row_b);
        let start = aabb.min[axis.index()] - 1.0;

        for a in a_min..=a_max {
            for b in b_min..=b_max {
                let mut origin = Point3::origin();
                origin[axis.index()] = start;
                origin[row_a.index()] = f64::from(a);
                origin[row_b.index()] = f64::from(b);
                let ray = Ray::new(origin, axis.unit());

                let mut hits = source.collect(&ray, self.scaled);
                if hits.is_empty() {
                    continue;
                }
                sort_hits(&mut hits);
                let hits = dedupe_hits(hits);
                self.fill_row(axis, &ray, &hits)?;
            }
        }
        Ok(())
    }

    /// Pair sorted hits even-odd into inside spans and add voxels.
    ///
    /// Span endpoints claim their nearest cell even when the cell
    /// centre falls just outside the span, so surfaces thinner than a
    /// cell are not lost. An unpaired trailing hit still claims its
    /// cell but fills nothing.
    fn fill_row(&mut self, axis: Axis, ray: &Ray, hits: &[RayHit]) -> VoxeliseResult<()> {
        let origin_along = ray.origin[axis.index()];

        let mut index = 0;
        while index + 1 < hits.len() {
            let entry = hits[index];
            let exit = hits[index + 1];
            let p_entry = origin_along + entry.t;
            let p_exit = origin_along + exit.t;
            let lo = round_half_up(p_entry);
            let hi = round_half_down(p_exit);

            let entry_samples = self.hit_samples(axis, ray, entry)?;
            let exit_samples = self.hit_samples(axis, ray, exit)?;
            for along in lo..=hi {
                let centre = f64::from(along);
                let samples = if centre - p_entry <= p_exit - centre {
                    &entry_samples
                } else {
                    &exit_samples
                };
                let coord = row_cell(axis, ray, along);
                for &sample in samples {
                    self.mesh.add_voxel(coord, sample);
                }
            }
            index += 2;
        }

        if hits.len() % 2 == 1 {
            let trailing = hits[hits.len() - 1];
            let coord = row_cell(axis, ray, round_half_up(origin_along + trailing.t));
            for &sample in &self.hit_samples(axis, ray, trailing)? {
                self.mesh.add_voxel(coord, sample);
            }
            self.odd_rows += 1;
        }
        Ok(())
    }

    /// Colour samples contributed by one surface hit.
    ///
    /// Always contains the centre sample; multisample adds up to four
    /// sub-cell samples re-cast against the same triangle.
    fn hit_samples(&self, axis: Axis, ray: &Ray, hit: RayHit) -> VoxeliseResult<Vec<Rgb>> {
        let mut samples = Vec::with_capacity(if self.multisample { 5 } else { 1 });
        samples.push(self.sample_triangle(hit.triangle, &ray.point_at(hit.t))?);
        if self.multisample {
            let (row_a, row_b) = axis.orthogonal();
            for (da, db) in SUB_CELL_OFFSETS {
                let mut origin = ray.origin;
                origin[row_a.index()] += da;
                origin[row_b.index()] += db;
                let offset_ray = Ray::new(origin, ray.direction);
                if let Some(t) = ray_triangle_intersect(&offset_ray, &self.scaled[hit.triangle]) {
                    samples.push(self.sample_triangle(hit.triangle, &offset_ray.point_at(t))?);
                }
            }
        }
        Ok(samples)
    }

    /// Sample the material colour of a triangle at a voxel-space point.
    fn sample_triangle(&self, index: usize, point: &Point3<f64>) -> VoxeliseResult<Rgb> {
        let source = &self.surface.triangles()[index];
        let world = Point3::new(
            point.x * self.voxel_size,
            point.y * self.voxel_size,
            point.z * self.voxel_size,
        );
        let uv = source.uv_at(&world);
        Ok(self.surface.sample_material(&source.material, uv, self.filtering)?)
    }
}

fn sort_hits(hits: &mut [RayHit]) {
    hits.sort_unstable_by(|a, b| {
        a.t.partial_cmp(&b.t)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.triangle.cmp(&b.triangle))
    });
}

/// Collapse runs of hits closer than [`HIT_MERGE_EPSILON`], keeping the
/// first hit of each run. Input must be sorted by distance.
fn dedupe_hits(hits: Vec<RayHit>) -> Vec<RayHit> {
    let mut deduped: Vec<RayHit> = Vec::with_capacity(hits.len());
    for hit in hits {
        if deduped
            .last()
            .map_or(true, |last| hit.t - last.t > HIT_MERGE_EPSILON)
        {
            deduped.push(hit);
        }
    }
    deduped
}

/// Integer grid rows covered by a box along one axis.
#[allow(clippy::cast_possible_truncation)]
fn grid_span(aabb: &Aabb, axis: Axis) -> (i32, i32) {
    (
        aabb.min[axis.index()].floor() as i32,
        aabb.max[axis.index()].ceil() as i32,
    )
}

/// Nearest integer, rounding halves up.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Nearest integer, rounding halves down.
#[allow(clippy::cast_possible_truncation)]
fn round_half_down(value: f64) -> i32 {
    (value - 0.5).ceil() as i32
}

/// The cell on a ray's row at the given position along the cast axis.
#[allow(clippy::cast_possible_truncation)]
fn row_cell(axis: Axis, ray: &Ray, along: i32) -> VoxelCoord {
    let mut coords = [0i32; 3];
    coords[axis.index()] = along;
    let (row_a, row_b) = axis.orthogonal();
    coords[row_a.index()] = ray.origin[row_a.index()].round() as i32;
    coords[row_b.index()] = ray.origin[row_b.index()].round() as i32;
    VoxelCoord::new(coords[0], coords[1], coords[2])
}
