//! The frozen input surface mesh.

use std::collections::HashMap;

use cobble_types::{Aabb, Point3, Rgb, Triangle, Uv, UvTriangle};

use crate::error::{SurfaceError, SurfaceResult};
use crate::material::{Material, TextureFiltering};

/// A triangulated surface with named materials and per-triangle UVs.
///
/// The mesh is frozen at construction: [`SurfaceMesh::from_parts`]
/// validates that every triangle's material name resolves, and no
/// mutation is possible afterwards. Triangle insertion order is
/// preserved.
///
/// # Example
///
/// ```
/// use cobble_types::Rgb;
/// use mesh_surface::SurfaceMesh;
///
/// let mesh = SurfaceMesh::unit_cube(Rgb::new(0.5, 0.5, 0.5));
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!((mesh.bounds().size().y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    triangles: Vec<UvTriangle>,
    materials: HashMap<String, Material>,
}

impl SurfaceMesh {
    /// Assemble a mesh from triangles and a material table.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownMaterial`] when any triangle is
    /// bound to a name missing from `materials`.
    pub fn from_parts(
        triangles: Vec<UvTriangle>,
        materials: HashMap<String, Material>,
    ) -> SurfaceResult<Self> {
        for triangle in &triangles {
            if !materials.contains_key(&triangle.material) {
                return Err(SurfaceError::unknown_material(triangle.material.clone()));
            }
        }
        Ok(Self {
            triangles,
            materials,
        })
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangles in insertion order.
    #[must_use]
    pub fn triangles(&self) -> &[UvTriangle] {
        &self.triangles
    }

    /// Look up a material by name.
    #[must_use]
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Tightest world-space box around all triangles.
    ///
    /// Returns an empty box for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for triangle in &self.triangles {
            aabb = aabb.union(&triangle.triangle.aabb());
        }
        aabb
    }

    /// Sample the colour of a named material at a UV coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnknownMaterial`] when `name` does not
    /// resolve. Construction validates all triangle bindings, so hitting
    /// this from a triangle-driven sample indicates a caller bug.
    pub fn sample_material(
        &self,
        name: &str,
        uv: Uv,
        filtering: TextureFiltering,
    ) -> SurfaceResult<Rgb> {
        self.materials
            .get(name)
            .map(|material| material.sample(uv, filtering))
            .ok_or_else(|| SurfaceError::unknown_material(name))
    }

    /// A unit square on the XZ plane at `y = 0`, facing `+Y`.
    ///
    /// Spans `[-0.5, 0.5]` on X and Z with a single solid material.
    #[must_use]
    pub fn unit_quad(colour: Rgb) -> Self {
        let mut triangles = Vec::with_capacity(2);
        push_quad(
            &mut triangles,
            [
                Point3::new(-0.5, 0.0, -0.5),
                Point3::new(-0.5, 0.0, 0.5),
                Point3::new(0.5, 0.0, 0.5),
                Point3::new(0.5, 0.0, -0.5),
            ],
            DEFAULT_MATERIAL,
        );
        Self {
            triangles,
            materials: solid_table(colour),
        }
    }

    /// A unit cube centred at the origin with outward-facing windings.
    ///
    /// Spans `[-0.5, 0.5]` on every axis with a single solid material.
    #[must_use]
    pub fn unit_cube(colour: Rgb) -> Self {
        let p = |x: f64, y: f64, z: f64| Point3::new(x, y, z);
        let mut triangles = Vec::with_capacity(12);
        // East (+X) and west (-X).
        push_quad(
            &mut triangles,
            [
                p(0.5, -0.5, -0.5),
                p(0.5, 0.5, -0.5),
                p(0.5, 0.5, 0.5),
                p(0.5, -0.5, 0.5),
            ],
            DEFAULT_MATERIAL,
        );
        push_quad(
            &mut triangles,
            [
                p(-0.5, -0.5, -0.5),
                p(-0.5, -0.5, 0.5),
                p(-0.5, 0.5, 0.5),
                p(-0.5, 0.5, -0.5),
            ],
            DEFAULT_MATERIAL,
        );
        // Up (+Y) and down (-Y).
        push_quad(
            &mut triangles,
            [
                p(-0.5, 0.5, -0.5),
                p(-0.5, 0.5, 0.5),
                p(0.5, 0.5, 0.5),
                p(0.5, 0.5, -0.5),
            ],
            DEFAULT_MATERIAL,
        );
        push_quad(
            &mut triangles,
            [
                p(-0.5, -0.5, -0.5),
                p(0.5, -0.5, -0.5),
                p(0.5, -0.5, 0.5),
                p(-0.5, -0.5, 0.5),
            ],
            DEFAULT_MATERIAL,
        );
        // South (+Z) and north (-Z).
        push_quad(
            &mut triangles,
            [
                p(-0.5, -0.5, 0.5),
                p(0.5, -0.5, 0.5),
                p(0.5, 0.5, 0.5),
                p(-0.5, 0.5, 0.5),
            ],
            DEFAULT_MATERIAL,
        );
        push_quad(
            &mut triangles,
            [
                p(-0.5, -0.5, -0.5),
                p(-0.5, 0.5, -0.5),
                p(0.5, 0.5, -0.5),
                p(0.5, -0.5, -0.5),
            ],
            DEFAULT_MATERIAL,
        );
        Self {
            triangles,
            materials: solid_table(colour),
        }
    }
}

const DEFAULT_MATERIAL: &str = "default";

fn solid_table(colour: Rgb) -> HashMap<String, Material> {
    let mut materials = HashMap::new();
    materials.insert(DEFAULT_MATERIAL.to_owned(), Material::solid(colour));
    materials
}

fn push_quad(triangles: &mut Vec<UvTriangle>, corners: [Point3<f64>; 4], material: &str) {
    let [c0, c1, c2, c3] = corners;
    triangles.push(UvTriangle::new(
        Triangle::new(c0, c1, c2),
        [Uv::new(0.0, 0.0), Uv::new(1.0, 0.0), Uv::new(1.0, 1.0)],
        material,
    ));
    triangles.push(UvTriangle::new(
        Triangle::new(c0, c2, c3),
        [Uv::new(0.0, 0.0), Uv::new(1.0, 1.0), Uv::new(0.0, 1.0)],
        material,
    ));
}
