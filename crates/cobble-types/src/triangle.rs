//! Triangle types for geometric calculations and material binding.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, Uv};

/// A triangle with concrete vertex positions.
///
/// Winding is counter-clockwise when viewed from the front (the normal
/// points toward the viewer).
///
/// # Example
///
/// ```
/// use cobble_types::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// assert!((tri.normal().unwrap().z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// The unnormalised face normal (cross product of the edges).
    ///
    /// Its magnitude is twice the triangle area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// The unit face normal, or `None` for a degenerate triangle.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{Point3, Triangle};
    ///
    /// let degen = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(degen.normal().is_none());
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Triangle area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Centroid (centre of mass).
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::new(
            (self.v0.x + self.v1.x + self.v2.x) / 3.0,
            (self.v0.y + self.v1.y + self.v2.y) / 3.0,
            (self.v0.z + self.v1.z + self.v2.z) / 3.0,
        )
    }

    /// Tightest axis-aligned box around the triangle.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let mut aabb = Aabb::from_point(self.v0);
        aabb.expand_to_include(&self.v1);
        aabb.expand_to_include(&self.v2);
        aabb
    }

    /// Vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Barycentric weights of a point with respect to the vertices.
    ///
    /// Computed from sub-triangle areas normalised by the total area, so
    /// the weights always sum to one. For a point inside the triangle the
    /// weight of each vertex is the relative area of the sub-triangle
    /// opposite it. Degenerate triangles yield equal weights.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// let w = tri.barycentric(&Point3::new(0.0, 0.0, 0.0));
    /// assert!((w[0] - 1.0).abs() < 1e-10);
    /// assert!(w[1].abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn barycentric(&self, point: &Point3<f64>) -> [f64; 3] {
        let total = self.area();
        if total < f64::EPSILON {
            let third = 1.0 / 3.0;
            return [third; 3];
        }
        let area12 = Self::new(self.v1, self.v2, *point).area();
        let area20 = Self::new(self.v2, self.v0, *point).area();
        let area01 = Self::new(self.v0, self.v1, *point).area();
        let sum = area12 + area20 + area01;
        // Normalise by the sub-area sum rather than the face area so the
        // weights stay a partition of one for points slightly off-plane.
        [area12 / sum, area20 / sum, area01 / sum]
    }
}

/// A [`Triangle`] carrying per-vertex texture coordinates and the name of
/// the material that shades it.
///
/// # Example
///
/// ```
/// use cobble_types::{Point3, Triangle, Uv, UvTriangle};
///
/// let tri = UvTriangle::new(
///     Triangle::new(
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ),
///     [Uv::new(0.0, 0.0), Uv::new(1.0, 0.0), Uv::new(0.0, 1.0)],
///     "stone",
/// );
/// let uv = tri.uv_at(&Point3::new(0.0, 0.0, 0.0));
/// assert!(uv.u.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UvTriangle {
    /// Vertex positions.
    pub triangle: Triangle,
    /// Texture coordinate at each vertex.
    pub uvs: [Uv; 3],
    /// Name of the material bound to this triangle.
    pub material: String,
}

impl UvTriangle {
    /// Create a textured triangle.
    #[must_use]
    pub fn new(triangle: Triangle, uvs: [Uv; 3], material: impl Into<String>) -> Self {
        Self {
            triangle,
            uvs,
            material: material.into(),
        }
    }

    /// Interpolate the texture coordinate at a point on the triangle.
    #[must_use]
    pub fn uv_at(&self, point: &Point3<f64>) -> Uv {
        let weights = self.triangle.barycentric(point);
        Uv::barycentric(self.uvs[0], self.uvs[1], self.uvs[2], weights)
    }
}
