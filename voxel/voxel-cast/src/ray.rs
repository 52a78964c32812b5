//! Rays and intersection primitives.

use cobble_types::{Aabb, Point3, Triangle, Vector3};

/// Epsilon used by the intersection tests for parallel rejection and
/// near-origin hit rejection.
pub const INTERSECT_EPSILON: f64 = 1e-8;

/// One of the three principal grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Width (east/west).
    X,
    /// Height (up/down).
    Y,
    /// Depth (north/south).
    Z,
}

impl Axis {
    pub(crate) const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index into a point or vector.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the axis.
    pub(crate) fn unit(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }

    /// The two axes orthogonal to this one, in index order.
    pub(crate) const fn orthogonal(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    /// The axis with the largest absolute component of a vector.
    ///
    /// Ties prefer x over y over z.
    pub(crate) fn dominant(v: &Vector3<f64>) -> Self {
        let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());
        if x >= y && x >= z {
            Self::X
        } else if y >= z {
            Self::Y
        } else {
            Self::Z
        }
    }
}

/// A ray with a precomputed inverse direction for slab tests.
///
/// Directions are expected to be unit length so that `t` values are
/// world (or grid) distances.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Start point.
    pub origin: Point3<f64>,
    /// Unit direction.
    pub direction: Vector3<f64>,
    /// Per-component reciprocal of the direction (infinite on zero
    /// components).
    pub dir_inv: Vector3<f64>,
}

impl Ray {
    /// Create a ray from an origin and a unit direction.
    #[must_use]
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self {
            origin,
            direction,
            dir_inv: Vector3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z),
        }
    }

    /// The point at distance `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}

/// A single ray/triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the intersection point.
    pub t: f64,
    /// Index of the intersected triangle.
    pub triangle: usize,
}

/// Möller–Trumbore ray-triangle intersection.
///
/// Returns the hit distance, or `None` when the ray is parallel to the
/// triangle plane or the intersection lies outside the triangle.
/// Boundary hits (edges and vertices) count as hits.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn ray_triangle_intersect(ray: &Ray, triangle: &Triangle) -> Option<f64> {
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;

    let h = ray.direction.cross(&edge2);
    let a = edge1.dot(&h);

    // Ray is parallel to the triangle plane (or the triangle is
    // degenerate).
    if a.abs() < INTERSECT_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - triangle.v0;
    let u = f * s.dot(&h);

    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.direction.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);

    if t > INTERSECT_EPSILON { Some(t) } else { None }
}

/// Slab test of a ray against an axis-aligned box.
///
/// Returns the entry and exit distances when the ray reaches the box.
#[must_use]
pub fn ray_aabb_intersect(ray: &Ray, aabb: &Aabb) -> Option<(f64, f64)> {
    let t1 = (aabb.min.x - ray.origin.x) * ray.dir_inv.x;
    let t2 = (aabb.max.x - ray.origin.x) * ray.dir_inv.x;
    let t3 = (aabb.min.y - ray.origin.y) * ray.dir_inv.y;
    let t4 = (aabb.max.y - ray.origin.y) * ray.dir_inv.y;
    let t5 = (aabb.min.z - ray.origin.z) * ray.dir_inv.z;
    let t6 = (aabb.max.z - ray.origin.z) * ray.dir_inv.z;

    let t_min = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let t_max = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        Some((t_min.max(0.0), t_max))
    } else {
        None
    }
}
