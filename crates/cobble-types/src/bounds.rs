//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world space.
///
/// # Example
///
/// ```
/// use cobble_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 4.0, 6.0),
/// );
/// assert!((aabb.size().y - 4.0).abs() < 1e-10);
/// assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a box from two corners.
    ///
    /// Corners are reordered per axis so that `min <= max` always holds
    /// after construction.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create a zero-volume box around a single point.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create an empty box (min at `+inf`, max at `-inf`).
    ///
    /// Useful as the identity for [`Aabb::union`] and
    /// [`Aabb::expand_to_include`].
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    /// aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Tightest box around an iterator of points.
    ///
    /// Returns an empty box for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Whether the box encloses no volume (min > max on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Centre point.
    #[inline]
    #[must_use]
    pub fn centre(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Index of the axis with the largest extent (0 = x, 1 = y, 2 = z).
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{Aabb, Point3};
    ///
    /// let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 5.0, 2.0));
    /// assert_eq!(aabb.longest_axis(), 1);
    /// ```
    #[must_use]
    pub fn longest_axis(&self) -> usize {
        let s = self.size();
        if s.x >= s.y && s.x >= s.z {
            0
        } else if s.y >= s.z {
            1
        } else {
            2
        }
    }

    /// Whether a point lies inside or on the boundary.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Grow the box to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Smallest box containing both `self` and `other`.
    ///
    /// An empty box is the identity.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{Aabb, Point3};
    ///
    /// let a = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
    /// let b = Aabb::new(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
    /// let u = a.union(&b);
    /// assert!((u.max.x - 3.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// A copy grown by `margin` on every side.
    #[must_use]
    pub fn padded(&self, margin: f64) -> Self {
        let m = Vector3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Whether `other` is fully inside `self` (boundary touching counts).
    #[must_use]
    pub fn contains_aabb(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.contains(&other.min) && self.contains(&other.max))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn new_reorders_corners() {
        let aabb = Aabb::new(Point3::new(5.0, 0.0, 3.0), Point3::new(1.0, 2.0, -1.0));
        assert_eq!(aabb.min, Point3::new(1.0, 0.0, -1.0));
        assert_eq!(aabb.max, Point3::new(5.0, 2.0, 3.0));
    }

    #[test]
    fn empty_box() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert!(!aabb.contains(&Point3::origin()));
    }

    #[test]
    fn from_points() {
        let points = [
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-1.0, 4.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 4.0, 5.0));
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let u = a.union(&Aabb::empty());
        assert_eq!(u, a);
        let u = Aabb::empty().union(&a);
        assert_eq!(u, a);
    }

    #[test]
    fn longest_axis_ties_prefer_lower() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(2.0, 2.0, 1.0));
        assert_eq!(aabb.longest_axis(), 0);
    }

    #[test]
    fn padded_grows_both_sides() {
        let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).padded(0.5);
        assert_eq!(aabb.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(aabb.max, Point3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn contains_aabb() {
        let outer = Aabb::new(Point3::origin(), Point3::new(10.0, 10.0, 10.0));
        let inner = Aabb::new(Point3::new(1.0, 1.0, 1.0), Point3::new(9.0, 9.0, 9.0));
        assert!(outer.contains_aabb(&inner));
        assert!(!inner.contains_aabb(&outer));
        assert!(outer.contains_aabb(&Aabb::empty()));
    }

    #[test]
    fn centre_and_size() {
        let aabb = Aabb::new(Point3::new(0.0, 2.0, 4.0), Point3::new(2.0, 6.0, 12.0));
        assert_eq!(aabb.centre(), Point3::new(1.0, 4.0, 8.0));
        assert_eq!(aabb.size(), Vector3::new(2.0, 4.0, 8.0));
    }
}
