//! Texture coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D texture coordinate.
///
/// `(0, 0)` is the bottom-left of the texture and `(1, 1)` the top-right.
/// Coordinates outside `[0, 1]` are legal; samplers wrap them with
/// [`Uv::wrapped`].
///
/// # Example
///
/// ```
/// use cobble_types::Uv;
///
/// let uv = Uv::new(1.25, -0.25);
/// let wrapped = uv.wrapped();
/// assert!((wrapped.u - 0.25).abs() < 1e-10);
/// assert!((wrapped.v - 0.75).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uv {
    /// Horizontal coordinate.
    pub u: f64,
    /// Vertical coordinate.
    pub v: f64,
}

impl Uv {
    /// Create a texture coordinate.
    #[inline]
    #[must_use]
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Wrap both components into `[0, 1)` (tiling behaviour).
    #[inline]
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self::new(self.u.rem_euclid(1.0), self.v.rem_euclid(1.0))
    }

    /// Linear interpolation towards `other` by factor `t`.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::Uv;
    ///
    /// let mid = Uv::new(0.0, 0.0).lerp(Uv::new(1.0, 0.5), 0.5);
    /// assert!((mid.u - 0.5).abs() < 1e-10);
    /// assert!((mid.v - 0.25).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (other.u - self.u).mul_add(t, self.u),
            (other.v - self.v).mul_add(t, self.v),
        )
    }

    /// Weighted combination of three coordinates.
    ///
    /// Used with barycentric weights to interpolate a coordinate inside
    /// a triangle.
    #[inline]
    #[must_use]
    pub fn barycentric(a: Self, b: Self, c: Self, weights: [f64; 3]) -> Self {
        Self::new(
            c.u.mul_add(weights[2], a.u.mul_add(weights[0], b.u * weights[1])),
            c.v.mul_add(weights[2], a.v.mul_add(weights[0], b.v * weights[1])),
        )
    }
}

impl From<(f64, f64)> for Uv {
    fn from((u, v): (f64, f64)) -> Self {
        Self::new(u, v)
    }
}
