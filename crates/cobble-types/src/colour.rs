//! Colour types and colour-space conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB colour with components in `[0.0, 1.0]`.
///
/// Components are stored as `f64` so colours can be accumulated and
/// averaged without quantisation loss. Values outside `[0.0, 1.0]` are
/// legal intermediates (error diffusion produces them); call
/// [`Rgb::clamped`] before converting to 8-bit.
///
/// # Example
///
/// ```
/// use cobble_types::Rgb;
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// let half = red * 0.5;
/// assert!((half.r - 0.5).abs() < 1e-10);
/// assert_eq!(red.to_u8(), [255, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a colour from components.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::Rgb;
    ///
    /// let c = Rgb::new(0.2, 0.4, 0.6);
    /// assert!((c.g - 0.4).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a colour from 8-bit components.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::Rgb;
    ///
    /// let c = Rgb::from_u8(255, 0, 127);
    /// assert!((c.r - 1.0).abs() < 1e-10);
    /// assert!((c.b - 127.0 / 255.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Convert to 8-bit components, clamping to `[0, 255]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Clamp every component to `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Squared Euclidean distance to another colour in RGB space.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::Rgb;
    ///
    /// let d = Rgb::BLACK.distance_squared(Rgb::WHITE);
    /// assert!((d - 3.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        db.mul_add(db, dr.mul_add(dr, dg * dg))
    }

    /// Convert to CIE LAB (sRGB primaries, D65 white point).
    ///
    /// The input is treated as gamma-encoded sRGB. Components outside
    /// `[0.0, 1.0]` are clamped before conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::Rgb;
    ///
    /// let lab = Rgb::WHITE.to_lab();
    /// assert!((lab.l - 100.0).abs() < 1e-6);
    /// assert!(lab.a.abs() < 1e-6);
    /// assert!(lab.b.abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let c = self.clamped();
        let r = srgb_to_linear(c.r);
        let g = srgb_to_linear(c.g);
        let b = srgb_to_linear(c.b);

        // sRGB D65 reference white.
        let x = (0.1805 * b + 0.4124_f64.mul_add(r, 0.3576 * g)) / 0.950_47;
        let y = 0.0722 * b + 0.2126_f64.mul_add(r, 0.7152 * g);
        let z = (0.9505 * b + 0.0193_f64.mul_add(r, 0.1192 * g)) / 1.088_83;

        let fx = lab_f(x);
        let fy = lab_f(y);
        let fz = lab_f(z);

        Lab {
            l: 116.0_f64.mul_add(fy, -16.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl std::ops::Add for Rgb {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl std::ops::AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Rgb {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl std::ops::Mul<f64> for Rgb {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f64) -> Self {
        Self::new(self.r * scale, self.g * scale, self.b * scale)
    }
}

#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    // CIE cutover between the cube-root and linear segments.
    const DELTA_CUBED: f64 = 0.008_856;
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        7.787_f64.mul_add(t, 16.0 / 116.0)
    }
}

/// A colour in CIE LAB space.
///
/// Euclidean distance in LAB approximates perceptual colour difference
/// far better than distance in RGB.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    /// Lightness, `0.0` (black) to `100.0` (white).
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl Lab {
    /// Create a LAB colour from components.
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance to another LAB colour.
    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da))
    }
}

/// The colour space used for nearest-colour matching.
///
/// # Example
///
/// ```
/// use cobble_types::ColourSpace;
///
/// assert_eq!(ColourSpace::default(), ColourSpace::Rgb);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColourSpace {
    /// Euclidean distance on raw RGB components.
    #[default]
    Rgb,
    /// Euclidean distance in CIE LAB (perceptual).
    Lab,
}

impl ColourSpace {
    /// Squared distance between two RGB colours measured in this space.
    ///
    /// # Example
    ///
    /// ```
    /// use cobble_types::{ColourSpace, Rgb};
    ///
    /// let d = ColourSpace::Lab.distance_squared(Rgb::BLACK, Rgb::WHITE);
    /// assert!((d - 10000.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn distance_squared(self, a: Rgb, b: Rgb) -> f64 {
        match self {
            Self::Rgb => a.distance_squared(b),
            Self::Lab => a.to_lab().distance_squared(b.to_lab()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rgb_u8_round_trip() {
        let c = Rgb::from_u8(12, 130, 240);
        assert_eq!(c.to_u8(), [12, 130, 240]);
    }

    #[test]
    fn to_u8_clamps_out_of_range() {
        let c = Rgb::new(1.5, -0.5, 0.5);
        assert_eq!(c.to_u8(), [255, 0, 128]);
    }

    #[test]
    fn arithmetic() {
        let a = Rgb::new(0.5, 0.25, 0.0);
        let b = Rgb::new(0.25, 0.25, 1.0);
        let sum = a + b;
        assert!((sum.r - 0.75).abs() < 1e-12);
        let diff = a - b;
        assert!((diff.b + 1.0).abs() < 1e-12);
        let scaled = a * 2.0;
        assert!((scaled.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rgb_distance() {
        let a = Rgb::new(0.0, 0.0, 0.0);
        let b = Rgb::new(1.0, 0.0, 0.0);
        assert!((a.distance_squared(b) - 1.0).abs() < 1e-12);
        assert!((a.distance_squared(a)).abs() < 1e-12);
    }

    #[test]
    fn lab_white() {
        let lab = Rgb::WHITE.to_lab();
        assert!((lab.l - 100.0).abs() < 1e-4);
        assert!(lab.a.abs() < 1e-3);
        assert!(lab.b.abs() < 1e-3);
    }

    #[test]
    fn lab_black() {
        let lab = Rgb::BLACK.to_lab();
        assert!(lab.l.abs() < 1e-6);
    }

    #[test]
    fn lab_red_reference() {
        // sRGB pure red is L*=53.24, a*=80.09, b*=67.20 (D65).
        let lab = Rgb::new(1.0, 0.0, 0.0).to_lab();
        assert!((lab.l - 53.24).abs() < 0.1);
        assert!((lab.a - 80.09).abs() < 0.2);
        assert!((lab.b - 67.20).abs() < 0.2);
    }

    #[test]
    fn lab_lightness_ordering() {
        let dark = Rgb::new(0.2, 0.2, 0.2).to_lab();
        let light = Rgb::new(0.8, 0.8, 0.8).to_lab();
        assert!(light.l > dark.l);
    }

    #[test]
    fn colour_space_distance_dispatch() {
        let a = Rgb::new(0.1, 0.2, 0.3);
        let b = Rgb::new(0.3, 0.2, 0.1);
        assert_eq!(
            ColourSpace::Rgb.distance_squared(a, b),
            a.distance_squared(b)
        );
        assert_eq!(
            ColourSpace::Lab.distance_squared(a, b),
            a.to_lab().distance_squared(b.to_lab())
        );
    }

    #[test]
    fn clamped() {
        let c = Rgb::new(1.2, -0.1, 0.5).clamped();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
    }
}
