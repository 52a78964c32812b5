//! Materials and texture sampling.

use cobble_types::{Rgb, Uv};

use crate::error::{SurfaceError, SurfaceResult};

/// How texel values are combined when sampling a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureFiltering {
    /// Take the single closest texel.
    #[default]
    Nearest,
    /// Bilinear blend of the four closest texels.
    Linear,
}

/// A decoded texture: a dense grid of RGB texels.
///
/// Row 0 is the top of the image, matching decoded image memory layout.
/// UV coordinates use a bottom-left origin, so sampling flips the
/// vertical axis.
///
/// # Example
///
/// ```
/// use cobble_types::{Rgb, Uv};
/// use mesh_surface::{Texture, TextureFiltering};
///
/// let texture = Texture::from_pixels(2, 1, vec![Rgb::BLACK, Rgb::WHITE]).unwrap();
/// let left = texture.sample(Uv::new(0.25, 0.5), TextureFiltering::Nearest);
/// assert!(left.r < 0.5);
/// let right = texture.sample(Uv::new(0.75, 0.5), TextureFiltering::Nearest);
/// assert!(right.r > 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Texture {
    /// Build a texture from raw pixel rows (top row first).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidTexture`] when either dimension is
    /// zero or the pixel count does not equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> SurfaceResult<Self> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::invalid_texture(format!(
                "{width}x{height} pixels"
            )));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SurfaceError::invalid_texture(format!(
                "expected {expected} pixels for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a texture from a decoded RGBA image, discarding alpha.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidTexture`] for a zero-sized image.
    pub fn from_image(image: &image::RgbaImage) -> SurfaceResult<Self> {
        let pixels = image
            .pixels()
            .map(|p| Rgb::from_u8(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self::from_pixels(image.width(), image.height(), pixels)
    }

    /// Texture width in texels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in texels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Sample the texture at a UV coordinate.
    ///
    /// Coordinates outside `[0, 1]` wrap (tiling); sampling never fails.
    #[must_use]
    pub fn sample(&self, uv: Uv, filtering: TextureFiltering) -> Rgb {
        let uv = uv.wrapped();
        match filtering {
            TextureFiltering::Nearest => self.sample_nearest(uv),
            TextureFiltering::Linear => self.sample_linear(uv),
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sample_nearest(&self, uv: Uv) -> Rgb {
        let x = ((uv.u * f64::from(self.width)) as u32).min(self.width - 1);
        let y = (((1.0 - uv.v) * f64::from(self.height)) as u32).min(self.height - 1);
        self.texel(x, y)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sample_linear(&self, uv: Uv) -> Rgb {
        let fx = uv.u.mul_add(f64::from(self.width), -0.5);
        let fy = (1.0 - uv.v).mul_add(f64::from(self.height), -0.5);
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;

        let w = i64::from(self.width);
        let h = i64::from(self.height);
        let wrap = |value: f64, extent: i64| {
            let index = (value as i64).rem_euclid(extent);
            #[allow(clippy::cast_sign_loss)]
            {
                index as u32
            }
        };
        let x0i = wrap(x0, w);
        let x1i = wrap(x0 + 1.0, w);
        let y0i = wrap(y0, h);
        let y1i = wrap(y0 + 1.0, h);

        let top = self.texel(x0i, y0i) * (1.0 - tx) + self.texel(x1i, y0i) * tx;
        let bottom = self.texel(x0i, y1i) * (1.0 - tx) + self.texel(x1i, y1i) * tx;
        top * (1.0 - ty) + bottom * ty
    }

    fn texel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// A surface material: either a flat colour or a texture.
///
/// # Example
///
/// ```
/// use cobble_types::{Rgb, Uv};
/// use mesh_surface::{Material, TextureFiltering};
///
/// let solid = Material::solid(Rgb::new(0.8, 0.1, 0.1));
/// let colour = solid.sample(Uv::new(0.3, 0.9), TextureFiltering::Nearest);
/// assert!((colour.r - 0.8).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// A uniform colour. UV coordinates are ignored.
    Solid {
        /// The material colour.
        colour: Rgb,
    },
    /// A textured material sampled through UV coordinates.
    Textured {
        /// The decoded texture.
        texture: Texture,
    },
}

impl Material {
    /// Create a solid-colour material.
    #[must_use]
    pub const fn solid(colour: Rgb) -> Self {
        Self::Solid { colour }
    }

    /// Create a textured material.
    #[must_use]
    pub const fn textured(texture: Texture) -> Self {
        Self::Textured { texture }
    }

    /// Sample the material colour at a UV coordinate.
    #[must_use]
    pub fn sample(&self, uv: Uv, filtering: TextureFiltering) -> Rgb {
        match self {
            Self::Solid { colour } => *colour,
            Self::Textured { texture } => texture.sample(uv, filtering),
        }
    }
}
