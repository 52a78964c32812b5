//! Error types for surface mesh construction and sampling.

use thiserror::Error;

/// Result type alias for surface mesh operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while building or sampling a surface mesh.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A triangle or sampling call referenced a material name that the
    /// mesh does not define.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    /// Texture pixel data does not match its declared dimensions.
    #[error("invalid texture: {0}")]
    InvalidTexture(String),
}

impl SurfaceError {
    /// Create an unknown material error.
    #[must_use]
    pub fn unknown_material(name: impl Into<String>) -> Self {
        Self::UnknownMaterial(name.into())
    }

    /// Create an invalid texture error.
    #[must_use]
    pub fn invalid_texture(details: impl Into<String>) -> Self {
        Self::InvalidTexture(details.into())
    }
}
