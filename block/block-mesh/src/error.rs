//! Error types for palette assignment.

use thiserror::Error;

/// Errors that abort a block assignment call.
///
/// Data-quality problems (unknown palette names, for instance) do not
/// abort the call; they are reported through the returned diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignError {
    /// The palette resolved to zero atlas entries.
    #[error("palette resolves to no atlas blocks")]
    EmptyPalette,
}

impl AssignError {
    /// An empty-palette error.
    #[must_use]
    pub const fn empty_palette() -> Self {
        Self::EmptyPalette
    }
}

/// Result alias for block assignment operations.
pub type AssignResult<T> = Result<T, AssignError>;
