//! Data-quality diagnostics collected during an operation.

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational note about the processed data.
    Info,
    /// Data-quality problem the operation worked around.
    Warning,
}

/// A single diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Entry severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

/// An ordered collection of diagnostics produced by one operation.
///
/// Operations that can encounter imperfect input data return a
/// `Diagnostics` alongside their primary result. Each entry is also
/// mirrored to the matching `tracing` level when pushed, so callers that
/// only want logs need not inspect the collection.
///
/// # Example
///
/// ```
/// use cobble_types::Diagnostics;
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.info("12 triangles grouped along the x axis");
/// diagnostics.warn("3 rows had an odd intersection count");
/// assert!(diagnostics.has_warnings());
/// assert_eq!(diagnostics.warnings().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an informational entry and emit it at `tracing::info`.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message,
        });
    }

    /// Record a warning entry and emit it at `tracing::warn`.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.severity == Severity::Warning)
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Iterate over warning entries only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Warning)
    }

    /// Iterate over informational entries only.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Info)
    }

    /// Append all entries of `other`, preserving their order.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
