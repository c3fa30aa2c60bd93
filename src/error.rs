//! Error types for kernel submission and result verification.

use crate::coalesce::CoalesceFactor;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A verified output cell differs from its expected value.
    #[error("result mismatch in {variant} at index {index}: expected {expected}, got {actual}")]
    ResultMismatch {
        variant: CoalesceFactor,
        index: usize,
        expected: f32,
        actual: f32,
    },

    /// The requested execution device cannot be used. Always fatal.
    #[error("device '{device}' is unavailable: {hint}")]
    ResourceUnavailable { device: String, hint: String },

    /// A buffer handed to the kernel has the wrong number of elements.
    #[error("matrix {matrix}: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        matrix: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Whether the run has to stop as soon as this error is seen.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::ResourceUnavailable { .. } | Error::ShapeMismatch { .. })
    }
}
