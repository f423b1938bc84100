//! Structured error types for the cutsite crate.

use thiserror::Error;

/// Unified error type for all cutsite operations.
#[derive(Debug, Error)]
pub enum CutsiteError {
    /// An index value outside its notation's domain (negative array index,
    /// zero enzyme-notation index).
    #[error("invalid index: {0}")]
    InvalidIndex(String),

    /// A cut pair constructed with no cut on either strand, or from an
    /// input of the wrong shape.
    #[error("invalid cut pair: {0}")]
    InvalidPair(String),

    /// The primary and complement projections converted to different lengths.
    #[error("projection length mismatch: {primary} primary vs {complement} complement entries")]
    ProjectionMismatch { primary: usize, complement: usize },

    /// Strand cores differ in length after stripping padding; only
    /// equal-length cores can be aligned.
    #[error("strand cores differ in length after stripping padding: {primary} vs {complement}")]
    UnequalCores { primary: usize, complement: usize },

    /// A malformed enzyme definition (empty or non-IUPAC recognition site,
    /// no cut locations).
    #[error("invalid enzyme definition: {0}")]
    InvalidEnzyme(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CutsiteError>;
