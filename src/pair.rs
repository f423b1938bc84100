//! Cut-location pairs: one cut position per strand.
//!
//! A pair holds the primary-strand cut and the complement-strand cut for a
//! single cleavage event. Either side may be absent (an enzyme that nicks
//! only one strand), but never both — a pair with no cut anywhere is
//! meaningless and is rejected at construction.
//!
//! [`CutPair`] carries 0-based [`ArrayIndex`] positions; [`EnzymeCutPair`]
//! carries 1-based [`EnzymeIndex`] positions. The two validate differently
//! (array indices must be non-negative, enzyme indices must be non-zero but
//! may be negative) and are deliberately not unified.

use std::ops::RangeInclusive;

use crate::error::{CutsiteError, Result};
use crate::notation::{ArrayIndex, EnzymeIndex};

/// A `(primary, complement)` cut pair in 0-based array-index notation.
///
/// Immutable after construction. Index 0 is the primary-strand cut, index 1
/// the complement-strand cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutPair {
    primary: Option<ArrayIndex>,
    complement: Option<ArrayIndex>,
}

impl CutPair {
    /// Create a pair from raw signed positions.
    ///
    /// # Errors
    ///
    /// Returns an error if both sides are `None` (no cut anywhere is
    /// ambiguous) or if any present value is negative.
    pub fn new(primary: Option<isize>, complement: Option<isize>) -> Result<Self> {
        let primary = primary.map(ArrayIndex::new).transpose()?;
        let complement = complement.map(ArrayIndex::new).transpose()?;
        Self::from_indices(primary, complement)
    }

    /// Create a pair from already-validated array indices.
    ///
    /// # Errors
    ///
    /// Returns an error if both sides are `None`.
    pub fn from_indices(
        primary: Option<ArrayIndex>,
        complement: Option<ArrayIndex>,
    ) -> Result<Self> {
        if primary.is_none() && complement.is_none() {
            return Err(CutsiteError::InvalidPair(
                "neither strand has a cut".into(),
            ));
        }
        Ok(Self {
            primary,
            complement,
        })
    }

    /// Create a pair from a 1- or 2-element slice.
    ///
    /// A single element sets the primary cut and leaves the complement
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns an error on any other slice length, or on the conditions of
    /// [`CutPair::new`].
    pub fn from_slice(values: &[Option<isize>]) -> Result<Self> {
        match values {
            [primary] => Self::new(*primary, None),
            [primary, complement] => Self::new(*primary, *complement),
            other => Err(CutsiteError::InvalidPair(format!(
                "expected 1 or 2 cut positions, got {}",
                other.len()
            ))),
        }
    }

    /// Create a pair from an inclusive range, collapsed to `(start, end)`.
    ///
    /// # Errors
    ///
    /// Returns an error on the conditions of [`CutPair::new`].
    pub fn from_range(range: RangeInclusive<isize>) -> Result<Self> {
        Self::new(Some(*range.start()), Some(*range.end()))
    }

    /// The primary-strand cut position, if any.
    pub const fn primary(&self) -> Option<ArrayIndex> {
        self.primary
    }

    /// The complement-strand cut position, if any.
    pub const fn complement(&self) -> Option<ArrayIndex> {
        self.complement
    }

    /// Positional access: `0` = primary, `1` = complement, else `None`.
    pub fn get(&self, index: usize) -> Option<Option<ArrayIndex>> {
        match index {
            0 => Some(self.primary),
            1 => Some(self.complement),
            _ => None,
        }
    }

    /// Iterate the pair as a 2-element ordered container.
    pub fn iter(&self) -> std::array::IntoIter<Option<ArrayIndex>, 2> {
        [self.primary, self.complement].into_iter()
    }
}

impl IntoIterator for &CutPair {
    type Item = Option<ArrayIndex>;
    type IntoIter = std::array::IntoIter<Option<ArrayIndex>, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `(primary, complement)` cut pair in 1-based enzyme notation.
///
/// Negative values are legal (cuts upstream of the recognition site); zero
/// is not. Same pairing rules as [`CutPair`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnzymeCutPair {
    primary: Option<EnzymeIndex>,
    complement: Option<EnzymeIndex>,
}

impl EnzymeCutPair {
    /// Create a pair from raw signed positions in enzyme notation.
    ///
    /// # Errors
    ///
    /// Returns an error if both sides are `None` or if any present value is
    /// exactly 0.
    pub fn new(primary: Option<isize>, complement: Option<isize>) -> Result<Self> {
        let primary = primary.map(EnzymeIndex::new).transpose()?;
        let complement = complement.map(EnzymeIndex::new).transpose()?;
        Self::from_indices(primary, complement)
    }

    /// Create a pair from already-validated enzyme indices.
    ///
    /// # Errors
    ///
    /// Returns an error if both sides are `None`.
    pub fn from_indices(
        primary: Option<EnzymeIndex>,
        complement: Option<EnzymeIndex>,
    ) -> Result<Self> {
        if primary.is_none() && complement.is_none() {
            return Err(CutsiteError::InvalidPair(
                "neither strand has a cut".into(),
            ));
        }
        Ok(Self {
            primary,
            complement,
        })
    }

    /// Create a pair from a 1- or 2-element slice.
    ///
    /// # Errors
    ///
    /// Returns an error on any other slice length, or on the conditions of
    /// [`EnzymeCutPair::new`].
    pub fn from_slice(values: &[Option<isize>]) -> Result<Self> {
        match values {
            [primary] => Self::new(*primary, None),
            [primary, complement] => Self::new(*primary, *complement),
            other => Err(CutsiteError::InvalidPair(format!(
                "expected 1 or 2 cut positions, got {}",
                other.len()
            ))),
        }
    }

    /// Create a pair from an inclusive range, collapsed to `(start, end)`.
    ///
    /// # Errors
    ///
    /// Returns an error on the conditions of [`EnzymeCutPair::new`].
    pub fn from_range(range: RangeInclusive<isize>) -> Result<Self> {
        Self::new(Some(*range.start()), Some(*range.end()))
    }

    /// The primary-strand cut position, if any.
    pub const fn primary(&self) -> Option<EnzymeIndex> {
        self.primary
    }

    /// The complement-strand cut position, if any.
    pub const fn complement(&self) -> Option<EnzymeIndex> {
        self.complement
    }

    /// Positional access: `0` = primary, `1` = complement, else `None`.
    pub fn get(&self, index: usize) -> Option<Option<EnzymeIndex>> {
        match index {
            0 => Some(self.primary),
            1 => Some(self.complement),
            _ => None,
        }
    }

    /// Iterate the pair as a 2-element ordered container.
    pub fn iter(&self) -> std::array::IntoIter<Option<EnzymeIndex>, 2> {
        [self.primary, self.complement].into_iter()
    }
}

impl IntoIterator for &EnzymeCutPair {
    type Item = Option<EnzymeIndex>;
    type IntoIter = std::array::IntoIter<Option<EnzymeIndex>, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
