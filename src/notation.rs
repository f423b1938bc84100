//! Tagged index types for the two cut-position coordinate spaces.
//!
//! A cut position lives in one of two notations, and the two must never be
//! mixed:
//!
//! - [`ArrayIndex`] — 0-based index into the sequence's character array.
//!   Non-negative. A cut at array index `i` falls immediately after the
//!   character at `i`.
//! - [`EnzymeIndex`] — 1-based enzyme notation counted from the start of the
//!   recognition site: `1, 2, 3, …` rightward, `-1, -2, -3, …` leftward.
//!   Zero does not exist in this notation.
//!
//! Each is a distinct newtype with a validating constructor, so handing an
//! enzyme-notation value to array-index code is a type error rather than a
//! silent off-by-one.

use std::fmt;

use crate::error::{CutsiteError, Result};

/// A 0-based cut position in array-index notation.
///
/// Always non-negative; the cut falls immediately after the character at
/// this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayIndex(usize);

impl ArrayIndex {
    /// Create an array index from a signed value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is negative: array-index notation is
    /// 0-based and non-negative only.
    pub fn new(value: isize) -> Result<Self> {
        if value < 0 {
            return Err(CutsiteError::InvalidIndex(format!(
                "array-index notation is 0-based and non-negative, got {value}"
            )));
        }
        Ok(Self(value as usize))
    }

    /// Create an array index from an inherently non-negative value.
    pub const fn from_usize(value: usize) -> Self {
        Self(value)
    }

    /// The raw 0-based index.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<isize> for ArrayIndex {
    type Error = CutsiteError;

    fn try_from(value: isize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ArrayIndex> for usize {
    fn from(index: ArrayIndex) -> usize {
        index.get()
    }
}

impl fmt::Display for ArrayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cut position in 1-based enzyme notation.
///
/// Positive values count rightward from the start of the recognition site
/// (`1` = after the first base); negative values count leftward from the
/// site start. Zero has no meaning and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnzymeIndex(isize);

impl EnzymeIndex {
    /// Create an enzyme-notation index.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is exactly 0, which does not exist in
    /// enzyme notation (the scale jumps from -1 to 1).
    pub fn new(value: isize) -> Result<Self> {
        if value == 0 {
            return Err(CutsiteError::InvalidIndex(
                "enzyme notation has no zero: the scale runs …, -2, -1, 1, 2, …".into(),
            ));
        }
        Ok(Self(value))
    }

    /// The raw enzyme-notation value (never 0).
    pub const fn get(self) -> isize {
        self.0
    }

    /// Whether this cut falls upstream (5'-ward) of the recognition site.
    pub const fn is_upstream(self) -> bool {
        self.0 < 0
    }
}

impl TryFrom<isize> for EnzymeIndex {
    type Error = CutsiteError;

    fn try_from(value: isize) -> Result<Self> {
        Self::new(value)
    }
}

impl From<EnzymeIndex> for isize {
    fn from(index: EnzymeIndex) -> isize {
        index.get()
    }
}

impl fmt::Display for EnzymeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
