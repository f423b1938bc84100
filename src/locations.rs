//! Ordered collections of cut-location pairs, and the enzyme-notation to
//! array-index conversion.
//!
//! [`CutLocations`] holds array-index pairs; [`EnzymeCutLocations`] holds
//! enzyme-notation pairs and knows how to convert itself into a
//! [`CutLocations`]. The element types are distinct, so a collection can
//! never silently mix the two notations.
//!
//! The conversion has to respect the hole in enzyme notation: the scale has
//! no zero, so `…, -2, -1, 1, 2, …` are *consecutive* positions. When any
//! negative value is present the non-negative values are first pulled down
//! by one to close that gap, then the whole scale is shifted up so the
//! smallest value lands at array index 0. When every value is positive a
//! plain decrement turns 1-based into 0-based. The two branches are kept
//! separate on purpose; a single unified formula is an off-by-one trap.

use std::ops::Index;

use crate::error::{CutsiteError, Result};
use crate::notation::{ArrayIndex, EnzymeIndex};
use crate::pair::{CutPair, EnzymeCutPair};

/// An ordered, read-only collection of [`CutPair`] values in array-index
/// notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutLocations {
    pairs: Vec<CutPair>,
}

impl CutLocations {
    /// Create a collection from pairs, preserving order.
    pub fn new(pairs: Vec<CutPair>) -> Self {
        Self { pairs }
    }

    /// All primary-strand cut positions, order preserved, absences explicit.
    pub fn primary(&self) -> Vec<Option<ArrayIndex>> {
        self.pairs.iter().map(CutPair::primary).collect()
    }

    /// All complement-strand cut positions, order preserved, absences
    /// explicit.
    pub fn complement(&self) -> Vec<Option<ArrayIndex>> {
        self.pairs.iter().map(CutPair::complement).collect()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the collection holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pair at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&CutPair> {
        self.pairs.get(index)
    }

    /// Iterate the pairs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CutPair> {
        self.pairs.iter()
    }

    /// View the pairs as a slice.
    pub fn as_slice(&self) -> &[CutPair] {
        &self.pairs
    }
}

impl Index<usize> for CutLocations {
    type Output = CutPair;

    fn index(&self, index: usize) -> &CutPair {
        &self.pairs[index]
    }
}

impl FromIterator<CutPair> for CutLocations {
    fn from_iter<I: IntoIterator<Item = CutPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CutLocations {
    type Item = &'a CutPair;
    type IntoIter = std::slice::Iter<'a, CutPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for CutLocations {
    type Item = CutPair;
    type IntoIter = std::vec::IntoIter<CutPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// An ordered, read-only collection of [`EnzymeCutPair`] values in enzyme
/// notation, convertible to [`CutLocations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnzymeCutLocations {
    pairs: Vec<EnzymeCutPair>,
}

impl EnzymeCutLocations {
    /// Create a collection from pairs, preserving order.
    pub fn new(pairs: Vec<EnzymeCutPair>) -> Self {
        Self { pairs }
    }

    /// All primary-strand cut positions, order preserved, absences explicit.
    pub fn primary(&self) -> Vec<Option<EnzymeIndex>> {
        self.pairs.iter().map(EnzymeCutPair::primary).collect()
    }

    /// All complement-strand cut positions, order preserved, absences
    /// explicit.
    pub fn complement(&self) -> Vec<Option<EnzymeIndex>> {
        self.pairs.iter().map(EnzymeCutPair::complement).collect()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the collection holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pair at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&EnzymeCutPair> {
        self.pairs.get(index)
    }

    /// Iterate the pairs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, EnzymeCutPair> {
        self.pairs.iter()
    }

    /// View the pairs as a slice.
    pub fn as_slice(&self) -> &[EnzymeCutPair] {
        &self.pairs
    }

    /// The smallest present value across both projections combined, or
    /// `None` if no value is present anywhere.
    ///
    /// Both projections must be converted against the *same* minimum, or
    /// the two strands would land on different scales.
    fn combined_minimum(&self) -> Option<isize> {
        self.pairs
            .iter()
            .flat_map(EnzymeCutPair::iter)
            .flatten()
            .map(EnzymeIndex::get)
            .min()
    }

    /// Convert the primary projection to array-index notation.
    pub fn primary_to_array_index(&self) -> Vec<Option<ArrayIndex>> {
        match self.combined_minimum() {
            Some(minimum) => convert_projection(&self.primary(), minimum),
            None => Vec::new(),
        }
    }

    /// Convert the complement projection to array-index notation.
    pub fn complement_to_array_index(&self) -> Vec<Option<ArrayIndex>> {
        match self.combined_minimum() {
            Some(minimum) => convert_projection(&self.complement(), minimum),
            None => Vec::new(),
        }
    }

    /// Convert the whole collection to array-index notation.
    ///
    /// The two projections are converted independently and zipped back into
    /// pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CutsiteError::ProjectionMismatch`] if the converted
    /// projections differ in length.
    pub fn to_array_index(&self) -> Result<CutLocations> {
        let primary = self.primary_to_array_index();
        let complement = self.complement_to_array_index();
        if primary.len() != complement.len() {
            return Err(CutsiteError::ProjectionMismatch {
                primary: primary.len(),
                complement: complement.len(),
            });
        }
        primary
            .into_iter()
            .zip(complement)
            .map(|(p, c)| CutPair::from_indices(p, c))
            .collect::<Result<Vec<_>>>()
            .map(CutLocations::new)
    }
}

impl Index<usize> for EnzymeCutLocations {
    type Output = EnzymeCutPair;

    fn index(&self, index: usize) -> &EnzymeCutPair {
        &self.pairs[index]
    }
}

impl FromIterator<EnzymeCutPair> for EnzymeCutLocations {
    fn from_iter<I: IntoIterator<Item = EnzymeCutPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EnzymeCutLocations {
    type Item = &'a EnzymeCutPair;
    type IntoIter = std::slice::Iter<'a, EnzymeCutPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for EnzymeCutLocations {
    type Item = EnzymeCutPair;
    type IntoIter = std::vec::IntoIter<EnzymeCutPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Convert one projection from enzyme notation to array-index notation.
///
/// `minimum` is the smallest present value across *both* projections.
/// Negative minimum: close the no-zero gap (pull non-negative values down
/// by one), then shift everything up by `|minimum|`. Non-negative minimum:
/// every value is ≥ 1, so a plain decrement suffices.
fn convert_projection(
    values: &[Option<EnzymeIndex>],
    minimum: isize,
) -> Vec<Option<ArrayIndex>> {
    values
        .iter()
        .map(|value| {
            value.map(|index| {
                let n = index.get();
                let shifted = if minimum < 0 {
                    let closed = if n >= 0 { n - 1 } else { n };
                    closed + minimum.abs()
                } else {
                    n - 1
                };
                // `shifted` is never negative: the minimum itself maps to 0.
                ArrayIndex::from_usize(shifted as usize)
            })
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn enzyme_value() -> impl Strategy<Value = isize> {
        (-50isize..=50).prop_filter("enzyme notation has no zero", |&v| v != 0)
    }

    fn enzyme_locations() -> impl Strategy<Value = EnzymeCutLocations> {
        proptest::collection::vec(
            prop_oneof![
                (enzyme_value(), enzyme_value())
                    .prop_map(|(p, c)| (Some(p), Some(c))),
                enzyme_value().prop_map(|p| (Some(p), None)),
                enzyme_value().prop_map(|c| (None, Some(c))),
            ],
            0..16,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(p, c)| EnzymeCutPair::new(p, c).unwrap())
                .collect()
        })
    }

    proptest! {
        #[test]
        fn conversion_preserves_pair_count(locations in enzyme_locations()) {
            let converted = locations.to_array_index().unwrap();
            prop_assert_eq!(converted.len(), locations.len());
        }

        #[test]
        fn conversion_preserves_absence_pattern(locations in enzyme_locations()) {
            let converted = locations.to_array_index().unwrap();
            for (before, after) in locations.iter().zip(converted.iter()) {
                prop_assert_eq!(before.primary().is_none(), after.primary().is_none());
                prop_assert_eq!(before.complement().is_none(), after.complement().is_none());
            }
        }

        #[test]
        fn smallest_converted_value_matches_branch(locations in enzyme_locations()) {
            prop_assume!(!locations.is_empty());
            let minimum = locations
                .iter()
                .flat_map(EnzymeCutPair::iter)
                .flatten()
                .map(|e| e.get())
                .min()
                .unwrap();
            let converted = locations.to_array_index().unwrap();
            let smallest = converted
                .iter()
                .flat_map(CutPair::iter)
                .flatten()
                .map(ArrayIndex::get)
                .min()
                .unwrap();
            // Negative branch anchors the minimum at 0; positive branch is
            // a plain 1-based to 0-based decrement.
            let expected = if minimum < 0 { 0 } else { (minimum - 1) as usize };
            prop_assert_eq!(smallest, expected);
        }

        #[test]
        fn conversion_preserves_relative_order(locations in enzyme_locations()) {
            // Values on the gapless enzyme scale must keep their ordering
            // after conversion.
            let converted = locations.to_array_index().unwrap();
            let before: Vec<isize> = locations
                .iter()
                .flat_map(EnzymeCutPair::iter)
                .flatten()
                .map(|e| {
                    let n = e.get();
                    if n >= 0 { n - 1 } else { n }
                })
                .collect();
            let after: Vec<usize> = converted
                .iter()
                .flat_map(CutPair::iter)
                .flatten()
                .map(ArrayIndex::get)
                .collect();
            prop_assert_eq!(before.len(), after.len());
            for i in 1..before.len() {
                prop_assert_eq!(before[i - 1].cmp(&before[i]), after[i - 1].cmp(&after[i]));
            }
        }
    }
}
