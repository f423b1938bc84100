//! Strand alignment and cut-marker splicing.
//!
//! Two complementary strand strings covering the same region may arrive
//! padded differently on either side with a filler byte (conventionally `n`,
//! the "unknown base" ambiguity code). [`AlignedStrands`] re-pads them to a
//! common width, and can additionally splice cut-marker bytes at given
//! 0-based positions and space the output so the two strands stay
//! column-aligned base-for-base.
//!
//! The filler and marker bytes are presentation conventions, not part of the
//! algorithm, so both are configurable.

use std::collections::BTreeSet;

use crate::error::{CutsiteError, Result};

/// Conventional filler byte for unknown/padding positions.
pub const DEFAULT_PAD: u8 = b'n';

/// Conventional cut-marker byte.
pub const DEFAULT_CUT_MARKER: u8 = b'|';

/// A pair of mutually aligned strand strings of equal visual width.
///
/// Transient computation result; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrandPair {
    /// The aligned primary strand.
    pub primary: Vec<u8>,
    /// The aligned complement strand.
    pub complement: Vec<u8>,
}

/// Aligner for two differently-padded strand strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedStrands {
    pad: u8,
    cut_marker: u8,
}

impl Default for AlignedStrands {
    fn default() -> Self {
        Self {
            pad: DEFAULT_PAD,
            cut_marker: DEFAULT_CUT_MARKER,
        }
    }
}

impl AlignedStrands {
    /// Aligner with the conventional `n` filler and `|` cut marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligner with custom filler and cut-marker bytes.
    pub fn with_symbols(pad: u8, cut_marker: u8) -> Self {
        Self { pad, cut_marker }
    }

    /// The filler byte.
    pub const fn pad(&self) -> u8 {
        self.pad
    }

    /// The cut-marker byte.
    pub const fn cut_marker(&self) -> u8 {
        self.cut_marker
    }

    /// Pad two strands to the same total length.
    ///
    /// Each input is treated as `leftpad + core + rightpad`, where the pads
    /// are maximal runs of the filler byte. Both outputs get the longer of
    /// the two left pads and the longer of the two right pads, leaving the
    /// cores unchanged and mutually aligned.
    ///
    /// # Errors
    ///
    /// Returns [`CutsiteError::UnequalCores`] if the stripped cores differ
    /// in length; this is padding alignment, not sequence alignment.
    pub fn align(&self, primary: &[u8], complement: &[u8]) -> Result<StrandPair> {
        let (p_left, p_right) = self.pad_extents(primary);
        let (c_left, c_right) = self.pad_extents(complement);
        let p_core = &primary[p_left..primary.len() - p_right];
        let c_core = &complement[c_left..complement.len() - c_right];
        if p_core.len() != c_core.len() {
            return Err(CutsiteError::UnequalCores {
                primary: p_core.len(),
                complement: c_core.len(),
            });
        }

        let left = p_left.max(c_left);
        let right = p_right.max(c_right);
        Ok(StrandPair {
            primary: self.repad(p_core, left, right),
            complement: self.repad(c_core, left, right),
        })
    }

    /// Pad two strands to the same total length and splice in cut markers.
    ///
    /// Cut positions are 0-based indices into each strand *as passed in*
    /// (before the extra padding this call introduces); a cut at position
    /// `i` places a marker immediately after the character at `i`. Padding
    /// is brought to parity per side and per strand, and the left padding
    /// added to a strand shifts that strand's cut positions by the same
    /// amount, so markers land on the bases they referred to.
    ///
    /// The output is spaced so every base is a single space-separated
    /// token; a cut marker occupies the separator slot after its base, so
    /// both strands keep identical visual width and stay column-aligned.
    ///
    /// # Errors
    ///
    /// Returns [`CutsiteError::UnequalCores`] as [`AlignedStrands::align`]
    /// does.
    pub fn align_with_cuts(
        &self,
        primary: &[u8],
        complement: &[u8],
        primary_cuts: &[usize],
        complement_cuts: &[usize],
    ) -> Result<StrandPair> {
        let (p_left, p_right) = self.pad_extents(primary);
        let (c_left, c_right) = self.pad_extents(complement);
        let p_core = &primary[p_left..primary.len() - p_right];
        let c_core = &complement[c_left..complement.len() - c_right];
        if p_core.len() != c_core.len() {
            return Err(CutsiteError::UnequalCores {
                primary: p_core.len(),
                complement: c_core.len(),
            });
        }

        let left = p_left.max(c_left);
        let right = p_right.max(c_right);
        // Whichever strand has the shorter left pad gains the difference,
        // and its cut positions shift right by the same amount.
        let p_offset = left - p_left;
        let c_offset = left - c_left;

        let p_padded = self.repad(p_core, left, right);
        let c_padded = self.repad(c_core, left, right);
        let p_cut = self.splice_cuts(&p_padded, primary_cuts, p_offset);
        let c_cut = self.splice_cuts(&c_padded, complement_cuts, c_offset);

        Ok(StrandPair {
            primary: self.space_out(&p_cut),
            complement: self.space_out(&c_cut),
        })
    }

    /// Lengths of the maximal filler runs at each end of `strand`.
    ///
    /// The right run is measured on the remainder after the left run, so an
    /// all-filler strand counts entirely as left pad.
    fn pad_extents(&self, strand: &[u8]) -> (usize, usize) {
        let left = strand.iter().take_while(|&&b| b == self.pad).count();
        let right = strand[left..]
            .iter()
            .rev()
            .take_while(|&&b| b == self.pad)
            .count();
        (left, right)
    }

    /// Rebuild `left` filler bytes + `core` + `right` filler bytes.
    fn repad(&self, core: &[u8], left: usize, right: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(left + core.len() + right);
        out.resize(left, self.pad);
        out.extend_from_slice(core);
        out.resize(left + core.len() + right, self.pad);
        out
    }

    /// Emit `strand` with a marker byte after each cut position.
    ///
    /// One forward pass against a sorted set of insertion points; positions
    /// past the end of the strand are ignored. Equivalent to splicing each
    /// cut in descending order, without the index-invalidation hazard.
    fn splice_cuts(&self, strand: &[u8], cuts: &[usize], offset: usize) -> Vec<u8> {
        let points: BTreeSet<usize> = cuts.iter().map(|&c| c + offset).collect();
        let mut out = Vec::with_capacity(strand.len() + points.len());
        for (i, &b) in strand.iter().enumerate() {
            out.push(b);
            if points.contains(&i) {
                out.push(self.cut_marker);
            }
        }
        out
    }

    /// Space a cut-spliced strand so each base is one token wide.
    ///
    /// A space follows every base except where a cut marker does: the
    /// marker takes the separator slot, keeping every base exactly two
    /// columns wide whether or not it is followed by a cut.
    fn space_out(&self, strand: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(strand.len() * 2);
        let mut separate = false;
        for &b in strand {
            if b == self.cut_marker {
                out.push(b);
                separate = false;
            } else {
                if separate {
                    out.push(b' ');
                }
                out.push(b);
                separate = true;
            }
        }
        out
    }
}
