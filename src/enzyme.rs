//! Restriction-enzyme definitions: recognition site plus enzyme-notation
//! cut locations.
//!
//! An [`Enzyme`] pairs an IUPAC recognition site with one or more
//! [`EnzymeCutPair`] values in enzyme notation. Most enzymes cut once
//! within or near the site; a few (e.g. BcgI) cut on both sides and carry
//! two pairs. Cut positions may be negative (upstream of the site) or
//! beyond the site length (downstream), but never zero.

use crate::error::{CutsiteError, Result};
use crate::locations::{CutLocations, EnzymeCutLocations};
use crate::notation::{ArrayIndex, EnzymeIndex};
use crate::pair::{CutPair, EnzymeCutPair};

/// A restriction enzyme: name, IUPAC recognition site, and cut locations
/// in enzyme notation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enzyme {
    name: String,
    site: Vec<u8>,
    cut_locations: EnzymeCutLocations,
}

/// A recognition-site match on a scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMatch {
    /// 0-based offset of the recognition site in the scanned sequence.
    pub offset: usize,
    /// The enzyme's cuts as absolute array-index positions on the scanned
    /// sequence.
    pub cut_locations: CutLocations,
}

impl Enzyme {
    /// Create an enzyme definition.
    ///
    /// The site is uppercased and validated against the IUPAC DNA alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the site is empty, contains a non-IUPAC byte, or
    /// no cut pairs are given.
    pub fn new(
        name: impl Into<String>,
        site: &[u8],
        cut_pairs: Vec<EnzymeCutPair>,
    ) -> Result<Self> {
        if site.is_empty() {
            return Err(CutsiteError::InvalidEnzyme(
                "recognition site is empty".into(),
            ));
        }
        let site: Vec<u8> = site.iter().map(|b| b.to_ascii_uppercase()).collect();
        for (i, &b) in site.iter().enumerate() {
            if iupac_set(b).is_empty() {
                return Err(CutsiteError::InvalidEnzyme(format!(
                    "non-IUPAC byte '{}' (0x{:02X}) at site position {}",
                    b as char, b, i
                )));
            }
        }
        if cut_pairs.is_empty() {
            return Err(CutsiteError::InvalidEnzyme(
                "an enzyme needs at least one cut pair".into(),
            ));
        }
        Ok(Self {
            name: name.into(),
            site,
            cut_locations: EnzymeCutLocations::new(cut_pairs),
        })
    }

    /// The enzyme's name (e.g. "EcoRI").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The uppercase IUPAC recognition site.
    pub fn site(&self) -> &[u8] {
        &self.site
    }

    /// Recognition-site length in bases.
    pub fn site_len(&self) -> usize {
        self.site.len()
    }

    /// The cut locations in enzyme notation.
    pub fn cut_locations(&self) -> &EnzymeCutLocations {
        &self.cut_locations
    }

    /// The cut locations converted to 0-based array-index notation.
    ///
    /// The converted scale is anchored at the enzyme's most upstream cut:
    /// with purely positive cuts the origin is the start of the recognition
    /// site, with negative cuts it is the most upstream cut position
    /// itself.
    ///
    /// # Errors
    ///
    /// Propagates conversion failures from
    /// [`EnzymeCutLocations::to_array_index`].
    pub fn array_index_cut_locations(&self) -> Result<CutLocations> {
        self.cut_locations.to_array_index()
    }

    /// Scan `seq` for IUPAC-aware matches of the recognition site.
    ///
    /// Each match yields the site offset and the enzyme's cuts as absolute
    /// array-index positions on `seq`, computed directly from enzyme
    /// notation: position `n > 0` cuts after base `offset + n - 1`,
    /// position `n < 0` after base `offset + n`. Matches with a cut falling
    /// outside the sequence (upstream cuts near the start, downstream cuts
    /// near the end) are skipped.
    ///
    /// # Errors
    ///
    /// Propagates cut-pair construction failures.
    pub fn cut_sites(&self, seq: &[u8]) -> Result<Vec<SiteMatch>> {
        let site_len = self.site.len();
        if seq.len() < site_len {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for offset in 0..=seq.len() - site_len {
            let hit = self
                .site
                .iter()
                .zip(&seq[offset..offset + site_len])
                .all(|(&code, &base)| iupac_matches(code, base));
            if !hit {
                continue;
            }
            if let Some(pairs) = self.absolute_pairs(offset, seq.len())? {
                matches.push(SiteMatch {
                    offset,
                    cut_locations: CutLocations::new(pairs),
                });
            }
        }
        Ok(matches)
    }

    /// The enzyme's cuts as absolute positions for a site match at
    /// `offset`, or `None` if any cut falls outside `[0, len)`.
    fn absolute_pairs(&self, offset: usize, len: usize) -> Result<Option<Vec<CutPair>>> {
        let mut pairs = Vec::with_capacity(self.cut_locations.len());
        for pair in self.cut_locations.iter() {
            let primary = match pair.primary().map(|i| absolute_position(offset, i, len)) {
                Some(None) => return Ok(None),
                Some(Some(p)) => Some(ArrayIndex::from_usize(p)),
                None => None,
            };
            let complement = match pair.complement().map(|i| absolute_position(offset, i, len)) {
                Some(None) => return Ok(None),
                Some(Some(c)) => Some(ArrayIndex::from_usize(c)),
                None => None,
            };
            pairs.push(CutPair::from_indices(primary, complement)?);
        }
        Ok(Some(pairs))
    }
}

/// Absolute array-index position of an enzyme-notation cut for a site at
/// `offset`, or `None` if it falls outside the sequence.
///
/// Enzyme position `n > 0` cuts after base `offset + n - 1`; `n < 0` cuts
/// after base `offset + n` (the scale has no zero, so `-1` is the base just
/// before the site start).
fn absolute_position(offset: usize, index: EnzymeIndex, len: usize) -> Option<usize> {
    let n = index.get();
    let position = if n > 0 {
        offset as isize + n - 1
    } else {
        offset as isize + n
    };
    (position >= 0 && (position as usize) < len).then(|| position as usize)
}

/// The set of concrete bases an IUPAC DNA code stands for (empty for
/// non-IUPAC bytes).
fn iupac_set(code: u8) -> &'static [u8] {
    match code.to_ascii_uppercase() {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'M' => b"AC",
        b'K' => b"GT",
        b'S' => b"CG",
        b'W' => b"AT",
        b'H' => b"ACT",
        b'B' => b"CGT",
        b'V' => b"ACG",
        b'D' => b"AGT",
        b'N' => b"ACGT",
        _ => b"",
    }
}

/// Whether `base` satisfies the IUPAC DNA code `code` (case-insensitive).
pub fn iupac_matches(code: u8, base: u8) -> bool {
    iupac_set(code).contains(&base.to_ascii_uppercase())
}

/// A curated set of common restriction enzymes with enzyme-notation cuts.
///
/// Includes 5'-overhang, 3'-overhang and blunt cutters, one outside cutter
/// (BsaI) and one double cutter with upstream cuts (BcgI).
pub fn common_enzymes() -> Vec<Enzyme> {
    vec![
        enzyme("EcoRI", b"GAATTC", &[(1, 5)]),
        enzyme("BamHI", b"GGATCC", &[(1, 5)]),
        enzyme("HindIII", b"AAGCTT", &[(1, 5)]),
        enzyme("NotI", b"GCGGCCGC", &[(2, 6)]),
        enzyme("EcoRV", b"GATATC", &[(3, 3)]),
        enzyme("SmaI", b"CCCGGG", &[(3, 3)]),
        enzyme("KpnI", b"GGTACC", &[(5, 1)]),
        enzyme("PstI", b"CTGCAG", &[(5, 1)]),
        enzyme("BsaI", b"GGTCTC", &[(7, 11)]),
        enzyme("BcgI", b"CGANNNNNNTGC", &[(-10, -12), (24, 22)]),
    ]
}

/// Build one curated enzyme; the table data is known-valid.
fn enzyme(name: &str, site: &[u8], cuts: &[(isize, isize)]) -> Enzyme {
    let pairs = cuts
        .iter()
        .map(|&(p, c)| {
            EnzymeCutPair::new(Some(p), Some(c)).expect("curated cut pair is valid")
        })
        .collect();
    Enzyme::new(name, site, pairs).expect("curated enzyme is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> Enzyme {
        common_enzymes()
            .into_iter()
            .find(|e| e.name() == name)
            .unwrap()
    }

    #[test]
    fn ecori_converts_to_array_index() {
        // G^AATTC / CTTAA^G: enzyme (1, 5) → array (0, 4).
        let ecori = by_name("EcoRI");
        let converted = ecori.array_index_cut_locations().unwrap();
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].primary().unwrap().get(), 0);
        assert_eq!(converted[0].complement().unwrap().get(), 4);
    }

    #[test]
    fn ecori_finds_absolute_cut_sites() {
        let ecori = by_name("EcoRI");
        let matches = ecori.cut_sites(b"AAAGAATTCAAA").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 3);
        let pair = &matches[0].cut_locations[0];
        // Site starts at 3, so the primary cut falls after index 3.
        assert_eq!(pair.primary().unwrap().get(), 3);
        assert_eq!(pair.complement().unwrap().get(), 7);
    }

    #[test]
    fn blunt_cutter_has_equal_cut_positions() {
        let ecorv = by_name("EcoRV");
        let converted = ecorv.array_index_cut_locations().unwrap();
        assert_eq!(
            converted[0].primary().unwrap(),
            converted[0].complement().unwrap()
        );
    }

    #[test]
    fn bcgi_carries_two_cut_pairs_with_upstream_cuts() {
        let bcgi = by_name("BcgI");
        assert_eq!(bcgi.cut_locations().len(), 2);
        assert!(bcgi.cut_locations()[0].primary().unwrap().is_upstream());

        // Minimum is -12, so the upstream complement cut anchors index 0.
        let converted = bcgi.array_index_cut_locations().unwrap();
        assert_eq!(converted[0].complement().unwrap().get(), 0);
        assert_eq!(converted[0].primary().unwrap().get(), 2);
    }

    #[test]
    fn upstream_cutter_reports_positions_before_the_site() {
        let bcgi = by_name("BcgI");
        let mut seq = vec![b'A'; 50];
        seq[20..32].copy_from_slice(b"CGATTTTTTTGC");
        let matches = bcgi.cut_sites(&seq).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].offset, 20);

        let cuts = &matches[0].cut_locations;
        // Upstream pair: enzyme (-10, -12) cuts after bases 10 and 8,
        // before the site start.
        assert_eq!(cuts[0].primary().unwrap().get(), 10);
        assert_eq!(cuts[0].complement().unwrap().get(), 8);
        assert!(cuts[0].primary().unwrap().get() < matches[0].offset);
        // Downstream pair: enzyme (24, 22) cuts after bases 43 and 41.
        assert_eq!(cuts[1].primary().unwrap().get(), 43);
        assert_eq!(cuts[1].complement().unwrap().get(), 41);
    }

    #[test]
    fn matches_with_cuts_before_sequence_start_are_skipped() {
        let bcgi = by_name("BcgI");
        // Site at offset 5: the upstream cuts at enzyme -10/-12 would fall
        // before the first base.
        let mut seq = vec![b'A'; 50];
        seq[5..17].copy_from_slice(b"CGATTTTTTTGC");
        assert!(bcgi.cut_sites(&seq).unwrap().is_empty());
    }

    #[test]
    fn matches_with_cuts_past_sequence_end_are_skipped() {
        let bsai = by_name("BsaI");
        // Site flush with the end: the downstream cuts at enzyme 7/11
        // would fall past the final base.
        assert!(bsai.cut_sites(b"AAAAGGTCTC").unwrap().is_empty());
        // With downstream room the cuts land inside the sequence.
        let matches = bsai.cut_sites(b"AAAAGGTCTCTTTTTTT").unwrap();
        assert_eq!(matches.len(), 1);
        let pair = &matches[0].cut_locations[0];
        assert_eq!(pair.primary().unwrap().get(), 10);
        assert_eq!(pair.complement().unwrap().get(), 14);
    }

    #[test]
    fn degenerate_site_matches_all_realizations() {
        let enz = Enzyme::new(
            "TestEnz",
            b"GAANTC",
            vec![EnzymeCutPair::new(Some(1), Some(5)).unwrap()],
        )
        .unwrap();
        for seq in [b"GAATTC", b"GAACTC", b"GAAATC", b"GAAGTC"] {
            assert_eq!(enz.cut_sites(seq).unwrap().len(), 1);
        }
        assert!(enz.cut_sites(b"GATTTC").unwrap().is_empty());
    }

    #[test]
    fn scanning_is_case_insensitive() {
        let ecori = by_name("EcoRI");
        assert_eq!(ecori.cut_sites(b"aaagaattcaaa").unwrap().len(), 1);
    }

    #[test]
    fn short_sequence_yields_no_matches() {
        let ecori = by_name("EcoRI");
        assert!(ecori.cut_sites(b"GAATT").unwrap().is_empty());
    }

    #[test]
    fn multiple_matches_report_each_offset() {
        let ecori = by_name("EcoRI");
        let matches = ecori.cut_sites(b"GAATTCAAGAATTC").unwrap();
        let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
        assert_eq!(offsets, vec![0, 8]);
    }

    #[test]
    fn rejects_bad_definitions() {
        let pair = EnzymeCutPair::new(Some(1), Some(5)).unwrap();
        assert!(matches!(
            Enzyme::new("Empty", b"", vec![pair]),
            Err(CutsiteError::InvalidEnzyme(_))
        ));
        assert!(matches!(
            Enzyme::new("BadByte", b"GAXTTC", vec![pair]),
            Err(CutsiteError::InvalidEnzyme(_))
        ));
        assert!(matches!(
            Enzyme::new("NoCuts", b"GAATTC", Vec::new()),
            Err(CutsiteError::InvalidEnzyme(_))
        ));
    }

    #[test]
    fn site_is_uppercased() {
        let enz = Enzyme::new(
            "Lower",
            b"gaattc",
            vec![EnzymeCutPair::new(Some(1), Some(5)).unwrap()],
        )
        .unwrap();
        assert_eq!(enz.site(), b"GAATTC");
    }

    #[test]
    fn curated_table_is_well_formed() {
        let enzymes = common_enzymes();
        assert_eq!(enzymes.len(), 10);
        for e in &enzymes {
            assert!(!e.name().is_empty());
            assert!(!e.site().is_empty());
            assert!(e.array_index_cut_locations().is_ok());
        }
    }
}
