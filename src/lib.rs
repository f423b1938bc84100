//! Double-stranded restriction-enzyme cut-site modeling.
//!
//! Models where an enzyme cuts the two complementary strands of a DNA
//! duplex, across two coexisting coordinate systems, and renders aligned
//! strand strings with cut markers:
//!
//! - **Index notations** — [`ArrayIndex`] (0-based) and [`EnzymeIndex`]
//!   (1-based, zero-less, negatives allowed) as distinct types
//! - **Cut pairs** — [`CutPair`], [`EnzymeCutPair`]: one cut per strand,
//!   at least one side present
//! - **Cut collections** — [`CutLocations`], [`EnzymeCutLocations`] with
//!   per-strand projections and the enzyme→array notation conversion
//! - **Strand alignment** — [`AlignedStrands`] pads two strand strings to
//!   a common width and splices in cut markers
//! - **Enzyme definitions** — [`Enzyme`] with IUPAC site validation and
//!   site scanning, plus a curated [`common_enzymes`] table
//!
//! # Example
//!
//! ```
//! use cutsite::{AlignedStrands, EnzymeCutLocations, EnzymeCutPair};
//!
//! // EcoRI cuts G^AATTC at enzyme-notation (1, 5)...
//! let cuts = EnzymeCutLocations::new(vec![
//!     EnzymeCutPair::new(Some(1), Some(5)).unwrap(),
//! ]);
//!
//! // ...which is (0, 4) in 0-based array-index notation.
//! let converted = cuts.to_array_index().unwrap();
//! assert_eq!(converted[0].primary().unwrap().get(), 0);
//! assert_eq!(converted[0].complement().unwrap().get(), 4);
//!
//! // Render both strands with their cuts marked.
//! let aligned = AlignedStrands::new()
//!     .align_with_cuts(b"gaattc", b"cttaag", &[0], &[4])
//!     .unwrap();
//! assert_eq!(aligned.primary, b"g|a a t t c".to_vec());
//! assert_eq!(aligned.complement, b"c t t a a|g".to_vec());
//! ```

pub mod align;
pub mod enzyme;
pub mod error;
pub mod locations;
pub mod notation;
pub mod pair;

pub use align::{AlignedStrands, StrandPair, DEFAULT_CUT_MARKER, DEFAULT_PAD};
pub use enzyme::{common_enzymes, iupac_matches, Enzyme, SiteMatch};
pub use error::{CutsiteError, Result};
pub use locations::{CutLocations, EnzymeCutLocations};
pub use notation::{ArrayIndex, EnzymeIndex};
pub use pair::{CutPair, EnzymeCutPair};
