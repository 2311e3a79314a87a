//! Pairwise sequence alignment library
//!
//! This library provides dynamic-programming implementations of the classic
//! pairwise alignment modes over byte sequences, with full traceback:
//!
//! - edit distance (Levenshtein, score only)
//! - global alignment with a linear gap penalty
//! - global alignment with an affine gap penalty
//! - local alignment with an affine gap penalty
//! - fit (semi-global) alignment with an affine gap penalty and an optional
//!   jump state that skips declared junction regions of the longer sequence

pub mod engines;
pub mod modules;

// Re-export commonly used items
pub use engines::align::scoring::{JunctionSet, ScoringScheme};
pub use engines::align::{
    align, edit_distance, fit_affine, global, global_affine, local_affine, AlignError,
    Alignment, AlignmentMode,
};
pub use modules::io::fasta::{read_fasta, read_pair, FastaRecord};
pub use modules::seq::sequence::Sequence;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_metadata() {
        assert_eq!(PKG_NAME, "pairalign");
        assert!(!VERSION.is_empty());
    }
}
