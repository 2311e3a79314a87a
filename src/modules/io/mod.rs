//! I/O module
//!
//! Reading biological sequence files.

pub mod fasta;

/// Convenience re-exports
pub use fasta::{read_fasta, read_pair, FastaError, FastaRecord};
