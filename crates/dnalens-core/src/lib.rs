pub mod analysis;
pub mod kmer;
pub mod operations;
pub mod sequence;

pub use analysis::*;
pub use kmer::KmerHistogram;
pub use sequence::*;

use thiserror::Error;

/// Reasons an analysis request is rejected before any derived value is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Please upload or paste a DNA sequence.")]
    EmptyInput,
    #[error("Invalid sequence: Use only A, T, G, and C (found {base:?} at position {position}).")]
    InvalidAlphabet { base: char, position: usize },
    #[error("k-mer size {k} is out of range ({min}..={max})")]
    KmerSizeOutOfRange { k: usize, min: usize, max: usize },
}

impl AnalysisError {
    /// Blank input is a prompt to the user rather than a hard failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, AnalysisError::EmptyInput)
    }
}
