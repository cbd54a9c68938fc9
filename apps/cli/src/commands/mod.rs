pub mod analyze;
pub mod formats;

use dnalens_core::AnalysisError;
use dnalens_formats::ParseError;
use thiserror::Error;

/// Failures surfaced to the user as a message rather than a crash.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("Failed to read file: {0}")]
    Upload(#[from] ParseError),
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

impl CommandError {
    pub fn is_warning(&self) -> bool {
        matches!(self, CommandError::Analysis(e) if e.is_warning())
    }
}
