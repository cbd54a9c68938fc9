pub mod detect;
pub mod fasta;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Fasta,
    PlainText,
    Unknown,
}

/// Turn uploaded file contents into the raw sequence text for analysis.
///
/// FASTA input yields its first record; plain text is passed through untouched.
pub fn extract_sequence(content: &str) -> Result<String, ParseError> {
    if detect::detect_format(content) != FileFormat::Fasta {
        return Ok(content.to_string());
    }

    let mut records = fasta::parse(content)?.into_iter();
    let first = records
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No sequences found".to_string()))?;
    let skipped = records.count();
    if skipped > 0 {
        warn!(
            record = %first.name,
            skipped,
            "multi-record FASTA, analyzing first record only"
        );
    }
    Ok(first.sequence)
}

/// Read an uploaded sequence file, accepting only known sequence extensions.
pub fn read_upload(path: impl AsRef<Path>) -> Result<String, ParseError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if detect::detect_format_from_extension(&shown) == FileFormat::Unknown {
        return Err(ParseError::UnsupportedFile(shown));
    }

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| {
        ParseError::InvalidFormat(format!("{} is not valid UTF-8 text", shown))
    })?;
    debug!(path = %shown, bytes = content.len(), "read upload");

    extract_sequence(&content)
}
