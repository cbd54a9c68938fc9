use std::path::Path;

use crate::FileFormat;

/// Extensions accepted for uploads, grouped by the format they imply
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "seq"];
pub const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta", "fna", "fsa"];

/// Auto-detect format from file content
pub fn detect_format(content: &str) -> FileFormat {
    if content.trim_start().starts_with('>') {
        FileFormat::Fasta
    } else {
        FileFormat::PlainText
    }
}

/// Detect format from file extension
pub fn detect_format_from_extension(path: &str) -> FileFormat {
    let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
        return FileFormat::Unknown;
    };
    let ext = ext.to_lowercase();

    if PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
        FileFormat::PlainText
    } else if FASTA_EXTENSIONS.contains(&ext.as_str()) {
        FileFormat::Fasta
    } else {
        FileFormat::Unknown
    }
}
