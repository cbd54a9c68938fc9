use tracing::warn;

use crate::ParseError;

/// One `>`-headed record from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub name: String,
    pub description: String,
    /// Sequence lines joined together, otherwise as written
    pub sequence: String,
}

impl FastaRecord {
    fn new(header: &str) -> Self {
        let mut parts = header.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default().to_string();
        let description = parts.next().map(|d| d.trim().to_string()).unwrap_or_default();
        Self {
            name,
            description,
            sequence: String::new(),
        }
    }
}

/// Parse a FASTA format string into one or more records
///
/// Sequence characters are not filtered here so that stray symbols still
/// reach validation and get reported to the user.
pub fn parse(input: &str) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(record) = current.take() {
                push_record(&mut records, record);
            }
            current = Some(FastaRecord::new(header));
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(trimmed);
        } else {
            return Err(ParseError::InvalidFormat(
                "Sequence data before the first FASTA header".to_string(),
            ));
        }
    }

    // Don't forget the last record
    if let Some(record) = current {
        push_record(&mut records, record);
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

fn push_record(records: &mut Vec<FastaRecord>, record: FastaRecord) {
    if record.sequence.is_empty() {
        warn!(record = %record.name, "FASTA record has no sequence, skipping");
    } else if record.name.is_empty() {
        warn!(bases = record.sequence.len(), "FASTA record has no name, skipping");
    } else {
        records.push(record);
    }
}
