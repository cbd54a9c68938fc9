use serde::Serialize;

use crate::AnalysisError;

/// The four bases a normalized sequence may contain.
pub const DNA_ALPHABET: [char; 4] = ['A', 'T', 'G', 'C'];

/// Uppercase raw input and strip spaces and line breaks.
///
/// Any other character is kept as is, so a later [`validate`] can reject it.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn is_dna_base(c: char) -> bool {
    DNA_ALPHABET.contains(&c)
}

/// True when every character is one of A, T, G, C. An empty string passes.
pub fn validate(seq: &str) -> bool {
    seq.chars().all(is_dna_base)
}

/// A normalized sequence known to contain only A, T, G and C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DnaSequence(String);

impl DnaSequence {
    /// Normalize raw text and check it is a non-empty DNA sequence.
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        if let Some((position, base)) = normalized
            .chars()
            .enumerate()
            .find(|(_, c)| !is_dna_base(*c))
        {
            return Err(AnalysisError::InvalidAlphabet { base, position });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
