use serde::Serialize;
use tracing::{debug, info};

use crate::kmer::{kmer_count, KmerHistogram};
use crate::operations::{gc_content, reverse_complement, transcribe};
use crate::sequence::DnaSequence;
use crate::AnalysisError;

/// Bounds and defaults applied to incoming analysis requests.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// k used when the caller does not choose one.
    pub default_k: usize,
    /// Smallest accepted k-mer size.
    pub min_k: usize,
    /// Largest accepted k-mer size.
    pub max_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_k: 3,
            min_k: 1,
            max_k: 6,
        }
    }
}

/// Everything one analysis needs: the raw text as entered and the chosen k.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub raw: String,
    pub k: usize,
}

impl AnalysisRequest {
    pub fn new(raw: impl Into<String>, k: usize) -> Self {
        Self { raw: raw.into(), k }
    }
}

/// Display-ready results for a single sequence.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub length: usize,
    pub gc_content: f64,
    pub reverse_complement: String,
    pub transcript: String,
    pub k: usize,
    pub kmer_histogram: KmerHistogram,
}

/// Handle one analysis request from scratch.
///
/// Validation runs once up front; if it fails nothing else is computed.
pub fn analyze(
    request: &AnalysisRequest,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    if request.k < config.min_k || request.k > config.max_k {
        return Err(AnalysisError::KmerSizeOutOfRange {
            k: request.k,
            min: config.min_k,
            max: config.max_k,
        });
    }

    let seq = DnaSequence::parse(&request.raw).inspect_err(|e| {
        debug!(error = %e, raw_len = request.raw.len(), "rejected analysis input");
    })?;

    let report = analyze_sequence(&seq, request.k);
    info!(
        length = report.length,
        gc_content = report.gc_content,
        k = report.k,
        distinct_kmers = report.kmer_histogram.len(),
        "sequence analyzed"
    );
    Ok(report)
}

/// Derive every statistic for an already validated sequence.
pub fn analyze_sequence(seq: &DnaSequence, k: usize) -> AnalysisReport {
    let bases = seq.as_str();
    AnalysisReport {
        length: seq.len(),
        gc_content: gc_content(bases),
        reverse_complement: reverse_complement(bases),
        transcript: transcribe(bases),
        k,
        kmer_histogram: kmer_count(bases, k),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.default_k, 3);
        assert_eq!((config.min_k, config.max_k), (1, 6));
    }

    #[test]
    fn test_analyze_sequence() {
        let seq = DnaSequence::parse("ATGCGC").unwrap();
        let report = analyze_sequence(&seq, 2);
        assert_eq!(report.length, 6);
        assert_eq!(report.gc_content, 66.67);
        assert_eq!(report.reverse_complement, "GCGCAT");
        assert_eq!(report.transcript, "AUGCGC");
        assert_eq!(report.kmer_histogram.total(), 5);
    }

    #[test]
    fn test_k_out_of_range() {
        let config = AnalysisConfig::default();
        for k in [0, 7] {
            let err = analyze(&AnalysisRequest::new("ATGC", k), &config).unwrap_err();
            assert_eq!(err, AnalysisError::KmerSizeOutOfRange { k, min: 1, max: 6 });
        }
    }

    #[test]
    fn test_k_checked_before_sequence() {
        // A bad k is reported even when the sequence is also bad
        let err = analyze(&AnalysisRequest::new("", 9), &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::KmerSizeOutOfRange { .. }));
    }

    #[test]
    fn test_report_json_shape() {
        let report = analyze(&AnalysisRequest::new("atgcgc", 2), &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["length"], 6);
        assert_eq!(json["gcContent"], 66.67);
        assert_eq!(json["reverseComplement"], "GCGCAT");
        assert_eq!(json["transcript"], "AUGCGC");
        assert_eq!(json["k"], 2);
        assert_eq!(json["kmerHistogram"]["GC"], 2);
    }
}
