//! Overlapping k-mer counting.
//!
//! Counts are kept in first-appearance order so a histogram reads the same
//! way the sequence does, left to right.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from k-mer to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmerHistogram {
    k: usize,
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl KmerHistogram {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn record(&mut self, kmer: &str) {
        match self.index.get(kmer) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(kmer.to_string(), self.entries.len());
                self.entries.push((kmer.to_string(), 1));
            }
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn get(&self, kmer: &str) -> Option<usize> {
        self.index.get(kmer).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct k-mers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of windows scanned
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Entries in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(kmer, count)| (kmer.as_str(), *count))
    }
}

impl Serialize for KmerHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kmer, count) in &self.entries {
            map.serialize_entry(kmer, count)?;
        }
        map.end()
    }
}

/// Count every overlapping window of length `k` (step 1).
///
/// `k == 0` or `k` longer than the sequence yields an empty histogram.
pub fn kmer_count(seq: &str, k: usize) -> KmerHistogram {
    let mut histogram = KmerHistogram::new(k);
    if k == 0 || k > seq.len() {
        return histogram;
    }

    let bytes = seq.as_bytes();
    for window in bytes.windows(k) {
        // Normalized sequences are ASCII; anything else is skipped rather than split
        if let Ok(kmer) = std::str::from_utf8(window) {
            histogram.record(kmer);
        }
    }
    histogram
}
