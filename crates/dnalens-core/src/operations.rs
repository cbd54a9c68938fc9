/// Complement a single DNA base; anything outside A/T/G/C passes through
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Transcribe the given strand to RNA (T -> U)
pub fn transcribe(seq: &str) -> String {
    seq.replace('T', "U")
}

/// GC content as a percentage (0.0 to 100.0), rounded to two decimals
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc_count = seq.chars().filter(|c| matches!(c, 'G' | 'C')).count();
    let percent = gc_count as f64 / seq.chars().count() as f64 * 100.0;
    round_to_hundredths(percent)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
