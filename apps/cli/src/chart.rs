//! Horizontal bar chart of k-mer frequencies for terminal output.

use dnalens_core::KmerHistogram;

/// Width in characters of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR: char = '█';

/// One line per k-mer, in histogram order, bars scaled to the largest count.
///
/// A non-zero count always gets at least one block so rare k-mers stay visible.
pub fn render_bar_chart(histogram: &KmerHistogram, width: usize) -> String {
    let max = histogram.max_count();
    if max == 0 || width == 0 {
        return String::new();
    }

    let label_width = histogram.k();
    let mut out = String::new();
    for (kmer, count) in histogram.iter() {
        let bar_len = (count * width).div_ceil(max);
        out.push_str(&format!(
            "{kmer:<label_width$} | {} {count}\n",
            BAR.to_string().repeat(bar_len)
        ));
    }
    out
}
