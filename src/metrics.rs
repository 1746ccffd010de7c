//! Per-read numeric metrics used by the filter.

/// GC content of a sequence, as a percentage between 0 and 100.
///
/// Counts `G` and `C` case-insensitively. An empty sequence has a GC content
/// of 0.0 rather than being an error.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let gc = seq
        .chars()
        .filter(|c| matches!(c, 'G' | 'C' | 'g' | 'c'))
        .count();

    100.0 * (gc as f64) / (seq.chars().count() as f64)
}

/// Mean Phred-33 quality of a quality string: the average of
/// `code_point - 33` over every symbol, or 0.0 for an empty string.
///
/// No clamping is performed. A symbol below code point 33 contributes a
/// negative score to the mean.
pub fn mean_quality(qual: &str) -> f64 {
    if qual.is_empty() {
        return 0.0;
    }

    let total: i64 = qual.chars().map(|c| (c as i64) - 33).sum();
    (total as f64) / (qual.chars().count() as f64)
}
