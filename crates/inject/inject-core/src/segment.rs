//! Contiguous partitioning of a series into equal-as-possible segments.

/// Partition `0..n` into `parts` contiguous half-open ranges.
///
/// The first `n % parts` segments are one row longer than the rest, so
/// segment lengths differ by at most one. When `parts > n` the tail
/// segments are empty. The result is a pure function of `(n, parts)`:
/// segment boundaries never depend on sampling.
pub fn segment_bounds(n: usize, parts: usize) -> Vec<(usize, usize)> {
    if parts == 0 {
        return Vec::new();
    }
    let base = n / parts;
    let remainder = n % parts;

    let mut bounds = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let len = base + usize::from(i < remainder);
        bounds.push((start, start + len));
        start += len;
    }
    bounds
}
