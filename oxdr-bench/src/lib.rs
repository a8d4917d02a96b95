//! # OXDR Bench
//!
//! Benchmark fixtures for OXDR codec performance testing.

/// Returns `n` short ASCII strings for string-codec benchmarks.
#[must_use]
pub fn sample_strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("entry-{i:04}")).collect()
}

/// Returns `n` ints spanning the full signed range.
#[must_use]
pub fn sample_ints(n: usize) -> Vec<i32> {
    (0..n)
        .map(|i| if i % 2 == 0 { i as i32 } else { -(i as i32) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shapes() {
        assert_eq!(sample_strings(3).len(), 3);
        let ints = sample_ints(4);
        assert_eq!(ints, vec![0, -1, 2, -3]);
    }
}
