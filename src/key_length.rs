//! Key-length estimation from Kasiski gaps.

/// Reduces a sequence of Kasiski gaps to a single key-length guess.
///
/// The estimate is the greatest common divisor of all gaps, folded left to
/// right (the operator is associative and commutative, so any traversal
/// gives the same answer). An empty gap list carries no information and
/// yields `None`; callers must treat that as "no estimate", never as a
/// length of 0 or 1.
pub fn estimate_key_length(gaps: &[usize]) -> Option<usize> {
    gaps.iter().copied().reduce(gcd)
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
