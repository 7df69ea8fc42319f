//! Index of coincidence estimation.
//!
//! The index of coincidence (IC) is the probability that two letters drawn
//! at random from a text are identical. Monoalphabetic English hovers near
//! 0.067 while flat/polyalphabetic text sits near 1/26 ≈ 0.038; this module
//! only computes the raw figure and leaves that interpretation to callers.

use crate::text::normalize;

/// Number of letters in the analysis alphabet `A..=Z`.
pub const ALPHABET_LEN: usize = 26;

/// Per-letter occurrence counts over the normalized form of `text`.
///
/// Indexed by letter offset (`counts[0]` is `A`). A fixed-size array keeps
/// the bounded key domain explicit and avoids hashing.
pub fn letter_counts(text: &str) -> [u32; ALPHABET_LEN] {
    let mut counts = [0u32; ALPHABET_LEN];
    for b in normalize(text).bytes() {
        counts[(b - b'A') as usize] += 1;
    }
    counts
}

/// Computes the index of coincidence of `text`.
///
/// The input is normalized internally, so raw ciphertext is accepted.
/// With per-letter counts `f` over `N` letters the IC is
/// `Σ f(f-1) / (N(N-1))`; fewer than two letters yield `0.0` by definition
/// rather than an error.
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: u64 = counts.iter().map(|&f| u64::from(f)).sum();
    if n < 2 {
        return 0.0;
    }

    let coincidences: u64 = counts
        .iter()
        .map(|&f| u64::from(f) * u64::from(f).saturating_sub(1))
        .sum();

    coincidences as f64 / (n as f64 * (n as f64 - 1.0))
}
