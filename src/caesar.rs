//! Caesar shift search.
//!
//! Brute-forces the 26 possible single-shift decryptions of a ciphertext
//! and keeps the best-scoring candidate. Two scoring functions are
//! provided: the index of coincidence (the classical textbook score, kept
//! with its known blind spot — IC is invariant under alphabet rotation, so
//! over a letters-only text all 26 candidates tie and the smallest shift
//! wins) and a chi-squared fit against English letter frequencies, which
//! does single out the correct shift for English plaintext.
//!
//! Either way this is a monoalphabetic search: a ciphertext produced by a
//! Vigenère key longer than one letter is only approximated, never broken.

use crate::coincidence::{index_of_coincidence, letter_counts, ALPHABET_LEN};
use rayon::prelude::*;

/// Size of the shift space searched by the breaker.
pub const SHIFT_RANGE: u8 = 26;

/// Relative frequency of each English letter, `A` through `Z`.
const ENGLISH_FREQ: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Winning candidate of a shift search.
#[derive(Clone, Debug, PartialEq)]
pub struct CaesarBreak {
    /// Shift in `0..26` that produced `plaintext`.
    pub shift: u8,
    /// Full decryption under `shift`, with non-alphabetic characters kept
    /// in place exactly as they appeared in the ciphertext.
    pub plaintext: String,
    /// Index of coincidence of `plaintext`.
    pub ic: f64,
}

/// Decrypts `text` under a fixed Caesar shift.
///
/// Each uppercase letter is rotated back by `shift` positions (mod 26);
/// every other character, including lowercase, passes through untouched so
/// the original formatting survives.
pub fn decrypt_shift(text: &str, shift: u8) -> String {
    let shift = shift % SHIFT_RANGE;
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                let offset = (c as u8 - b'A' + SHIFT_RANGE - shift) % SHIFT_RANGE;
                (b'A' + offset) as char
            } else {
                c
            }
        })
        .collect()
}

/// Encrypts `text` under a fixed Caesar shift (the inverse of
/// [`decrypt_shift`] for the same `shift`).
pub fn encrypt_shift(text: &str, shift: u8) -> String {
    decrypt_shift(text, (SHIFT_RANGE - shift % SHIFT_RANGE) % SHIFT_RANGE)
}

/// Brute-forces all 26 shifts and keeps the candidate with the highest
/// index of coincidence.
///
/// The trials are independent and run in parallel; the reduction scans
/// candidates in shift order and only a strictly greater IC displaces the
/// incumbent, so ties resolve to the smallest shift regardless of
/// evaluation order. Because IC is rotation-invariant, a letters-only
/// ciphertext ties across all 26 shifts and the result degenerates to
/// shift 0; see [`break_caesar_chi_squared`] for a score that can actually
/// tell shifts apart.
pub fn break_caesar(text: &str) -> CaesarBreak {
    best_candidate(text, |candidate| candidate.ic)
}

/// Brute-forces all 26 shifts and keeps the candidate whose letter
/// distribution best fits English, by chi-squared statistic.
///
/// Lower chi-squared is better; the first strict minimum in shift order
/// wins. The returned [`CaesarBreak`] still reports the winning
/// candidate's index of coincidence.
pub fn break_caesar_chi_squared(text: &str) -> CaesarBreak {
    best_candidate(text, |candidate| -chi_squared(&candidate.plaintext))
}

/// Chi-squared distance between the letter counts of `text` and the
/// expected English distribution. Empty text scores infinitely bad.
pub fn chi_squared(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: u64 = counts.iter().map(|&f| u64::from(f)).sum();
    if n == 0 {
        return f64::INFINITY;
    }

    counts
        .iter()
        .zip(ENGLISH_FREQ.iter())
        .map(|(&observed, &freq)| {
            let expected = freq * n as f64;
            let diff = f64::from(observed) - expected;
            diff * diff / expected
        })
        .sum()
}

fn trial(text: &str, shift: u8) -> CaesarBreak {
    let plaintext = decrypt_shift(text, shift);
    let ic = index_of_coincidence(&plaintext);
    CaesarBreak {
        shift,
        plaintext,
        ic,
    }
}

/// Runs the 26 shift trials in parallel and reduces them sequentially in
/// shift order, keeping the first strict maximum of `score`.
fn best_candidate(text: &str, score: impl Fn(&CaesarBreak) -> f64) -> CaesarBreak {
    let mut best = trial(text, 0);
    let mut best_score = score(&best);

    let rest: Vec<CaesarBreak> = (1..SHIFT_RANGE)
        .into_par_iter()
        .map(|shift| trial(text, shift))
        .collect();

    for candidate in rest {
        let candidate_score = score(&candidate);
        if candidate_score > best_score {
            best_score = candidate_score;
            best = candidate;
        }
    }
    best
}
