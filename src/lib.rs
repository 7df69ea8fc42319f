//! Classical cryptanalysis of Vigenère and Caesar style ciphertexts.
//!
//! Every operation is a pure function over text: normalization, index of
//! coincidence, letter frequencies, Kasiski examination with key-length
//! estimation, and a brute-force Caesar shift search. A printable-range
//! Vigenère cipher is included as the primitive the analysis side attacks.

pub mod caesar;
pub mod coincidence;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod key_length;
pub mod text;
pub mod vigenere;

pub use caesar::{break_caesar, break_caesar_chi_squared, CaesarBreak};
pub use coincidence::index_of_coincidence;
pub use error::{AnalysisError, Result};
pub use frequency::{letter_frequency_percent, LetterFrequency};
pub use kasiski::{kasiski_examine, KasiskiReport, RepeatedPattern, DEFAULT_MIN_PATTERN_LEN};
pub use key_length::estimate_key_length;
pub use text::normalize;

/// Everything the standard analysis pipeline learns about one ciphertext.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    /// Index of coincidence of the raw ciphertext.
    pub ic: f64,
    /// Letter frequencies, sorted descending by percent.
    pub letter_frequencies: Vec<LetterFrequency>,
    /// Repeated patterns and their gaps.
    pub kasiski: KasiskiReport,
    /// GCD reduction of the Kasiski gaps, if any gaps were found.
    pub estimated_key_length: Option<usize>,
    /// Best single-shift decryption by index of coincidence.
    pub caesar: CaesarBreak,
}

/// Runs the full analysis pipeline over `ciphertext`.
///
/// Computes the index of coincidence, the letter frequency table, a
/// Kasiski examination with the default pattern length, the key-length
/// estimate from its gaps, and the IC-scored Caesar break. A ciphertext
/// with no uppercase letters fails with [`AnalysisError::EmptyText`].
pub fn analyze(ciphertext: &str) -> Result<AnalysisReport> {
    let letter_frequencies = letter_frequency_percent(ciphertext)?;
    let kasiski = kasiski_examine(ciphertext, DEFAULT_MIN_PATTERN_LEN)?;
    let estimated_key_length = estimate_key_length(&kasiski.gaps);

    Ok(AnalysisReport {
        ic: index_of_coincidence(ciphertext),
        letter_frequencies,
        kasiski,
        estimated_key_length,
        caesar: break_caesar(ciphertext),
    })
}
