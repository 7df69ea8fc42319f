//! Kasiski examination.
//!
//! A repeating Vigenère key tends to encrypt recurring plaintext fragments
//! to identical ciphertext fragments whenever they land on the same key
//! offset, so the gaps between repeated ciphertext patterns are multiples
//! of the key length. This module finds those repeated patterns and their
//! gaps; [`crate::key_length::estimate_key_length`] reduces the gaps to a
//! key-length guess.

use crate::error::{AnalysisError, Result};
use crate::text::normalize;
use std::collections::HashMap;

/// Default window length for the repeated-pattern scan.
pub const DEFAULT_MIN_PATTERN_LEN: usize = 3;

/// A ciphertext fragment that occurs more than once, with every starting
/// offset (in the normalized text) at which it appears, in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepeatedPattern {
    pub pattern: String,
    pub positions: Vec<usize>,
}

impl RepeatedPattern {
    /// Distances between consecutive occurrences of this pattern.
    pub fn gaps(&self) -> Vec<usize> {
        self.positions
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }
}

/// Outcome of a Kasiski examination.
///
/// `patterns` lists every repeated pattern in order of first occurrence;
/// `gaps` is the concatenation of each pattern's consecutive-occurrence
/// gaps, in that same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KasiskiReport {
    pub patterns: Vec<RepeatedPattern>,
    pub gaps: Vec<usize>,
}

impl KasiskiReport {
    /// True when no repeated pattern was found.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Scans `text` for repeated fragments of exactly `min_length` letters.
///
/// The input is normalized internally. Every window starting at offsets
/// `0..len - min_length` is indexed (overlapping occurrences included);
/// windows seen at two or more offsets become [`RepeatedPattern`]s. A text
/// shorter than the window simply yields an empty report.
///
/// `min_length` of zero is meaningless and rejected with
/// [`AnalysisError::InvalidPatternLength`].
pub fn kasiski_examine(text: &str, min_length: usize) -> Result<KasiskiReport> {
    if min_length == 0 {
        return Err(AnalysisError::InvalidPatternLength { got: 0 });
    }

    let normalized = normalize(text);
    let len = normalized.len();

    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for i in 0..len.saturating_sub(min_length) {
        let window = &normalized[i..i + min_length];
        let entry = positions.entry(window).or_default();
        if entry.is_empty() {
            first_seen.push(window);
        }
        entry.push(i);
    }

    let mut report = KasiskiReport::default();
    for window in first_seen {
        let occurrences = &positions[window];
        if occurrences.len() < 2 {
            continue;
        }
        let pattern = RepeatedPattern {
            pattern: window.to_string(),
            positions: occurrences.clone(),
        };
        report.gaps.extend(pattern.gaps());
        report.patterns.push(pattern);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_min_length() {
        assert_eq!(
            kasiski_examine("ABABAB", 0),
            Err(AnalysisError::InvalidPatternLength { got: 0 })
        );
    }

    #[test]
    fn alternating_text_repeats_both_bigrams() {
        let report = kasiski_examine("ABABAB", 2).unwrap();
        assert_eq!(report.patterns.len(), 2);
        assert_eq!(report.patterns[0].pattern, "AB");
        assert_eq!(report.patterns[0].positions, vec![0, 2]);
        assert_eq!(report.patterns[1].pattern, "BA");
        assert_eq!(report.patterns[1].positions, vec![1, 3]);
        assert_eq!(report.gaps, vec![2, 2]);
    }

    #[test]
    fn run_of_letters_overlaps() {
        let report = kasiski_examine("AAAAA", 3).unwrap();
        assert_eq!(report.patterns.len(), 1);
        assert_eq!(report.patterns[0].pattern, "AAA");
        assert_eq!(report.patterns[0].positions, vec![0, 1]);
        assert_eq!(report.gaps, vec![1]);
    }

    #[test]
    fn short_text_has_no_repeats() {
        assert!(kasiski_examine("AB", 3).unwrap().is_empty());
        assert!(kasiski_examine("ABC", 3).unwrap().is_empty());
        assert!(kasiski_examine("", 3).unwrap().is_empty());
    }

    #[test]
    fn unique_windows_produce_no_patterns() {
        let report = kasiski_examine("ABCDEFGH", 3).unwrap();
        assert!(report.is_empty());
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn normalizes_before_scanning() {
        let spaced = kasiski_examine("AB AB AB", 2).unwrap();
        let plain = kasiski_examine("ABABAB", 2).unwrap();
        assert_eq!(spaced, plain);
    }

    #[test]
    fn repeated_trigram_gap_matches_key_period() {
        // "CRY" recurs 6 positions apart.
        let report = kasiski_examine("CRYABCCRYDEF", 3).unwrap();
        let cry = report
            .patterns
            .iter()
            .find(|p| p.pattern == "CRY")
            .expect("CRY should repeat");
        assert_eq!(cry.positions, vec![0, 6]);
        assert_eq!(cry.gaps(), vec![6]);
    }
}
