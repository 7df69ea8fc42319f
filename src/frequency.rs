//! Letter frequency analysis.

use crate::coincidence::letter_counts;
use crate::error::{AnalysisError, Result};
use std::cmp::Ordering;

/// One row of a frequency table: a letter and its share of the text.
#[derive(Clone, Debug, PartialEq)]
pub struct LetterFrequency {
    pub letter: char,
    pub percent: f64,
}

/// Percentage frequency of each letter present in `text`, sorted descending.
///
/// The input is normalized internally; only letters that actually occur are
/// reported, and their percentages sum to 100 (up to floating-point error).
/// Ties keep alphabetical order (the sort is stable over `A..=Z`).
///
/// A text with no letters has no defined frequency distribution and is
/// rejected with [`AnalysisError::EmptyText`] instead of dividing by zero.
pub fn letter_frequency_percent(text: &str) -> Result<Vec<LetterFrequency>> {
    let counts = letter_counts(text);
    let total: u64 = counts.iter().map(|&f| u64::from(f)).sum();
    if total == 0 {
        return Err(AnalysisError::EmptyText);
    }

    let mut table: Vec<LetterFrequency> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(offset, &count)| LetterFrequency {
            letter: (b'A' + offset as u8) as char,
            percent: 100.0 * f64::from(count) / total as f64,
        })
        .collect();

    table.sort_by(|a, b| {
        b.percent
            .partial_cmp(&a.percent)
            .unwrap_or(Ordering::Equal)
    });

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(letter_frequency_percent(""), Err(AnalysisError::EmptyText));
        assert_eq!(
            letter_frequency_percent("... 123 abc"),
            Err(AnalysisError::EmptyText)
        );
    }

    #[test]
    fn single_letter_is_all_of_the_text() {
        let table = letter_frequency_percent("QQQQ").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].letter, 'Q');
        assert_eq!(table[0].percent, 100.0);
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let table = letter_frequency_percent("AABBBC").unwrap();
        let letters: Vec<char> = table.iter().map(|row| row.letter).collect();
        assert_eq!(letters, vec!['B', 'A', 'C']);

        // Equal counts keep alphabetical order.
        let tied = letter_frequency_percent("BACB CA").unwrap();
        let letters: Vec<char> = tied.iter().map(|row| row.letter).collect();
        assert_eq!(letters, vec!['A', 'B', 'C']);
    }

    #[test]
    fn quarters() {
        let table = letter_frequency_percent("ABAB").unwrap();
        assert_eq!(table[0].percent, 50.0);
        assert_eq!(table[1].percent, 50.0);
    }

    proptest! {
        #[test]
        fn percentages_sum_to_one_hundred(text in "[A-Z]{1,200}") {
            let table = letter_frequency_percent(&text).unwrap();
            let sum: f64 = table.iter().map(|row| row.percent).sum();
            prop_assert!((sum - 100.0).abs() < 1e-9);
        }

        #[test]
        fn ordering_is_descending(text in "[A-Z ,.]{1,200}") {
            prop_assume!(text.chars().any(|c| c.is_ascii_uppercase()));
            let table = letter_frequency_percent(&text).unwrap();
            prop_assert!(table.windows(2).all(|w| w[0].percent >= w[1].percent));
        }
    }
}
