//! Ciphertext normalization.
//!
//! Every statistical function in this crate works over the normalized form
//! of its input, so raw ciphertext can carry whitespace, punctuation and
//! line breaks freely.

/// Strips a text down to its uppercase letters `A..=Z`, preserving order.
///
/// This is a pure filter: lowercase letters are dropped along with digits,
/// punctuation and whitespace. Callers working with mixed-case text must
/// uppercase it themselves before analysis; the normalization contract here
/// never case-folds.
///
/// Idempotent, and total over any input including the empty string.
pub fn normalize(text: &str) -> String {
    text.chars().filter(char::is_ascii_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_only_uppercase_letters() {
        assert_eq!(normalize("HELLO, WORLD!\n"), "HELLOWORLD");
        assert_eq!(normalize("A1B2 C3"), "ABC");
    }

    #[test]
    fn drops_lowercase_instead_of_folding() {
        assert_eq!(normalize("Attack at Dawn"), "AD");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?"), "");
    }

    proptest! {
        #[test]
        fn idempotent(text in ".*") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn output_is_all_uppercase(text in ".*") {
            prop_assert!(normalize(&text).chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
