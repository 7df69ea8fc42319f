//! Polyalphabetic substitution over the printable ASCII range.
//!
//! This is the cipher the analysis side of the crate exists to attack: a
//! Vigenère cipher whose alphabet is the 94 printable ASCII symbols
//! `'!'..='~'`, wide enough to carry mixed-case prose, digits and
//! punctuation. Spaces and anything else outside the range pass through
//! unchanged.

use crate::error::{AnalysisError, Result};

/// First symbol of the cipher alphabet (`'!'`, ASCII 33).
pub const PRINTABLE_MIN: u8 = b'!';

/// Last symbol of the cipher alphabet (`'~'`, ASCII 126).
pub const PRINTABLE_MAX: u8 = b'~';

const ALPHABET_SIZE: u8 = PRINTABLE_MAX - PRINTABLE_MIN + 1;

/// Encrypts `text` with a repeating `key` over the printable alphabet.
///
/// The key repeats over character positions of the whole input, including
/// positions occupied by pass-through characters, so decryption must see
/// the text with its formatting intact.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt)
}

/// Decrypts `text` with a repeating `key`; exact inverse of [`encrypt`]
/// for the same key.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt)
}

enum Direction {
    Encrypt,
    Decrypt,
}

fn transform(text: &str, key: &str, direction: Direction) -> Result<String> {
    let shifts = key_shifts(key)?;

    let result = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c.is_ascii() && (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&(c as u8)) {
                let shift = shifts[i % shifts.len()];
                let shift = match direction {
                    Direction::Encrypt => shift,
                    Direction::Decrypt => ALPHABET_SIZE - shift,
                };
                let offset = (c as u8 - PRINTABLE_MIN + shift) % ALPHABET_SIZE;
                (PRINTABLE_MIN + offset) as char
            } else {
                c
            }
        })
        .collect();

    Ok(result)
}

/// Validates the key and converts it to per-position shift amounts in
/// `0..ALPHABET_SIZE`.
fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(AnalysisError::EmptyKey);
    }
    key.chars()
        .map(|c| {
            if c.is_ascii() && (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&(c as u8)) {
                Ok(c as u8 - PRINTABLE_MIN)
            } else {
                Err(AnalysisError::KeyOutOfRange { character: c })
            }
        })
        .collect()
}
