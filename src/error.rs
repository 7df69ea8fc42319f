use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("text contains no letters after normalization")]
    EmptyText,

    #[error("invalid minimum pattern length: {got} (must be at least 1)")]
    InvalidPatternLength { got: usize },

    #[error("key must not be empty")]
    EmptyKey,

    #[error("key character {character:?} outside the printable range '!'..='~'")]
    KeyOutOfRange { character: char },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
