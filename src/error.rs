//! Conversion errors.

use thiserror::Error;

/// Errors raised while parsing or formatting a transcription
///
/// A single bad syllable fails the whole conversion; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No syllable in the inventory prefixes the text at `offset` (in characters)
    #[error("no syllable matches at offset {offset}: '{residual}'")]
    UnsegmentableInput {
        /// Character offset of the first unmatched character
        offset: usize,
        /// Text left over from `offset` on
        residual: String,
    },

    /// Tone number outside `1..=5`
    #[error("invalid tone {0}, expected 1 to 5")]
    InvalidTone(u32),

    /// Character is not a tone mark of the notation being read
    #[error("invalid tone mark {0:?}")]
    InvalidToneMark(char),

    /// Zhuyin spelling without a pinyin counterpart in the dictionary
    #[error("no pinyin for zhuyin spelling '{0}'")]
    UnknownSyllableSpelling(String),

    /// Pinyin syllable missing from the dictionary
    #[error("unknown syllable '{0}'")]
    UnknownSyllable(String),

    /// Numbered pinyin token without its tone digit, or text that is not a token
    #[error("malformed syllable token '{0}'")]
    MalformedSyllableToken(String),

    /// Syllable has no vowel to carry a tone mark
    #[error("no vowel to carry the tone mark in '{0}'")]
    NoVowelToMark(String),

    /// Notation name not recognised
    #[error("unknown notation '{0}'")]
    UnknownNotation(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
