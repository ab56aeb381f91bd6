//! Comprehensive error handling for mnemonic module

use std::fmt;
use thiserror::Error;

/// A word that could not be resolved against the word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWord {
    /// Zero-based position of the word in the mnemonic
    pub position: usize,
    /// The word as it appeared in the mnemonic
    pub word: String,
}

/// Tag identifying which validation step rejected a mnemonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadMnemonicKind {
    /// The mnemonic did not have exactly 24 words
    WrongWordCount,
    /// One or more words were not in the word list
    UnknownWords,
    /// The embedded checksum did not match the entropy
    ChecksumMismatch,
}

impl fmt::Display for BadMnemonicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WrongWordCount => "WrongWordCount",
            Self::UnknownWords => "UnknownWords",
            Self::ChecksumMismatch => "ChecksumMismatch",
        };
        f.write_str(name)
    }
}

/// A mnemonic that failed validation
///
/// Variants are reported in the order the checks run: word count first,
/// then vocabulary, then checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadMnemonic {
    /// Word count was not 24; carries the observed count
    #[error("expected 24-word mnemonic, got {0} words")]
    WrongWordCount(usize),

    /// Words missing from the word list, every offending position in input order
    #[error(
        "the following words in the mnemonic were not in the word list: {}",
        join_words(.0)
    )]
    UnknownWords(Vec<UnknownWord>),

    /// Checksum recomputed from the entropy differs from the one encoded in the words
    #[error("mnemonic failed checksum, expected {expected:#04x}, got {given:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the decoded entropy
        expected: u8,
        /// Checksum carried by the last word
        given: u8,
    },
}

impl BadMnemonic {
    /// Get the kind tag for user-facing reporting
    #[must_use]
    pub fn kind(&self) -> BadMnemonicKind {
        match self {
            Self::WrongWordCount(_) => BadMnemonicKind::WrongWordCount,
            Self::UnknownWords(_) => BadMnemonicKind::UnknownWords,
            Self::ChecksumMismatch { .. } => BadMnemonicKind::ChecksumMismatch,
        }
    }

    /// Positions of unknown words, empty for other kinds
    #[must_use]
    pub fn unknown_positions(&self) -> Vec<usize> {
        match self {
            Self::UnknownWords(words) => words.iter().map(|w| w.position).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_words(words: &[UnknownWord]) -> String {
    words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Mnemonic-specific errors
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// The mnemonic is malformed
    #[error(transparent)]
    BadMnemonic(#[from] BadMnemonic),

    /// Entropy of the wrong size was supplied
    #[error("invalid entropy byte length: expected {expected}, got {actual}")]
    InvalidEntropyLength {
        /// Required entropy length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A word could not be resolved while decoding
    #[error("word not in word list: {0}")]
    WordNotInList(String),

    /// The word list resource is malformed
    #[error("invalid word list: {0}")]
    InvalidWordList(String),

    /// Seed derivation parameters are unusable
    #[error("invalid seed configuration: {0}")]
    InvalidSeedConfig(String),

    /// An internal invariant was violated
    #[error("(BUG) {0}")]
    Internal(String),
}

impl MnemonicError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_word_list` error
    pub fn invalid_word_list(msg: impl Into<String>) -> Self {
        Self::InvalidWordList(msg.into())
    }

    /// Get the validation failure, if this error is one
    #[must_use]
    pub fn bad_mnemonic(&self) -> Option<&BadMnemonic> {
        match self {
            Self::BadMnemonic(bad) => Some(bad),
            _ => None,
        }
    }
}

/// Result type for mnemonic operations
pub type Result<T> = std::result::Result<T, MnemonicError>;
