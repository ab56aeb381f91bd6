//! BIP-39 English word list
//!
//! The list is an immutable, ascending, 2048-entry vocabulary where a word's
//! position is its 11-bit index. It is loaded from an embedded text resource
//! through a process-wide [`WordListCache`], which may drop the list and
//! reload it on the next access.

pub mod cache;

pub use cache::WordListCache;

use crate::{MnemonicError, Result};
use std::sync::Arc;

/// Number of words in a BIP-39 word list
pub const WORD_LIST_LEN: usize = 2048;

/// Mask selecting the 11 bits of a word index
pub const WORD_INDEX_MASK: u16 = 0x7FF;

/// Embedded English word list, one word per line
pub(crate) const ENGLISH_RESOURCE: &str = include_str!("../../resources/bip39-english.txt");

/// Immutable sorted word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Box<[String]>,
}

impl WordList {
    /// Parse a word list from its text resource
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resource does not contain exactly 2048 lines
    /// - A line is empty or not lowercase ASCII
    /// - The words are not strictly ascending (unsorted or duplicated)
    pub fn from_text(text: &str) -> Result<Self> {
        let words: Vec<String> = text.lines().map(str::to_string).collect();

        if words.len() != WORD_LIST_LEN {
            return Err(MnemonicError::invalid_word_list(format!(
                "expected {WORD_LIST_LEN} words, got {}",
                words.len()
            )));
        }

        if let Some(line) = words
            .iter()
            .position(|w| w.is_empty() || !w.bytes().all(|b| b.is_ascii_lowercase()))
        {
            return Err(MnemonicError::invalid_word_list(format!(
                "line {line} is not a lowercase ASCII word"
            )));
        }

        // binary search relies on strict ordering
        if let Some(line) = words.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(MnemonicError::invalid_word_list(format!(
                "words out of order at line {}",
                line + 1
            )));
        }

        Ok(Self {
            words: words.into_boxed_slice(),
        })
    }

    /// Get the cached English word list
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded resource fails to load.
    pub fn english() -> Result<Arc<Self>> {
        WordListCache::global().get()
    }

    /// Word at `index`, or `None` outside `0..2048`
    #[must_use]
    pub fn get(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Index of `word`, by case-sensitive binary search
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
            .and_then(|index| u16::try_from(index).ok())
    }

    /// Whether `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// Number of words, always 2048
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a parsed list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}
