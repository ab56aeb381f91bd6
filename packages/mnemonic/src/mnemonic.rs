//! 24-word mnemonic phrases
//!
//! A [`Mnemonic`] is an immutable word sequence. Construction never
//! validates: phrases built from caller input stay unchecked until
//! [`Mnemonic::validate`] runs, so callers can inspect malformed input
//! before surfacing an error. Phrases built from entropy are always valid.

use crate::codec::{self, ENTROPY_LEN};
use crate::entropy::{generate_entropy, generate_entropy_with};
use crate::seed::{derive_seed, Seed};
use crate::validator;
use crate::wordlist::WordList;
use crate::{MnemonicError, Result};
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, Zeroizing};

/// BIP-39 mnemonic phrase
#[derive(Clone)]
pub struct Mnemonic {
    words: Vec<String>,
    phrase: OnceCell<String>,
}

impl Mnemonic {
    /// Construct from an arbitrary word sequence without validating it
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            phrase: OnceCell::new(),
        }
    }

    /// Recover a mnemonic from its phrase, splitting on single spaces
    ///
    /// Trailing empty segments are dropped; any other empty segment is kept
    /// as an empty word and fails validation.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let mut words: Vec<&str> = phrase.split(' ').collect();
        while words.len() > 1 && words.last().is_some_and(|w| w.is_empty()) {
            words.pop();
        }
        Self::from_words(words)
    }

    /// Encode 32 bytes of entropy as a 24-word mnemonic
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entropy` is not exactly 32 bytes
    /// - The word list cannot be loaded
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        let entropy: &[u8; ENTROPY_LEN] =
            entropy
                .try_into()
                .map_err(|_| MnemonicError::InvalidEntropyLength {
                    expected: ENTROPY_LEN,
                    actual: entropy.len(),
                })?;

        let list = WordList::english()?;
        Ok(Self::from_words(codec::encode(entropy, &list)?))
    }

    /// Generate a new random 24-word mnemonic
    ///
    /// The result always passes [`Mnemonic::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded.
    pub fn generate() -> Result<Self> {
        let entropy = generate_entropy();
        Self::from_entropy(entropy.as_slice())
    }

    /// Generate a mnemonic from a caller-supplied secure generator
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded.
    pub fn generate_with<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        let entropy = generate_entropy_with(rng);
        Self::from_entropy(entropy.as_slice())
    }

    /// Check word count, vocabulary and checksum
    ///
    /// # Errors
    ///
    /// Returns [`MnemonicError::BadMnemonic`] describing the first failing
    /// check, or an internal error if the word list cannot be loaded.
    pub fn validate(&self) -> Result<()> {
        let list = WordList::english()?;
        validator::validate(&self.words, &list).map(drop)
    }

    /// Validate, then return the 32 bytes of entropy this phrase encodes
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Mnemonic::validate`] fails.
    pub fn to_entropy(&self) -> Result<Zeroizing<[u8; ENTROPY_LEN]>> {
        let list = WordList::english()?;
        let buffer = validator::validate(&self.words, &list)?;
        let (entropy, _) = codec::split(&buffer);
        Ok(entropy)
    }

    /// Derive the 64-byte seed from the phrase and `passphrase`
    ///
    /// Pass an empty passphrase for wallets that do not use one. The phrase
    /// is not validated here.
    #[must_use]
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        derive_seed(self.phrase(), passphrase)
    }

    /// The words of this mnemonic
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Canonical phrase: words joined by single spaces, computed once
    #[must_use]
    pub fn phrase(&self) -> &str {
        self.phrase.get_or_init(|| self.words.join(" "))
    }
}

impl FromStr for Mnemonic {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_phrase(s))
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &format_args!("[REDACTED; {}]", self.words.len()))
            .finish()
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Mnemonic {}

impl Drop for Mnemonic {
    fn drop(&mut self) {
        self.words.zeroize();
        if let Some(phrase) = self.phrase.get_mut() {
            phrase.zeroize();
        }
    }
}
