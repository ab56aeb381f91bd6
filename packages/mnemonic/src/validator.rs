//! Mnemonic validation
//!
//! Checks run in a fixed order and stop at the first failing stage: word
//! count, then vocabulary (every unknown word is collected), then checksum.
//! A checksum failure is therefore never reported for a phrase whose words
//! are malformed.

use crate::checksum::checksum;
use crate::codec::{self, EntropyAndChecksum, WORD_COUNT};
use crate::error::{BadMnemonic, UnknownWord};
use crate::wordlist::WordList;
use crate::{MnemonicError, Result};
use cryypt_common::LoggingTransformer;

/// Validate a word sequence against `words`
///
/// On success returns the decoded entropy and checksum buffer.
///
/// # Errors
///
/// Returns [`MnemonicError::BadMnemonic`] with:
/// - `WrongWordCount` if there are not exactly 24 words
/// - `UnknownWords` listing every position whose word is not in the list
/// - `ChecksumMismatch` if the embedded checksum is wrong
pub fn validate<S: AsRef<str>>(phrase: &[S], words: &WordList) -> Result<EntropyAndChecksum> {
    check(phrase, words).map_err(|e| {
        if let Some(bad) = e.bad_mnemonic() {
            LoggingTransformer::log_rejected_input("mnemonic validation", &bad.kind().to_string());
        } else {
            LoggingTransformer::log_crypto_error("mnemonic validation", &e);
        }
        e
    })
}

fn check<S: AsRef<str>>(phrase: &[S], words: &WordList) -> Result<EntropyAndChecksum> {
    if phrase.len() != WORD_COUNT {
        return Err(BadMnemonic::WrongWordCount(phrase.len()).into());
    }

    let unknown: Vec<UnknownWord> = phrase
        .iter()
        .enumerate()
        .filter(|(_, word)| !words.contains(word.as_ref()))
        .map(|(position, word)| UnknownWord {
            position,
            word: word.as_ref().to_string(),
        })
        .collect();

    if !unknown.is_empty() {
        return Err(BadMnemonic::UnknownWords(unknown).into());
    }

    let buffer = codec::decode(phrase, words).map_err(|e| match e {
        // every word resolved above, so a miss here means the list is broken
        MnemonicError::WordNotInList(word) => {
            MnemonicError::internal(format!("word vanished from list during decode: {word}"))
        }
        other => other,
    })?;

    let (entropy, given) = codec::split(&buffer);
    let expected = checksum(&entropy);

    if given != expected {
        return Err(BadMnemonic::ChecksumMismatch { expected, given }.into());
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, ENTROPY_LEN};
    use crate::error::BadMnemonicKind;
    use crate::wordlist::ENGLISH_RESOURCE;

    fn english() -> WordList {
        WordList::from_text(ENGLISH_RESOURCE).unwrap()
    }

    fn kind_of(result: Result<EntropyAndChecksum>) -> Option<BadMnemonicKind> {
        result.err().and_then(|e| e.bad_mnemonic().map(BadMnemonic::kind))
    }

    #[test]
    fn test_encoded_phrase_validates() {
        let list = english();
        let words = encode(&[0x5A; ENTROPY_LEN], &list).unwrap();
        let buffer = validate(&words, &list).unwrap();
        assert_eq!(buffer[..ENTROPY_LEN], [0x5A; ENTROPY_LEN]);
    }

    #[test]
    fn test_empty_phrase_is_wrong_count() {
        let list = english();
        let words: [&str; 0] = [];
        assert_eq!(
            kind_of(validate(&words, &list)),
            Some(BadMnemonicKind::WrongWordCount)
        );
    }

    #[test]
    fn test_count_checked_before_vocabulary() {
        let list = english();
        let words = vec!["notaword"; 25];
        let err = validate(&words, &list).unwrap_err();
        assert_eq!(err.bad_mnemonic(), Some(&BadMnemonic::WrongWordCount(25)));
    }

    #[test]
    fn test_vocabulary_checked_before_checksum() {
        let list = english();
        // last word "abandon" would also break the checksum
        let mut words = vec!["abandon"; WORD_COUNT];
        words[0] = "Abandon";
        let err = validate(&words, &list).unwrap_err();
        assert_eq!(err.bad_mnemonic().map(BadMnemonic::unknown_positions), Some(vec![0]));
    }

    #[test]
    fn test_checksum_mismatch_reports_both_values() {
        let list = english();
        let words = vec!["abandon"; WORD_COUNT];
        let err = validate(&words, &list).unwrap_err();
        assert_eq!(
            err.bad_mnemonic(),
            Some(&BadMnemonic::ChecksumMismatch {
                expected: 0x66,
                given: 0x00,
            })
        );
    }
}
