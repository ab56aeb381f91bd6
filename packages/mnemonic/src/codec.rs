//! Entropy to word codec
//!
//! 32 bytes of entropy plus one checksum byte make 264 bits, which split
//! evenly into 24 eleven-bit word indexes. Bits are packed least significant
//! byte first and least significant bit first within each byte: the first
//! word comes from the low bits of byte 0, and the checksum byte ends up in
//! the high bits of the last word.

use crate::checksum::checksum;
use crate::error::BadMnemonic;
use crate::wordlist::{WordList, WORD_INDEX_MASK};
use crate::{MnemonicError, Result};
use zeroize::Zeroizing;

/// Entropy length in bytes
pub const ENTROPY_LEN: usize = 32;

/// Entropy plus trailing checksum byte
pub const ENTROPY_AND_CHECKSUM_LEN: usize = ENTROPY_LEN + 1;

/// Number of words in a mnemonic
pub const WORD_COUNT: usize = 24;

/// Bits carried by each word
pub const BITS_PER_WORD: u32 = 11;

/// Decoded mnemonic: entropy bytes 0..32, claimed checksum at byte 32
pub type EntropyAndChecksum = Zeroizing<[u8; ENTROPY_AND_CHECKSUM_LEN]>;

/// Encode entropy as 24 words
///
/// # Errors
///
/// Returns [`MnemonicError::Internal`] only if `words` violates the
/// 2048-entry invariant.
pub fn encode(entropy: &[u8; ENTROPY_LEN], words: &WordList) -> Result<Vec<String>> {
    let mut bytes: EntropyAndChecksum = Zeroizing::new([0u8; ENTROPY_AND_CHECKSUM_LEN]);
    bytes[..ENTROPY_LEN].copy_from_slice(entropy);
    bytes[ENTROPY_LEN] = checksum(entropy);

    let mut output = Vec::with_capacity(WORD_COUNT);
    let mut scratch: u32 = 0;
    let mut offset: u32 = 0;

    for &byte in bytes.iter() {
        // shift the byte in above the pending bits, pop an index when we can
        scratch |= u32::from(byte) << offset;
        offset += 8;

        if offset >= BITS_PER_WORD {
            let index = (scratch & u32::from(WORD_INDEX_MASK)) as u16;
            let word = words
                .get(index)
                .ok_or_else(|| MnemonicError::internal(format!("index out of bounds: {index}")))?;
            output.push(word.to_string());

            scratch >>= BITS_PER_WORD;
            offset -= BITS_PER_WORD;
        }
    }

    Ok(output)
}

/// Decode 24 words back into entropy and checksum
///
/// The checksum is returned as found; comparing it is the validator's job.
///
/// # Errors
///
/// Returns an error if:
/// - The word count is not 24
/// - A word is not in the list
/// - The list yields an index wider than 11 bits (internal invariant)
pub fn decode<S: AsRef<str>>(phrase: &[S], words: &WordList) -> Result<EntropyAndChecksum> {
    if phrase.len() != WORD_COUNT {
        return Err(BadMnemonic::WrongWordCount(phrase.len()).into());
    }

    let mut buffer: EntropyAndChecksum = Zeroizing::new([0u8; ENTROPY_AND_CHECKSUM_LEN]);
    let mut position = 0;
    let mut scratch: u32 = 0;
    let mut offset: u32 = 0;

    for word in phrase {
        let word = word.as_ref();
        let index = words
            .index_of(word)
            .ok_or_else(|| MnemonicError::WordNotInList(word.to_string()))?;

        if index > WORD_INDEX_MASK {
            return Err(MnemonicError::internal(format!(
                "index out of bounds: {index}"
            )));
        }

        scratch |= u32::from(index) << offset;
        offset += BITS_PER_WORD;

        while offset >= 8 {
            // truncation keeps the low byte; the rest waits for the next emit
            buffer[position] = (scratch & 0xFF) as u8;
            position += 1;
            scratch >>= 8;
            offset -= 8;
        }
    }

    Ok(buffer)
}

/// Split a decoded buffer into its entropy and checksum parts
#[must_use]
pub fn split(buffer: &[u8; ENTROPY_AND_CHECKSUM_LEN]) -> (Zeroizing<[u8; ENTROPY_LEN]>, u8) {
    let mut entropy = Zeroizing::new([0u8; ENTROPY_LEN]);
    entropy.copy_from_slice(&buffer[..ENTROPY_LEN]);
    (entropy, buffer[ENTROPY_LEN])
}
