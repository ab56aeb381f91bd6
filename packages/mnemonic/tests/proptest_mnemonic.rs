//! Property tests for the mnemonic codec and validator

use cryypt_mnemonic::codec::{self, ENTROPY_LEN, WORD_COUNT};
use cryypt_mnemonic::{BadMnemonic, Mnemonic, MnemonicError, WordList};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_entropy_survives_round_trip(entropy in any::<[u8; ENTROPY_LEN]>()) {
        let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();

        prop_assert_eq!(mnemonic.len(), WORD_COUNT);
        prop_assert!(mnemonic.validate().is_ok());
        prop_assert_eq!(*mnemonic.to_entropy().unwrap(), entropy);
    }

    #[test]
    fn prop_every_word_comes_from_the_list(entropy in any::<[u8; ENTROPY_LEN]>()) {
        let list = WordList::english().unwrap();
        let words = codec::encode(&entropy, &list).unwrap();

        prop_assert!(words.iter().all(|w| list.contains(w)));
    }

    #[test]
    fn prop_out_of_vocabulary_word_is_located(
        entropy in any::<[u8; ENTROPY_LEN]>(),
        position in 0..WORD_COUNT,
        junk in "[a-z]{1,3}[0-9]",
    ) {
        let mut words = Mnemonic::from_entropy(&entropy).unwrap().words().to_vec();
        words[position] = junk;

        let result = Mnemonic::from_words(words).validate();
        match result {
            Err(MnemonicError::BadMnemonic(bad @ BadMnemonic::UnknownWords(_))) => {
                prop_assert_eq!(bad.unknown_positions(), vec![position]);
            }
            other => prop_assert!(false, "expected UnknownWords, got {:?}", other),
        }
    }

    #[test]
    fn prop_wrong_length_is_reported(count in 0usize..48) {
        prop_assume!(count != WORD_COUNT);
        let mnemonic = Mnemonic::from_words(vec!["abandon"; count]);

        let err = mnemonic.validate().unwrap_err();
        prop_assert_eq!(err.bad_mnemonic(), Some(&BadMnemonic::WrongWordCount(count)));
    }
}
