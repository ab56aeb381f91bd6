//! # Cyrup Mnemonic
//!
//! BIP-39 compatible 24-word mnemonic phrases for deterministic, recoverable
//! key material.
//!
//! ## Features
//!
//! - **Generation**: 256 bits of entropy from a process-wide CSPRNG, encoded as 24 words
//! - **Validation**: word count, vocabulary and checksum checks with detailed failures
//! - **Seed Derivation**: PBKDF2-HMAC-SHA512 seed from phrase and optional passphrase
//! - **Word List**: embedded English list behind a lazily loaded, evictable cache
//!
//! ## Quick Start
//!
//! ```rust
//! use cryypt_mnemonic::Mnemonic;
//!
//! # fn main() -> cryypt_mnemonic::Result<()> {
//! let mnemonic = Mnemonic::generate()?;
//! assert_eq!(mnemonic.len(), 24);
//!
//! // Phrases typed in by a user are checked explicitly
//! let recovered = Mnemonic::from_phrase(mnemonic.phrase());
//! recovered.validate()?;
//!
//! let seed = recovered.to_seed("");
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod checksum;
pub mod codec;
pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod validator;
pub mod wordlist;

// Re-export core types
pub use error::{BadMnemonic, BadMnemonicKind, MnemonicError, Result, UnknownWord};
pub use mnemonic::Mnemonic;
pub use seed::{Seed, SeedConfig, SeedDeriver};
pub use wordlist::{WordList, WordListCache};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BadMnemonic, BadMnemonicKind, Mnemonic, MnemonicError, Result, Seed, SeedConfig,
        SeedDeriver, WordList,
    };
}
