//! Seed derivation
//!
//! Turns a canonical phrase and an optional passphrase into the 64-byte seed
//! consumed by downstream key derivation.

pub mod config;
pub mod core;

pub use self::config::{SeedConfig, BIP39_SEED_LEN};
pub use self::core::{derive_seed, Seed, SeedDeriver};
