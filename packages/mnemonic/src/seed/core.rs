//! Core Seed Derivation Implementation
//!
//! PBKDF2 with HMAC-SHA512 over the UTF-8 phrase, salted with the configured
//! prefix followed by the passphrase. Output buffers are zeroized on drop.

use super::config::{SeedConfig, BIP39_SEED_LEN};
use crate::{MnemonicError, Result};
use cryypt_common::LoggingTransformer;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 64-byte seed derived from a mnemonic phrase
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; BIP39_SEED_LEN]);

impl Seed {
    /// Borrow the seed bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; BIP39_SEED_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the seed
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Copy the seed bytes out; the copy is the caller's to wipe
    #[must_use]
    pub fn into_bytes(self) -> [u8; BIP39_SEED_LEN] {
        self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Seed derivation context with validated parameters
#[derive(Debug, Clone, Copy)]
pub struct SeedDeriver {
    config: SeedConfig,
}

impl SeedDeriver {
    /// Create a deriver for the given parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The iteration count is zero
    /// - The output size is not 64 bytes
    pub fn new(config: SeedConfig) -> Result<Self> {
        NonZeroU32::new(config.iterations).ok_or_else(|| {
            MnemonicError::InvalidSeedConfig("PBKDF2 iterations must be non-zero".to_string())
        })?;

        if config.output_size != BIP39_SEED_LEN {
            return Err(MnemonicError::InvalidSeedConfig(format!(
                "output size must be {BIP39_SEED_LEN} bytes, got {}",
                config.output_size
            )));
        }

        Ok(Self { config })
    }

    /// Deriver with BIP-39 parameters
    #[must_use]
    pub const fn bip39() -> Self {
        Self {
            config: SeedConfig::bip39(),
        }
    }

    /// Derive a seed from a canonical phrase and passphrase
    #[must_use]
    pub fn derive(&self, phrase: &str, passphrase: &str) -> Seed {
        let started = Instant::now();

        let mut salt = String::with_capacity(self.config.salt_prefix.len() + passphrase.len());
        salt.push_str(self.config.salt_prefix);
        salt.push_str(passphrase);

        let mut output = [0u8; BIP39_SEED_LEN];
        pbkdf2_hmac::<Sha512>(
            phrase.as_bytes(),
            salt.as_bytes(),
            self.config.iterations,
            &mut output,
        );
        salt.zeroize();

        let seed = Seed(output);
        output.zeroize();

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        LoggingTransformer::log_performance_metric("seed derivation", elapsed_ms, true);

        seed
    }

    /// Get the derivation parameters
    #[must_use]
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }
}

impl Default for SeedDeriver {
    fn default() -> Self {
        Self::bip39()
    }
}

/// Derive a BIP-39 seed from a canonical phrase and passphrase
#[must_use]
pub fn derive_seed(phrase: &str, passphrase: &str) -> Seed {
    SeedDeriver::bip39().derive(phrase, passphrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const REFERENCE_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon abandon about";

    #[test]
    fn test_reference_vector() {
        let seed = derive_seed(REFERENCE_PHRASE, "TREZOR");
        assert_eq!(
            seed.as_bytes(),
            &hex!(
                "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553"
                "1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
            )
        );
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let err = SeedDeriver::new(SeedConfig::bip39().with_iterations(0)).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidSeedConfig(_)));
    }

    #[test]
    fn test_rejects_wrong_output_size() {
        let config = SeedConfig {
            output_size: 32,
            ..SeedConfig::bip39()
        };
        assert!(SeedDeriver::new(config).is_err());
    }

    #[test]
    fn test_validated_bip39_config_matches_preset() {
        let checked = SeedDeriver::new(SeedConfig::default()).unwrap();
        assert_eq!(checked.config(), SeedDeriver::bip39().config());
        assert_eq!(
            checked.derive(REFERENCE_PHRASE, ""),
            derive_seed(REFERENCE_PHRASE, "")
        );
    }

    #[test]
    fn test_iterations_change_output() {
        let fast = SeedDeriver::new(SeedConfig::bip39().with_iterations(1)).unwrap();
        assert_ne!(
            fast.derive(REFERENCE_PHRASE, ""),
            derive_seed(REFERENCE_PHRASE, "")
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let seed = derive_seed(REFERENCE_PHRASE, "");
        assert_eq!(format!("{seed:?}"), "Seed([REDACTED])");
        assert_eq!(seed.to_hex().len(), 128);
    }
}
