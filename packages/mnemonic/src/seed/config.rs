//! Seed Derivation Configuration
//!
//! PBKDF2-HMAC-SHA512 parameters for turning a phrase into a seed.

/// Seed length in bytes produced by BIP-39 derivation
pub const BIP39_SEED_LEN: usize = 64;

/// Parameters for phrase-to-seed derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConfig {
    /// PBKDF2 iteration count
    pub iterations: u32,
    /// Output size in bytes
    pub output_size: usize,
    /// Literal prepended to the passphrase to form the salt
    pub salt_prefix: &'static str,
}

impl SeedConfig {
    /// BIP-39 parameters: 2048 iterations, 64-byte output, `"mnemonic"` salt prefix
    #[must_use]
    pub const fn bip39() -> Self {
        Self {
            iterations: 2048,
            output_size: BIP39_SEED_LEN,
            salt_prefix: "mnemonic",
        }
    }

    /// Override the iteration count
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::bip39()
    }
}
