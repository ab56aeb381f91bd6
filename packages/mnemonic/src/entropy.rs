//! Process-wide entropy source
//!
//! A single ChaCha-based `StdRng`, seeded once from the operating system and
//! shared by every thread. It is never reseeded per call.

use crate::codec::ENTROPY_LEN;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};
use zeroize::Zeroizing;

static SECURE_RANDOM: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_os_rng()));

/// Draw 32 bytes of entropy from the process-wide generator
#[must_use]
pub fn generate_entropy() -> Zeroizing<[u8; ENTROPY_LEN]> {
    let mut rng = SECURE_RANDOM
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    generate_entropy_with(&mut *rng)
}

/// Draw 32 bytes of entropy from a caller-supplied generator
#[must_use]
pub fn generate_entropy_with<R: CryptoRng + RngCore + ?Sized>(
    rng: &mut R,
) -> Zeroizing<[u8; ENTROPY_LEN]> {
    let mut entropy = Zeroizing::new([0u8; ENTROPY_LEN]);
    rng.fill_bytes(&mut entropy[..]);
    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successive_draws_differ() {
        let a = generate_entropy();
        let b = generate_entropy();
        assert_ne!(*a, *b);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        assert_eq!(
            *generate_entropy_with(&mut first),
            *generate_entropy_with(&mut second)
        );
    }

    #[test]
    fn test_concurrent_draws() {
        let draws: Vec<[u8; ENTROPY_LEN]> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| *generate_entropy()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect()
        });

        for (i, a) in draws.iter().enumerate() {
            for b in &draws[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
