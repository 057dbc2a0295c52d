//! Reseedable pseudorandom generator state
//!
//! Key generation reseeds the stream it is handed and signing keeps drawing
//! from wherever the stream was left. Callers own one [`SeededStream`] per
//! independent sequence of operations instead of sharing a process-wide
//! generator.

use core::fmt;

use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A ChaCha20 stream that can be reseeded from a `u64`.
///
/// Seeding goes through [`SeedableRng::seed_from_u64`], so a given seed
/// always yields the same sequence of words regardless of platform.
#[derive(Clone)]
pub struct SeededStream {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededStream {
    /// Create a stream positioned at the start of `seed`'s sequence
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Discard the current state and restart from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }

    /// The seed most recently applied
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of 32-bit words consumed since the last reseed
    pub fn words_consumed(&self) -> u128 {
        self.rng.get_word_pos()
    }
}

impl fmt::Debug for SeededStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededStream")
            .field("seed", &self.seed)
            .field("words_consumed", &self.words_consumed())
            .finish()
    }
}

impl RngCore for SeededStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl CryptoRng for SeededStream {}
