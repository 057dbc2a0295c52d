//! Hash functions used for digest binding

use crate::error::HashResult;

pub mod sha2;

pub use self::sha2::Sha256;

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function interface
pub trait HashFunction: Sized {
    /// Algorithm marker carrying the size constants
    type Algorithm: HashAlgorithm;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> HashResult<&mut Self>;

    /// Produce the digest and reset the hasher
    fn finalize(&mut self) -> HashResult<Vec<u8>>;

    /// One-shot digest of `data`
    fn digest(data: &[u8]) -> HashResult<Vec<u8>> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Produce the digest as lowercase hex and reset the hasher
    fn finalize_hex(&mut self) -> HashResult<String> {
        Ok(hex::encode(self.finalize()?))
    }

    /// Algorithm identifier
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
