//! SHA-256 backed by the RustCrypto `sha2` crate

use ::sha2::Digest;
use lesscrypt_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};

use crate::error::HashResult;
use crate::hash::{HashAlgorithm, HashFunction};

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// SHA-256 hasher
#[derive(Clone, Default)]
pub struct Sha256 {
    inner: ::sha2::Sha256,
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) -> HashResult<&mut Self> {
        Digest::update(&mut self.inner, data);
        Ok(self)
    }

    fn finalize(&mut self) -> HashResult<Vec<u8>> {
        Ok(self.inner.finalize_reset().to_vec())
    }
}

#[cfg(test)]
mod tests;
