//! Digital signature traits for lesscrypt
//!
//! This module defines the traits that signature schemes implement.
//! Secret keys are never required to be mutable or byte-accessible.

use crate::Result;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Core trait for digital signature algorithms
///
/// This trait defines the minimal interface that all signature algorithms
/// must implement. It intentionally does not require `AsRef` or `AsMut`
/// implementations for secret keys to prevent accidental key corruption.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must draw all key material from `rng`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(())` for a valid signature and an error otherwise.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

/// Optional trait for signature algorithms that support key serialization
///
/// Encoded sizes depend on the parameter set, so implementations validate
/// lengths while decoding rather than exposing fixed size constants.
pub trait SignatureSerialize: Signature {
    /// Export a public key to bytes
    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8>;

    /// Import a public key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or invalid
    fn deserialize_public_key(bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Export a secret key to bytes
    ///
    /// The `Zeroizing` wrapper clears the bytes from memory when dropped.
    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>>;

    /// Import a secret key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or invalid
    fn deserialize_secret_key(bytes: &[u8]) -> Result<Self::SecretKey>;

    /// Export a signature to bytes
    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8>;

    /// Import a signature from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or invalid
    fn deserialize_signature(bytes: &[u8]) -> Result<Self::SignatureData>;
}
