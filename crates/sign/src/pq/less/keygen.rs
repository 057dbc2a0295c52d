//! Key generation.
//!
//! The private key is a uniformly random `k x n` matrix over `F_q`; the
//! public key is `private * Q mod q` for the `n x n` transform `Q`.
//!
//! `Q` is meant to be a secret monomial matrix. It is currently the
//! identity, which makes the public key equal to the private key. This keeps
//! keys interchangeable with existing deployments and is a known defect, not
//! a secure construction.

use lesscrypt_algorithms::{FieldMatrix, SeededStream};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{LessPublicKey, LessSecretKey};
use crate::error::{Error, Result};

fn validate_parameters(k: usize, n: usize, q: u32) -> Result<()> {
    if k == 0 {
        return Err(Error::parameters("k", "generator must have at least one row"));
    }
    if n == 0 {
        return Err(Error::parameters("n", "generator must have at least one column"));
    }
    if q <= 1 {
        return Err(Error::parameters("q", "field size must be greater than 1"));
    }
    Ok(())
}

/// The `n x n` structural transform applied to the private generator.
pub fn transform_matrix(n: usize, q: u32) -> Result<FieldMatrix> {
    Ok(FieldMatrix::identity(n, q)?)
}

/// Generate a key pair from `seed`.
///
/// `stream` is reseeded from `seed` on every call, so equal seeds give equal
/// keys. The stream is left positioned after the key material; signing with
/// the same stream continues from there.
///
/// `k <= n` is expected for a meaningful code but is not enforced.
pub fn generate(
    k: usize,
    n: usize,
    q: u32,
    seed: u64,
    stream: &mut SeededStream,
) -> Result<(LessSecretKey, LessPublicKey)> {
    validate_parameters(k, n, q)?;
    stream.reseed(seed);
    debug!(k, n, q, seed, "reseeded generator stream for key generation");
    keypair_from_rng(k, n, q, stream)
}

/// Generate a key pair from an arbitrary RNG without reseeding it.
pub fn keypair_from_rng<R: RngCore + CryptoRng + ?Sized>(
    k: usize,
    n: usize,
    q: u32,
    rng: &mut R,
) -> Result<(LessSecretKey, LessPublicKey)> {
    validate_parameters(k, n, q)?;

    let secret_key = LessSecretKey(FieldMatrix::random(k, n, q, rng)?);
    let public_key = derive_public_key(&secret_key)?;
    debug!(k, n, q, "generated LESS key pair");

    Ok((secret_key, public_key))
}

/// Recompute the public key belonging to `secret_key`.
pub fn derive_public_key(secret_key: &LessSecretKey) -> Result<LessPublicKey> {
    let transform = transform_matrix(secret_key.n(), secret_key.modulus())?;
    Ok(LessPublicKey(secret_key.0.mul(&transform)?))
}
