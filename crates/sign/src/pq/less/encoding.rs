//! Canonical digest input and signature byte format.
//!
//! Signature layout (all integers big-endian `u32`):
//!
//! ```text
//! salt_len | salt (UTF-8) | challenge matrix | response matrix | digest (32 bytes)
//! ```
//!
//! Matrices use the [`FieldMatrix::to_bytes`] layout.

use byteorder::{BigEndian, ByteOrder};
use lesscrypt_algorithms::{FieldMatrix, HashFunction, Sha256};
use lesscrypt_params::pqc::less::LESS_ELEMENT_BYTES;
use lesscrypt_params::utils::hash::SHA256_OUTPUT_SIZE;

use super::LessSignature;
use crate::error::{Error, Result};

const CONTEXT: &str = "LessSignature";

/// Digest binding a response to a salt and message.
///
/// Hashes `salt || decimal(response) || message`, where the response entries
/// are written in row-major order with no separator, and returns the
/// lowercase hex SHA-256. Signer and verifier must agree on this byte for
/// byte.
pub fn response_digest(salt: &str, response: &FieldMatrix, message: &[u8]) -> Result<String> {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes())?;
    hasher.update(response.flatten_decimal().as_bytes())?;
    hasher.update(message)?;
    Ok(hasher.finalize_hex()?)
}

/// Serialize a signature to bytes
pub fn pack_signature(sig: &LessSignature) -> Vec<u8> {
    let salt = sig.salt.as_bytes();
    let mut out = Vec::with_capacity(
        LESS_ELEMENT_BYTES
            + salt.len()
            + sig.challenge.encoded_len()
            + sig.response.encoded_len()
            + SHA256_OUTPUT_SIZE,
    );

    let mut len = [0u8; LESS_ELEMENT_BYTES];
    // Salt length was bounded at construction
    BigEndian::write_u32(&mut len, u32::try_from(salt.len()).unwrap_or(u32::MAX));
    out.extend_from_slice(&len);
    out.extend_from_slice(salt);
    out.extend_from_slice(&sig.challenge.to_bytes());
    out.extend_from_slice(&sig.response.to_bytes());
    // The digest was validated as hex at construction
    out.extend_from_slice(&hex::decode(&sig.digest).unwrap_or_default());
    out
}

/// Deserialize a signature from bytes
///
/// Every structural defect is reported as an invalid signature encoding.
pub fn unpack_signature(bytes: &[u8]) -> Result<LessSignature> {
    if bytes.len() < LESS_ELEMENT_BYTES {
        return Err(Error::encoding(CONTEXT, "truncated salt length"));
    }
    let salt_len = BigEndian::read_u32(&bytes[..LESS_ELEMENT_BYTES]) as usize;
    let rest = &bytes[LESS_ELEMENT_BYTES..];
    if rest.len() < salt_len {
        return Err(Error::encoding(CONTEXT, "truncated salt"));
    }
    let salt = core::str::from_utf8(&rest[..salt_len])
        .map_err(|_| Error::encoding(CONTEXT, "salt is not valid UTF-8"))?;
    let rest = &rest[salt_len..];

    let (challenge, rest) = FieldMatrix::from_bytes_prefix(rest)?;
    let (response, rest) = FieldMatrix::from_bytes_prefix(rest)?;

    if rest.len() != SHA256_OUTPUT_SIZE {
        return Err(Error::encoding(
            CONTEXT,
            format!(
                "expected {} digest bytes, got {}",
                SHA256_OUTPUT_SIZE,
                rest.len()
            ),
        ));
    }

    LessSignature::new(salt, challenge, response, hex::encode(rest))
}
