//! Verification.

use lesscrypt_algorithms::FieldMatrix;
use subtle::ConstantTimeEq;
use tracing::debug;

use super::encoding::response_digest;
use super::{LessPublicKey, LessSignature};
use crate::error::{Error, Result};

fn check_shapes(
    public_key: &LessPublicKey,
    signature: &LessSignature,
    n: usize,
    q: u32,
) -> Result<()> {
    if public_key.n() != n {
        return Err(Error::DimensionMismatch {
            context: "verify",
            expected: (public_key.k(), n),
            actual: public_key.0.shape(),
        });
    }
    if q <= 1 {
        return Err(Error::parameters("q", "field size must be greater than 1"));
    }
    if public_key.modulus() != q {
        return Err(Error::parameters(
            "q",
            format!(
                "public key is over F_{}, asked to verify over F_{}",
                public_key.modulus(),
                q
            ),
        ));
    }

    let challenge: &FieldMatrix = &signature.challenge;
    if challenge.modulus() != q {
        return Err(Error::encoding(
            "challenge",
            format!("challenge is over F_{}, expected F_{}", challenge.modulus(), q),
        ));
    }
    if challenge.shape() != (n, 1) {
        return Err(Error::DimensionMismatch {
            context: "verify challenge",
            expected: (n, 1),
            actual: challenge.shape(),
        });
    }
    if signature.response.shape() != (public_key.k(), 1) {
        return Err(Error::encoding(
            "response",
            format!(
                "response must be {}x1, got {}x{}",
                public_key.k(),
                signature.response.rows(),
                signature.response.cols()
            ),
        ));
    }
    Ok(())
}

/// Verify `signature` over `message` under `public_key`.
///
/// Recomputes the response from the embedded challenge and the digest from
/// the recomputed response. Returns `Ok(true)` only if the digest matches and
/// the embedded response equals the recomputed one; any mismatch is
/// `Ok(false)`. Errors are reserved for signatures and keys whose shapes
/// cannot be evaluated against `n` and `q`.
pub fn verify(
    public_key: &LessPublicKey,
    signature: &LessSignature,
    message: &[u8],
    n: usize,
    q: u32,
) -> Result<bool> {
    check_shapes(public_key, signature, n, q)?;

    let response = public_key.0.mul(&signature.challenge)?;
    let digest = response_digest(&signature.salt, &response, message)?;
    debug!(
        original = %signature.digest,
        recomputed = %digest,
        "comparing signature digests"
    );

    let digest_ok = digest.as_bytes().ct_eq(signature.digest.as_bytes());
    let response_ok = response.as_slice().ct_eq(signature.response.as_slice());
    Ok(bool::from(digest_ok & response_ok))
}
