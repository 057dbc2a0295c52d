//! Signing.

use lesscrypt_algorithms::FieldMatrix;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::encoding::response_digest;
use super::{LessSecretKey, LessSignature};
use crate::error::{Error, Result};

/// Sign `message` under `secret_key`.
///
/// Samples a dense `n x 1` challenge uniformly from `rng`, computes the
/// response `secret_key * challenge mod q` and binds it to `salt` and
/// `message` with [`response_digest`].
///
/// `t` is the declared challenge weight. It is accepted for interface
/// compatibility but not enforced: the challenge is not restricted to `t`
/// nonzero entries.
///
/// Each call advances `rng`, so two signatures of the same message differ
/// unless the generator is reseeded in between.
pub fn sign<R: RngCore + CryptoRng + ?Sized>(
    secret_key: &LessSecretKey,
    message: &[u8],
    salt: &str,
    n: usize,
    q: u32,
    t: usize,
    rng: &mut R,
) -> Result<LessSignature> {
    if secret_key.n() != n {
        return Err(Error::DimensionMismatch {
            context: "sign",
            expected: (secret_key.k(), n),
            actual: secret_key.0.shape(),
        });
    }
    if q <= 1 {
        return Err(Error::parameters("q", "field size must be greater than 1"));
    }
    if secret_key.modulus() != q {
        return Err(Error::parameters(
            "q",
            format!(
                "secret key is over F_{}, asked to sign over F_{}",
                secret_key.modulus(),
                q
            ),
        ));
    }

    let challenge = FieldMatrix::random(n, 1, q, rng)?;
    let response = secret_key.0.mul(&challenge)?;
    let digest = response_digest(salt, &response, message)?;
    debug!(
        n,
        q,
        declared_weight = t,
        salt_len = salt.len(),
        message_len = message.len(),
        "signed message"
    );

    LessSignature::new(salt, challenge, response, digest)
}
