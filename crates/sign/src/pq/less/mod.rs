//! Reduced LESS signature scheme
//!
//! Key material is a pair of `k x n` generator matrices over `F_q`. The
//! public matrix is the private one multiplied by an `n x n` transform, and a
//! signature commits to the response `key * challenge` through SHA-256:
//!
//! ```text
//! digest = hex(SHA-256(salt || decimal(response) || message))
//! ```
//!
//! This is the reduced protocol, reproduced with its known weaknesses:
//!
//! - the transform is the identity, so the public key equals the private key
//! - the declared challenge weight `t` is accepted but not enforced
//! - response entries are concatenated without delimiters before hashing
//!
//! Submodules:
//! - `keygen.rs`: seeded key generation and the transform matrix
//! - `signer.rs`: challenge sampling, response and digest
//! - `verifier.rs`: response recomputation and digest comparison
//! - `encoding.rs`: canonical digest input and the byte format of signatures

use core::fmt;
use core::marker::PhantomData;

use lesscrypt_algorithms::FieldMatrix;
use lesscrypt_api::error::{validate, ResultExt};
use lesscrypt_api::{Result as ApiResult, Signature as SignatureTrait, SignatureSerialize};
use lesscrypt_params::pqc::less::{Less252Params, LessParams, LessToyParams};
use lesscrypt_params::utils::hash::SHA256_HEX_SIZE;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

mod encoding;
mod keygen;
mod signer;
mod verifier;

pub use encoding::{pack_signature, response_digest, unpack_signature};
pub use keygen::{derive_public_key, generate, keypair_from_rng, transform_matrix};
pub use signer::sign;
pub use verifier::verify;

/// LESS secret key: the `k x n` private generator matrix.
///
/// Cleared on drop. `Debug` prints only the shape.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessSecretKey(pub(crate) FieldMatrix);

impl LessSecretKey {
    /// Wrap an existing generator matrix
    pub fn from_matrix(matrix: FieldMatrix) -> Self {
        Self(matrix)
    }

    /// The private generator matrix
    pub fn matrix(&self) -> &FieldMatrix {
        &self.0
    }

    /// Rows of the generator (code dimension)
    pub fn k(&self) -> usize {
        self.0.rows()
    }

    /// Columns of the generator (code length)
    pub fn n(&self) -> usize {
        self.0.cols()
    }

    /// Field size
    pub fn modulus(&self) -> u32 {
        self.0.modulus()
    }
}

impl fmt::Debug for LessSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessSecretKey")
            .field("k", &self.k())
            .field("n", &self.n())
            .field("q", &self.modulus())
            .finish_non_exhaustive()
    }
}

/// LESS public key: the `k x n` public generator matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LessPublicKey(pub(crate) FieldMatrix);

impl LessPublicKey {
    /// Wrap an existing generator matrix
    pub fn from_matrix(matrix: FieldMatrix) -> Self {
        Self(matrix)
    }

    /// The public generator matrix
    pub fn matrix(&self) -> &FieldMatrix {
        &self.0
    }

    /// Rows of the generator (code dimension)
    pub fn k(&self) -> usize {
        self.0.rows()
    }

    /// Columns of the generator (code length)
    pub fn n(&self) -> usize {
        self.0.cols()
    }

    /// Field size
    pub fn modulus(&self) -> u32 {
        self.0.modulus()
    }
}

/// A LESS signature: salt, challenge, response and hex digest.
///
/// Construction checks the structure only: both matrices are column vectors
/// over the same field and the digest is 64 lowercase hex characters.
/// Dimensions against a particular key are checked by [`verify`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLessSignature", into = "RawLessSignature")
)]
pub struct LessSignature {
    pub(crate) salt: String,
    pub(crate) challenge: FieldMatrix,
    pub(crate) response: FieldMatrix,
    pub(crate) digest: String,
}

impl LessSignature {
    /// Assemble a signature from already-built parts.
    pub fn new(
        salt: impl Into<String>,
        challenge: FieldMatrix,
        response: FieldMatrix,
        digest: impl Into<String>,
    ) -> Result<Self> {
        let salt = salt.into();
        let digest = digest.into();
        if u32::try_from(salt.len()).is_err() {
            return Err(Error::encoding("salt", "salt longer than 2^32 - 1 bytes"));
        }
        if challenge.cols() != 1 {
            return Err(Error::encoding("challenge", "challenge must be a column vector"));
        }
        if response.cols() != 1 {
            return Err(Error::encoding("response", "response must be a column vector"));
        }
        if challenge.modulus() != response.modulus() {
            return Err(Error::encoding(
                "response",
                "challenge and response belong to different fields",
            ));
        }
        if digest.len() != SHA256_HEX_SIZE
            || !digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(Error::encoding(
                "digest",
                "digest must be 64 lowercase hex characters",
            ));
        }
        Ok(Self {
            salt,
            challenge,
            response,
            digest,
        })
    }

    /// Assemble a signature from the nested-list form
    /// `[salt, challenge, response, digest]`, where each matrix is a list of
    /// single-element rows with entries in `[0, q)`.
    pub fn from_parts(
        salt: impl Into<String>,
        challenge: &[Vec<u32>],
        response: &[Vec<u32>],
        digest: impl Into<String>,
        q: u32,
    ) -> Result<Self> {
        let challenge = FieldMatrix::from_rows(challenge, q)
            .map_err(|e| Error::encoding("challenge", e.to_string()))?;
        let response = FieldMatrix::from_rows(response, q)
            .map_err(|e| Error::encoding("response", e.to_string()))?;
        Self::new(salt, challenge, response, digest)
    }

    /// The salt mixed into the digest
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// The `n x 1` challenge
    pub fn challenge(&self) -> &FieldMatrix {
        &self.challenge
    }

    /// The `k x 1` response
    pub fn response(&self) -> &FieldMatrix {
        &self.response
    }

    /// Lowercase hex SHA-256 digest
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Encode with [`pack_signature`]
    pub fn to_bytes(&self) -> Vec<u8> {
        encoding::pack_signature(self)
    }

    /// Decode with [`unpack_signature`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        encoding::unpack_signature(bytes)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawLessSignature {
    salt: String,
    challenge: FieldMatrix,
    response: FieldMatrix,
    digest: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLessSignature> for LessSignature {
    type Error = Error;

    fn try_from(raw: RawLessSignature) -> Result<Self> {
        LessSignature::new(raw.salt, raw.challenge, raw.response, raw.digest)
    }
}

#[cfg(feature = "serde")]
impl From<LessSignature> for RawLessSignature {
    fn from(sig: LessSignature) -> Self {
        RawLessSignature {
            salt: sig.salt,
            challenge: sig.challenge,
            response: sig.response,
            digest: sig.digest,
        }
    }
}

/// LESS bound to a compile-time parameter set `P`.
pub struct Less<P: LessParams> {
    _params: PhantomData<P>,
}

impl<P: LessParams> SignatureTrait for Less<P> {
    type PublicKey = LessPublicKey;
    type SecretKey = LessSecretKey;
    type SignatureData = LessSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret_key, public_key) =
            keygen::keypair_from_rng(P::K, P::N, P::Q, rng).with_context(P::NAME)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        // The trait carries no RNG, so the challenge and salt come from the OS.
        let mut rng = OsRng;
        let mut salt_bytes = Zeroizing::new(vec![0u8; P::SALT_BYTES]);
        rng.fill_bytes(&mut salt_bytes);
        let salt = hex::encode(&*salt_bytes);
        signer::sign(secret_key, message, &salt, P::N, P::Q, P::T, &mut rng).with_context(P::NAME)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if verifier::verify(public_key, signature, message, P::N, P::Q).with_context(P::NAME)? {
            Ok(())
        } else {
            Err(lesscrypt_api::Error::InvalidSignature {
                context: P::NAME,
                message: "digest mismatch".into(),
            })
        }
    }
}

fn key_matrix_for<P: LessParams>(bytes: &[u8]) -> Result<FieldMatrix> {
    let matrix = FieldMatrix::from_bytes(bytes).map_err(|e| Error::InvalidKey(e.to_string()))?;
    if matrix.shape() != (P::K, P::N) || matrix.modulus() != P::Q {
        return Err(Error::InvalidKey(format!(
            "{} expects a {}x{} matrix over F_{}, got {}x{} over F_{}",
            P::NAME,
            P::K,
            P::N,
            P::Q,
            matrix.rows(),
            matrix.cols(),
            matrix.modulus()
        )));
    }
    Ok(matrix)
}

impl<P: LessParams> SignatureSerialize for Less<P> {
    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.0.to_bytes()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        Ok(LessPublicKey(key_matrix_for::<P>(bytes)?))
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.0.to_bytes())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        Ok(LessSecretKey(key_matrix_for::<P>(bytes)?))
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_bytes()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        let sig = LessSignature::from_bytes(bytes).with_context(P::NAME)?;
        validate::encoding(
            sig.challenge.shape() == (P::N, 1) && sig.challenge.modulus() == P::Q,
            P::NAME,
            "challenge does not match the parameter set",
        )?;
        validate::encoding(
            sig.response.shape() == (P::K, 1),
            P::NAME,
            "response does not match the parameter set",
        )?;
        Ok(sig)
    }
}

/// The worked-example parameter set (k = 4, n = 6, q = 7, t = 3)
pub type LessToy = Less<LessToyParams>;

/// LESS-1 code dimensions (k = 126, n = 252, q = 127, t = 30)
pub type Less252 = Less<Less252Params>;
