//! Integration tests for the reduced LESS signature scheme

use lesscrypt_algorithms::{FieldMatrix, SeededStream};
use lesscrypt_api::{Signature, SignatureSerialize};
use lesscrypt_sign::pq::less::{pack_signature, response_digest, unpack_signature};
use lesscrypt_sign::{generate, sign, verify, Error, Less252, LessToy};
use lesscrypt_tests::vectors::scenario::*;
use lesscrypt_tests::vectors::DIGEST_VECTORS;
use rand::rngs::OsRng;

#[test]
fn test_worked_example() {
    let mut stream = SeededStream::from_seed(SEED);

    // Generate keys
    let (secret_key, public_key) = generate(K, N, Q, SEED, &mut stream).unwrap();
    assert_eq!(public_key.matrix().shape(), (K, N));

    // Sign the message
    let signature = sign(
        &secret_key,
        MESSAGE.as_bytes(),
        SALT,
        N,
        Q,
        T,
        &mut stream,
    )
    .unwrap();

    // Verify the signature
    assert!(verify(&public_key, &signature, MESSAGE.as_bytes(), N, Q).unwrap());

    // Try with a modified message
    assert!(!verify(&public_key, &signature, MODIFIED_MESSAGE.as_bytes(), N, Q).unwrap());
}

#[test]
fn test_worked_example_known_answer() {
    let mut stream = SeededStream::from_seed(0);
    let (secret_key, public_key) = generate(K, N, Q, SEED, &mut stream).unwrap();
    let expected: Vec<Vec<u32>> = SECRET_KEY.iter().map(|row| row.to_vec()).collect();
    assert_eq!(secret_key.matrix().to_rows(), expected);
    assert_eq!(public_key.matrix().to_rows(), expected);

    let signature = sign(&secret_key, MESSAGE.as_bytes(), SALT, N, Q, T, &mut stream).unwrap();
    assert_eq!(signature.challenge().as_slice(), &CHALLENGE);
    assert_eq!(signature.response().as_slice(), &RESPONSE);
    assert_eq!(signature.digest(), DIGEST);
}

#[test]
fn test_independent_streams_agree() {
    let run = || {
        let mut stream = SeededStream::from_seed(0);
        let (sk, _) = generate(K, N, Q, SEED, &mut stream).unwrap();
        sign(&sk, MESSAGE.as_bytes(), SALT, N, Q, T, &mut stream).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_digest_vectors() {
    for vector in DIGEST_VECTORS {
        let response = FieldMatrix::column(vector.response.to_vec(), vector.modulus).unwrap();
        assert_eq!(
            response_digest(vector.salt, &response, vector.message).unwrap(),
            vector.digest,
            "digest mismatch for response {:?}",
            vector.response
        );
    }
}

#[test]
fn test_public_key_equals_private_key() {
    let mut stream = SeededStream::from_seed(SEED);
    let (sk, pk) = generate(K, N, Q, SEED, &mut stream).unwrap();
    assert_eq!(sk.matrix(), pk.matrix());
}

#[test]
fn test_shape_errors_across_sizes() {
    let mut stream = SeededStream::from_seed(SEED);
    let (small_sk, small_pk) = generate(K, N, Q, SEED, &mut stream).unwrap();
    let (big_sk, big_pk) = generate(2 * K, 2 * N, Q, SEED, &mut stream).unwrap();

    assert!(matches!(
        sign(&small_sk, b"m", SALT, 2 * N, Q, T, &mut stream),
        Err(Error::DimensionMismatch { .. })
    ));

    let big_sig = sign(&big_sk, b"m", SALT, 2 * N, Q, T, &mut stream).unwrap();
    assert!(matches!(
        verify(&small_pk, &big_sig, b"m", 2 * N, Q),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(verify(&big_pk, &big_sig, b"m", 2 * N, Q).unwrap());
}

#[test]
fn test_signature_survives_byte_encoding() {
    let mut stream = SeededStream::from_seed(SEED);
    let (sk, pk) = generate(K, N, Q, SEED, &mut stream).unwrap();
    let sig = sign(&sk, MESSAGE.as_bytes(), SALT, N, Q, T, &mut stream).unwrap();

    let decoded = unpack_signature(&pack_signature(&sig)).unwrap();
    assert!(verify(&pk, &decoded, MESSAGE.as_bytes(), N, Q).unwrap());
}

#[test]
fn test_less_toy_signature() {
    let mut rng = OsRng;

    // Generate keypair
    let (public_key, secret_key) = LessToy::keypair(&mut rng).unwrap();

    // Sign and verify
    let message = b"Test message for LESS-toy signature";
    let signature = LessToy::sign(message, &secret_key).unwrap();
    assert!(LessToy::verify(message, &signature, &public_key).is_ok());

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    assert!(LessToy::verify(modified_message, &signature, &public_key).is_err());
}

#[test]
fn test_less_252_signature() {
    let mut rng = OsRng;

    let (public_key, secret_key) = Less252::keypair(&mut rng).unwrap();
    let message = b"Test message for LESS-252 signature";
    let signature = Less252::sign(message, &secret_key).unwrap();
    assert!(Less252::verify(message, &signature, &public_key).is_ok());

    // Keys survive serialization
    let bytes = Less252::serialize_public_key(&public_key);
    let restored = Less252::deserialize_public_key(&bytes).unwrap();
    assert!(Less252::verify(message, &signature, &restored).is_ok());
}
