//! Property-based tests for the reduced LESS signature scheme

use lesscrypt_algorithms::SeededStream;
use lesscrypt_sign::{generate, sign, verify};
use proptest::prelude::*;

/// Small but varied (k, n, q) triples, including k > n
fn dimensions() -> impl Strategy<Value = (usize, usize, u32)> {
    (1usize..=8, 1usize..=12, 2u32..=257)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sign_then_verify_accepts(
        (k, n, q) in dimensions(),
        seed in any::<u64>(),
        salt in "[a-z0-9]{0,16}",
        message in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let mut stream = SeededStream::from_seed(0);
        let (sk, pk) = generate(k, n, q, seed, &mut stream).unwrap();
        let sig = sign(&sk, &message, &salt, n, q, 3, &mut stream).unwrap();
        prop_assert!(verify(&pk, &sig, &message, n, q).unwrap());
    }

    #[test]
    fn all_values_stay_in_field(
        (k, n, q) in dimensions(),
        seed in any::<u64>(),
    ) {
        let mut stream = SeededStream::from_seed(0);
        let (sk, pk) = generate(k, n, q, seed, &mut stream).unwrap();
        let sig = sign(&sk, b"closure", "salt", n, q, 3, &mut stream).unwrap();

        for matrix in [sk.matrix(), pk.matrix(), sig.challenge(), sig.response()] {
            prop_assert!(matrix.as_slice().iter().all(|&v| v < q));
        }
    }

    #[test]
    fn generation_depends_only_on_seed(
        (k, n, q) in dimensions(),
        seed in any::<u64>(),
        stream_seed in any::<u64>(),
    ) {
        let (a, _) = generate(k, n, q, seed, &mut SeededStream::from_seed(stream_seed)).unwrap();
        let (b, _) = generate(k, n, q, seed, &mut SeededStream::from_seed(0)).unwrap();
        prop_assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn appended_byte_fails(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..64),
        extra in any::<u8>(),
    ) {
        let mut stream = SeededStream::from_seed(0);
        let (sk, pk) = generate(4, 6, 7, seed, &mut stream).unwrap();
        let sig = sign(&sk, &message, "salt", 6, 7, 3, &mut stream).unwrap();

        let mut tampered = message.clone();
        tampered.push(extra);
        prop_assert!(!verify(&pk, &sig, &tampered, 6, 7).unwrap());
    }
}
