use super::*;

// FIPS 180-4 example vectors
const ABC_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[test]
fn test_sha256_known_vectors() {
    assert_eq!(hex::encode(Sha256::digest(b"abc").unwrap()), ABC_DIGEST);
    assert_eq!(hex::encode(Sha256::digest(b"").unwrap()), EMPTY_DIGEST);
}

#[test]
fn test_sha256_incremental_matches_one_shot() {
    let mut hasher = Sha256::new();
    hasher.update(b"a").unwrap().update(b"bc").unwrap();
    assert_eq!(hasher.finalize_hex().unwrap(), ABC_DIGEST);

    // finalize resets the state
    assert_eq!(hasher.finalize_hex().unwrap(), EMPTY_DIGEST);
}

#[test]
fn test_sha256_constants() {
    assert_eq!(Sha256::name(), "SHA-256");
    assert_eq!(
        Sha256::digest(b"abc").unwrap().len(),
        Sha256Algorithm::OUTPUT_SIZE
    );
}
