//! Example using reduced LESS signatures
//!
//! Run with `RUST_LOG=debug` to see the digest comparison made during
//! verification.

use lesscrypt::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const K: usize = 4;
const N: usize = 6;
const Q: u32 = 7;
const T: usize = 3;
const SEED: u64 = 42;

fn print_matrix(label: &str, matrix: &FieldMatrix) {
    println!("{}:", label);
    for row in matrix.to_rows() {
        println!("  {:?}", row);
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("LESS Signature Example (k = {}, n = {}, q = {})", K, N, Q);
    println!("============================================");

    // One generator state for the whole session
    let mut stream = SeededStream::from_seed(SEED);

    println!("Generating keys from seed {}...", SEED);
    let (secret_key, public_key) = generate(K, N, Q, SEED, &mut stream)?;
    print_matrix("Private key", secret_key.matrix());
    print_matrix("Public key", public_key.matrix());

    let message = "Message à signer";
    let salt = "randomsalt";
    println!("Message: {:?}", message);

    println!("Signing message...");
    let signature = sign(&secret_key, message.as_bytes(), salt, N, Q, T, &mut stream)?;
    println!("Salt: {}", signature.salt());
    print_matrix("Challenge", signature.challenge());
    print_matrix("Response", signature.response());
    println!("Digest: {}", signature.digest());

    let valid = verify(&public_key, &signature, message.as_bytes(), N, Q)?;
    info!(valid, "verified original message");
    println!("\nSignature valid: {}", valid);

    let modified = "Message à signer modifiee";
    let valid = verify(&public_key, &signature, modified.as_bytes(), N, Q)?;
    info!(valid, "verified modified message");
    println!("Signature valid for {:?}: {}", modified, valid);

    Ok(())
}
