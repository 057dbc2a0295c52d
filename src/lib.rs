//! # lesscrypt
//!
//! A reduced signature scheme in the LESS (Linear Equivalence Signature
//! Scheme) family: seeded key generation, signing and verification over
//! generator matrices modulo `q`, with a SHA-256 digest binding the response
//! to a salt and the message.
//!
//! ## Usage
//!
//! ```rust
//! use lesscrypt::prelude::*;
//!
//! let mut stream = SeededStream::from_seed(0);
//! let (secret_key, public_key) = generate(4, 6, 7, 42, &mut stream).unwrap();
//!
//! let signature = sign(&secret_key, b"hello", "salt", 6, 7, 3, &mut stream).unwrap();
//! assert!(verify(&public_key, &signature, b"hello", 6, 7).unwrap());
//! assert!(!verify(&public_key, &signature, b"goodbye", 6, 7).unwrap());
//! ```
//!
//! ## Security
//!
//! The scheme is reproduced as deployed, weaknesses included. The public key
//! equals the private key and the challenge weight is not enforced. Do not
//! use it to protect anything.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`lesscrypt-api`]: Error type and the `Signature` trait
//! - [`lesscrypt-params`]: Parameter sets and size constants
//! - [`lesscrypt-algorithms`]: Field matrices, sampling, SHA-256, generator state
//! - [`lesscrypt-sign`]: The LESS signature scheme

#![cfg_attr(not(feature = "std"), no_std)]

pub use lesscrypt_algorithms as algorithms;
pub use lesscrypt_api as api;
pub use lesscrypt_params as params;
pub use lesscrypt_sign as sign;

// Workspace dependencies that appear in the public API
pub use rand;
pub use rand_chacha;
pub use zeroize;

/// Common imports for lesscrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureSerialize};

    pub use crate::algorithms::{FieldMatrix, SeededStream};

    pub use crate::sign::{
        generate, sign, verify, Less252, LessPublicKey, LessSecretKey, LessSignature, LessToy,
    };
}
