//! Digital Signature Schemes
//!
//! This crate implements the reduced LESS signature scheme: seeded key
//! generation, signing and verification over generator matrices modulo `q`.

pub mod error;
pub mod pq;

pub use error::{Error, Result};

// Re-exports from post-quantum schemes
pub use pq::less::{
    generate, keypair_from_rng, sign, verify, Less, Less252, LessPublicKey, LessSecretKey,
    LessSignature, LessToy,
};
