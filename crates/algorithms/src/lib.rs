//! Primitives for the lesscrypt signature schemes
//!
//! This crate provides the arithmetic and hashing layer the schemes are
//! built on:
//!
//! - [`field::FieldMatrix`]: dense matrices over the integers modulo `q`
//! - [`field::sample_uniform`]: unbiased sampling of field elements
//! - [`prng::SeededStream`]: an explicitly owned, reseedable generator state
//! - [`hash::Sha256`]: SHA-256 behind the [`hash::HashFunction`] trait

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field arithmetic
pub mod field;
pub use field::{sample_uniform, FieldMatrix};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha256};

// Reseedable generator state
pub mod prng;
pub use prng::SeededStream;
