//! Public API traits and types for the lesscrypt library
//!
//! This crate provides the public API surface shared by the lesscrypt crates:
//! the error taxonomy, validation helpers and the signature traits every
//! scheme implements.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Signature, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
