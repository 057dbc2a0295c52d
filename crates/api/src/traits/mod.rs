//! Trait definitions for lesscrypt schemes

pub mod signature;

pub use signature::{Signature, SignatureSerialize};
