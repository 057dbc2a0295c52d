//! Constants for the primitives lesscrypt schemes are built on

pub mod hash;
