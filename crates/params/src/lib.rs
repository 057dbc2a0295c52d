//! Constant values for lesscrypt
//!
//! Parameter sets for the signature schemes and the sizes of the
//! primitives they are built on.

#![no_std]

pub mod pqc;
pub mod utils;
