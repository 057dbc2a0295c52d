//! Testing utilities and known-answer vectors for the lesscrypt library
pub mod vectors;
