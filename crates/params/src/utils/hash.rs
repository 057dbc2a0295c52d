//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Length of a hex-encoded SHA-256 digest
pub const SHA256_HEX_SIZE: usize = 2 * SHA256_OUTPUT_SIZE;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;
