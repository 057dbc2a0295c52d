//! Validation utilities shared by the lesscrypt crates

use super::types::{Error, Result};
use alloc::string::ToString;

/// Validate a structural property of an encoded signature
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidSignatureEncoding {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}
