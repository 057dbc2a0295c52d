//! Validation utilities for lesscrypt primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a field modulus can hold at least two elements
#[inline(always)]
pub fn modulus(q: u32) -> Result<()> {
    parameter(q > 1, "q", "field size must be greater than 1")
}

/// Validate that an operand has the expected `(rows, cols)` shape
#[inline(always)]
pub fn dimensions(
    context: &'static str,
    actual: (usize, usize),
    expected: (usize, usize),
) -> Result<()> {
    if actual != expected {
        return Err(Error::Dimension {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
