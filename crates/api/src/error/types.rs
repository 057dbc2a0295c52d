//! Error type definitions for signature operations

use alloc::string::String;

/// Primary error type for lesscrypt operations
///
/// Every variant is a contract violation surfaced to the caller immediately.
/// A signature that simply fails to verify is not an error at the scheme
/// level; only the [`Signature`](crate::Signature) trait maps it onto
/// [`Error::InvalidSignature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes disagree
    DimensionMismatch {
        context: &'static str,
        /// Expected `(rows, cols)`
        expected: (usize, usize),
        /// Actual `(rows, cols)`
        actual: (usize, usize),
    },

    /// Nonsensical scheme parameters (dimensions, modulus)
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Signature is structurally malformed and cannot be evaluated
    InvalidSignatureEncoding {
        context: &'static str,
        message: String,
    },

    /// Signature was well formed but did not verify
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for lesscrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DimensionMismatch { expected, actual, .. } => Self::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidSignatureEncoding { message, .. } => {
                Self::InvalidSignatureEncoding { context, message }
            }
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidSignatureEncoding { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionMismatch { context, expected, actual } => {
                write!(
                    f,
                    "{}: dimension mismatch (expected {}x{}, got {}x{})",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter: {}: {}", context, message)
            }
            Self::InvalidSignatureEncoding { context, message } => {
                write!(f, "Invalid signature encoding: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::Other { context, message } => write!(f, "{}: {}", context, message),
        }
    }
}
