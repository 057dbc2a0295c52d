//! Error types for the signature crate

use lesscrypt_algorithms::Error as AlgoError;
use thiserror::Error as ThisError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Operand shapes disagree
    #[error("Dimension mismatch in {context}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        context: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Nonsensical dimensions or modulus
    #[error("Invalid parameters for {context}: {details}")]
    InvalidParameters {
        context: &'static str,
        details: String,
    },

    /// Signature cannot be evaluated at all
    #[error("Invalid signature encoding in {context}: {details}")]
    InvalidSignatureEncoding {
        context: &'static str,
        details: String,
    },

    /// Malformed key material
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn encoding(context: &'static str, details: impl Into<String>) -> Self {
        Error::InvalidSignatureEncoding {
            context,
            details: details.into(),
        }
    }

    pub(crate) fn parameters(context: &'static str, details: impl Into<String>) -> Self {
        Error::InvalidParameters {
            context,
            details: details.into(),
        }
    }
}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::Parameter { name, reason } => Error::InvalidParameters {
                context: name,
                details: reason.into_owned(),
            },
            AlgoError::Dimension {
                context,
                expected,
                actual,
            } => Error::DimensionMismatch {
                context,
                expected,
                actual,
            },
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidParameters {
                context,
                details: format!("expected {} entries, got {}", expected, actual),
            },
            AlgoError::Encoding { context, details } => Error::InvalidSignatureEncoding {
                context,
                details: details.into_owned(),
            },
            AlgoError::Other(msg) => Error::Internal(msg.to_string()),
        }
    }
}

// Convert to api::Error
impl From<Error> for lesscrypt_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::DimensionMismatch {
                context,
                expected,
                actual,
            } => lesscrypt_api::Error::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Error::InvalidParameters { context, details } => {
                lesscrypt_api::Error::InvalidParameter {
                    context,
                    message: details,
                }
            }
            Error::InvalidSignatureEncoding { context, details } => {
                lesscrypt_api::Error::InvalidSignatureEncoding {
                    context,
                    message: details,
                }
            }
            Error::InvalidKey(msg) => lesscrypt_api::Error::InvalidKey {
                context: "sign",
                message: msg,
            },
            Error::Internal(s) => lesscrypt_api::Error::Other {
                context: "internal",
                message: s,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
