//! Error handling for lesscrypt primitives

use std::borrow::Cow;
use std::fmt;

use lesscrypt_api::Error as CoreError;

/// The error type for lesscrypt primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Operand shapes disagree
    Dimension {
        /// Operation that received the operands
        context: &'static str,
        /// Expected `(rows, cols)`
        expected: (usize, usize),
        /// Actual `(rows, cols)`
        actual: (usize, usize),
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed encoded data
    Encoding {
        /// Structure being decoded
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }
}

/// Result type for lesscrypt primitive operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for hash operations
pub type HashResult<T> = Result<T>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Dimension {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Dimension mismatch in {}: expected {}x{}, got {}x{}",
                context, expected.0, expected.1, actual.0, actual.1
            ),
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::Encoding { context, details } => {
                write!(f, "Malformed encoding of {}: {}", context, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Dimension {
                context,
                expected,
                actual,
            } => CoreError::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => CoreError::InvalidSignatureEncoding {
                context,
                message: details.into_owned(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "algorithms",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
