//! Error handling traits for the lesscrypt ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T, E>: Sized {
    /// Replace the error context when converting to [`Error`]
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T>
    where
        E: Into<Error>,
    {
        self.map_err(|e| e.into().with_context(context))
    }
}
