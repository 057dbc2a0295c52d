//! Error handling for the lesscrypt ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl std::error::Error for Error {}
