//! Constants for post-quantum signature schemes

pub mod less;
