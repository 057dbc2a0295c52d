//! Post-quantum signature schemes

pub mod less;
