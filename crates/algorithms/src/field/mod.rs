//! Arithmetic over the integers modulo a field size `q`
//!
//! Elements are `u32` values in `[0, q)`. Products are accumulated in `u64`
//! and reduced after every multiply-add, so no intermediate value ever leaves
//! the field representation.

mod matrix;
mod sampling;

pub use matrix::FieldMatrix;
pub use sampling::sample_uniform;

/// Reduce a wide value into `[0, q)`
#[inline(always)]
pub fn reduce(value: u64, q: u32) -> u32 {
    (value % u64::from(q)) as u32
}
