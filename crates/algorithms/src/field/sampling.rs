//! Uniform sampling of field elements

use rand::RngCore;

/// Sample an element uniformly from `[0, q)`.
///
/// Draws 32-bit words from `rng` and rejects those above the largest
/// multiple of `q`, so the result carries no modulo bias. For a fixed
/// generator algorithm and seed the sequence of elements is reproducible.
pub fn sample_uniform<R: RngCore + ?Sized>(rng: &mut R, q: u32) -> u32 {
    debug_assert!(q > 1, "field size must be greater than 1");
    let bound = (u32::MAX / q) * q;
    loop {
        let candidate = rng.next_u32();
        if candidate < bound {
            return candidate % q;
        }
    }
}
