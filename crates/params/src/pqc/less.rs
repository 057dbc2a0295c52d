//! Constants for the reduced LESS signature scheme
//!
//! A parameter set fixes the generator matrix shape `k x n`, the field size
//! `q` and the declared challenge weight `t`. The weight is carried for
//! interface compatibility; challenges are sampled densely.

/// Default salt length in bytes for randomly salted signatures
pub const LESS_SALT_BYTES: usize = 16;

/// Width of one encoded field element in bytes
pub const LESS_ELEMENT_BYTES: usize = 4;

/// Size of an encoded matrix header (rows, cols, modulus)
pub const LESS_MATRIX_HEADER_BYTES: usize = 3 * LESS_ELEMENT_BYTES;

/// Common trait for LESS parameter sets
pub trait LessParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    /// Rows of the generator matrix
    const K: usize;

    /// Columns of the generator matrix, and length of the challenge
    const N: usize;

    /// Field size
    const Q: u32;

    /// Declared challenge weight (not enforced)
    const T: usize;

    /// Salt length used when the caller does not supply one
    const SALT_BYTES: usize = LESS_SALT_BYTES;
}

/// Structure containing the toy parameters
pub struct LessToyParams {
    /// Generator rows
    pub k: usize,

    /// Generator columns
    pub n: usize,

    /// Field size
    pub q: u32,

    /// Declared challenge weight
    pub t: usize,
}

/// Toy parameters: the worked example of the scheme
pub const LESS_TOY: LessToyParams = LessToyParams {
    k: 4,
    n: 6,
    q: 7,
    t: 3,
};

impl LessParams for LessToyParams {
    const NAME: &'static str = "LESS-toy";
    const K: usize = 4;
    const N: usize = 6;
    const Q: u32 = 7;
    const T: usize = 3;
}

/// Structure containing the 252-column parameters
pub struct Less252Params {
    /// Generator rows
    pub k: usize,

    /// Generator columns
    pub n: usize,

    /// Field size
    pub q: u32,

    /// Declared challenge weight
    pub t: usize,
}

/// Code dimensions of the LESS-1 submission (n = 252, k = 126, q = 127).
///
/// Only the shapes are shared; the reduced protocol here does not reach the
/// submission's security level.
pub const LESS_252: Less252Params = Less252Params {
    k: 126,
    n: 252,
    q: 127,
    t: 30,
};

impl LessParams for Less252Params {
    const NAME: &'static str = "LESS-252";
    const K: usize = 126;
    const N: usize = 252;
    const Q: u32 = 127;
    const T: usize = 30;
}
