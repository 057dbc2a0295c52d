//! Known-answer vectors for the reduced LESS scheme

/// The worked example: a 4 x 6 generator over F_7 from seed 42.
pub mod scenario {
    /// Code dimension
    pub const K: usize = 4;
    /// Code length
    pub const N: usize = 6;
    /// Field size
    pub const Q: u32 = 7;
    /// Declared challenge weight
    pub const T: usize = 3;
    /// Key generation seed
    pub const SEED: u64 = 42;
    /// Signed message
    pub const MESSAGE: &str = "Message à signer";
    /// A message that must not verify against the signature of [`MESSAGE`]
    pub const MODIFIED_MESSAGE: &str = "Message à signer modifiee";
    /// Salt used when signing
    pub const SALT: &str = "randomsalt";

    /// Private key from seed 42 (ChaCha20 expanded with `seed_from_u64`)
    pub const SECRET_KEY: [[u32; N]; K] = [
        [5, 0, 2, 0, 4, 5],
        [1, 4, 2, 6, 5, 1],
        [2, 2, 5, 3, 3, 0],
        [5, 1, 2, 2, 0, 0],
    ];
    /// Challenge drawn by the first signature after key generation
    pub const CHALLENGE: [u32; N] = [2, 5, 0, 2, 2, 5];
    /// `SECRET_KEY * CHALLENGE mod Q`
    pub const RESPONSE: [u32; K] = [1, 0, 5, 5];
    /// Digest of [`SALT`], "1055" and [`MESSAGE`]
    pub const DIGEST: &str = "4508a872c7109c3dde7e10029bb9e9be9917fcf18b11ca1ce19f1031cd231a20";
}

/// A digest computed independently of this library.
#[derive(Debug, Clone, Copy)]
pub struct DigestVector {
    pub salt: &'static str,
    pub response: &'static [u32],
    pub modulus: u32,
    pub message: &'static [u8],
    /// Lowercase hex SHA-256 of `salt || decimal(response) || message`
    pub digest: &'static str,
}

pub const DIGEST_VECTORS: &[DigestVector] = &[
    DigestVector {
        salt: "randomsalt",
        response: &[1, 0, 5, 5],
        modulus: 7,
        message: "Message à signer".as_bytes(),
        digest: "4508a872c7109c3dde7e10029bb9e9be9917fcf18b11ca1ce19f1031cd231a20",
    },
    DigestVector {
        salt: "randomsalt",
        response: &[3, 0, 6, 1],
        modulus: 7,
        message: "Message à signer".as_bytes(),
        digest: "c3db953a8e45b78f52f079671813cb766df0da7fa4090622b2517c22bda23135",
    },
    DigestVector {
        salt: "randomsalt",
        response: &[3, 0, 6, 1],
        modulus: 7,
        message: "Message à signer modifiee".as_bytes(),
        digest: "4261cead44e792f5f747af35158c2a44e0ca17d5c2f6e291e3361d05ef3bfc8a",
    },
    // "1" + "23" and "12" + "3" flatten to the same digits
    DigestVector {
        salt: "s",
        response: &[1, 23],
        modulus: 127,
        message: b"m",
        digest: "6e34124b11069266600e21560dc46bc8bd26ec8179ed0906e24d4de642a0c715",
    },
    DigestVector {
        salt: "s",
        response: &[12, 3],
        modulus: 127,
        message: b"m",
        digest: "6e34124b11069266600e21560dc46bc8bd26ec8179ed0906e24d4de642a0c715",
    },
];
