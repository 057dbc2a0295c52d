//! Dense matrices over the integers modulo `q`

use byteorder::{BigEndian, ByteOrder};
use lesscrypt_params::pqc::less::{LESS_ELEMENT_BYTES, LESS_MATRIX_HEADER_BYTES};
use rand::RngCore;
use zeroize::Zeroize;

use super::{reduce, sample_uniform};
use crate::error::{validate, Error, Result};

const ENCODING_CONTEXT: &str = "FieldMatrix";

/// A `rows x cols` matrix with entries in `[0, modulus)`, stored row-major.
///
/// Dimensions are fixed at construction and every constructor rejects
/// entries outside the field, so all values observed through this type are
/// reduced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFieldMatrix", into = "RawFieldMatrix")
)]
pub struct FieldMatrix {
    rows: usize,
    cols: usize,
    modulus: u32,
    data: Vec<u32>,
}

/// Number of entries in a `rows x cols` matrix.
///
/// Both dimensions must be nonzero and fit the `u32` fields of the byte
/// header.
fn entry_count(rows: usize, cols: usize) -> Result<usize> {
    validate::parameter(rows > 0 && cols > 0, "dimensions", "matrix must be non-empty")?;
    validate::parameter(
        u32::try_from(rows).is_ok() && u32::try_from(cols).is_ok(),
        "dimensions",
        "dimensions must fit in 32 bits",
    )?;
    rows.checked_mul(cols)
        .ok_or_else(|| Error::param("dimensions", "rows * cols overflows"))
}

// Constructors go through `entry_count`, so this never saturates.
fn header_dimension(dim: usize) -> u32 {
    u32::try_from(dim).unwrap_or(u32::MAX)
}

impl FieldMatrix {
    /// Build a matrix from explicit row-major values.
    pub fn new(rows: usize, cols: usize, modulus: u32, data: Vec<u32>) -> Result<Self> {
        validate::modulus(modulus)?;
        let count = entry_count(rows, cols)?;
        validate::length("FieldMatrix::new", data.len(), count)?;
        validate::parameter(
            data.iter().all(|&v| v < modulus),
            "data",
            "entry outside [0, q)",
        )?;
        Ok(Self {
            rows,
            cols,
            modulus,
            data,
        })
    }

    /// Build a matrix from nested rows; ragged input is rejected.
    pub fn from_rows(rows: &[Vec<u32>], modulus: u32) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            validate::dimensions("FieldMatrix::from_rows", (i, row.len()), (i, cols))?;
        }
        let data = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), cols, modulus, data)
    }

    /// Build an `n x 1` column vector.
    pub fn column(values: Vec<u32>, modulus: u32) -> Result<Self> {
        Self::new(values.len(), 1, modulus, values)
    }

    /// The all-zero matrix.
    pub fn zeros(rows: usize, cols: usize, modulus: u32) -> Result<Self> {
        validate::modulus(modulus)?;
        let count = entry_count(rows, cols)?;
        Self::new(rows, cols, modulus, vec![0; count])
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize, modulus: u32) -> Result<Self> {
        let mut m = Self::zeros(n, n, modulus)?;
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        Ok(m)
    }

    /// A matrix with entries drawn uniformly from `[0, modulus)`, row by row.
    pub fn random<R: RngCore + ?Sized>(
        rows: usize,
        cols: usize,
        modulus: u32,
        rng: &mut R,
    ) -> Result<Self> {
        validate::modulus(modulus)?;
        let count = entry_count(rows, cols)?;
        let data = (0..count).map(|_| sample_uniform(rng, modulus)).collect();
        Ok(Self {
            rows,
            cols,
            modulus,
            data,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Field size the entries are reduced by
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Entry at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major view of the entries
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Copy the entries out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.data.chunks(self.cols).map(<[u32]>::to_vec).collect()
    }

    fn same_field(&self, rhs: &Self) -> Result<()> {
        validate::parameter(
            self.modulus == rhs.modulus,
            "modulus",
            "operands belong to different fields",
        )
    }

    /// Matrix product `self * rhs` mod q.
    ///
    /// Fails with a dimension error unless `self.cols() == rhs.rows()`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.same_field(rhs)?;
        validate::dimensions(
            "FieldMatrix::mul",
            (rhs.rows, rhs.cols),
            (self.cols, rhs.cols),
        )?;

        let q = self.modulus;
        let mut data = vec![0u32; self.rows * rhs.cols];
        for i in 0..self.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..rhs.cols {
                let mut acc = 0u32;
                for (l, &a) in lhs_row.iter().enumerate() {
                    let b = rhs.data[l * rhs.cols + j];
                    acc = reduce(u64::from(acc) + u64::from(a) * u64::from(b), q);
                }
                data[i * rhs.cols + j] = acc;
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: rhs.cols,
            modulus: q,
            data,
        })
    }

    /// Entry-wise sum `self + rhs` mod q.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.same_field(rhs)?;
        validate::dimensions("FieldMatrix::add", rhs.shape(), self.shape())?;
        let data = self
            .data
            .iter()
            .zip(&rhs.data)
            .map(|(&a, &b)| reduce(u64::from(a) + u64::from(b), self.modulus))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            modulus: self.modulus,
            data,
        })
    }

    /// Whether this is a monomial matrix: square, with exactly one nonzero
    /// entry in every row and every column.
    pub fn is_monomial(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }
        let mut column_hits = vec![0usize; self.cols];
        for row in self.data.chunks(self.cols) {
            let mut row_hits = 0;
            for (j, &v) in row.iter().enumerate() {
                if v != 0 {
                    row_hits += 1;
                    column_hits[j] += 1;
                }
            }
            if row_hits != 1 {
                return false;
            }
        }
        column_hits.iter().all(|&hits| hits == 1)
    }

    /// Decimal digits of every entry, row-major, with no separator.
    ///
    /// Not injective once entries can have more than one digit: `[1, 23]`
    /// and `[12, 3]` both flatten to `"123"`.
    pub fn flatten_decimal(&self) -> String {
        let mut out = String::with_capacity(self.data.len() * 2);
        for v in &self.data {
            out.push_str(&v.to_string());
        }
        out
    }

    /// Size of [`FieldMatrix::to_bytes`] output
    pub fn encoded_len(&self) -> usize {
        LESS_MATRIX_HEADER_BYTES + self.data.len() * LESS_ELEMENT_BYTES
    }

    /// Encode as big-endian `u32` rows, cols and modulus followed by entries.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len()];
        BigEndian::write_u32(&mut out[0..4], header_dimension(self.rows));
        BigEndian::write_u32(&mut out[4..8], header_dimension(self.cols));
        BigEndian::write_u32(&mut out[8..12], self.modulus);
        for (chunk, &v) in out[LESS_MATRIX_HEADER_BYTES..]
            .chunks_exact_mut(LESS_ELEMENT_BYTES)
            .zip(&self.data)
        {
            BigEndian::write_u32(chunk, v);
        }
        out
    }

    /// Decode a matrix from the front of `bytes`, returning the remainder.
    pub fn from_bytes_prefix(bytes: &[u8]) -> Result<(Self, &[u8])> {
        if bytes.len() < LESS_MATRIX_HEADER_BYTES {
            return Err(Error::encoding(ENCODING_CONTEXT, "truncated header"));
        }
        let rows = BigEndian::read_u32(&bytes[0..4]) as usize;
        let cols = BigEndian::read_u32(&bytes[4..8]) as usize;
        let modulus = BigEndian::read_u32(&bytes[8..12]);
        if rows == 0 || cols == 0 {
            return Err(Error::encoding(ENCODING_CONTEXT, "zero dimension"));
        }
        if modulus <= 1 {
            return Err(Error::encoding(ENCODING_CONTEXT, "modulus must exceed 1"));
        }

        let body_len = rows
            .checked_mul(cols)
            .and_then(|count| count.checked_mul(LESS_ELEMENT_BYTES))
            .ok_or_else(|| Error::encoding(ENCODING_CONTEXT, "dimensions overflow"))?;
        let rest = &bytes[LESS_MATRIX_HEADER_BYTES..];
        if rest.len() < body_len {
            return Err(Error::encoding(ENCODING_CONTEXT, "truncated entries"));
        }

        let mut data = Vec::with_capacity(body_len / LESS_ELEMENT_BYTES);
        for chunk in rest[..body_len].chunks_exact(LESS_ELEMENT_BYTES) {
            let v = BigEndian::read_u32(chunk);
            if v >= modulus {
                return Err(Error::encoding(ENCODING_CONTEXT, "entry outside [0, q)"));
            }
            data.push(v);
        }

        Ok((
            Self {
                rows,
                cols,
                modulus,
                data,
            },
            &rest[body_len..],
        ))
    }

    /// Decode a matrix that occupies all of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (matrix, rest) = Self::from_bytes_prefix(bytes)?;
        if !rest.is_empty() {
            return Err(Error::encoding(ENCODING_CONTEXT, "trailing bytes"));
        }
        Ok(matrix)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawFieldMatrix {
    rows: usize,
    cols: usize,
    modulus: u32,
    data: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldMatrix> for FieldMatrix {
    type Error = Error;

    fn try_from(raw: RawFieldMatrix) -> Result<Self> {
        FieldMatrix::new(raw.rows, raw.cols, raw.modulus, raw.data)
    }
}

#[cfg(feature = "serde")]
impl From<FieldMatrix> for RawFieldMatrix {
    fn from(m: FieldMatrix) -> Self {
        RawFieldMatrix {
            rows: m.rows,
            cols: m.cols,
            modulus: m.modulus,
            data: m.data,
        }
    }
}
