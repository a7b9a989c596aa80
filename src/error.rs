use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeohashError {
    /// Integer precision outside `[1, 64]` bits.
    #[error("precision must be within [1, 64], got {0}")]
    InvalidPrecision(u32),

    /// Textual precision outside `[1, 12]` characters.
    #[error("char length must be within [1, 12], got {0}")]
    InvalidCharLength(u32),

    /// A byte that is not part of the base-32 alphabet.
    #[error("invalid geohash character: {0:#04x}")]
    InvalidAlphabet(u8),

    /// A box whose min corner lies north of its max corner.
    #[error("invalid box: min corner latitude {min} above max corner latitude {max}")]
    InvalidBox { min: f64, max: f64 },

    /// A 2-D code array whose buffer length disagrees with its shape.
    #[error("shape ({rows}, {cols}) does not match buffer length {len}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, GeohashError>;
