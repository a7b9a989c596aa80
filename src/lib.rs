//! Geohash codec and grid algebra over 64-bit Morton-ordered codes.
//!
//! See the [`int64`], [`string`] and [`grid`] modules for the integer codec,
//! the base-32 textual codec and the grid operations built on top of them.

pub mod base32;
mod bits;
mod error;
mod geometry;
pub mod grid;
pub mod int64;
mod math;
pub mod string;

pub use error::{GeohashError, Result};
pub use geometry::{BBox, Point};

#[cfg(test)]
pub(crate) mod test;
