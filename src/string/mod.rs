//! Textual geohash codec: base-32 characters over the integer codec.
//!
//! A code of `n` characters is exactly the integer code at `5 * n` bits,
//! spelled in the base-32 alphabet; everything else (cell geometry,
//! neighbors, enumeration, labelling) is delegated to the integer layer at
//! that precision.
//!
//! ## Example
//!
//! ```
//! use geohash_grid::{string, Point};
//!
//! let hash = string::encode(Point::new(-5.6, 42.6), 5).unwrap();
//! assert_eq!(hash, "ezs42");
//!
//! let cell = string::bounding_box(&hash).unwrap();
//! assert!(cell.contains(Point::new(-5.6, 42.6)));
//!
//! let ring = string::neighbors(&hash).unwrap();
//! assert_eq!(ring[0], "ezs48"); // northern neighbor
//! ```


use std::collections::BTreeMap;

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::base32;
use crate::error::{GeohashError, Result};
use crate::geometry::{BBox, Point};
use crate::grid::{self, IndexRanges};
use crate::int64;

pub(crate) fn check_chars(chars: u32) -> Result<()> {
    if chars == 0 || chars > 12 {
        return Err(GeohashError::InvalidCharLength(chars));
    }
    Ok(())
}

/// Decode a textual hash to its integer form and character count,
/// validating the alphabet and the length.
fn to_int64(hash: &str) -> Result<(u64, u32)> {
    let (code, count) = base32::decode(hash.as_bytes())?;
    check_chars(count)?;
    Ok((code, count))
}

fn to_text(hash: u64, chars: u32) -> String {
    let mut buffer = [0u8; 12];
    let buffer = &mut buffer[..chars as usize];
    base32::encode(hash, buffer);
    buffer.iter().map(|&byte| byte as char).collect()
}

/// Encode a point into a textual geohash with the given precision in
/// characters.
pub fn encode(point: Point, chars: u32) -> Result<String> {
    check_chars(chars)?;
    Ok(to_text(int64::encode_unchecked(point, 5 * chars), chars))
}

/// Encode a point into a caller-provided buffer; the buffer length is the
/// precision in characters.
pub fn encode_into(point: Point, buffer: &mut [u8]) -> Result<()> {
    let chars = buffer.len() as u32;
    check_chars(chars)?;
    base32::encode(int64::encode_unchecked(point, 5 * chars), buffer);
    Ok(())
}

/// Encode a slice of points, in parallel when the `rayon` feature is
/// enabled.
pub fn encode_many(points: &[Point], chars: u32) -> Result<Vec<String>> {
    check_chars(chars)?;
    #[cfg(feature = "rayon")]
    {
        Ok(points
            .par_iter()
            .map(|point| to_text(int64::encode_unchecked(*point, 5 * chars), chars))
            .collect())
    }
    #[cfg(not(feature = "rayon"))]
    {
        Ok(points
            .iter()
            .map(|point| to_text(int64::encode_unchecked(*point, 5 * chars), chars))
            .collect())
    }
}

/// The cell encoded by a textual geohash; the precision is the character
/// count.
pub fn bounding_box(hash: &str) -> Result<BBox> {
    let (code, count) = to_int64(hash)?;
    Ok(int64::bounding_box_unchecked(code, 5 * count))
}

/// Decode a textual geohash into a representative point of its cell: the
/// rounded representative when `round` is true, the cell center otherwise.
pub fn decode(hash: &str, round: bool) -> Result<Point> {
    let (code, count) = to_int64(hash)?;
    Ok(int64::decode_unchecked(code, 5 * count, round))
}

/// Decode a slice of textual geohashes, in parallel when the `rayon`
/// feature is enabled.
pub fn decode_many<S: AsRef<str> + Sync>(hashs: &[S], round: bool) -> Result<Vec<Point>> {
    #[cfg(feature = "rayon")]
    {
        hashs
            .par_iter()
            .map(|hash| decode(hash.as_ref(), round))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        hashs.iter().map(|hash| decode(hash.as_ref(), round)).collect()
    }
}

/// All neighbor codes, clockwise from north around northwest, at the
/// precision of the input.
pub fn neighbors(hash: &str) -> Result<[String; 8]> {
    let (code, count) = to_int64(hash)?;
    let ring = grid::neighbors(code, 5 * count)?;
    Ok(ring.map(|neighbor| to_text(neighbor, count)))
}

/// All codes of the grid covering the box (the whole earth when no box is
/// given), in the enumeration order of the integer layer.
pub fn bounding_boxes(bbox: Option<&BBox>, chars: u32) -> Result<Vec<String>> {
    check_chars(chars)?;
    let codes = grid::bounding_boxes(bbox, 5 * chars)?;
    Ok(codes.into_iter().map(|code| to_text(code, chars)).collect())
}

/// All codes of the grid covering the axis-aligned envelope of a polygon.
pub fn polygon_bounding_boxes(polygon: &geo::Polygon, chars: u32) -> Result<Vec<String>> {
    check_chars(chars)?;
    let codes = grid::polygon_bounding_boxes(polygon, 5 * chars)?;
    Ok(codes.into_iter().map(|code| to_text(code, chars)).collect())
}

/// Group a row-major 2-D array of textual geohash codes into contiguous
/// rectangular index ranges, one entry per distinct code.
pub fn r#where<S: AsRef<str>>(
    codes: &[S],
    shape: (usize, usize),
) -> Result<BTreeMap<String, IndexRanges>> {
    grid::check_shape(codes.len(), shape)?;
    let mut refs = Vec::with_capacity(codes.len());
    for code in codes {
        let code = code.as_ref();
        to_int64(code)?;
        refs.push(code);
    }
    let regions = grid::label_regions(&refs, shape.0, shape.1);
    Ok(regions
        .into_iter()
        .map(|(code, ranges)| (code.to_owned(), ranges))
        .collect())
}
