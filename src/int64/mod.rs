//! Integer geohash codec: 64-bit Morton-ordered codes.
//!
//! A code at `precision` bits carries the interleaved longitude/latitude
//! halves in its `precision` most significant bits once left-aligned;
//! encoding returns the right-aligned form (low `64 - precision` bits
//! dropped). The precision is an invariant of the code and must be carried
//! alongside it.
//!
//! Coordinates outside the closed `[-180, 180] × [-90, 90]` domain saturate
//! to the nearest edge cell; `NaN` coordinates are not supported. The codec
//! is lossy by design: a code denotes a cell, not a point.
//!
//! ## Example
//!
//! ```
//! use geohash_grid::{int64, Point};
//!
//! let point = Point::new(-5.6, 42.6);
//! let code = int64::encode(point, 25).unwrap();
//! let cell = int64::bounding_box(code, 25).unwrap();
//! assert!(cell.contains(point));
//! assert_eq!(int64::decode(code, 25, false).unwrap(), cell.center());
//! ```

#[cfg(test)]
mod test;

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::bits;
use crate::error::{GeohashError, Result};
use crate::geometry::{BBox, Point};
use crate::math::power2;

/// The grid resolution in longitude and latitude degrees for a precision in
/// bits. Longitude carries the extra bit when the precision is odd.
pub const fn error_with_precision(precision: u32) -> (f64, f64) {
    let lat_bits = (precision >> 1) as i32;
    let lng_bits = precision as i32 - lat_bits;
    (360.0 * power2(-lng_bits), 180.0 * power2(-lat_bits))
}

pub(crate) fn check_precision(precision: u32) -> Result<()> {
    if precision == 0 || precision > 64 {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Encode a point into an integer geohash with the given precision in bits.
pub fn encode(point: Point, precision: u32) -> Result<u64> {
    check_precision(precision)?;
    Ok(encode_unchecked(point, precision))
}

#[inline]
pub(crate) fn encode_unchecked(point: Point, precision: u32) -> u64 {
    let lat = point.lat.clamp(-90.0, 90.0);
    let lng = point.lng.clamp(-180.0, 180.0);
    bits::encode_position(lat, lng) >> (64 - precision)
}

/// Encode a slice of points, in parallel when the `rayon` feature is
/// enabled.
pub fn encode_many(points: &[Point], precision: u32) -> Result<Vec<u64>> {
    check_precision(precision)?;
    #[cfg(feature = "rayon")]
    {
        Ok(points
            .par_iter()
            .map(|point| encode_unchecked(*point, precision))
            .collect())
    }
    #[cfg(not(feature = "rayon"))]
    {
        Ok(points
            .iter()
            .map(|point| encode_unchecked(*point, precision))
            .collect())
    }
}

/// The cell encoded by an integer geohash at the given precision.
pub fn bounding_box(hash: u64, precision: u32) -> Result<BBox> {
    check_precision(precision)?;
    Ok(bounding_box_unchecked(hash, precision))
}

pub(crate) fn bounding_box_unchecked(hash: u64, precision: u32) -> BBox {
    let full = hash << (64 - precision);
    let (lat_bits, lng_bits) = bits::deinterleave(full);
    let lat = bits::decode_range(lat_bits, 90.0);
    let lng = bits::decode_range(lng_bits, 180.0);
    let (lng_err, lat_err) = error_with_precision(precision);
    BBox::new_unchecked(
        Point::new(lng, lat),
        Point::new(lng + lng_err, lat + lat_err),
    )
}

/// Decode an integer geohash into a representative point of its cell: the
/// rounded representative when `round` is true, the cell center otherwise.
pub fn decode(hash: u64, precision: u32, round: bool) -> Result<Point> {
    check_precision(precision)?;
    Ok(decode_unchecked(hash, precision, round))
}

#[inline]
pub(crate) fn decode_unchecked(hash: u64, precision: u32, round: bool) -> Point {
    let bbox = bounding_box_unchecked(hash, precision);
    if round {
        bbox.round()
    } else {
        bbox.center()
    }
}

/// Decode a slice of integer geohashes sharing one precision, in parallel
/// when the `rayon` feature is enabled.
pub fn decode_many(hashs: &[u64], precision: u32, round: bool) -> Result<Vec<Point>> {
    check_precision(precision)?;
    #[cfg(feature = "rayon")]
    {
        Ok(hashs
            .par_iter()
            .map(|hash| decode_unchecked(*hash, precision, round))
            .collect())
    }
    #[cfg(not(feature = "rayon"))]
    {
        Ok(hashs
            .iter()
            .map(|hash| decode_unchecked(*hash, precision, round))
            .collect())
    }
}
