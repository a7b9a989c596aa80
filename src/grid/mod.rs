//! Grid algebra over integer geohash codes: neighbor lookup, grid
//! properties, exhaustive cell enumeration and contiguous-region labelling.
//!
//! Cells never straddle the antimeridian; boxes may wrap around it and are
//! split before enumeration. Neighbor probes past the poles or the
//! antimeridian saturate back into the edge cell, so an edge cell reports
//! itself for the directions that fall off the grid.
//!
//! ## Example
//!
//! ```
//! use geohash_grid::{grid, int64, BBox, Point};
//!
//! let code = int64::encode(Point::new(-5.6, 42.6), 25).unwrap();
//! let ring = grid::neighbors(code, 25).unwrap();
//! assert_eq!(ring.len(), 8);
//!
//! let bbox = BBox::new(Point::new(-10.0, 40.0), Point::new(-5.0, 45.0)).unwrap();
//! let properties = grid::grid_properties(&bbox, 25).unwrap();
//! let cells = grid::bounding_boxes(Some(&bbox), 25).unwrap();
//! assert_eq!(cells.len(), properties.lng_boxes * properties.lat_boxes);
//! ```

mod r#where;

pub use self::r#where::{r#where, IndexRanges};
pub(crate) use self::r#where::{check_shape, label_regions};

use geo::BoundingRect;

use crate::error::Result;
use crate::geometry::{BBox, Point};
use crate::int64::{
    bounding_box_unchecked, check_precision, decode_unchecked, encode_unchecked,
    error_with_precision,
};

/// All neighbor codes, clockwise from north around northwest:
///
/// ```text
/// 7 0 1
/// 6 x 2
/// 5 4 3
/// ```
pub fn neighbors(hash: u64, precision: u32) -> Result<[u64; 8]> {
    check_precision(precision)?;
    let bbox = bounding_box_unchecked(hash, precision);
    let center = bbox.center();
    let (lng_delta, lat_delta) = bbox.delta(false);

    Ok([
        // N
        encode_unchecked(Point::new(center.lng, center.lat + lat_delta), precision),
        // NE
        encode_unchecked(
            Point::new(center.lng + lng_delta, center.lat + lat_delta),
            precision,
        ),
        // E
        encode_unchecked(Point::new(center.lng + lng_delta, center.lat), precision),
        // SE
        encode_unchecked(
            Point::new(center.lng + lng_delta, center.lat - lat_delta),
            precision,
        ),
        // S
        encode_unchecked(Point::new(center.lng, center.lat - lat_delta), precision),
        // SW
        encode_unchecked(
            Point::new(center.lng - lng_delta, center.lat - lat_delta),
            precision,
        ),
        // W
        encode_unchecked(Point::new(center.lng - lng_delta, center.lat), precision),
        // NW
        encode_unchecked(
            Point::new(center.lng - lng_delta, center.lat + lat_delta),
            precision,
        ),
    ])
}

/// The grid covering a box: code of the south-west anchor cell and the
/// number of cells along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridProperties {
    /// Code of the box's south-west corner cell.
    pub hash_sw: u64,
    /// Number of cells along the longitude axis.
    pub lng_boxes: usize,
    /// Number of cells along the latitude axis.
    pub lat_boxes: usize,
}

/// Compute the grid covering the given box. The box must not wrap the
/// antimeridian: split wrapped boxes first ([`BBox::split`]).
pub fn grid_properties(bbox: &BBox, precision: u32) -> Result<GridProperties> {
    check_precision(precision)?;
    Ok(grid_properties_unchecked(bbox, precision))
}

fn grid_properties_unchecked(bbox: &BBox, precision: u32) -> GridProperties {
    let hash_sw = encode_unchecked(bbox.min_corner(), precision);
    let box_sw = bounding_box_unchecked(hash_sw, precision);
    let box_ne = bounding_box_unchecked(encode_unchecked(bbox.max_corner(), precision), precision);

    let (lng_err, lat_err) = error_with_precision(precision);
    let lng_step = ((box_ne.min_corner().lng - box_sw.min_corner().lng) / lng_err).round();
    let lat_step = ((box_ne.min_corner().lat - box_sw.min_corner().lat) / lat_err).round();

    GridProperties {
        hash_sw,
        lng_boxes: lng_step as usize + 1,
        lat_boxes: lat_step as usize + 1,
    }
}

/// All codes of the grid covering the box, or the whole earth when no box is
/// given. Wrapped boxes are split at the antimeridian and enumerated one
/// half after the other; within a half the order is latitude-major
/// (south to north), longitude minor (west to east).
pub fn bounding_boxes(bbox: Option<&BBox>, precision: u32) -> Result<Vec<u64>> {
    check_precision(precision)?;
    let bbox = bbox.copied().unwrap_or_else(BBox::whole_earth);
    let halves = bbox.split();

    let mut size = 0;
    for half in &halves {
        let properties = grid_properties_unchecked(half, precision);
        size += properties.lng_boxes * properties.lat_boxes;
    }

    let (lng_err, lat_err) = error_with_precision(precision);
    let mut result = Vec::with_capacity(size);

    for half in &halves {
        let properties = grid_properties_unchecked(half, precision);
        let point_sw = decode_unchecked(properties.hash_sw, precision, true);

        for lat in 0..properties.lat_boxes {
            let lat_shift = lat as f64 * lat_err;
            for lng in 0..properties.lng_boxes {
                let lng_shift = lng as f64 * lng_err;
                result.push(encode_unchecked(
                    Point::new(point_sw.lng + lng_shift, point_sw.lat + lat_shift),
                    precision,
                ));
            }
        }
    }
    Ok(result)
}

/// All codes of the grid covering the axis-aligned envelope of a polygon.
/// An empty polygon yields an empty result. The polygon interior is not
/// tested: callers filter the returned codes. Polygons straddling the
/// antimeridian cannot be expressed this way; pass a wrapped box to
/// [`bounding_boxes`] instead.
pub fn polygon_bounding_boxes(polygon: &geo::Polygon, precision: u32) -> Result<Vec<u64>> {
    check_precision(precision)?;
    match polygon.bounding_rect() {
        Some(envelope) => bounding_boxes(Some(&BBox::from(envelope)), precision),
        None => Ok(Vec::new()),
    }
}
