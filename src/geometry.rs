//! Geographic points and boxes in longitude/latitude degrees (WGS84).

use arrayvec::ArrayVec;
use geo_traits::CoordTrait;

use crate::error::{GeohashError, Result};
use crate::math::power10;

/// A geographic point: longitude and latitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Longitude in `[-180, 180]` degrees.
    pub lng: f64,
    /// Latitude in `[-90, 90]` degrees.
    pub lat: f64,
}

impl Point {
    /// Create a new point from a longitude and a latitude in degrees.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Build a point from any `geo-traits` coordinate.
    pub fn from_coord(coord: &impl CoordTrait<T = f64>) -> Self {
        Self::new(coord.x(), coord.y())
    }
}

impl From<geo::Coord> for Point {
    fn from(coord: geo::Coord) -> Self {
        Self::new(coord.x, coord.y)
    }
}

/// A box made of two corner points.
///
/// The min corner is the south-west anchor. If the longitude of the min
/// corner is greater than the longitude of the max corner, the box wraps
/// around the antimeridian and denotes the union of the two sides; use
/// [`BBox::split`] to materialize that union.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BBox {
    min_corner: Point,
    max_corner: Point,
}

impl BBox {
    /// Create a box from its min (south-west) and max (north-east) corners.
    ///
    /// `min_corner.lng > max_corner.lng` denotes a box wrapping the
    /// antimeridian and is valid; `min_corner.lat > max_corner.lat` is not.
    pub fn new(min_corner: Point, max_corner: Point) -> Result<Self> {
        if min_corner.lat > max_corner.lat {
            return Err(GeohashError::InvalidBox {
                min: min_corner.lat,
                max: max_corner.lat,
            });
        }
        Ok(Self {
            min_corner,
            max_corner,
        })
    }

    pub(crate) const fn new_unchecked(min_corner: Point, max_corner: Point) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// The box covering the whole planet.
    pub const fn whole_earth() -> Self {
        Self {
            min_corner: Point::new(-180.0, -90.0),
            max_corner: Point::new(180.0, 90.0),
        }
    }

    /// The minimum (south-west) corner.
    pub fn min_corner(&self) -> Point {
        self.min_corner
    }

    /// The maximum (north-east) corner.
    pub fn max_corner(&self) -> Point {
        self.max_corner
    }

    /// The center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_corner.lng + self.max_corner.lng) * 0.5,
            (self.min_corner.lat + self.max_corner.lat) * 0.5,
        )
    }

    /// The box extent in longitude and latitude. With `round`, each extent
    /// is replaced by the largest power of ten that does not exceed it.
    pub fn delta(&self, round: bool) -> (f64, f64) {
        let x = self.max_corner.lng - self.min_corner.lng;
        let y = self.max_corner.lat - self.min_corner.lat;
        if round {
            (max_decimal_power(x), max_decimal_power(y))
        } else {
            (x, y)
        }
    }

    /// A point inside the box with each coordinate rounded up to the nearest
    /// multiple of the rounded extent. This is a deterministic
    /// representative suitable for display, not the center.
    pub fn round(&self) -> Point {
        let (x, y) = self.delta(true);
        Point::new(
            (self.min_corner.lng / x).ceil() * x,
            (self.min_corner.lat / y).ceil() * y,
        )
    }

    /// Returns true if the point is inside the box. A wrapped box contains
    /// the point if either side of the antimeridian does.
    pub fn contains(&self, point: Point) -> bool {
        if self.min_corner.lng > self.max_corner.lng {
            return self.split().iter().any(|half| half.contains(point));
        }
        self.min_corner.lat <= point.lat
            && point.lat <= self.max_corner.lat
            && self.min_corner.lng <= point.lng
            && point.lng <= self.max_corner.lng
    }

    /// The box itself, or the two boxes on either side of the antimeridian
    /// when the box wraps around the globe.
    pub fn split(&self) -> ArrayVec<BBox, 2> {
        let mut parts = ArrayVec::new();
        if self.min_corner.lng > self.max_corner.lng {
            parts.push(Self::new_unchecked(
                self.min_corner,
                Point::new(180.0, self.max_corner.lat),
            ));
            parts.push(Self::new_unchecked(
                Point::new(-180.0, self.min_corner.lat),
                self.max_corner,
            ));
        } else {
            parts.push(*self);
        }
        parts
    }
}

impl From<geo::Rect> for BBox {
    fn from(rect: geo::Rect) -> Self {
        // geo::Rect guarantees min <= max on both axes.
        Self::new_unchecked(rect.min().into(), rect.max().into())
    }
}

/// The largest power of 10 not exceeding `x` (`x > 0`).
fn max_decimal_power(x: f64) -> f64 {
    power10(x.log10().floor() as i32)
}
