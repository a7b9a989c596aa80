use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GeohashError;
use crate::geometry::Point;
use crate::int64::{
    bounding_box, decode, decode_many, encode, encode_many, error_with_precision,
};

fn sample_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(-179.9..179.9),
                rng.gen_range(-89.9..89.9),
            )
        })
        .collect()
}

#[test]
fn precision_is_checked() {
    let point = Point::new(0.0, 0.0);
    assert!(matches!(
        encode(point, 0),
        Err(GeohashError::InvalidPrecision(0))
    ));
    assert!(matches!(
        encode(point, 65),
        Err(GeohashError::InvalidPrecision(65))
    ));
    assert!(bounding_box(0, 0).is_err());
    assert!(decode(0, 65, false).is_err());
}

#[test]
fn known_codes() {
    assert_eq!(encode(Point::new(0.0, 0.0), 64).unwrap(), 0xC000_0000_0000_0000);
    assert_eq!(encode(Point::new(0.0, 0.0), 2).unwrap(), 0b11);
    assert_eq!(encode(Point::new(-180.0, -90.0), 64).unwrap(), 0);
    assert_eq!(encode(Point::new(180.0, 90.0), 64).unwrap(), u64::MAX);
    // The 25-bit integer form of the textual code "ezs42".
    assert_eq!(encode(Point::new(-5.6, 42.6), 25).unwrap(), 14672002);
}

#[test]
fn out_of_range_coordinates_saturate() {
    for precision in [1, 13, 32, 64] {
        assert_eq!(
            encode(Point::new(200.0, 100.0), precision).unwrap(),
            encode(Point::new(180.0, 90.0), precision).unwrap()
        );
        assert_eq!(
            encode(Point::new(-200.0, -100.0), precision).unwrap(),
            encode(Point::new(-180.0, -90.0), precision).unwrap()
        );
    }
}

#[test]
fn resolution_per_precision() {
    assert_eq!(error_with_precision(5), (45.0, 45.0));
    assert_eq!(error_with_precision(25), (0.0439453125, 0.0439453125));
    let (lng_err, lat_err) = error_with_precision(64);
    assert_eq!(lng_err, 360.0 / 4294967296.0);
    assert_eq!(lat_err, 180.0 / 4294967296.0);
    // Longitude carries the extra bit at odd precisions.
    assert_eq!(error_with_precision(2), (180.0, 90.0));
    assert_eq!(error_with_precision(3), (90.0, 90.0));
}

#[test]
fn ezs42_cell_geometry() {
    let bbox = bounding_box(14672002, 25).unwrap();
    assert_eq!(bbox.min_corner(), Point::new(-5.625, 42.5830078125));
    assert_eq!(bbox.max_corner(), Point::new(-5.5810546875, 42.626953125));
    assert_eq!(decode(14672002, 25, false).unwrap(), bbox.center());
    assert_eq!(decode(14672002, 25, true).unwrap(), bbox.round());
}

#[test]
fn cell_contains_encoded_point() {
    for point in sample_points(512, 7) {
        for precision in 1..=64 {
            let code = encode(point, precision).unwrap();
            let bbox = bounding_box(code, precision).unwrap();
            assert!(
                bbox.contains(point),
                "precision {precision}: {point:?} outside {bbox:?}"
            );
            // Both representatives stay inside the cell.
            assert!(bbox.contains(decode(code, precision, false).unwrap()));
            assert!(bbox.contains(decode(code, precision, true).unwrap()));
        }
    }
}

#[test]
fn reencoding_the_center_is_stable() {
    for point in sample_points(256, 11) {
        for precision in [5, 20, 25, 45, 60] {
            let code = encode(point, precision).unwrap();
            let center = decode(code, precision, false).unwrap();
            assert_eq!(encode(center, precision).unwrap(), code);
        }
    }
}

#[test]
fn batch_forms_match_scalar() {
    let points = sample_points(1000, 3);
    let codes = encode_many(&points, 32).unwrap();
    assert_eq!(codes.len(), points.len());
    for (point, code) in points.iter().zip(&codes) {
        assert_eq!(encode(*point, 32).unwrap(), *code);
    }

    let decoded = decode_many(&codes, 32, false).unwrap();
    for (code, point) in codes.iter().zip(&decoded) {
        assert_eq!(decode(*code, 32, false).unwrap(), *point);
    }

    assert!(encode_many(&points, 0).is_err());
    assert!(decode_many(&codes, 65, true).is_err());
}
