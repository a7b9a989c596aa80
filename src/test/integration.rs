//! Cross-component checks tying the codecs and the grid algebra together.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{BBox, Point};
use crate::{grid, int64, string};

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
fn representative_points_stay_in_their_cell() {
    for point in sample_points(256, 29) {
        for precision in [1, 7, 20, 33, 45, 64] {
            let code = int64::encode(point, precision).unwrap();
            let bbox = int64::bounding_box(code, precision).unwrap();
            assert!(bbox.contains(point));

            let center = int64::decode(code, precision, false).unwrap();
            let rounded = int64::decode(code, precision, true).unwrap();
            assert!(bbox.contains(center));
            assert!(bbox.contains(rounded));
            // The center maps back to the same cell.
            assert_eq!(int64::encode(center, precision).unwrap(), code);
        }
    }
}

#[test]
fn textual_and_integer_forms_agree() {
    for point in sample_points(128, 31) {
        for chars in [1u32, 4, 5, 9, 12] {
            let hash = string::encode(point, chars).unwrap();
            let code = int64::encode(point, 5 * chars).unwrap();
            assert_eq!(
                string::decode(&hash, false).unwrap(),
                int64::decode(code, 5 * chars, false).unwrap()
            );
            assert_eq!(
                string::bounding_box(&hash).unwrap(),
                int64::bounding_box(code, 5 * chars).unwrap()
            );

            let text_ring = string::neighbors(&hash).unwrap();
            let int_ring = grid::neighbors(code, 5 * chars).unwrap();
            for (text, int) in text_ring.iter().zip(int_ring) {
                assert_eq!(
                    string::bounding_box(text).unwrap(),
                    int64::bounding_box(int, 5 * chars).unwrap()
                );
            }
        }
    }
}

#[test]
fn whole_earth_grids_are_complete() {
    // 2 characters: a 32 x 32 cell grid.
    let cells = grid::bounding_boxes(None, 10).unwrap();
    assert_eq!(cells.len(), 1024);
    let distinct: BTreeSet<u64> = cells.iter().copied().collect();
    assert_eq!(distinct.len(), 1024);

    let texts = string::bounding_boxes(None, 2).unwrap();
    assert_eq!(texts.len(), 1024);
    for (text, code) in texts.iter().zip(&cells) {
        assert_eq!(
            string::bounding_box(text).unwrap(),
            int64::bounding_box(*code, 10).unwrap()
        );
    }
}

#[test]
fn enumeration_order_matches_the_labelling_indices() {
    let bbox = BBox::new(Point::new(5.0, 45.0), Point::new(7.0, 46.0)).unwrap();
    let precision = 20;
    let properties = grid::grid_properties(&bbox, precision).unwrap();
    let cells = grid::bounding_boxes(Some(&bbox), precision).unwrap();
    assert_eq!(cells.len(), properties.lng_boxes * properties.lat_boxes);

    // Enumeration is latitude-major, so the array shape is
    // (lat_boxes, lng_boxes); every cell of the grid is distinct and must
    // come out as its own 1x1 rectangle at its scan position.
    let shape = (properties.lat_boxes, properties.lng_boxes);
    let regions = grid::r#where(&cells, shape).unwrap();
    assert_eq!(regions.len(), cells.len());
    for (index, code) in cells.iter().enumerate() {
        let row = index / properties.lng_boxes;
        let col = index % properties.lng_boxes;
        assert_eq!(regions[code], ((row, row), (col, col)));
    }
}
