//! Contiguous-region labelling over row-major 2-D code arrays.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::error::{GeohashError, Result};

/// Inclusive `(row, row)` and `(col, col)` index ranges of a code's
/// occurrences.
pub type IndexRanges = ((usize, usize), (usize, usize));

/// Index shifts of the neighboring pixels, in scan order.
const SHIFT_ROW: [isize; 8] = [-1, -1, -1, 0, 1, 0, 1, 1];
const SHIFT_COL: [isize; 8] = [-1, 1, 0, -1, -1, 1, 0, 1];

pub(crate) fn check_shape(len: usize, (rows, cols): (usize, usize)) -> Result<()> {
    if rows * cols != len {
        return Err(GeohashError::ShapeMismatch { rows, cols, len });
    }
    Ok(())
}

/// Single row-major pass: the first occurrence of a code registers a 1x1
/// rectangle; every later pixel with a same-code neighbor widens the
/// rectangle to that neighbor's position. This is not full
/// connected-component labelling: a later lone occurrence of an
/// already-seen code never widens its rectangle.
pub(crate) fn label_regions<T: Ord + Clone>(
    codes: &[T],
    rows: usize,
    cols: usize,
) -> BTreeMap<T, IndexRanges> {
    let mut result = BTreeMap::new();

    for ix in 0..rows {
        for jx in 0..cols {
            let current = &codes[ix * cols + jx];
            let mut entry = match result.entry(current.clone()) {
                Entry::Vacant(vacant) => {
                    vacant.insert(((ix, ix), (jx, jx)));
                    continue;
                }
                Entry::Occupied(occupied) => occupied,
            };
            let ((row_min, row_max), (col_min, col_max)) = entry.get_mut();

            for kx in 0..8 {
                let i = ix as isize + SHIFT_ROW[kx];
                let j = jx as isize + SHIFT_COL[kx];
                if i < 0 || i >= rows as isize || j < 0 || j >= cols as isize {
                    continue;
                }
                let (i, j) = (i as usize, j as usize);
                if codes[i * cols + j] == *current {
                    *row_min = (*row_min).min(i);
                    *row_max = (*row_max).max(i);
                    *col_min = (*col_min).min(j);
                    *col_max = (*col_max).max(j);
                }
            }
        }
    }
    result
}

/// Group a row-major 2-D array of integer geohash codes into contiguous
/// rectangular index ranges, one entry per distinct code.
pub fn r#where(codes: &[u64], shape: (usize, usize)) -> Result<BTreeMap<u64, IndexRanges>> {
    check_shape(codes.len(), shape)?;
    Ok(label_regions(codes, shape.0, shape.1))
}
