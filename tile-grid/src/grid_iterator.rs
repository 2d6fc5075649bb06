//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::TileBox;

/// Row-by-row iterator over the cells of a tile box
#[derive(Clone, Debug)]
pub struct CellIterator {
    x: i64,
    y: i64,
    xmin: i64,
    xmax: i64,
    ymax: i64,
    finished: bool,
}

impl CellIterator {
    pub fn new(tbox: &TileBox) -> CellIterator {
        CellIterator {
            x: tbox.xmin,
            y: tbox.ymin,
            xmin: tbox.xmin,
            xmax: tbox.xmax,
            ymax: tbox.ymax,
            // Reversed ranges are not reordered
            finished: tbox.is_empty(),
        }
    }
}

impl Iterator for CellIterator {
    /// Current cell index `(x, y)`
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.x, self.y);
        if self.x < self.xmax {
            self.x += 1;
        } else if self.y < self.ymax {
            self.y += 1;
            self.x = self.xmin;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

#[test]
fn test_row_major_iter() {
    let tbox = TileBox::new(3, 5, 7, 8, 4);
    let cells = tbox.cells().collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(3, 7), (4, 7), (5, 7), (3, 8), (4, 8), (5, 8)]
    );

    let tbox = TileBox::new(0, 0, 0, 0, 0);
    let cells = tbox.cells().collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0)]);

    // negative indices after panning past the grid border
    let tbox = TileBox::new(-2, -1, -1, -1, 1);
    let cells = tbox.cells().collect::<Vec<_>>();
    assert_eq!(cells, vec![(-2, -1), (-1, -1)]);
}

#[test]
fn test_restartable() {
    let tbox = TileBox::around(10, 10, 5);
    let first = tbox.cells().collect::<Vec<_>>();
    let second = tbox.cells().collect::<Vec<_>>();
    assert_eq!(first.len(), 9);
    assert_eq!(first, second);

    let mut iter = tbox.cells();
    iter.next();
    let rest = iter.clone().count();
    assert_eq!(rest, 8);
    assert_eq!(iter.count(), 8);
}

#[test]
fn test_reversed_box() {
    // xmin > xmax
    let tbox = TileBox::new(5, 3, 0, 2, 3);
    let cells = tbox.cells().collect::<Vec<_>>();
    assert_eq!(cells, vec![]);

    // ymin > ymax
    let tbox = TileBox::new(0, 2, 9, 1, 3);
    assert_eq!(tbox.cells().count(), 0);
    assert_eq!(tbox.cell_count(), 0);
}
