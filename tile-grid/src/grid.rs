//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile boxes

use crate::grid_iterator::CellIterator;
use std::f64::consts;

/// Geographic extent in decimal degrees
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Inclusive range of XYZ tile indices at one zoom level.
///
/// Indices are signed: navigating past the grid border (e.g. left of column 0
/// or out of level 0) keeps the arithmetic result as is instead of clamping it.
/// A box with `xmin > xmax` or `ymin > ymax` is empty, it is never reordered.
/// All box arithmetic wraps around on `i64` overflow.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TileBox {
    pub xmin: i64,
    pub xmax: i64,
    pub ymin: i64,
    pub ymax: i64,
    pub zoom: i64,
}

impl TileBox {
    pub fn new(xmin: i64, xmax: i64, ymin: i64, ymax: i64, zoom: i64) -> TileBox {
        TileBox {
            xmin,
            xmax,
            ymin,
            ymax,
            zoom,
        }
    }

    /// 3x3 window centered on tile (x, y).
    ///
    /// Tile indices below 1 are raised to 1 first, so the window never starts
    /// left of column 0 or above row 0.
    pub fn around(x: i64, y: i64, zoom: i64) -> TileBox {
        let xmin = x.max(1) - 1;
        let ymin = y.max(1) - 1;
        TileBox::new(xmin, xmin.wrapping_add(2), ymin, ymin.wrapping_add(2), zoom)
    }

    /// Number of columns (zero or negative for a reversed box)
    pub fn x_count(&self) -> i64 {
        self.xmax.wrapping_sub(self.xmin).wrapping_add(1)
    }

    /// Number of rows (zero or negative for a reversed box)
    pub fn y_count(&self) -> i64 {
        self.ymax.wrapping_sub(self.ymin).wrapping_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    /// Number of cells, 0 for an empty box, saturating at `u64::MAX`
    pub fn cell_count(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.x_count() as u64).saturating_mul(self.y_count() as u64)
        }
    }

    /// Row-major iterator over all `(x, y)` cells, top row first
    pub fn cells(&self) -> CellIterator {
        CellIterator::new(self)
    }

    /// Box with each bound moved by the given delta, zoom unchanged
    pub fn adjusted(&self, dxmin: i64, dxmax: i64, dymin: i64, dymax: i64) -> TileBox {
        TileBox::new(
            self.xmin.wrapping_add(dxmin),
            self.xmax.wrapping_add(dxmax),
            self.ymin.wrapping_add(dymin),
            self.ymax.wrapping_add(dymax),
            self.zoom,
        )
    }

    /// Box moved by `dx` columns and `dy` rows
    pub fn translated(&self, dx: i64, dy: i64) -> TileBox {
        self.adjusted(dx, dx, dy, dy)
    }

    /// Box moved by a multiple of its own width and height
    pub fn paged(&self, xpages: i64, ypages: i64) -> TileBox {
        self.translated(
            xpages.wrapping_mul(self.x_count()),
            ypages.wrapping_mul(self.y_count()),
        )
    }

    /// Next zoom level, same area: every tile becomes 2x2 tiles
    pub fn zoom_in_double_size(&self) -> TileBox {
        TileBox::new(
            self.xmin.wrapping_mul(2),
            self.xmax.wrapping_mul(2).wrapping_add(1),
            self.ymin.wrapping_mul(2),
            self.ymax.wrapping_mul(2).wrapping_add(1),
            self.zoom.wrapping_add(1),
        )
    }

    /// Next zoom level, about the same tile count around the center
    pub fn zoom_in_keep_size(&self) -> TileBox {
        let dx = self.xmax.wrapping_sub(self.xmin) / 2;
        let dy = self.ymax.wrapping_sub(self.ymin) / 2;
        TileBox::new(
            self.xmin.wrapping_mul(2).wrapping_add(dx),
            self.xmax.wrapping_mul(2).wrapping_sub(dx),
            self.ymin.wrapping_mul(2).wrapping_add(dy),
            self.ymax.wrapping_mul(2).wrapping_sub(dy),
            self.zoom.wrapping_add(1),
        )
    }

    /// Previous zoom level, about the same tile count around the center
    pub fn zoom_out_keep_size(&self) -> TileBox {
        let dx = self.xmax.wrapping_sub(self.xmin) / 4;
        let dy = self.ymax.wrapping_sub(self.ymin) / 4;
        TileBox::new(
            (self.xmin / 2).wrapping_sub(dx),
            (self.xmax / 2).wrapping_add(dx),
            (self.ymin / 2).wrapping_sub(dy),
            (self.ymax / 2).wrapping_add(dy),
            self.zoom.wrapping_sub(1),
        )
    }

    /// Previous zoom level, same area
    pub fn zoom_out_halve_size(&self) -> TileBox {
        TileBox::new(
            self.xmin / 2,
            self.xmax / 2,
            self.ymin / 2,
            self.ymax / 2,
            self.zoom.wrapping_sub(1),
        )
    }

    /// Geographic extent from the upper left corner of (xmin, ymin)
    /// to the lower right corner of (xmax, ymax)
    pub fn extent(&self) -> Extent {
        let (west, north) = tile_lonlat(self.xmin, self.ymin, self.zoom);
        let (east, south) = tile_lonlat(self.xmax.wrapping_add(1), self.ymax.wrapping_add(1), self.zoom);
        Extent {
            minx: west,
            miny: south,
            maxx: east,
            maxy: north,
        }
    }
}

/// Longitude and latitude of the upper left corner of an XYZ tile
pub fn tile_lonlat(xtile: i64, ytile: i64, zoom: i64) -> (f64, f64) {
    let n = (zoom as f64).exp2();
    let lon = xtile as f64 / n * 360.0 - 180.0;
    let lat = (consts::PI * (1.0 - 2.0 * ytile as f64 / n))
        .sinh()
        .atan()
        .to_degrees();
    (lon, lat)
}
