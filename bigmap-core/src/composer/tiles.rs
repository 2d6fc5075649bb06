//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::template::UrlTemplate;
use tile_grid::{CellIterator, TileBox};

/// Screen position of one tile cell with the URLs of all its layers
#[derive(PartialEq, Clone, Debug)]
pub struct TilePlacement {
    pub x: i64,
    pub y: i64,
    /// Pixel offset from the left edge of the mosaic
    pub left: i64,
    /// Pixel offset from the top edge of the mosaic
    pub top: i64,
    /// Pixel width and height
    pub size: i64,
    /// One URL per layer, bottom layer first
    pub urls: Vec<String>,
}

/// Tile mosaic of a box, rendered with one or more layers
#[derive(Clone, Debug)]
pub struct TileLayout {
    pub tile_box: TileBox,
    pub scale: i64,
    pub layers: Vec<UrlTemplate>,
}

impl TileLayout {
    pub fn new(tile_box: TileBox, scale: i64, layers: Vec<UrlTemplate>) -> TileLayout {
        TileLayout {
            tile_box,
            scale,
            layers,
        }
    }
    /// Placements row by row, top row first.
    /// Every call starts a new iteration.
    pub fn iter(&self) -> TilePlacements<'_> {
        TilePlacements {
            layout: self,
            cells: self.tile_box.cells(),
        }
    }
    /// Number of tile cells (0 for a reversed box)
    pub fn len(&self) -> u64 {
        self.tile_box.cell_count()
    }
    pub fn is_empty(&self) -> bool {
        self.tile_box.is_empty()
    }
    /// Mosaic size in pixels
    pub fn pixel_size(&self) -> (i64, i64) {
        if self.is_empty() {
            (0, 0)
        } else {
            (
                self.tile_box.x_count().wrapping_mul(self.scale),
                self.tile_box.y_count().wrapping_mul(self.scale),
            )
        }
    }
    fn placement(&self, x: i64, y: i64) -> TilePlacement {
        let zoom = self.tile_box.zoom;
        TilePlacement {
            x,
            y,
            left: x.wrapping_sub(self.tile_box.xmin).wrapping_mul(self.scale),
            top: y.wrapping_sub(self.tile_box.ymin).wrapping_mul(self.scale),
            size: self.scale,
            urls: self
                .layers
                .iter()
                .map(|layer| layer.substitute(zoom, x, y))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TileLayout {
    type Item = TilePlacement;
    type IntoIter = TilePlacements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the placements of a `TileLayout`
#[derive(Clone, Debug)]
pub struct TilePlacements<'a> {
    layout: &'a TileLayout,
    cells: CellIterator,
}

impl<'a> Iterator for TilePlacements<'a> {
    type Item = TilePlacement;

    fn next(&mut self) -> Option<Self::Item> {
        let layout = self.layout;
        self.cells.next().map(|(x, y)| layout.placement(x, y))
    }
}
