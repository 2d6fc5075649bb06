//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use tile_grid::{tile_lonlat, TileBox};

/// Nominal tile size used for the pixel dimensions in the panel header
pub const TILE_PIXELS: i64 = 256;

/// Size information shown in the control panel header
#[derive(PartialEq, Clone, Debug)]
pub struct ControlMetrics {
    pub x_tiles: i64,
    pub y_tiles: i64,
    pub x_pixels: i64,
    pub y_pixels: i64,
    pub zoom: i64,
    pub aspect: String,
}

impl ControlMetrics {
    pub fn new(tile_box: &TileBox) -> ControlMetrics {
        let x_tiles = tile_box.x_count();
        let y_tiles = tile_box.y_count();
        let x_pixels = x_tiles.wrapping_mul(TILE_PIXELS);
        let y_pixels = y_tiles.wrapping_mul(TILE_PIXELS);
        ControlMetrics {
            x_tiles,
            y_tiles,
            x_pixels,
            y_pixels,
            zoom: tile_box.zoom,
            aspect: aspect_label(x_pixels, y_pixels),
        }
    }
}

/// Aspect ratio like `2.0:1`, `1:1.5` or `1:1`
pub fn aspect_label(x_pixels: i64, y_pixels: i64) -> String {
    if x_pixels > y_pixels {
        format!("{:.1}:1", x_pixels as f64 / y_pixels as f64)
    } else if x_pixels < y_pixels {
        format!("1:{:.1}", y_pixels as f64 / x_pixels as f64)
    } else {
        "1:1".to_string()
    }
}

/// Geographic bounding box as `(west, south) - (east, north)`.
/// Above zoom level 7 with 6 decimals, 2 decimals otherwise.
pub fn bbox_label(tile_box: &TileBox) -> String {
    let extent = tile_box.extent();
    if tile_box.zoom > 7 {
        format!(
            "({:10.6}, {:10.6}) - ({:10.6}, {:10.6})",
            extent.minx, extent.miny, extent.maxx, extent.maxy
        )
    } else {
        format!(
            "({:7.2}, {:7.2}) - ({:7.2}, {:7.2})",
            extent.minx, extent.miny, extent.maxx, extent.maxy
        )
    }
}

/// Tile address with the position of its upper left corner
pub fn tile_label(x: i64, y: i64, zoom: i64) -> String {
    let (lon, lat) = tile_lonlat(x, y, zoom);
    format!("{}/{}/{} ({:.6}, {:.6})", zoom, x, y, lon, lat)
}
