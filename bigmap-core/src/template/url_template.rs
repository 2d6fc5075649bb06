//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use std::fmt;
use tile_grid::TileBox;

/// Placeholder for the zoom level
pub const ZOOM_TOKEN: &str = "!z";
/// Placeholder for the tile column
pub const X_TOKEN: &str = "!x";
/// Placeholder for the tile row
pub const Y_TOKEN: &str = "!y";
/// Separator of overlay layers in a base URL
pub const LAYER_SEPARATOR: char = '|';

lazy_static! {
    // <prefix>/<zoom>/<x>/<y>.png
    static ref TILE_URL_RE: Regex =
        Regex::new(r"^(.*?)/([0-9]+)/([0-9]+)/([0-9]+)\.png$").unwrap();
}

/// Tile URL with `!z`, `!x` and `!y` placeholders.
///
/// There is no escaping: a literal `!z`, `!x` or `!y` in a URL is always
/// treated as placeholder.
#[derive(PartialEq, Clone, Debug)]
pub struct UrlTemplate {
    template: String,
}

impl UrlTemplate {
    pub fn new(template: &str) -> UrlTemplate {
        UrlTemplate {
            template: template.to_string(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.template
    }
    /// Tile URL for the given tile address
    pub fn substitute(&self, zoom: i64, x: i64, y: i64) -> String {
        substitute(&self.template, zoom, x, y)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Replace all placeholders, zoom first, then x, then y.
pub fn substitute(template: &str, zoom: i64, x: i64, y: i64) -> String {
    template
        .replace(ZOOM_TOKEN, &zoom.to_string())
        .replace(X_TOKEN, &x.to_string())
        .replace(Y_TOKEN, &y.to_string())
}

/// Split a base URL into overlay layers, bottom layer first.
pub fn split_layers(baseurl: &str) -> Vec<UrlTemplate> {
    baseurl.split(LAYER_SEPARATOR).map(UrlTemplate::new).collect()
}

/// Tile address and URL template derived from a single tile image URL
#[derive(PartialEq, Clone, Debug)]
pub struct TileUrl {
    pub template: UrlTemplate,
    pub zoom: i64,
    pub x: i64,
    pub y: i64,
}

impl TileUrl {
    /// The tile with its neighbours
    pub fn tile_box(&self) -> TileBox {
        TileBox::around(self.x, self.y, self.zoom)
    }
}

/// Parse a tile URL like `http://tile.openstreetmap.org/17/39137/48460.png`.
///
/// Returns `None` if the URL doesn't end with `/<zoom>/<x>/<y>.png`.
pub fn parse_tile_image_url(url: &str) -> Option<TileUrl> {
    let caps = TILE_URL_RE.captures(url)?;
    // Numbers out of range are handled like a missing value
    let number = |idx: usize| caps[idx].parse::<i64>().unwrap_or(0);
    let tile_url = TileUrl {
        template: UrlTemplate::new(&format!(
            "{}/{}/{}/{}.png",
            &caps[1], ZOOM_TOKEN, X_TOKEN, Y_TOKEN
        )),
        zoom: number(2),
        x: number(3),
        y: number(4),
    };
    debug!("Tile URL {} -> {:?}", url, tile_url);
    Some(tile_url)
}
