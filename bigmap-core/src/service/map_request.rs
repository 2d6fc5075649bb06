//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{Config, ServiceBigmapCfg, DEFAULT_BASEURL, DEFAULT_SCALE};
use crate::template::{parse_tile_image_url, split_layers, UrlTemplate};
use std::collections::HashMap;
use tile_grid::TileBox;

/// Fallback values for parameters missing in a request
#[derive(PartialEq, Clone, Debug)]
pub struct MapDefaults {
    pub baseurl: String,
    pub scale: i64,
}

impl Default for MapDefaults {
    fn default() -> Self {
        MapDefaults {
            baseurl: DEFAULT_BASEURL.to_string(),
            scale: DEFAULT_SCALE,
        }
    }
}

impl<'a> Config<'a, ServiceBigmapCfg> for MapDefaults {
    fn from_config(cfg: &ServiceBigmapCfg) -> Result<Self, String> {
        if cfg.scale <= 0 {
            return Err(format!(
                "Invalid scale {} in [service.bigmap] - must be positive",
                cfg.scale
            ));
        }
        Ok(MapDefaults {
            baseurl: cfg.baseurl.clone(),
            scale: cfg.scale,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[service.bigmap]
# Tile URL used when a request has no `baseurl`.
# !z, !x and !y are replaced with the tile address.
# Overlay layers are separated by `|`, e.g.
# baseurl = "http://tile.openstreetmap.org/!z/!x/!y.png|http://tiles.example.org/trails/!z/!x/!y.png"
baseurl = "http://tile.openstreetmap.org/!z/!x/!y.png"
# Pixel size of a tile (100%: 256, 50%: 128, 25%: 64)
scale = 256
"#;
        toml.to_string()
    }
}

/// Normalized map view request
#[derive(PartialEq, Clone, Debug)]
pub struct MapRequest {
    pub tile_box: TileBox,
    pub scale: i64,
    /// Tile URL template(s), separated by `|`
    pub baseurl: String,
}

/// Integer parameter, 0 if missing or invalid
fn int_param(params: &HashMap<String, String>, key: &str) -> i64 {
    params
        .get(key)
        .and_then(|val| val.parse::<i64>().ok())
        .unwrap_or(0)
}

impl MapRequest {
    /// Map view from query parameters
    /// `xmin`, `xmax`, `ymin`, `ymax`, `zoom`, `scale`, `baseurl` and `tileurl`.
    ///
    /// A `tileurl` like `http://tile.openstreetmap.org/17/39137/48460.png`
    /// replaces the box with the 3x3 tiles around it and provides the
    /// base URL, unless `baseurl` is given as well.
    pub fn from_params(params: &HashMap<String, String>, defaults: &MapDefaults) -> MapRequest {
        let mut tile_box = TileBox::new(
            int_param(params, "xmin"),
            int_param(params, "xmax"),
            int_param(params, "ymin"),
            int_param(params, "ymax"),
            int_param(params, "zoom"),
        );
        let mut scale = int_param(params, "scale");
        let mut baseurl = params.get("baseurl").cloned().unwrap_or_default();

        if let Some(tileurl) = params.get("tileurl").filter(|url| !url.is_empty()) {
            match parse_tile_image_url(tileurl) {
                Some(tile) => {
                    tile_box = tile.tile_box();
                    if baseurl.is_empty() {
                        baseurl = tile.template.to_string();
                    }
                }
                None => debug!("Ignoring tileurl '{}'", tileurl),
            }
        }
        if scale == 0 {
            scale = defaults.scale;
        }
        if baseurl.is_empty() {
            baseurl = defaults.baseurl.clone();
        }
        let request = MapRequest {
            tile_box,
            scale,
            baseurl,
        };
        debug!("{:?}", request);
        request
    }

    /// Map view from an URL query string like `xmin=1&xmax=2&...`
    pub fn from_query(query: &str, defaults: &MapDefaults) -> MapRequest {
        MapRequest::from_params(&parse_query(query), defaults)
    }

    /// Overlay layers, bottom layer first
    pub fn layers(&self) -> Vec<UrlTemplate> {
        split_layers(&self.baseurl)
    }
}

/// Decode an URL query string. Later values of repeated keys win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}
