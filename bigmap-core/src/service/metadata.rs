//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::composer::{bbox_label, ControlMetrics};
use crate::service::bigmap_service::BigmapService;
use crate::service::map_request::MapRequest;

type JsonResult = Result<serde_json::Value, serde_json::error::Error>;

impl BigmapService {
    /// Map view description with all navigation links
    pub fn get_metadata(&self, request: &MapRequest) -> JsonResult {
        #[derive(Serialize)]
        struct MapInfo {
            xmin: i64,
            xmax: i64,
            ymin: i64,
            ymax: i64,
            zoom: i64,
            scale: i64,
            baseurl: String,
            layers: Vec<String>,
            tiles: TilesInfo,
            bounds: [f64; 4],
            bbox: String,
            links: Vec<LinkInfo>,
        }
        #[derive(Serialize)]
        struct TilesInfo {
            x_tiles: i64,
            y_tiles: i64,
            count: u64,
            width: i64,
            height: i64,
            aspect: String,
        }
        #[derive(Serialize)]
        struct LinkInfo {
            group: &'static str,
            label: &'static str,
            xmin: i64,
            xmax: i64,
            ymin: i64,
            ymax: i64,
            zoom: i64,
            scale: i64,
            href: String,
        }

        let tile_box = &request.tile_box;
        let layout = self.tile_layout(request);
        let metrics = ControlMetrics::new(tile_box);
        let (width, height) = layout.pixel_size();
        let extent = tile_box.extent();
        let links = self
            .navigation_targets(request)
            .iter()
            .map(|target| LinkInfo {
                group: target.group.as_str(),
                label: target.label,
                xmin: target.tile_box.xmin,
                xmax: target.tile_box.xmax,
                ymin: target.tile_box.ymin,
                ymax: target.tile_box.ymax,
                zoom: target.tile_box.zoom,
                scale: target.scale,
                href: target.link(&request.baseurl),
            })
            .collect();
        let info = MapInfo {
            xmin: tile_box.xmin,
            xmax: tile_box.xmax,
            ymin: tile_box.ymin,
            ymax: tile_box.ymax,
            zoom: tile_box.zoom,
            scale: request.scale,
            baseurl: request.baseurl.clone(),
            layers: layout.layers.iter().map(|l| l.to_string()).collect(),
            tiles: TilesInfo {
                x_tiles: metrics.x_tiles,
                y_tiles: metrics.y_tiles,
                count: layout.len(),
                width,
                height,
                aspect: metrics.aspect,
            },
            bounds: [extent.minx, extent.miny, extent.maxx, extent.maxy],
            bbox: bbox_label(tile_box),
            links,
        };
        serde_json::to_value(&info)
    }
}
