//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::composer::{navigation_targets, NavigationTarget, TileLayout};
use crate::core::config::{ApplicationCfg, Config};
use crate::render::{render_control, render_page, render_tiles, ControlPanel};
use crate::service::map_request::{MapDefaults, MapRequest};
use std::collections::HashMap;

/// Stateless map mosaic service
#[derive(Clone, Debug, Default)]
pub struct BigmapService {
    pub defaults: MapDefaults,
}

impl BigmapService {
    pub fn new(defaults: MapDefaults) -> BigmapService {
        BigmapService { defaults }
    }
    /// Normalize query parameters
    pub fn map_request(&self, params: &HashMap<String, String>) -> MapRequest {
        MapRequest::from_params(params, &self.defaults)
    }
    pub fn tile_layout(&self, request: &MapRequest) -> TileLayout {
        TileLayout::new(request.tile_box, request.scale, request.layers())
    }
    pub fn navigation_targets(&self, request: &MapRequest) -> Vec<NavigationTarget> {
        navigation_targets(&request.tile_box, request.scale)
    }
    /// HTML fragment with all tile images
    pub fn tiles_html(&self, request: &MapRequest) -> Result<String, String> {
        let layout = self.tile_layout(request);
        if layout.is_empty() {
            info!(
                "Empty tile box x {}..{} y {}..{}",
                request.tile_box.xmin,
                request.tile_box.xmax,
                request.tile_box.ymin,
                request.tile_box.ymax
            );
        }
        render_tiles(&layout)
    }
    /// HTML fragment with the navigation panel
    pub fn control_html(&self, request: &MapRequest) -> Result<String, String> {
        let panel = ControlPanel::new(request, &self.navigation_targets(request));
        render_control(&panel)
    }
    /// Complete HTML page
    pub fn page_html(&self, request: &MapRequest) -> Result<String, String> {
        let tiles = self.tiles_html(request)?;
        let control = self.control_html(request)?;
        render_page(request, &tiles, &control)
    }
}

impl<'a> Config<'a, ApplicationCfg> for BigmapService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let defaults = MapDefaults::from_config(&config.service.bigmap)?;
        Ok(BigmapService::new(defaults))
    }
    fn gen_config() -> String {
        let toml = r#"# bigmap configuration
"#;
        let mut config = toml.to_string();
        config.push_str(&MapDefaults::gen_config());
        config
    }
}
