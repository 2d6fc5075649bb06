//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::composer::{bbox_label, tile_label, ControlMetrics, Group, NavigationTarget};
use crate::service::map_request::MapRequest;

/// Blocks of the 3x3 navigation grid with their center caption
const GRID_BLOCKS: [(Group, &str); 4] = [
    (Group::Expand, "EXPAND"),
    (Group::Shift, "SHIFT"),
    (Group::Shrink, "SHRINK"),
    (Group::Page, "PAGE"),
];

/// Table cell of the navigation panel
#[derive(Serialize, PartialEq, Clone, Debug)]
pub struct PanelCell {
    /// `link`, `caption` or `spacer`
    pub kind: &'static str,
    pub text: String,
    pub align: &'static str,
    pub href: String,
}

impl PanelCell {
    fn link(target: &NavigationTarget, baseurl: &str) -> PanelCell {
        PanelCell {
            kind: "link",
            text: target.label.to_string(),
            align: target.align.as_str(),
            href: target.link(baseurl),
        }
    }
    fn caption(text: &str) -> PanelCell {
        PanelCell {
            kind: "caption",
            text: text.to_string(),
            align: "center",
            href: String::new(),
        }
    }
    fn spacer() -> PanelCell {
        PanelCell {
            kind: "spacer",
            text: String::new(),
            align: "left",
            href: String::new(),
        }
    }
}

/// Content of the navigation panel
#[derive(Serialize, Clone, Debug)]
pub struct ControlPanel {
    pub summary: String,
    pub nw_tile: String,
    pub se_tile: String,
    pub bbox: String,
    /// Three rows with the expand, shift, shrink and page blocks side by side
    pub rows: Vec<Vec<PanelCell>>,
    pub zoom_bar: Vec<PanelCell>,
    pub scale_bar: Vec<PanelCell>,
    pub columns: usize,
}

impl ControlPanel {
    pub fn new(request: &MapRequest, targets: &[NavigationTarget]) -> ControlPanel {
        let tile_box = &request.tile_box;
        let baseurl = &request.baseurl;
        let metrics = ControlMetrics::new(tile_box);
        let links_of = |group: Group| -> Vec<PanelCell> {
            targets
                .iter()
                .filter(|t| t.group == group)
                .map(|t| PanelCell::link(t, baseurl))
                .collect()
        };

        let mut rows = vec![Vec::new(), Vec::new(), Vec::new()];
        for (idx, (group, caption)) in GRID_BLOCKS.iter().enumerate() {
            let mut cells = links_of(*group);
            cells.insert(4.min(cells.len()), PanelCell::caption(caption));
            for (row, chunk) in rows.iter_mut().zip(cells.chunks(3)) {
                if idx > 0 {
                    row.push(PanelCell::spacer());
                }
                row.extend_from_slice(chunk);
            }
        }
        let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);

        let mut zoom_bar = Vec::new();
        for (idx, cell) in links_of(Group::Zoom).into_iter().enumerate() {
            if idx == 2 {
                zoom_bar.push(PanelCell::spacer());
                zoom_bar.push(PanelCell::caption("ZOOM"));
            }
            zoom_bar.push(PanelCell::spacer());
            zoom_bar.push(cell);
        }

        let mut scale_bar = vec![PanelCell::spacer()];
        scale_bar.extend(links_of(Group::Permalink));
        scale_bar.push(PanelCell::spacer());
        scale_bar.extend(links_of(Group::Scale));

        ControlPanel {
            summary: format!(
                "Map is {}x{} tiles ({}x{} px) at zoom {}, aspect {}",
                metrics.x_tiles,
                metrics.y_tiles,
                metrics.x_pixels,
                metrics.y_pixels,
                metrics.zoom,
                metrics.aspect
            ),
            nw_tile: tile_label(tile_box.xmin, tile_box.ymin, tile_box.zoom),
            se_tile: tile_label(
                tile_box.xmax.wrapping_add(1),
                tile_box.ymax.wrapping_add(1),
                tile_box.zoom,
            ),
            bbox: bbox_label(tile_box),
            rows,
            zoom_bar,
            scale_bar,
            columns,
        }
    }
}
