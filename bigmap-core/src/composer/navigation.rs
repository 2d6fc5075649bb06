//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Navigation links of the control panel

use self::Align::{Center, Left, Right};
use self::Group::{Expand, Page, Permalink, Scale, Shift, Shrink, Zoom};
use self::Move::Bounds;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tile_grid::TileBox;

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Group {
    /// Move by the box size
    Page,
    /// Add one row or column
    Expand,
    /// Move by one tile
    Shift,
    /// Remove one row or column
    Shrink,
    Zoom,
    Scale,
    Permalink,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Page => "page",
            Group::Expand => "expand",
            Group::Shift => "shift",
            Group::Shrink => "shrink",
            Group::Zoom => "zoom",
            Group::Scale => "scale",
            Group::Permalink => "permalink",
        }
    }
}

/// Horizontal alignment of a link in its table cell
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Move {
    /// Deltas added to (xmin, xmax, ymin, ymax)
    Bounds(i64, i64, i64, i64),
    /// Translation in box widths and heights
    Page(i64, i64),
    ZoomInDoubleSize,
    ZoomInKeepSize,
    ZoomOutKeepSize,
    ZoomOutHalveSize,
    Scale(i64),
    Stay,
}

struct Rule {
    group: Group,
    label: &'static str,
    align: Align,
    action: Move,
}

const fn rule(group: Group, label: &'static str, align: Align, action: Move) -> Rule {
    Rule {
        group,
        label,
        align,
        action,
    }
}

// Each box group lists the 8 outer cells of a 3x3 grid in row-major order.
const RULES: [Rule; 40] = [
    rule(Expand, "tl", Right, Bounds(-1, 0, -1, 0)),
    rule(Expand, "top", Center, Bounds(0, 0, -1, 0)),
    rule(Expand, "tr", Left, Bounds(0, 1, -1, 0)),
    rule(Expand, "left", Right, Bounds(-1, 0, 0, 0)),
    rule(Expand, "right", Left, Bounds(0, 1, 0, 0)),
    rule(Expand, "bl", Right, Bounds(-1, 0, 0, 1)),
    rule(Expand, "bottom", Center, Bounds(0, 0, 0, 1)),
    rule(Expand, "br", Left, Bounds(0, 1, 0, 1)),
    rule(Shift, "ul", Right, Bounds(-1, -1, -1, -1)),
    rule(Shift, "up", Center, Bounds(0, 0, -1, -1)),
    rule(Shift, "ur", Left, Bounds(1, 1, -1, -1)),
    rule(Shift, "left", Right, Bounds(-1, -1, 0, 0)),
    rule(Shift, "right", Left, Bounds(1, 1, 0, 0)),
    rule(Shift, "dl", Right, Bounds(-1, -1, 1, 1)),
    rule(Shift, "down", Center, Bounds(0, 0, 1, 1)),
    rule(Shift, "dr", Left, Bounds(1, 1, 1, 1)),
    rule(Shrink, "tl", Right, Bounds(1, 0, 1, 0)),
    rule(Shrink, "top", Center, Bounds(0, 0, 1, 0)),
    rule(Shrink, "tr", Left, Bounds(0, -1, 1, 0)),
    rule(Shrink, "left", Right, Bounds(1, 0, 0, 0)),
    rule(Shrink, "right", Left, Bounds(0, -1, 0, 0)),
    rule(Shrink, "bl", Right, Bounds(1, 0, 0, -1)),
    rule(Shrink, "bottom", Center, Bounds(0, 0, 0, -1)),
    rule(Shrink, "br", Left, Bounds(0, -1, 0, -1)),
    rule(Page, "ul", Right, Move::Page(-1, -1)),
    rule(Page, "up", Center, Move::Page(0, -1)),
    rule(Page, "ur", Left, Move::Page(1, -1)),
    rule(Page, "left", Right, Move::Page(-1, 0)),
    rule(Page, "right", Left, Move::Page(1, 0)),
    rule(Page, "dl", Right, Move::Page(-1, 1)),
    rule(Page, "down", Center, Move::Page(0, 1)),
    rule(Page, "dr", Left, Move::Page(1, 1)),
    rule(Zoom, "in/double size", Left, Move::ZoomInDoubleSize),
    rule(Zoom, "in/keep size", Left, Move::ZoomInKeepSize),
    rule(Zoom, "out/keep size", Left, Move::ZoomOutKeepSize),
    rule(Zoom, "out/halve size", Left, Move::ZoomOutHalveSize),
    rule(Permalink, "Permalink", Left, Move::Stay),
    rule(Scale, "100%", Left, Move::Scale(256)),
    rule(Scale, "50%", Left, Move::Scale(128)),
    rule(Scale, "25%", Left, Move::Scale(64)),
];

/// Box and scale reachable with one control panel link
#[derive(PartialEq, Clone, Debug)]
pub struct NavigationTarget {
    pub group: Group,
    pub label: &'static str,
    pub align: Align,
    pub tile_box: TileBox,
    pub scale: i64,
}

impl NavigationTarget {
    pub fn link(&self, baseurl: &str) -> String {
        navigation_link(&self.tile_box, self.scale, baseurl)
    }
}

/// Relative URL of a map view
pub fn navigation_link(tile_box: &TileBox, scale: i64, baseurl: &str) -> String {
    format!(
        "?xmin={}&xmax={}&ymin={}&ymax={}&zoom={}&scale={}&baseurl={}",
        tile_box.xmin,
        tile_box.xmax,
        tile_box.ymin,
        tile_box.ymax,
        tile_box.zoom,
        scale,
        utf8_percent_encode(baseurl, QUERY_VALUE)
    )
}

/// All navigation targets of a map view, grouped in panel order.
pub fn navigation_targets(tile_box: &TileBox, scale: i64) -> Vec<NavigationTarget> {
    RULES
        .iter()
        .map(|rule| {
            let (target_box, target_scale) = match rule.action {
                Bounds(dxmin, dxmax, dymin, dymax) => {
                    (tile_box.adjusted(dxmin, dxmax, dymin, dymax), scale)
                }
                Move::Page(xpages, ypages) => (tile_box.paged(xpages, ypages), scale),
                Move::ZoomInDoubleSize => (tile_box.zoom_in_double_size(), scale),
                Move::ZoomInKeepSize => (tile_box.zoom_in_keep_size(), scale),
                Move::ZoomOutKeepSize => (tile_box.zoom_out_keep_size(), scale),
                Move::ZoomOutHalveSize => (tile_box.zoom_out_halve_size(), scale),
                Move::Scale(preset) => (*tile_box, preset),
                Move::Stay => (*tile_box, scale),
            };
            NavigationTarget {
                group: rule.group,
                label: rule.label,
                align: rule.align,
                tile_box: target_box,
                scale: target_scale,
            }
        })
        .collect()
}
