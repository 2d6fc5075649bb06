//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile mosaic layout and navigation

pub mod metrics;
pub mod navigation;
pub mod tiles;

pub use self::metrics::{aspect_label, bbox_label, tile_label, ControlMetrics};
pub use self::navigation::{navigation_link, navigation_targets, Align, Group, NavigationTarget};
pub use self::tiles::{TileLayout, TilePlacement, TilePlacements};

#[cfg(test)]
mod navigation_test;
#[cfg(test)]
mod tiles_test;
