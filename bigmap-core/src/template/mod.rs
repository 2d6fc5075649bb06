//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile URL templates

mod url_template;

pub use self::url_template::{
    parse_tile_image_url, split_layers, substitute, TileUrl, UrlTemplate, LAYER_SEPARATOR,
    X_TOKEN, Y_TOKEN, ZOOM_TOKEN,
};
