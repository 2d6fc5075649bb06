//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::composer::{TileLayout, TilePlacement};
use crate::template::split_layers;
use std::collections::HashSet;
use tile_grid::TileBox;

#[test]
fn test_placements() {
    let layout = TileLayout::new(
        TileBox::new(10, 11, 20, 21, 5),
        256,
        split_layers("http://tile.example.org/!z/!x/!y.png"),
    );
    let placements = layout.iter().collect::<Vec<_>>();
    assert_eq!(
        placements,
        vec![
            TilePlacement {
                x: 10,
                y: 20,
                left: 0,
                top: 0,
                size: 256,
                urls: vec!["http://tile.example.org/5/10/20.png".to_string()],
            },
            TilePlacement {
                x: 11,
                y: 20,
                left: 256,
                top: 0,
                size: 256,
                urls: vec!["http://tile.example.org/5/11/20.png".to_string()],
            },
            TilePlacement {
                x: 10,
                y: 21,
                left: 0,
                top: 256,
                size: 256,
                urls: vec!["http://tile.example.org/5/10/21.png".to_string()],
            },
            TilePlacement {
                x: 11,
                y: 21,
                left: 256,
                top: 256,
                size: 256,
                urls: vec!["http://tile.example.org/5/11/21.png".to_string()],
            },
        ]
    );
}

#[test]
fn test_overlay_layers() {
    let layout = TileLayout::new(
        TileBox::new(100, 103, 7, 9, 8),
        64,
        split_layers("http://base.example.org/!z/!x/!y.png|http://overlay.example.org/!z/!x/!y.png"),
    );
    assert_eq!(layout.len(), 12);
    assert_eq!(layout.pixel_size(), (256, 192));

    let mut seen = HashSet::new();
    let mut count = 0;
    for placement in &layout {
        assert_eq!(placement.size, 64);
        assert_eq!(placement.left, (placement.x - 100) * 64);
        assert_eq!(placement.top, (placement.y - 7) * 64);
        assert_eq!(
            placement.urls,
            vec![
                format!(
                    "http://base.example.org/8/{}/{}.png",
                    placement.x, placement.y
                ),
                format!(
                    "http://overlay.example.org/8/{}/{}.png",
                    placement.x, placement.y
                ),
            ]
        );
        for layer in 0..placement.urls.len() {
            assert!(seen.insert((placement.x, placement.y, layer)));
            count += 1;
        }
    }
    // x_count * y_count * layers
    assert_eq!(count, 4 * 3 * 2);
}

#[test]
fn test_restartable() {
    let layout = TileLayout::new(
        TileBox::around(5, 5, 4),
        128,
        split_layers("/!z/!x/!y.png"),
    );
    let first = layout.iter().map(|p| p.urls[0].clone()).collect::<Vec<_>>();
    let second = layout.iter().map(|p| p.urls[0].clone()).collect::<Vec<_>>();
    assert_eq!(first.len(), 9);
    assert_eq!(first, second);
    assert_eq!(first[0], "/4/4/4.png");
    assert_eq!(first[8], "/4/6/6.png");
}

#[test]
fn test_reversed_box() {
    let layout = TileLayout::new(
        TileBox::new(5, 3, 0, 2, 4),
        256,
        split_layers("/!z/!x/!y.png"),
    );
    assert!(layout.is_empty());
    assert_eq!(layout.len(), 0);
    assert_eq!(layout.iter().count(), 0);
    assert_eq!(layout.pixel_size(), (0, 0));
}
