//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::composer::{navigation_link, navigation_targets, Align, Group, NavigationTarget};
use tile_grid::TileBox;

fn targets_of(targets: &[NavigationTarget], group: Group) -> Vec<(&'static str, TileBox)> {
    targets
        .iter()
        .filter(|t| t.group == group)
        .map(|t| (t.label, t.tile_box))
        .collect()
}

#[test]
fn test_target_count() {
    let targets = navigation_targets(&TileBox::new(10, 12, 5, 6, 5), 256);
    assert_eq!(targets.len(), 40);
    for group in &[Group::Page, Group::Expand, Group::Shift, Group::Shrink] {
        assert_eq!(targets.iter().filter(|t| t.group == *group).count(), 8);
    }
    assert_eq!(targets.iter().filter(|t| t.group == Group::Zoom).count(), 4);
    assert_eq!(targets.iter().filter(|t| t.group == Group::Scale).count(), 3);
    assert_eq!(
        targets
            .iter()
            .filter(|t| t.group == Group::Permalink)
            .count(),
        1
    );
}

#[test]
fn test_expand() {
    let b = TileBox::new(10, 12, 5, 6, 5);
    let targets = navigation_targets(&b, 256);
    assert_eq!(
        targets_of(&targets, Group::Expand),
        vec![
            ("tl", TileBox::new(9, 12, 4, 6, 5)),
            ("top", TileBox::new(10, 12, 4, 6, 5)),
            ("tr", TileBox::new(10, 13, 4, 6, 5)),
            ("left", TileBox::new(9, 12, 5, 6, 5)),
            ("right", TileBox::new(10, 13, 5, 6, 5)),
            ("bl", TileBox::new(9, 12, 5, 7, 5)),
            ("bottom", TileBox::new(10, 12, 5, 7, 5)),
            ("br", TileBox::new(10, 13, 5, 7, 5)),
        ]
    );
}

#[test]
fn test_shift() {
    let b = TileBox::new(10, 12, 5, 6, 5);
    let targets = navigation_targets(&b, 256);
    assert_eq!(
        targets_of(&targets, Group::Shift),
        vec![
            ("ul", TileBox::new(9, 11, 4, 5, 5)),
            ("up", TileBox::new(10, 12, 4, 5, 5)),
            ("ur", TileBox::new(11, 13, 4, 5, 5)),
            ("left", TileBox::new(9, 11, 5, 6, 5)),
            ("right", TileBox::new(11, 13, 5, 6, 5)),
            ("dl", TileBox::new(9, 11, 6, 7, 5)),
            ("down", TileBox::new(10, 12, 6, 7, 5)),
            ("dr", TileBox::new(11, 13, 6, 7, 5)),
        ]
    );
}

#[test]
fn test_shrink() {
    let b = TileBox::new(10, 12, 5, 6, 5);
    let targets = navigation_targets(&b, 256);
    assert_eq!(
        targets_of(&targets, Group::Shrink),
        vec![
            ("tl", TileBox::new(11, 12, 6, 6, 5)),
            ("top", TileBox::new(10, 12, 6, 6, 5)),
            ("tr", TileBox::new(10, 11, 6, 6, 5)),
            ("left", TileBox::new(11, 12, 5, 6, 5)),
            ("right", TileBox::new(10, 11, 5, 6, 5)),
            ("bl", TileBox::new(11, 12, 5, 5, 5)),
            ("bottom", TileBox::new(10, 12, 5, 5, 5)),
            ("br", TileBox::new(10, 11, 5, 5, 5)),
        ]
    );

    // shrinking a single row produces a reversed box, which is not rejected
    let b = TileBox::new(10, 12, 5, 5, 5);
    let targets = navigation_targets(&b, 256);
    let shrunk = targets_of(&targets, Group::Shrink);
    assert_eq!(shrunk[1], ("top", TileBox::new(10, 12, 6, 5, 5)));
    assert!(shrunk[1].1.is_empty());
}

#[test]
fn test_page() {
    let b = TileBox::new(10, 12, 5, 6, 5);
    let targets = navigation_targets(&b, 256);
    assert_eq!(
        targets_of(&targets, Group::Page),
        vec![
            ("ul", TileBox::new(7, 9, 3, 4, 5)),
            ("up", TileBox::new(10, 12, 3, 4, 5)),
            ("ur", TileBox::new(13, 15, 3, 4, 5)),
            ("left", TileBox::new(7, 9, 5, 6, 5)),
            ("right", TileBox::new(13, 15, 5, 6, 5)),
            ("dl", TileBox::new(7, 9, 7, 8, 5)),
            ("down", TileBox::new(10, 12, 7, 8, 5)),
            ("dr", TileBox::new(13, 15, 7, 8, 5)),
        ]
    );
}

#[test]
fn test_zoom() {
    let b = TileBox::new(10, 12, 5, 6, 5);
    let targets = navigation_targets(&b, 128);
    assert_eq!(
        targets_of(&targets, Group::Zoom),
        vec![
            ("in/double size", TileBox::new(20, 25, 10, 13, 6)),
            ("in/keep size", TileBox::new(21, 23, 10, 12, 6)),
            ("out/keep size", TileBox::new(5, 6, 2, 3, 4)),
            ("out/halve size", TileBox::new(5, 6, 2, 3, 4)),
        ]
    );
    // zoom keeps the scale
    assert!(targets
        .iter()
        .filter(|t| t.group == Group::Zoom)
        .all(|t| t.scale == 128));
}

#[test]
fn test_scale_and_permalink() {
    let b = TileBox::new(39117, 39137, 48460, 48473, 17);
    let targets = navigation_targets(&b, 128);
    let scales = targets
        .iter()
        .filter(|t| t.group == Group::Scale)
        .map(|t| (t.label, t.tile_box, t.scale))
        .collect::<Vec<_>>();
    assert_eq!(
        scales,
        vec![("100%", b, 256), ("50%", b, 128), ("25%", b, 64)]
    );

    let permalink = targets
        .iter()
        .find(|t| t.group == Group::Permalink)
        .unwrap();
    assert_eq!(permalink.tile_box, b);
    assert_eq!(permalink.scale, 128);
    assert_eq!(permalink.align, Align::Left);
}

#[test]
fn test_alignment() {
    let targets = navigation_targets(&TileBox::new(0, 1, 0, 1, 1), 256);
    let aligns = targets
        .iter()
        .filter(|t| t.group == Group::Expand)
        .map(|t| t.align.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        aligns,
        vec!["right", "center", "left", "right", "left", "right", "center", "left"]
    );
}

#[test]
fn test_link() {
    let b = TileBox::new(39117, 39137, 48460, 48473, 17);
    assert_eq!(
        navigation_link(&b, 256, "http://tile.openstreetmap.org/!z/!x/!y.png"),
        "?xmin=39117&xmax=39137&ymin=48460&ymax=48473&zoom=17&scale=256&baseurl=http%3A%2F%2Ftile.openstreetmap.org%2F%21z%2F%21x%2F%21y.png"
    );
    assert_eq!(
        navigation_link(&TileBox::new(-1, 0, 0, 1, 0), 64, "a|b c"),
        "?xmin=-1&xmax=0&ymin=0&ymax=1&zoom=0&scale=64&baseurl=a%7Cb%20c"
    );

    let targets = navigation_targets(&b, 256);
    let permalink = targets
        .iter()
        .find(|t| t.group == Group::Permalink)
        .unwrap();
    assert_eq!(
        permalink.link("http://tile.openstreetmap.org/!z/!x/!y.png"),
        navigation_link(&b, 256, "http://tile.openstreetmap.org/!z/!x/!y.png")
    );
}
