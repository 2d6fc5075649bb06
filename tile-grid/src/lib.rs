//! A library for slippy map tile box calculations
//!
//! ## Tile boxes
//!
//! ```rust
//! use tile_grid::TileBox;
//!
//! let tbox = TileBox::new(10, 12, 5, 6, 5);
//! assert_eq!(tbox.x_count(), 3);
//! assert_eq!(tbox.y_count(), 2);
//! assert_eq!(tbox.zoom_in_double_size(), TileBox::new(20, 25, 10, 13, 6));
//! assert_eq!(tbox.zoom_out_halve_size(), TileBox::new(5, 6, 2, 3, 4));
//! ```
//!
//! ## Cell iterators
//!
//! ```rust
//! use tile_grid::TileBox;
//!
//! let tbox = TileBox::around(39137, 48460, 17);
//! for (x, y) in tbox.cells() {
//!     println!("Tile {}/{}/{}", tbox.zoom, x, y);
//! }
//! assert_eq!(tbox.cells().count(), 9);
//! ```
//!
//! ## Geographic extent
//!
//! ```rust
//! use tile_grid::{Extent, TileBox};
//!
//! let extent = TileBox::new(0, 0, 0, 0, 0).extent();
//! assert_eq!(extent.minx, -180.0);
//! assert_eq!(extent.maxx, 180.0);
//! assert!(extent.maxy > 85.0);
//! let _world: Extent = extent;
//! ```

mod grid;
mod grid_iterator;

pub use grid::{tile_lonlat, Extent, TileBox};
pub use grid_iterator::CellIterator;
