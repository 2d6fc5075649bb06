//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! HTML rendering with built-in tera templates

mod control;

pub use self::control::{ControlPanel, PanelCell};

use crate::composer::TileLayout;
use crate::service::map_request::MapRequest;
use std::error::Error;
use tera::{Context, Tera};

lazy_static! {
    static ref TEMPLATES: Result<Tera, String> = load_templates();
}

fn load_templates() -> Result<Tera, String> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("cell.html", include_str!("templates/cell.html")),
        ("tiles.html", include_str!("templates/tiles.html")),
        ("control.html", include_str!("templates/control.html")),
        ("bigmap.html", include_str!("templates/bigmap.html")),
    ])
    .map_err(|e| format!("Template error: {}", e))?;
    tera.set_escape_fn(escape_html);
    debug!("Page templates loaded");
    Ok(tera)
}

/// Escape like Go's html.EscapeString, keeping slashes in URLs readable
fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&#34;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

fn render(name: &str, context: &Context) -> Result<String, String> {
    let tera = match &*TEMPLATES {
        Ok(tera) => tera,
        Err(e) => return Err(e.clone()),
    };
    tera.render(name, context).map_err(|e| match e.source() {
        Some(source) => format!("Template error in {}: {}", name, source),
        None => format!("Template error in {}: {}", name, e),
    })
}

/// Absolutely positioned tile images, one `div` per tile and layer
pub fn render_tiles(layout: &TileLayout) -> Result<String, String> {
    #[derive(Serialize)]
    struct TileData {
        x: i64,
        y: i64,
        left: i64,
        top: i64,
        size: i64,
        urls: Vec<String>,
    }

    let tiles = layout
        .iter()
        .map(|p| TileData {
            x: p.x,
            y: p.y,
            left: p.left,
            top: p.top,
            size: p.size,
            urls: p.urls,
        })
        .collect::<Vec<_>>();
    let mut context = Context::new();
    context.insert("xmin", &layout.tile_box.xmin);
    context.insert("tiles", &tiles);
    render("tiles.html", &context)
}

/// Navigation panel
pub fn render_control(panel: &ControlPanel) -> Result<String, String> {
    let mut context = Context::new();
    context.insert("panel", panel);
    render("control.html", &context)
}

/// Page with tiles and navigation panel
pub fn render_page(request: &MapRequest, tiles: &str, control: &str) -> Result<String, String> {
    let tile_box = &request.tile_box;
    let mut context = Context::new();
    context.insert(
        "title",
        &format!(
            "bigmap {}/{}-{}/{}-{}",
            tile_box.zoom, tile_box.xmin, tile_box.xmax, tile_box.ymin, tile_box.ymax
        ),
    );
    context.insert("tiles", tiles);
    context.insert("control", control);
    render("bigmap.html", &context)
}
