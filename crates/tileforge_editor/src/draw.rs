//! Renderable output: ordered, per-viewport draw lists
//!
//! The external renderer consumes these primitives verbatim. Pan and zoom
//! are already applied, so positions and sizes are in viewport space.

use crate::{transform, AtlasSelector, TileAtlas, Viewport};
use glam::Vec2;
use tileforge_core::{AtlasRect, LayerStack};

/// Fixed opacity for non-active layers in the merged preview
pub const MERGE_OPACITY: f32 = 0.5;

/// One textured quad: where to draw it, which atlas region it samples,
/// and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileQuad {
    pub position: Vec2,
    pub source: AtlasRect,
    pub opacity: f32,
    pub scale: f32,
}

/// One grid overlay line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// The in-progress selection overlay rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub position: Vec2,
    pub size: Vec2,
}

/// A draw primitive. Ordering within a list is back to front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    Tile(TileQuad),
    Line(GridLine),
    Selection(OverlayRect),
}

/// Everything one frame draws, split per viewport
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub map: Vec<DrawPrimitive>,
    pub atlas: Vec<DrawPrimitive>,
}

/// Build the map viewport's primitives: the merged preview beneath the
/// active layer's tiles, then the grid lattice over the active layer's
/// extent. Empty when no layer is active.
pub fn map_primitives(
    stack: &LayerStack,
    pan_offset: Vec2,
    merged_preview: bool,
) -> Vec<DrawPrimitive> {
    let mut list = Vec::new();
    let Some(active_index) = stack.active_layer_index() else {
        return list;
    };
    let scale = stack.scale_factor();

    if merged_preview {
        for (i, layer) in stack.layers.iter().enumerate() {
            if i == active_index {
                continue;
            }
            for (_, _, tile) in layer.iter_placed() {
                list.push(DrawPrimitive::Tile(TileQuad {
                    position: Vec2::new(tile.position.x, tile.position.y) - pan_offset,
                    source: tile.texture_rect,
                    opacity: MERGE_OPACITY,
                    scale,
                }));
            }
        }
    }

    if let Some(layer) = stack.active_layer() {
        for (_, _, tile) in layer.iter_placed() {
            list.push(DrawPrimitive::Tile(TileQuad {
                position: Vec2::new(tile.position.x, tile.position.y) - pan_offset,
                source: tile.texture_rect,
                opacity: layer.opacity,
                scale,
            }));
        }
        lattice(&mut list, layer.width, layer.height, stack.tile_size(), pan_offset);
    }
    list
}

/// Build the atlas viewport's primitives: the sheet quad, its grid, and
/// the live drag overlay when a selection is in progress.
pub fn atlas_primitives(
    atlas: &TileAtlas,
    selector: &AtlasSelector,
    view: &Viewport,
) -> Vec<DrawPrimitive> {
    let mut list = Vec::new();
    let scale = view.scale_factor();

    list.push(DrawPrimitive::Tile(TileQuad {
        position: -view.pan_offset,
        source: atlas.sheet_rect(),
        opacity: 1.0,
        scale,
    }));

    lattice(
        &mut list,
        atlas.columns(),
        atlas.rows(),
        view.zoom.tile_size(atlas.tile_size() as f32),
        view.pan_offset,
    );

    if let Some(bounds) = selector.drag_bounds(atlas.tile_size()) {
        let origin = Vec2::new(bounds.left as f32, bounds.top as f32);
        list.push(DrawPrimitive::Selection(OverlayRect {
            position: transform::to_screen(origin, view.pan_offset, scale),
            size: Vec2::new(bounds.width as f32, bounds.height as f32) * scale,
        }));
    }
    list
}

/// Append the grid lattice covering a width x height cell extent:
/// width + 1 vertical lines and height + 1 horizontal lines, spaced by the
/// effective tile size and shifted by the pan offset.
fn lattice(
    list: &mut Vec<DrawPrimitive>,
    width: u32,
    height: u32,
    tile_size: f32,
    pan_offset: Vec2,
) {
    let extent = Vec2::new(width as f32, height as f32) * tile_size;
    for i in 0..=width {
        let x = i as f32 * tile_size - pan_offset.x;
        list.push(DrawPrimitive::Line(GridLine {
            from: Vec2::new(x, -pan_offset.y),
            to: Vec2::new(x, extent.y - pan_offset.y),
        }));
    }
    for i in 0..=height {
        let y = i as f32 * tile_size - pan_offset.y;
        list.push(DrawPrimitive::Line(GridLine {
            from: Vec2::new(-pan_offset.x, y),
            to: Vec2::new(extent.x - pan_offset.x, y),
        }));
    }
}
