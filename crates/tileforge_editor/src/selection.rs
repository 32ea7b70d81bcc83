//! Drag selection over the atlas and the tile stamp it finalizes into

use glam::IVec2;
use tileforge_core::{AtlasRect, StampCell};

/// A finalized drag selection: its pixel bounds in atlas space and the
/// cells it covers, row-major from the top-left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStamp {
    pub bounds: AtlasRect,
    pub cells: Vec<StampCell>,
}

impl SelectionStamp {
    /// True until the first drag completes. An empty stamp places nothing.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Tracks an in-progress drag over the atlas and holds the last finalized
/// stamp.
///
/// Starting a new drag leaves the old stamp armed; placement keeps using
/// it until the new drag completes.
#[derive(Debug, Clone, Default)]
pub struct AtlasSelector {
    dragging: bool,
    start_cell: IVec2,
    end_cell: IVec2,
    stamp: SelectionStamp,
}

impl AtlasSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag anchored at `cell`, or extend the live drag to it
    pub fn begin_or_update(&mut self, cell: IVec2) {
        if !self.dragging {
            self.dragging = true;
            self.start_cell = cell;
        }
        self.end_cell = cell;
    }

    /// Finalize the live drag into the armed stamp. The release cell is
    /// folded in as a final update before the bounds are taken.
    ///
    /// `atlas_columns` is the atlas width in tiles, used to linearize each
    /// covered cell into its catalog index. A drag released on its anchor
    /// cell yields a one-cell stamp. Ignored when no drag is live.
    pub fn finish(&mut self, cell: IVec2, atlas_columns: u32, base_tile_size: u32) {
        if !self.dragging {
            return;
        }
        self.end_cell = cell;
        self.dragging = false;

        let base = base_tile_size as i32;
        let min = self.start_cell.min(self.end_cell);
        let max = self.start_cell.max(self.end_cell);

        let mut cells = Vec::with_capacity(((max.x - min.x + 1) * (max.y - min.y + 1)) as usize);
        for (dy, cy) in (min.y..=max.y).enumerate() {
            for (dx, cx) in (min.x..=max.x).enumerate() {
                cells.push(StampCell {
                    dx: dx as u32,
                    dy: dy as u32,
                    index: cy * atlas_columns as i32 + cx,
                    rect: AtlasRect::new(cx * base, cy * base, base, base),
                });
            }
        }
        self.stamp = SelectionStamp {
            bounds: cell_span(min, max, base),
            cells,
        };
    }

    /// The armed stamp from the last completed drag
    pub fn stamp(&self) -> &SelectionStamp {
        &self.stamp
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Normalized pixel bounds of the live drag, for the selection
    /// overlay. None once the drag finishes or before one starts.
    pub fn drag_bounds(&self, base_tile_size: u32) -> Option<AtlasRect> {
        if !self.dragging {
            return None;
        }
        let min = self.start_cell.min(self.end_cell);
        let max = self.start_cell.max(self.end_cell);
        Some(cell_span(min, max, base_tile_size as i32))
    }
}

/// Pixel rectangle covering the inclusive cell range `min..=max`
fn cell_span(min: IVec2, max: IVec2, base: i32) -> AtlasRect {
    AtlasRect::new(
        min.x * base,
        min.y * base,
        (max.x - min.x + 1) * base,
        (max.y - min.y + 1) * base,
    )
}
