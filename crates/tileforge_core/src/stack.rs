//! The ordered layer collection and its placement and scale operations

use crate::{AtlasRect, Layer, MapError, PlacedTile};

/// Reference tile edge length in pixels at scale factor 1.0
pub const DEFAULT_BASE_TILE_SIZE: u32 = 16;

/// One cell of a finalized selection stamp: where it sits relative to the
/// stamp's top-left (in cell units) and which atlas region it stamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StampCell {
    pub dx: u32,
    pub dy: u32,
    pub index: i32,
    pub rect: AtlasRect,
}

/// An ordered stack of layers plus the shared tile metrics and the active
/// layer selection. Placement targets the active layer; rescaling touches
/// every layer.
#[derive(Debug, Clone)]
pub struct LayerStack {
    pub layers: Vec<Layer>,
    active: Option<usize>,
    base_tile_size: f32,
    tile_size: f32,
    scale_factor: f32,
}

impl LayerStack {
    /// Create an empty stack at scale factor 1.0
    pub fn new(base_tile_size: f32) -> Self {
        Self {
            layers: Vec::new(),
            active: None,
            base_tile_size,
            tile_size: base_tile_size,
            scale_factor: 1.0,
        }
    }

    pub fn base_tile_size(&self) -> f32 {
        self.base_tile_size
    }

    /// Current tile edge length in pixels (`base_tile_size * scale_factor`)
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Append an all-empty layer and make it the active one. Returns the
    /// new layer's index.
    pub fn add_layer(&mut self, width: u32, height: u32) -> Result<usize, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidLayerSize { width, height });
        }
        self.layers.push(Layer::new(width, height));
        let index = self.layers.len() - 1;
        self.active = Some(index);
        Ok(index)
    }

    /// Switch the active layer. Out-of-range indices leave the selection
    /// unchanged and report the error to the caller.
    pub fn set_active_layer(&mut self, index: usize) -> Result<(), MapError> {
        if index >= self.layers.len() {
            return Err(MapError::InvalidLayerIndex {
                index,
                layer_count: self.layers.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    /// Index of the active layer, `None` while the stack is empty
    pub fn active_layer_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.and_then(|index| self.layers.get(index))
    }

    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        self.active.and_then(|index| self.layers.get_mut(index))
    }

    /// Stamp a finalized selection onto the active layer. Each stamp cell
    /// lands at `origin + (dx, dy)`; targets outside the layer are dropped
    /// so partial stamps at grid edges clip cleanly. Returns how many tiles
    /// were written.
    pub fn place_tiles(&mut self, origin_x: i32, origin_y: i32, cells: &[StampCell]) -> usize {
        let tile_size = self.tile_size;
        let Some(layer) = self.active_layer_mut() else {
            return 0;
        };
        let mut placed = 0;
        for cell in cells {
            let target_x = origin_x + cell.dx as i32;
            let target_y = origin_y + cell.dy as i32;
            if target_x < 0 || target_y < 0 {
                continue;
            }
            let (x, y) = (target_x as u32, target_y as u32);
            if x >= layer.width || y >= layer.height {
                continue;
            }
            layer.set_tile(x, y, PlacedTile::new(cell.index, cell.rect, x, y, tile_size));
            placed += 1;
        }
        placed
    }

    /// Empty the cell under the given coordinates on the active layer.
    /// Out-of-bounds targets and empty stacks are ignored.
    pub fn remove_tile(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let Some(layer) = self.active_layer_mut() else {
            return;
        };
        layer.clear_tile(x as u32, y as u32);
    }

    /// Flip the stored visibility flag on one layer. Returns false for an
    /// out-of-range index.
    pub fn toggle_layer_visibility(&mut self, index: usize) -> bool {
        if let Some(layer) = self.layers.get_mut(index) {
            layer.visible = !layer.visible;
            true
        } else {
            false
        }
    }

    /// Re-derive the shared tile pixel size and every placed tile's screen
    /// position from the new scale factor. One full pass over all layers;
    /// callers must not render between the start and end of this call.
    pub fn rescale(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
        self.tile_size = self.base_tile_size * scale_factor;
        let tile_size = self.tile_size;
        for layer in &mut self.layers {
            layer.rescale(tile_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn stamp_cell(dx: u32, dy: u32, index: i32) -> StampCell {
        StampCell {
            dx,
            dy,
            index,
            rect: AtlasRect::new(dx as i32 * 16, dy as i32 * 16, 16, 16),
        }
    }

    #[test]
    fn test_add_layer_activates_it() {
        let mut stack = LayerStack::new(16.0);
        assert_eq!(stack.active_layer_index(), None);

        let first = stack.add_layer(50, 50).unwrap();
        assert_eq!(first, 0);
        assert_eq!(stack.active_layer_index(), Some(0));

        let second = stack.add_layer(100, 100).unwrap();
        assert_eq!(second, 1);
        assert_eq!(stack.active_layer_index(), Some(1));
    }

    #[test]
    fn test_add_layer_rejects_zero_dimension() {
        let mut stack = LayerStack::new(16.0);
        let err = stack.add_layer(0, 50).unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidLayerSize {
                width: 0,
                height: 50
            }
        );
        assert!(stack.layers.is_empty());
        assert_eq!(stack.active_layer_index(), None);
    }

    #[test]
    fn test_set_active_layer() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();
        stack.add_layer(4, 4).unwrap();

        stack.set_active_layer(0).unwrap();
        assert_eq!(stack.active_layer_index(), Some(0));

        let err = stack.set_active_layer(2).unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidLayerIndex {
                index: 2,
                layer_count: 2
            }
        );
        // Selection is untouched by the failed switch
        assert_eq!(stack.active_layer_index(), Some(0));
    }

    #[test]
    fn test_place_tiles_writes_stamp() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(8, 8).unwrap();

        let cells = [stamp_cell(0, 0, 1), stamp_cell(1, 0, 2), stamp_cell(0, 1, 3)];
        let placed = stack.place_tiles(2, 3, &cells);
        assert_eq!(placed, 3);

        let layer = stack.active_layer().unwrap();
        assert_eq!(layer.get_tile(2, 3).unwrap().index, 1);
        assert_eq!(layer.get_tile(3, 3).unwrap().index, 2);
        assert_eq!(layer.get_tile(2, 4).unwrap().index, 3);
        assert_eq!(
            layer.get_tile(2, 3).unwrap().position,
            Position::new(32.0, 48.0)
        );
    }

    #[test]
    fn test_place_tiles_clips_at_right_edge() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(8, 8).unwrap();

        // 3x3 stamp with its origin one cell from the right edge: only the
        // two in-bounds columns land
        let mut cells = Vec::new();
        for dy in 0..3 {
            for dx in 0..3 {
                cells.push(stamp_cell(dx, dy, (dy * 3 + dx) as i32));
            }
        }
        let placed = stack.place_tiles(6, 0, &cells);
        assert_eq!(placed, 6);

        let layer = stack.active_layer().unwrap();
        for dy in 0..3 {
            assert!(layer.get_tile(6, dy).is_some());
            assert!(layer.get_tile(7, dy).is_some());
        }
    }

    #[test]
    fn test_place_tiles_clips_negative_origin() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(8, 8).unwrap();

        let cells = [stamp_cell(0, 0, 1), stamp_cell(1, 0, 2)];
        let placed = stack.place_tiles(-1, 0, &cells);
        assert_eq!(placed, 1);

        let layer = stack.active_layer().unwrap();
        assert_eq!(layer.get_tile(0, 0).unwrap().index, 2);
    }

    #[test]
    fn test_place_tiles_without_active_layer() {
        let mut stack = LayerStack::new(16.0);
        let placed = stack.place_tiles(0, 0, &[stamp_cell(0, 0, 1)]);
        assert_eq!(placed, 0);
    }

    #[test]
    fn test_remove_tile() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();
        stack.place_tiles(1, 1, &[stamp_cell(0, 0, 5)]);

        stack.remove_tile(1, 1);
        assert!(stack.active_layer().unwrap().get_tile(1, 1).is_none());

        // Nothing to do, but must not error
        stack.remove_tile(-3, 0);
        stack.remove_tile(99, 99);
    }

    #[test]
    fn test_rescale_updates_every_layer() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();
        stack.place_tiles(1, 0, &[stamp_cell(0, 0, 1)]);
        stack.add_layer(4, 4).unwrap();
        stack.place_tiles(2, 3, &[stamp_cell(0, 0, 2)]);

        stack.rescale(4.0);
        assert_eq!(stack.tile_size(), 64.0);
        assert_eq!(stack.scale_factor(), 4.0);

        // Both layers see the new positions, not just the active one
        assert_eq!(
            stack.layers[0].get_tile(1, 0).unwrap().position,
            Position::new(64.0, 0.0)
        );
        assert_eq!(
            stack.layers[1].get_tile(2, 3).unwrap().position,
            Position::new(128.0, 192.0)
        );
    }

    #[test]
    fn test_toggle_layer_visibility() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();

        assert!(stack.toggle_layer_visibility(0));
        assert!(!stack.layers[0].visible);
        assert!(stack.toggle_layer_visibility(0));
        assert!(stack.layers[0].visible);

        assert!(!stack.toggle_layer_visibility(5));
    }
}
