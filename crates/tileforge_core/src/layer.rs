//! Layers of placed tiles and the atlas-space types they reference

use serde::{Deserialize, Serialize};

/// One grid-aligned sub-rectangle of the atlas bitmap, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AtlasRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl AtlasRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Screen-space position of a placed tile, derived from its cell and the
/// current tile pixel size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A tile occupying one layer slot: which atlas region it shows and where it
/// sits on screen at the current tile size. Doubles as the wire record the
/// map document stores for a non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    pub index: i32,
    pub texture_rect: AtlasRect,
    pub position: Position,
}

impl PlacedTile {
    /// Create a tile at cell `(x, y)` with its position derived from the
    /// current tile pixel size
    pub fn new(index: i32, texture_rect: AtlasRect, x: u32, y: u32, tile_size: f32) -> Self {
        Self {
            index,
            texture_rect,
            position: Position::new(x as f32 * tile_size, y as f32 * tile_size),
        }
    }
}

/// A fixed-size rectangular grid of optional tile slots, stored row-major.
/// The slot vector always holds exactly `width * height` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub width: u32,
    pub height: u32,
    pub visible: bool,
    pub opacity: f32,
    tiles: Vec<Option<PlacedTile>>,
}

impl Layer {
    /// Create an all-empty layer, visible and fully opaque
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            visible: true,
            opacity: 1.0,
            tiles: vec![None; size],
        }
    }

    /// Get the tile at a cell, if any
    pub fn get_tile(&self, x: u32, y: u32) -> Option<&PlacedTile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y * self.width + x) as usize;
        self.tiles.get(index).and_then(|slot| slot.as_ref())
    }

    /// Write a tile into a cell, overwriting whatever was there.
    /// Out-of-bounds targets are dropped.
    pub fn set_tile(&mut self, x: u32, y: u32, tile: PlacedTile) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y * self.width + x) as usize;
        if index < self.tiles.len() {
            self.tiles[index] = Some(tile);
        }
    }

    /// Empty a single cell. Out-of-bounds targets are ignored.
    pub fn clear_tile(&mut self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y * self.width + x) as usize;
        if index < self.tiles.len() {
            self.tiles[index] = None;
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for slot in &mut self.tiles {
            *slot = None;
        }
    }

    /// Re-derive every placed tile's screen position for a new tile size
    pub fn rescale(&mut self, tile_size: f32) {
        let width = self.width;
        for (i, slot) in self.tiles.iter_mut().enumerate() {
            if let Some(tile) = slot {
                let x = i as u32 % width;
                let y = i as u32 / width;
                tile.position = Position::new(x as f32 * tile_size, y as f32 * tile_size);
            }
        }
    }

    /// The raw row-major slot storage
    pub fn tiles(&self) -> &[Option<PlacedTile>] {
        &self.tiles
    }

    /// Iterate occupied cells as `(x, y, tile)`
    pub fn iter_placed(&self) -> impl Iterator<Item = (u32, u32, &PlacedTile)> {
        let width = self.width;
        self.tiles.iter().enumerate().filter_map(move |(i, slot)| {
            slot.as_ref()
                .map(|tile| (i as u32 % width, i as u32 / width, tile))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer() {
        let layer = Layer::new(10, 8);

        assert_eq!(layer.width, 10);
        assert_eq!(layer.height, 8);
        assert!(layer.visible);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.tiles().len(), 80);
        assert!(layer.tiles().iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_tile_operations() {
        let mut layer = Layer::new(10, 10);
        let tile = PlacedTile::new(7, AtlasRect::new(16, 0, 16, 16), 5, 5, 16.0);

        // Initially empty
        assert!(layer.get_tile(5, 5).is_none());

        layer.set_tile(5, 5, tile);
        let placed = layer.get_tile(5, 5).unwrap();
        assert_eq!(placed.index, 7);
        assert_eq!(placed.position, Position::new(80.0, 80.0));

        layer.clear_tile(5, 5);
        assert!(layer.get_tile(5, 5).is_none());
    }

    #[test]
    fn test_out_of_bounds_access_is_ignored() {
        let mut layer = Layer::new(4, 4);
        let tile = PlacedTile::new(0, AtlasRect::new(0, 0, 16, 16), 0, 0, 16.0);

        layer.set_tile(4, 0, tile);
        layer.set_tile(0, 4, tile);
        layer.clear_tile(99, 99);

        assert!(layer.tiles().iter().all(|slot| slot.is_none()));
        assert!(layer.get_tile(4, 0).is_none());
    }

    #[test]
    fn test_clear() {
        let mut layer = Layer::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                layer.set_tile(x, y, PlacedTile::new(1, AtlasRect::new(0, 0, 16, 16), x, y, 16.0));
            }
        }

        layer.clear();
        assert!(layer.tiles().iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_rescale_repositions_tiles() {
        let mut layer = Layer::new(4, 4);
        layer.set_tile(3, 2, PlacedTile::new(1, AtlasRect::new(0, 0, 16, 16), 3, 2, 16.0));

        layer.rescale(64.0);
        let tile = layer.get_tile(3, 2).unwrap();
        assert_eq!(tile.position, Position::new(192.0, 128.0));
    }

    #[test]
    fn test_iter_placed_yields_coordinates() {
        let mut layer = Layer::new(3, 2);
        layer.set_tile(2, 1, PlacedTile::new(9, AtlasRect::new(0, 0, 16, 16), 2, 1, 16.0));
        layer.set_tile(0, 0, PlacedTile::new(5, AtlasRect::new(0, 0, 16, 16), 0, 0, 16.0));

        let placed: Vec<(u32, u32, i32)> = layer
            .iter_placed()
            .map(|(x, y, tile)| (x, y, tile.index))
            .collect();
        assert_eq!(placed, vec![(0, 0, 5), (2, 1, 9)]);
    }
}
