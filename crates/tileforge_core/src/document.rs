//! The persisted map document and its conversion to and from a live stack
//!
//! The wire shape is a tree of layer records, each carrying its dimensions,
//! flags, and a row-major grid of `null` or tile records. Loading validates
//! the whole document before any state is built, so a malformed file never
//! installs a partial stack.

use crate::{Layer, LayerStack, MapError, PlacedTile};
use serde::{Deserialize, Serialize};

/// Top-level persisted document: an ordered list of layer records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDocument {
    pub layers: Vec<LayerRecord>,
}

/// One layer as persisted. Rows are outer-indexed by `y`; every row must
/// hold exactly `width` cells and there must be exactly `height` rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRecord {
    pub width: u32,
    pub height: u32,
    pub is_visible: bool,
    pub opacity: f32,
    pub tiles: Vec<Vec<Option<PlacedTile>>>,
}

impl MapDocument {
    /// Snapshot a stack into its persisted form. The active-layer selection
    /// is deliberately not part of the format.
    pub fn from_stack(stack: &LayerStack) -> Self {
        let layers = stack.layers.iter().map(LayerRecord::from_layer).collect();
        Self { layers }
    }

    /// Check the structural invariants the format promises. Runs before any
    /// live state is built from the document.
    pub fn validate(&self) -> Result<(), MapError> {
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.tiles.len() != layer.height as usize {
                return Err(MapError::MalformedDocument(format!(
                    "layer {}: {} rows, expected {}",
                    i,
                    layer.tiles.len(),
                    layer.height
                )));
            }
            for (y, row) in layer.tiles.iter().enumerate() {
                if row.len() != layer.width as usize {
                    return Err(MapError::MalformedDocument(format!(
                        "layer {}: row {} holds {} cells, expected {}",
                        i,
                        y,
                        row.len(),
                        layer.width
                    )));
                }
            }
        }
        Ok(())
    }

    /// Rebuild a live stack from the document. The active layer resets to
    /// the first layer (or none when the document is empty) regardless of
    /// what was active at save time.
    pub fn into_stack(self, base_tile_size: f32) -> Result<LayerStack, MapError> {
        self.validate()?;
        let mut stack = LayerStack::new(base_tile_size);
        for record in self.layers {
            stack.layers.push(record.into_layer());
        }
        if !stack.layers.is_empty() {
            stack.set_active_layer(0)?;
        }
        Ok(stack)
    }
}

impl LayerRecord {
    fn from_layer(layer: &Layer) -> Self {
        let mut tiles = Vec::with_capacity(layer.height as usize);
        for y in 0..layer.height {
            let mut row = Vec::with_capacity(layer.width as usize);
            for x in 0..layer.width {
                row.push(layer.get_tile(x, y).copied());
            }
            tiles.push(row);
        }
        Self {
            width: layer.width,
            height: layer.height,
            is_visible: layer.visible,
            opacity: layer.opacity,
            tiles,
        }
    }

    // Dimensions are trusted here; `validate` has already checked them.
    fn into_layer(self) -> Layer {
        let mut layer = Layer::new(self.width, self.height);
        layer.visible = self.is_visible;
        layer.opacity = self.opacity;
        for (y, row) in self.tiles.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                if let Some(tile) = cell {
                    layer.set_tile(x as u32, y as u32, tile);
                }
            }
        }
        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtlasRect, Position, StampCell};

    fn sample_stack() -> LayerStack {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();
        stack.place_tiles(
            0,
            0,
            &[StampCell {
                dx: 0,
                dy: 0,
                index: 5,
                rect: AtlasRect::new(80, 0, 16, 16),
            }],
        );
        stack.place_tiles(
            3,
            3,
            &[StampCell {
                dx: 0,
                dy: 0,
                index: 9,
                rect: AtlasRect::new(16, 16, 16, 16),
            }],
        );
        stack
    }

    #[test]
    fn test_round_trip_preserves_tiles() {
        let stack = sample_stack();
        let json = serde_json::to_string_pretty(&MapDocument::from_stack(&stack)).unwrap();
        let doc: MapDocument = serde_json::from_str(&json).unwrap();
        let loaded = doc.into_stack(16.0).unwrap();

        assert_eq!(loaded.layers.len(), 1);
        let layer = &loaded.layers[0];
        assert_eq!((layer.width, layer.height), (4, 4));
        assert!(layer.visible);
        assert_eq!(layer.opacity, 1.0);

        let first = layer.get_tile(0, 0).unwrap();
        assert_eq!(first.index, 5);
        assert_eq!(first.texture_rect, AtlasRect::new(80, 0, 16, 16));
        assert_eq!(first.position, Position::new(0.0, 0.0));

        let second = layer.get_tile(3, 3).unwrap();
        assert_eq!(second.index, 9);
        assert_eq!(second.texture_rect, AtlasRect::new(16, 16, 16, 16));
        assert_eq!(second.position, Position::new(48.0, 48.0));

        // Every other cell stayed empty
        let occupied = layer.iter_placed().count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn test_load_resets_active_layer() {
        let mut stack = LayerStack::new(16.0);
        stack.add_layer(4, 4).unwrap();
        stack.add_layer(4, 4).unwrap();
        stack.add_layer(4, 4).unwrap();
        stack.set_active_layer(2).unwrap();

        let doc = MapDocument::from_stack(&stack);
        let loaded = doc.into_stack(16.0).unwrap();
        assert_eq!(loaded.active_layer_index(), Some(0));
    }

    #[test]
    fn test_empty_document_has_no_active_layer() {
        let loaded = MapDocument::default().into_stack(16.0).unwrap();
        assert!(loaded.layers.is_empty());
        assert_eq!(loaded.active_layer_index(), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&MapDocument::from_stack(&sample_stack())).unwrap();
        assert!(json.contains("\"isVisible\""));
        assert!(json.contains("\"textureRect\""));
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"left\""));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let json = r#"{ "layers": [ {
            "width": 2, "height": 2, "isVisible": true, "opacity": 1.0,
            "tiles": [ [null, null], [null] ]
        } ] }"#;
        let doc: MapDocument = serde_json::from_str(json).unwrap();
        let err = doc.into_stack(16.0).unwrap_err();
        assert!(matches!(err, MapError::MalformedDocument(_)));
    }

    #[test]
    fn test_row_count_mismatch_is_rejected() {
        let json = r#"{ "layers": [ {
            "width": 1, "height": 3, "isVisible": true, "opacity": 1.0,
            "tiles": [ [null], [null] ]
        } ] }"#;
        let doc: MapDocument = serde_json::from_str(json).unwrap();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_missing_keys_fail_to_parse() {
        let json = r#"{ "layers": [ { "width": 2, "height": 2, "tiles": [] } ] }"#;
        assert!(serde_json::from_str::<MapDocument>(json).is_err());
    }

    #[test]
    fn test_zero_dimension_layer_loads_when_consistent() {
        // Unusable but structurally sound; only the authoring path rejects
        // zero sizes
        let json = r#"{ "layers": [ {
            "width": 0, "height": 0, "isVisible": true, "opacity": 1.0,
            "tiles": []
        } ] }"#;
        let doc: MapDocument = serde_json::from_str(json).unwrap();
        let loaded = doc.into_stack(16.0).unwrap();
        assert_eq!(loaded.layers.len(), 1);
        assert_eq!(loaded.active_layer_index(), Some(0));
    }
}
