//! Core data structures for the tileforge map editor
//!
//! This crate provides the fundamental types for representing layered
//! tile maps:
//! - `LayerStack` - The ordered layer collection with placement and scaling
//! - `Layer` - A single fixed-size grid of optional placed tiles
//! - `PlacedTile` - One occupied cell: atlas index, source rect, position
//! - `StampCell` - One cell of a finalized atlas selection
//! - `MapDocument` - The persisted save format and its validation
//! - `MapError` - Errors from stack operations and document loading

mod document;
mod error;
mod layer;
mod stack;

pub use document::{LayerRecord, MapDocument};
pub use error::MapError;
pub use layer::{AtlasRect, Layer, PlacedTile, Position};
pub use stack::{LayerStack, StampCell, DEFAULT_BASE_TILE_SIZE};
