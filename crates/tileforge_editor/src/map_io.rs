//! Map document file I/O
//!
//! Loading never installs partial state: the file is read, parsed, and
//! validated in full before a stack is built from it.

use crate::EditorError;
use std::path::Path;
use tileforge_core::{LayerStack, MapDocument};

/// Serialize the stack's document and write it out as pretty JSON
pub fn save_map(stack: &LayerStack, path: impl AsRef<Path>) -> Result<(), EditorError> {
    let document = MapDocument::from_stack(stack);
    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| EditorError::Serialize(e.to_string()))?;
    std::fs::write(path.as_ref(), content).map_err(|e| EditorError::FileIo(e.to_string()))?;
    Ok(())
}

/// Read, parse, and validate a map document, then build a fresh stack
/// from it. On failure the caller's current stack is untouched because no
/// stack is ever returned.
pub fn load_map(path: impl AsRef<Path>, base_tile_size: f32) -> Result<LayerStack, EditorError> {
    let content =
        std::fs::read_to_string(path.as_ref()).map_err(|e| EditorError::FileIo(e.to_string()))?;
    let document: MapDocument =
        serde_json::from_str(&content).map_err(|e| EditorError::Malformed(e.to_string()))?;
    Ok(document.into_stack(base_tile_size)?)
}
