//! tileforge_editor - interactive tile-map authoring engine
//!
//! This crate owns editing behavior end to end while staying free of any
//! window, input, or GPU binding. A host shell translates raw input into
//! [`EditorCommand`]s, pumps the [`Editor`] once per frame, and renders
//! the [`DrawList`] it hands back:
//!
//! ```rust,ignore
//! use tileforge_editor::{Editor, EditorCommand, EditorConfig, LayerPreset};
//!
//! let mut editor = Editor::new(EditorConfig::load())?;
//! editor.submit(EditorCommand::AddLayer(LayerPreset::Grid100));
//!
//! loop {
//!     for command in shell.poll_input() {
//!         editor.submit(command);
//!     }
//!     editor.pump(shell.delta_seconds());
//!     shell.render(editor.draw_list());
//! }
//! ```
//!
//! The map data model itself lives in `tileforge_core`; this crate layers
//! the authoring workflow on top: atlas selection, stamp placement,
//! per-viewport pan and zoom, the merged preview, and map file I/O.

use std::fmt;

use tileforge_core::MapError;

pub mod atlas;
pub mod commands;
pub mod config;
pub mod draw;
pub mod editor;
pub mod map_io;
pub mod selection;
pub mod transform;
pub mod viewport;
pub mod zoom;

pub use atlas::TileAtlas;
pub use commands::{CommandQueue, Cooldown, EditorCommand, LayerPreset, ZoomDirection};
pub use config::{ConfigError, EditorConfig};
pub use draw::{DrawList, DrawPrimitive, GridLine, OverlayRect, TileQuad};
pub use editor::Editor;
pub use selection::{AtlasSelector, SelectionStamp};
pub use viewport::{Viewport, ViewportId};
pub use zoom::{ZoomController, ZOOM_LADDER};

/// Errors surfaced by editor operations
///
/// Only [`EditorError::AssetLoad`] at startup is fatal; everything else is
/// reported and leaves the editor running with its previous state.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The atlas bitmap is missing or unreadable
    AssetLoad(String),
    /// A map file could not be read or written
    FileIo(String),
    /// A map document failed parsing or structural validation
    Malformed(String),
    /// A map document could not be serialized
    Serialize(String),
    /// The data model rejected an operation
    Map(MapError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::AssetLoad(msg) => write!(f, "Failed to load asset: {}", msg),
            EditorError::FileIo(msg) => write!(f, "Map file IO failed: {}", msg),
            EditorError::Malformed(msg) => write!(f, "Malformed map document: {}", msg),
            EditorError::Serialize(msg) => write!(f, "Failed to serialize map: {}", msg),
            EditorError::Map(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<MapError> for EditorError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::MalformedDocument(msg) => EditorError::Malformed(msg),
            other => EditorError::Map(other),
        }
    }
}
