//! The tile atlas catalog: bitmap measurements and cell addressing
//!
//! Only the sheet's dimensions live here. Pixel data stays with whatever
//! renderer consumes the draw lists.

use crate::EditorError;
use std::path::Path;
use tileforge_core::AtlasRect;

/// A measured atlas bitmap sliced into a grid of base-size tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAtlas {
    width: u32,
    height: u32,
    tile_size: u32,
    columns: u32,
    rows: u32,
}

impl TileAtlas {
    /// Measure the atlas bitmap on disk. Fails when the file is missing or
    /// not a decodable image; editor startup treats that as fatal.
    pub fn load(path: impl AsRef<Path>, tile_size: u32) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)
            .map_err(|e| EditorError::AssetLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_dimensions(width, height, tile_size).map_err(|_| {
            EditorError::AssetLoad(format!(
                "{}: {}x{} does not hold a single {}px tile",
                path.display(),
                width,
                height,
                tile_size
            ))
        })
    }

    /// Catalog an already-measured sheet, for callers that loaded the
    /// bitmap themselves.
    pub fn from_dimensions(width: u32, height: u32, tile_size: u32) -> Result<Self, EditorError> {
        if tile_size == 0 || width < tile_size || height < tile_size {
            return Err(EditorError::AssetLoad(format!(
                "{}x{} does not hold a single {}px tile",
                width, height, tile_size
            )));
        }
        Ok(Self {
            width,
            height,
            tile_size,
            columns: width / tile_size,
            rows: height / tile_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge of one catalog cell in pixels, before any zoom
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Sheet width in tiles. Cell indices linearize against this.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Sheet height in tiles
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Catalog index of the cell at (col, row)
    pub fn cell_index(&self, col: u32, row: u32) -> i32 {
        (row * self.columns + col) as i32
    }

    /// Pixel rectangle of the cell at (col, row), if it is inside the
    /// catalog.
    pub fn cell_rect(&self, col: u32, row: u32) -> Option<AtlasRect> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        let size = self.tile_size as i32;
        Some(AtlasRect::new(
            col as i32 * size,
            row as i32 * size,
            size,
            size,
        ))
    }

    /// The whole sheet as one rectangle, for drawing the atlas quad
    pub fn sheet_rect(&self) -> AtlasRect {
        AtlasRect::new(0, 0, self.width as i32, self.height as i32)
    }
}
