//! Discrete zoom ladder shared by the atlas and map viewports

/// Scale multipliers selectable by zooming, relative to the first rung
pub const ZOOM_LADDER: [u32; 3] = [1, 4, 8];

/// A clamped index into the zoom ladder
///
/// Each viewport owns its own controller; zooming the atlas never moves
/// the map's rung and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomController {
    index: usize,
}

impl ZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one rung in. Returns false when already at the top rung, in
    /// which case the scale is unchanged.
    pub fn zoom_in(&mut self) -> bool {
        if self.index + 1 >= ZOOM_LADDER.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Step one rung out. Returns false when already at the bottom rung.
    pub fn zoom_out(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Scale relative to the ladder's base rung
    pub fn scale_factor(&self) -> f32 {
        ZOOM_LADDER[self.index] as f32 / ZOOM_LADDER[0] as f32
    }

    /// Effective tile edge in pixels at the current rung
    pub fn tile_size(&self, base_tile_size: f32) -> f32 {
        base_tile_size * self.scale_factor()
    }
}
