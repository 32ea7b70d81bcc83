//! Per-viewport view state: pan offset, pan session, and zoom

use crate::ZoomController;
use glam::Vec2;

/// Which logical viewport a pointer event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportId {
    Atlas,
    Map,
}

/// View state a single viewport owns: the accumulated pan offset, the
/// live pan anchor (present only mid-drag), and the viewport's own zoom.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub pan_offset: Vec2,
    pan_anchor: Option<Vec2>,
    pub zoom: ZoomController,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor a pan session at the cursor
    pub fn begin_pan(&mut self, point: Vec2) {
        self.pan_anchor = Some(point);
    }

    /// Drag the view: the offset grows opposite to the cursor's motion,
    /// so content follows the cursor. Ignored when no session is live.
    pub fn update_pan(&mut self, point: Vec2) {
        let Some(anchor) = self.pan_anchor else {
            return;
        };
        self.pan_offset += anchor - point;
        self.pan_anchor = Some(point);
    }

    /// Close the pan session, keeping the accumulated offset
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Scale factor from this viewport's zoom rung
    pub fn scale_factor(&self) -> f32 {
        self.zoom.scale_factor()
    }
}
