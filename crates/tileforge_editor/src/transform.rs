//! Pointer-to-cell math shared by the atlas and map viewports
//!
//! These are pure functions: the pan offset and scale factor come in as
//! arguments, nothing is stored here.

use glam::{IVec2, Vec2};

/// Convert a viewport-local point into a grid cell coordinate, undoing the
/// viewport's pan and zoom.
///
/// No bounds are checked; callers clamp against their own grid. Points
/// left of or above the grid origin floor to negative cells.
pub fn to_cell(point: Vec2, pan_offset: Vec2, scale_factor: f32, base_tile_size: f32) -> IVec2 {
    let adjusted = (point + pan_offset) / scale_factor;
    IVec2::new(
        (adjusted.x / base_tile_size).floor() as i32,
        (adjusted.y / base_tile_size).floor() as i32,
    )
}

/// Project a point from unscaled grid space back into viewport space
pub fn to_screen(point: Vec2, pan_offset: Vec2, scale_factor: f32) -> Vec2 {
    point * scale_factor - pan_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_cell_maps_tile_interior_to_one_cell() {
        let pan = Vec2::ZERO;
        assert_eq!(to_cell(Vec2::new(0.0, 0.0), pan, 1.0, 16.0), IVec2::new(0, 0));
        assert_eq!(to_cell(Vec2::new(15.0, 15.0), pan, 1.0, 16.0), IVec2::new(0, 0));
        assert_eq!(to_cell(Vec2::new(16.0, 0.0), pan, 1.0, 16.0), IVec2::new(1, 0));
    }

    #[test]
    fn to_cell_undoes_pan_before_dividing() {
        let pan = Vec2::new(32.0, 16.0);
        assert_eq!(to_cell(Vec2::new(0.0, 0.0), pan, 1.0, 16.0), IVec2::new(2, 1));
    }

    #[test]
    fn to_cell_undoes_zoom_before_dividing() {
        // At 4x scale one tile spans 64 screen pixels.
        assert_eq!(
            to_cell(Vec2::new(63.0, 0.0), Vec2::ZERO, 4.0, 16.0),
            IVec2::new(0, 0)
        );
        assert_eq!(
            to_cell(Vec2::new(64.0, 0.0), Vec2::ZERO, 4.0, 16.0),
            IVec2::new(1, 0)
        );
    }

    #[test]
    fn to_cell_floors_negative_coordinates() {
        // A point just left of the origin belongs to cell -1, not cell 0.
        assert_eq!(
            to_cell(Vec2::new(-1.0, -1.0), Vec2::ZERO, 1.0, 16.0),
            IVec2::new(-1, -1)
        );
        assert_eq!(
            to_cell(Vec2::new(-16.0, -17.0), Vec2::ZERO, 1.0, 16.0),
            IVec2::new(-1, -2)
        );
    }

    #[test]
    fn to_screen_inverts_to_cell_at_cell_corners() {
        let pan = Vec2::new(10.0, -4.0);
        let scale = 4.0;
        let corner = Vec2::new(3.0 * 16.0, 2.0 * 16.0);
        let screen = to_screen(corner, pan, scale);
        assert_eq!(to_cell(screen, pan, scale, 16.0), IVec2::new(3, 2));
    }
}
