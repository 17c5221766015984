//! Capture-camera framing arithmetic.

use bevy::prelude::*;

use crate::config::{UNIT_X, UNIT_Y};
use crate::layouts::LayoutDescriptor;

/// Where the capture camera sits and how much world it sees. Computed by
/// the generation stage, applied by the rendering crate.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct CaptureFraming {
    pub center: Vec2,
    /// Full orthographic viewport height, in world units.
    pub viewport_height: f32,
}

/// Frame the whole element grid: center offset by the layout dimensions,
/// vertical extent proportional to layout height. Pure arithmetic.
pub fn compute_framing(layout: &LayoutDescriptor) -> CaptureFraming {
    CaptureFraming {
        center: Vec2::new(
            layout.width as f32 * 0.5 * UNIT_X - UNIT_X,
            layout.height as f32 * 0.5 * UNIT_Y - UNIT_Y,
        ),
        viewport_height: UNIT_Y * layout.height as f32,
    }
}

/// World-space bounds of the element grid, as written into the text
/// artifact: one unit of margin below the first cell, top-right corner at
/// the last cell's center.
pub fn world_bounds(layout: &LayoutDescriptor) -> (Vec2, Vec2) {
    (
        Vec2::new(-UNIT_X, -UNIT_Y),
        Vec2::new(
            UNIT_X * (layout.width - 1) as f32,
            UNIT_Y * (layout.height - 1) as f32,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_for_a_16x16_layout() {
        let layout = LayoutDescriptor::new("Classic", 8, 16, 16);
        let framing = compute_framing(&layout);
        // 16 * 0.5 * 64 - 64 on both axes.
        assert_eq!(framing.center, Vec2::new(448.0, 448.0));
        assert_eq!(framing.viewport_height, 1024.0);
    }

    #[test]
    fn framing_scales_with_layout_height_only() {
        let short = compute_framing(&LayoutDescriptor::new("A", 4, 20, 10));
        let tall = compute_framing(&LayoutDescriptor::new("B", 4, 20, 20));
        assert_eq!(short.viewport_height, 640.0);
        assert_eq!(tall.viewport_height, 1280.0);
    }

    #[test]
    fn bounds_span_the_grid_with_one_unit_margin() {
        let layout = LayoutDescriptor::new("Classic", 8, 16, 12);
        let (min, max) = world_bounds(&layout);
        assert_eq!(min, Vec2::new(-64.0, -64.0));
        assert_eq!(max, Vec2::new(960.0, 704.0));
    }
}
