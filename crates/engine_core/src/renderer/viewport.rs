// crates/engine_core/src/renderer/viewport.rs

use glam::Mat4;

/// Where the game field lands inside the window: uniformly scaled to fit,
/// centred, with letterbox bars on the long axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldViewport {
    /// Top-left corner in window pixels.
    pub x: f32,
    pub y: f32,
    /// Window pixels per game unit.
    pub scale: f32,
    field_w: f32,
    field_h: f32,
}

impl FieldViewport {
    pub fn fit(field: (u32, u32), surface: (u32, u32)) -> Self {
        let field_w = field.0.max(1) as f32;
        let field_h = field.1.max(1) as f32;
        let (sw, sh) = (surface.0 as f32, surface.1 as f32);
        let scale = (sw / field_w).min(sh / field_h);

        Self {
            x: ((sw - field_w * scale) / 2.0).max(0.0),
            y: ((sh - field_h * scale) / 2.0).max(0.0),
            scale,
            field_w,
            field_h,
        }
    }

    pub fn width(&self) -> f32 {
        self.field_w * self.scale
    }

    pub fn height(&self) -> f32 {
        self.field_h * self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.scale <= 0.0
    }

    pub fn to_screen(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.x + fx * self.scale, self.y + fy * self.scale)
    }

    /// Window pixels to game units; `None` on the letterbox bars.
    pub fn to_field(&self, sx: f64, sy: f64) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let fx = (sx as f32 - self.x) / self.scale;
        let fy = (sy as f32 - self.y) / self.scale;
        let inside = (0.0..=self.field_w).contains(&fx) && (0.0..=self.field_h).contains(&fy);
        inside.then_some((fx, fy))
    }

    /// Game units (origin top-left, y down) to clip space.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.field_w, self.field_h, 0.0, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn exact_fit_has_no_bars() {
        let vp = FieldViewport::fit((800, 600), (800, 600));
        assert_eq!((vp.x, vp.y, vp.scale), (0.0, 0.0, 1.0));
        assert_eq!(vp.to_field(400.0, 300.0), Some((400.0, 300.0)));
    }

    #[test]
    fn wide_window_gets_side_bars() {
        let vp = FieldViewport::fit((800, 600), (1600, 900));
        assert_eq!(vp.scale, 1.5);
        assert_eq!((vp.x, vp.y), (200.0, 0.0));
        assert_eq!(vp.width(), 1200.0);

        assert_eq!(vp.to_field(100.0, 450.0), None);
        assert_eq!(vp.to_field(800.0, 450.0), Some((400.0, 300.0)));
        assert_eq!(vp.to_screen(400.0, 300.0), (800.0, 450.0));
    }

    #[test]
    fn minimised_window_maps_nothing() {
        let vp = FieldViewport::fit((800, 600), (0, 0));
        assert!(vp.is_empty());
        assert_eq!(vp.to_field(0.0, 0.0), None);
    }

    #[test]
    fn projection_puts_origin_top_left() {
        let vp = FieldViewport::fit((800, 600), (800, 600));
        let top_left = vp.projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let bottom_right = vp.projection() * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert!((top_left.x + 1.0).abs() < 1e-5 && (top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_right.x - 1.0).abs() < 1e-5 && (bottom_right.y + 1.0).abs() < 1e-5);
    }
}
