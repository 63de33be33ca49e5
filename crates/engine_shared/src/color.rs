// crates/engine_shared/src/color.rs
use glam::Vec4;

/// 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 120, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const BROWN: Rgb = Rgb::new(139, 69, 19);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const LIGHT_BLUE: Rgb = Rgb::new(173, 216, 230);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);
    pub const SKIN: Rgb = Rgb::new(255, 220, 177);
    pub const DARK_GREEN: Rgb = Rgb::new(0, 100, 0);
    pub const DARK_RED: Rgb = Rgb::new(139, 0, 0);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 139);
    pub const GOLD: Rgb = Rgb::new(255, 215, 0);
    pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Every channel lowered by `amount`, saturating at black.
    pub const fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Linear-space RGBA for an sRGB render target.
    pub fn to_linear(self, alpha: f32) -> Vec4 {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Vec4::new(channel(self.r), channel(self.g), channel(self.b), alpha)
    }
}

/// Two-colour scheme carried by every drawable: fill + accent
/// (platform fill/border, ground soil/grass, enemy body, flag cloth...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl Palette {
    pub const fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self { primary, secondary }
    }

    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_saturates() {
        assert_eq!(Rgb::new(20, 100, 255).darken(30), Rgb::new(0, 70, 225));
    }

    #[test]
    fn linear_conversion_keeps_extremes() {
        let white = Rgb::WHITE.to_linear(1.0);
        let black = Rgb::BLACK.to_linear(0.5);
        assert!((white.x - 1.0).abs() < 1e-6);
        assert_eq!(black.x, 0.0);
        assert_eq!(black.w, 0.5);
        // Mid grey is darker in linear space.
        assert!(Rgb::GRAY.to_linear(1.0).x < 0.5);
    }
}
