// crates/engine_core/src/renderer/art.rs
//! Expands each `VisualKind` into the handful of flat shapes it is drawn with.
//!
//! Offsets are in game units relative to the item's rect, so the art scales
//! with the window like everything else.

use engine_shared::{DrawItem, DrawList, Rgb, VisualKind};

use super::types::InstanceRaw;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect = 0,
    Ellipse = 1,
    /// Pointing right, base on the left edge.
    Triangle = 2,
    /// Five points, one straight up.
    Star = 3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub shape: Shape,
}

impl Primitive {
    pub fn raw(&self) -> InstanceRaw {
        InstanceRaw {
            rect: [self.x, self.y, self.w, self.h],
            color: self.color.to_linear(self.alpha).to_array(),
            shape: self.shape as u32,
        }
    }
}

const DIM_ALPHA: f32 = 150.0 / 255.0;
const VEIL_ALPHA: f32 = 0.5;
const EYE_WHITE: Rgb = Rgb::WHITE;
const PUPIL: Rgb = Rgb::BLACK;
const COIN_SHINE: Rgb = Rgb::new(255, 255, 200);

/// Draws relative to one item's top-left corner.
struct Painter<'a> {
    ox: f32,
    oy: f32,
    out: &'a mut Vec<Primitive>,
}

impl Painter<'_> {
    fn shape(&mut self, shape: Shape, dx: f32, dy: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        self.out.push(Primitive {
            x: self.ox + dx,
            y: self.oy + dy,
            w,
            h,
            color,
            alpha,
            shape,
        });
    }

    fn rect(&mut self, dx: f32, dy: f32, w: f32, h: f32, color: Rgb) {
        self.shape(Shape::Rect, dx, dy, w, h, color, 1.0);
    }

    fn ellipse(&mut self, dx: f32, dy: f32, w: f32, h: f32, color: Rgb) {
        self.shape(Shape::Ellipse, dx, dy, w, h, color, 1.0);
    }

    fn outline(&mut self, w: f32, h: f32, thickness: f32, color: Rgb) {
        self.rect(0.0, 0.0, w, thickness, color);
        self.rect(0.0, h - thickness, w, thickness, color);
        self.rect(0.0, thickness, thickness, h - 2.0 * thickness, color);
        self.rect(w - thickness, thickness, thickness, h - 2.0 * thickness, color);
    }
}

pub fn expand(item: &DrawItem, out: &mut Vec<Primitive>) {
    let r = item.rect;
    let (w, h) = (r.w as f32, r.h as f32);
    let (primary, secondary) = (item.palette.primary, item.palette.secondary);
    let mut p = Painter { ox: r.x as f32, oy: r.y as f32, out };

    match item.kind {
        VisualKind::Sky | VisualKind::ControlsBar => p.rect(0.0, 0.0, w, h, primary),
        VisualKind::Cloud => {
            p.ellipse(0.0, 20.0, 100.0, 40.0, primary);
            p.ellipse(30.0, 0.0, 80.0, 40.0, primary);
            p.ellipse(60.0, 30.0, 70.0, 30.0, primary);
        }
        VisualKind::Sun => p.ellipse(0.0, 0.0, w, h, primary),
        VisualKind::Moon => {
            // Crescent: the sky-coloured disc bites into the lit one.
            p.ellipse(0.0, 0.0, w, h, primary);
            p.ellipse(w * 0.25, -h * 0.15, w * 0.9, h * 0.9, secondary);
        }
        VisualKind::Star { lit } => {
            if lit {
                p.shape(Shape::Ellipse, -2.0, -2.0, w + 4.0, h + 4.0, secondary, 0.6);
            }
            p.ellipse(0.0, 0.0, w, h, primary);
        }
        VisualKind::Ground => {
            p.rect(0.0, 0.0, w, h, primary);
            p.rect(0.0, 0.0, w, 10.0_f32.min(h), secondary);
        }
        VisualKind::Platform => {
            p.rect(0.0, 0.0, w, h, primary);
            p.outline(w, h, 2.0, secondary);
            let grain = primary.darken(30);
            let mut i = 15.0;
            while i < w - 2.0 {
                p.rect(i, 2.0, 1.0, h - 4.0, grain);
                i += 15.0;
            }
        }
        VisualKind::Player { veiled } => {
            p.rect(5.0, 10.0, 25.0, 30.0, primary);
            p.ellipse(9.0, 0.0, 16.0, 16.0, secondary);
            p.ellipse(11.0, 4.0, 4.0, 4.0, PUPIL);
            p.ellipse(19.0, 4.0, 4.0, 4.0, PUPIL);
            p.rect(8.0, 40.0, 8.0, 10.0, Rgb::BROWN);
            p.rect(19.0, 40.0, 8.0, 10.0, Rgb::BROWN);
            if veiled {
                p.shape(Shape::Rect, 0.0, 0.0, w, h, Rgb::WHITE, VEIL_ALPHA);
            }
        }
        VisualKind::Coin => {
            p.ellipse(0.0, 0.0, w, h, primary);
            p.ellipse(w * 0.16, h * 0.16, w * 0.64, h * 0.64, secondary);
            p.ellipse(w * 0.2, h * 0.2, w * 0.32, h * 0.16, COIN_SHINE);
        }
        VisualKind::Enemy => {
            p.ellipse(2.0, 2.0, w - 4.0, h - 4.0, primary);
            p.ellipse(9.0, 9.0, 10.0, 10.0, EYE_WHITE);
            p.ellipse(21.0, 9.0, 10.0, 10.0, EYE_WHITE);
            p.ellipse(12.0, 12.0, 4.0, 4.0, PUPIL);
            p.ellipse(24.0, 12.0, 4.0, 4.0, PUPIL);
            p.rect(12.0, 26.0, 16.0, 2.0, PUPIL);
        }
        VisualKind::FinishFlag => {
            p.rect(12.0, 0.0, 6.0, h, primary);
            p.shape(Shape::Triangle, 18.0, 10.0, 10.0, 20.0, secondary, 1.0);
        }
        VisualKind::Dim => p.shape(Shape::Rect, 0.0, 0.0, w, h, primary, DIM_ALPHA),
        VisualKind::Button => {
            p.rect(0.0, 0.0, w, h, primary);
            p.outline(w, h, 2.0, Rgb::WHITE);
        }
        VisualKind::RatingStar => p.shape(Shape::Star, 0.0, 0.0, w, h, primary, 1.0),
    }
}

/// Flatten a whole draw list, back to front, into GPU instances.
pub fn build_instances(list: &DrawList, scratch: &mut Vec<Primitive>, out: &mut Vec<InstanceRaw>) {
    out.clear();
    for item in &list.items {
        scratch.clear();
        expand(item, scratch);
        out.extend(scratch.iter().map(Primitive::raw));
    }
}
