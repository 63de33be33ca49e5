// crates/engine_shared/src/draw.rs
//! Per-frame draw list: what to show, never how.
//!
//! The game fills a `DrawList` in back-to-front order; the host expands each
//! `VisualKind` into GPU primitives and paints the text items on top.

use crate::color::{Palette, Rgb};
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    Sky,
    Cloud,
    Sun,
    Moon,
    /// Background star; `lit` adds the twinkle highlight.
    Star { lit: bool },
    Ground,
    Platform,
    /// `veiled` draws the invincibility flash over the sprite.
    Player { veiled: bool },
    Coin,
    Enemy,
    FinishFlag,
    /// Translucent full-screen layer behind overlay text.
    Dim,
    Button,
    ControlsBar,
    RatingStar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub rect: Rect,
    pub kind: VisualKind,
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn points(self) -> f32 {
        match self {
            TextSize::Small => 18.0,
            TextSize::Medium => 24.0,
            TextSize::Large => 36.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    pub anchor: TextAnchor,
    pub size: TextSize,
    pub color: Rgb,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub clear: Rgb,
    pub items: Vec<DrawItem>,
    pub texts: Vec<TextItem>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the list but keep its allocations for the next frame.
    pub fn reset(&mut self, clear: Rgb) {
        self.clear = clear;
        self.items.clear();
        self.texts.clear();
    }

    pub fn push(&mut self, rect: Rect, kind: VisualKind, palette: Palette) {
        self.items.push(DrawItem { rect, kind, palette });
    }

    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        anchor: TextAnchor,
        size: TextSize,
        color: Rgb,
        text: impl Into<String>,
    ) {
        self.texts.push(TextItem { x, y, anchor, size, color, text: text.into() });
    }

    pub fn count(&self, pred: impl Fn(&VisualKind) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.kind)).count()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }
}
