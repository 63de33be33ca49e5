// crates/engine_physics/src/motion.rs

use engine_shared::Rect;

/// Horizontal back-and-forth walk between two x bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patrol {
    pub left_bound: i32,
    pub right_bound: i32,
    /// +1 walking right, -1 walking left.
    pub direction: i32,
    pub speed: i32,
}

impl Patrol {
    pub fn new(left_bound: i32, right_bound: i32, speed: i32) -> Self {
        Self { left_bound, right_bound, direction: 1, speed: speed.max(1) }
    }

    /// `base × factor`, truncated, never slower than 1 unit per tick.
    pub fn scaled_speed(base: i32, factor: f32) -> i32 {
        ((base as f32 * factor) as i32).max(1)
    }

    /// Advance one tick and keep the walker standing on `anchor_top`.
    ///
    /// Touching a bound turns the walker around on the same tick; any overshoot
    /// is pushed back so the rect never leaves `[left_bound, right_bound]`.
    pub fn step(&mut self, rect: &mut Rect, anchor_top: i32) {
        rect.x += self.speed * self.direction;

        if rect.right() >= self.right_bound {
            rect.set_right(self.right_bound);
            self.direction = -1;
        } else if rect.left() <= self.left_bound {
            rect.set_left(self.left_bound);
            self.direction = 1;
        }

        rect.set_bottom(anchor_top);
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.left() >= self.left_bound && rect.right() <= self.right_bound
    }
}

/// Vertical bob shared by every collectible: `round(sin(t·rate)·amplitude)`.
/// Driven by global time so all coins move in phase.
pub fn bob_offset(elapsed_ms: u64, rate: f64, amplitude: f64) -> i32 {
    ((elapsed_ms as f64 * rate).sin() * amplitude).round() as i32
}
