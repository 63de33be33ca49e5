// crates/engine_physics/src/kinematics.rs

use engine_shared::Rect;

/// Vertical state of a gravity-driven body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub velocity_y: f32,
    /// Set while airborne; blocks a second jump.
    pub jumping: bool,
}

impl Body {
    /// Start a jump unless one is already in progress. Returns whether it fired.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.velocity_y = impulse;
        self.jumping = true;
        true
    }

    pub fn land(&mut self) {
        self.velocity_y = 0.0;
        self.jumping = false;
    }
}

/// Accelerate downwards, then move by the floored velocity.
pub fn apply_gravity(rect: &mut Rect, body: &mut Body, accel: f32) {
    body.velocity_y += accel;
    rect.y += body.velocity_y.floor() as i32;
}

/// Keep the body above `floor_y`. Returns true when it had to be pushed back up.
pub fn clamp_to_floor(rect: &mut Rect, body: &mut Body, floor_y: i32) -> bool {
    if rect.bottom() > floor_y {
        rect.set_bottom(floor_y);
        body.land();
        true
    } else {
        false
    }
}

/// Left edge first, then right edge. A rect wider than the span ends up
/// flush with the right edge and sticking out on the left.
pub fn clamp_horizontal(rect: &mut Rect, min_x: i32, max_x: i32) {
    rect.set_left(rect.left().max(min_x));
    rect.set_right(rect.right().min(max_x));
}
