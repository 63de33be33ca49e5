// crates/engine_physics/src/contact.rs

use engine_shared::Rect;

use crate::kinematics::Body;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Fell onto the platform's top face.
    Landed,
    /// Rose into the platform's bottom face.
    HeadBump,
}

/// Vertical-only resolution against one solid platform.
///
/// Side overlaps are left alone: walking into a platform's flank is not blocked.
pub fn resolve_platform(rect: &mut Rect, body: &mut Body, platform: &Rect) -> Option<Contact> {
    if !rect.intersects(platform) {
        return None;
    }

    if body.velocity_y > 0.0 && rect.bottom() > platform.top() && rect.top() < platform.top() {
        rect.set_bottom(platform.top());
        body.land();
        Some(Contact::Landed)
    } else if body.velocity_y < 0.0
        && rect.top() < platform.bottom()
        && rect.bottom() > platform.bottom()
    {
        rect.set_top(platform.bottom());
        body.velocity_y = 0.0;
        Some(Contact::HeadBump)
    } else {
        None
    }
}

/// Resolve against every platform in turn, then mark the body airborne if
/// nothing supports it and it is above `floor_y`. Returns whether it landed.
pub fn resolve_platforms<'a>(
    rect: &mut Rect,
    body: &mut Body,
    platforms: impl IntoIterator<Item = &'a Rect>,
    floor_y: i32,
) -> bool {
    let mut on_ground = false;
    for platform in platforms {
        if resolve_platform(rect, body, platform) == Some(Contact::Landed) {
            on_ground = true;
        }
    }

    if !on_ground && rect.bottom() < floor_y {
        body.jumping = true;
    }
    on_ground
}
