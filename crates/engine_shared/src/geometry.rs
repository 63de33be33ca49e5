// crates/engine_shared/src/geometry.rs

/// Integer axis-aligned box in screen space (y grows downwards).
///
/// Edge setters move the box, they never resize it. Collision is strict
/// overlap: two boxes that only share an edge do not collide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of size `w`×`h` whose centre lands on (`cx`, `cy`), rounding towards the top-left.
    pub const fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Self {
        Self::new(cx - w / 2, cy - h / 2, w, h)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn centerx(&self) -> i32 {
        self.x + self.w / 2
    }

    pub const fn centery(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_left(&mut self, v: i32) {
        self.x = v;
    }

    pub fn set_right(&mut self, v: i32) {
        self.x = v - self.w;
    }

    pub fn set_top(&mut self, v: i32) {
        self.y = v;
    }

    pub fn set_bottom(&mut self, v: i32) {
        self.y = v - self.h;
    }

    pub fn set_centerx(&mut self, v: i32) {
        self.x = v - self.w / 2;
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Inclusive on every edge (hit-testing UI regions).
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() as f32
            && px <= self.right() as f32
            && py >= self.top() as f32
            && py <= self.bottom() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_rounds_like_integer_division() {
        let r = Rect::from_center(100, 500, 35, 50);
        assert_eq!((r.x, r.y), (83, 475));
        assert_eq!(r.centerx(), 100);
        assert_eq!(r.bottom(), 525);
    }

    #[test]
    fn setters_move_without_resizing() {
        let mut r = Rect::new(0, 0, 40, 40);
        r.set_bottom(450);
        r.set_centerx(200);
        assert_eq!(r, Rect::new(180, 410, 40, 40));
        r.set_right(800);
        assert_eq!(r.left(), 760);
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let floor = Rect::new(0, 400, 100, 20);
        let standing = Rect::new(10, 350, 35, 50);
        assert!(!standing.intersects(&floor));

        let sunk = Rect::new(10, 351, 35, 50);
        assert!(sunk.intersects(&floor));
        assert!(floor.intersects(&sunk));
    }

    #[test]
    fn empty_rects_never_collide() {
        let a = Rect::new(0, 0, 0, 10);
        let b = Rect::new(-5, -5, 20, 20);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn point_test_is_inclusive() {
        let button = Rect::new(250, 280, 300, 60);
        assert!(button.contains_point(250.0, 280.0));
        assert!(button.contains_point(550.0, 340.0));
        assert!(!button.contains_point(550.5, 300.0));
    }
}
