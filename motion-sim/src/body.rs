//! Moving bodies.

/// What a body is; stars are never retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The central body placed at startup.
    Star,
    /// A body that enters from an edge and is retired once it leaves.
    Comet,
}

/// A circle moving at constant velocity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// Star or comet.
    pub kind: Kind,
    /// Center, x.
    pub cx: i32,
    /// Center, y.
    pub cy: i32,
    /// Pixels per tick, x.
    pub vx: i32,
    /// Pixels per tick, y.
    pub vy: i32,
    /// Radius.
    pub radius: i32,
}

impl Body {
    /// Moves the center by one tick of velocity. Coordinates wrap at the
    /// `i32` range.
    #[inline]
    pub fn step(&mut self) {
        self.cx = self.cx.wrapping_add(self.vx);
        self.cy = self.cy.wrapping_add(self.vy);
    }

    /// Returns `true` once no part of the body overlaps a `width` x `height`
    /// viewport anchored at the origin.
    pub fn is_off_screen(&self, width: i32, height: i32) -> bool {
        let (cx, cy, r) = (i64::from(self.cx), i64::from(self.cy), i64::from(self.radius));
        cx + r < 0 || cx - r > i64::from(width) || cy + r < 0 || cy - r > i64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comet(cx: i32, cy: i32, vx: i32, vy: i32) -> Body {
        Body {
            kind: Kind::Comet,
            cx,
            cy,
            vx,
            vy,
            radius: 10,
        }
    }

    #[test]
    fn step_applies_velocity() {
        let mut body = comet(5, 5, 3, -2);
        body.step();
        body.step();
        assert_eq!((body.cx, body.cy), (11, 1));
    }

    #[test]
    fn touching_an_edge_is_still_on_screen() {
        assert!(!comet(-10, 50, 0, 0).is_off_screen(100, 100));
        assert!(!comet(110, 50, 0, 0).is_off_screen(100, 100));
        assert!(!comet(50, -10, 0, 0).is_off_screen(100, 100));
        assert!(!comet(50, 110, 0, 0).is_off_screen(100, 100));
    }

    #[test]
    fn step_wraps_at_the_coordinate_limit() {
        let mut body = comet(i32::MAX - 1, i32::MIN + 1, 3, -3);
        body.step();
        assert_eq!((body.cx, body.cy), (i32::MIN + 1, i32::MAX - 1));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow_the_edge_test() {
        let mut body = comet(i32::MAX, 0, 0, 0);
        body.radius = i32::MAX;
        assert!(!body.is_off_screen(i32::MAX, i32::MAX));
        assert!(comet(i32::MAX, 50, 0, 0).is_off_screen(i32::MAX - 11, 100));
    }

    #[test]
    fn fully_outside_is_off_screen() {
        assert!(comet(-11, 50, 0, 0).is_off_screen(100, 100));
        assert!(comet(111, 50, 0, 0).is_off_screen(100, 100));
        assert!(comet(50, -11, 0, 0).is_off_screen(100, 100));
        assert!(comet(50, 111, 0, 0).is_off_screen(100, 100));
    }
}
