// crates/retro-core/src/kinematics/vec2.rs

/// Plain 2D point / vector in AU.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along `angle` (radians, counter-clockwise from +x).
    pub fn polar(radius: f64, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: radius * c,
            y: radius * s,
        }
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// atan2(y, x), in (-π, π].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, o: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - o.x,
            y: self.y - o.y,
        }
    }
}
