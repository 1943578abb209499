// crates/retro-core/src/kinematics/body.rs

use std::f64::consts::TAU;

use crate::kinematics::vec2::Vec2;

/// A body on a fixed circular orbit about the common center.
///
/// Angle is 0 at `t = 0`; motion is counter-clockwise at a constant
/// `angular_velocity = 2π / orbital_period`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingBody {
    name: String,
    orbital_radius: f64,
    orbital_period: f64,
    angular_velocity: f64,
}

impl OrbitingBody {
    /// `orbital_radius` in AU, `orbital_period` in years.
    ///
    /// Both must be strictly positive; see `validate::validate_body`.
    pub fn new(name: impl Into<String>, orbital_radius: f64, orbital_period: f64) -> Self {
        Self {
            name: name.into(),
            orbital_radius,
            orbital_period,
            angular_velocity: TAU / orbital_period,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orbital_radius(&self) -> f64 {
        self.orbital_radius
    }

    pub fn orbital_period(&self) -> f64 {
        self.orbital_period
    }

    /// Radians per year.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Orbital angle at `t` years (unwrapped).
    pub fn angle_at(&self, t: f64) -> f64 {
        self.angular_velocity * t
    }

    /// Heliocentric position at `t` years.
    pub fn position_at(&self, t: f64) -> Vec2 {
        Vec2::polar(self.orbital_radius, self.angle_at(t))
    }
}
