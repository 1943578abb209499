// crates/retro-core/src/render.rs
//
// Narrow seam between the kinematic core and whatever draws it.
// The core only ever hands a renderer the current frame and the trace so far.

use crate::kinematics::vec2::Vec2;
use crate::sampler::frame::FrameState;

/// Static figure setup, consumed once before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl ViewConfig {
    /// Square view centered on the reference body.
    pub fn square(half_width: f64, title: impl Into<String>) -> Self {
        Self {
            x_range: (-half_width, half_width),
            y_range: (-half_width, half_width),
            x_label: "x (AU)".into(),
            y_label: "y (AU)".into(),
            title: title.into(),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_range.1 - self.x_range.0
    }

    pub fn height(&self) -> f64 {
        self.y_range.1 - self.y_range.0
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_range.0 && p.x <= self.x_range.1 && p.y >= self.y_range.0 && p.y <= self.y_range.1
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::square(3.0, "Apparent retrograde motion of Mars seen from Earth")
    }
}

/// Render back end driven by `Sampler::drive`.
///
/// Call order per run: `setup` once, `render_frame` once per frame in
/// increasing index order, `finish` once. `trace` always already contains
/// `frame.relative` as its last element.
pub trait FrameRenderer {
    type Error;

    fn setup(&mut self, view: &ViewConfig) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }

    fn render_frame(&mut self, frame: &FrameState, trace: &[Vec2]) -> Result<(), Self::Error>;

    /// Polled after every frame; `true` stops the run early.
    fn should_stop(&self) -> bool {
        false
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_bounds() {
        let v = ViewConfig::default();
        assert_eq!(v.width(), 6.0);
        assert_eq!(v.height(), 6.0);
        assert!(v.contains(Vec2::new(-3.0, 3.0)));
        assert!(v.contains(Vec2::ZERO));
        assert!(!v.contains(Vec2::new(3.1, 0.0)));
    }
}
