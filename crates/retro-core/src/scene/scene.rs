// crates/retro-core/src/scene/scene.rs

use crate::kinematics::{body::OrbitingBody, clock::SimulationClock};
use crate::render::ViewConfig;

/// Everything one sampler run is configured with.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub version: u16,
    /// Body the observer stands on (Earth by default).
    pub reference: OrbitingBody,
    /// Body whose apparent path is traced (Mars by default).
    pub observed: OrbitingBody,
    /// Simulated years.
    pub duration: f64,
    /// Frames per simulated year.
    pub frame_rate: f64,
    pub view: ViewConfig,
}

impl Scene {
    pub fn clock(&self) -> SimulationClock {
        SimulationClock::new(self.duration, self.frame_rate)
    }

    /// Title naming both bodies, as used by the built-in scene.
    pub fn default_title(&self) -> String {
        format!(
            "Apparent retrograde motion of {} seen from {}",
            self.observed.name(),
            self.reference.name()
        )
    }

    /// Replace the observed body and retitle the view after it.
    pub fn with_observed(mut self, observed: OrbitingBody) -> Self {
        self.observed = observed;
        self.view.title = self.default_title();
        self
    }

    /// Replace the reference body and retitle the view after it.
    pub fn with_reference(mut self, reference: OrbitingBody) -> Self {
        self.reference = reference;
        self.view.title = self.default_title();
        self
    }
}

impl Default for Scene {
    fn default() -> Self {
        crate::scene::defaults::default_scene()
    }
}
