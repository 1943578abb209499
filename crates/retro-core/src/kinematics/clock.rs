// crates/retro-core/src/kinematics/clock.rs

/// Uniform sampling of `[0, duration)` at `frame_rate` frames per simulated year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    duration: f64,
    frame_rate: f64,
    frame_count: u64,
    time_step: f64,
}

impl SimulationClock {
    /// `frame_count = round(duration * frame_rate)`, `time_step = duration / frame_count`.
    ///
    /// Callers are expected to have validated the inputs (`validate::validate_clock`);
    /// a zero frame count leaves `time_step` at 0.
    pub fn new(duration: f64, frame_rate: f64) -> Self {
        let frame_count = frame_count_for(duration, frame_rate);
        let time_step = if frame_count == 0 {
            0.0
        } else {
            duration / frame_count as f64
        };
        Self {
            duration,
            frame_rate,
            frame_count,
            time_step,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Simulated time of frame `index`. Does not range-check.
    pub fn time_at(&self, index: u64) -> f64 {
        index as f64 * self.time_step
    }

    pub fn contains(&self, index: u64) -> bool {
        index < self.frame_count
    }
}

pub(crate) fn frame_count_for(duration: f64, frame_rate: f64) -> u64 {
    let n = (duration * frame_rate).round();
    if n.is_finite() && n > 0.0 {
        n as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_frame_count() {
        assert_eq!(SimulationClock::new(30.0, 30.0).frame_count(), 900);
        assert_eq!(SimulationClock::new(1.0, 2.6).frame_count(), 3);
        assert_eq!(SimulationClock::new(1.0, 2.4).frame_count(), 2);
        assert_eq!(SimulationClock::new(0.01, 1.0).frame_count(), 0);
    }

    #[test]
    fn step_spans_duration() {
        let c = SimulationClock::new(1.0, 3.0);
        assert!((c.time_step() * c.frame_count() as f64 - 1.0).abs() < 1e-12);
    }
}
