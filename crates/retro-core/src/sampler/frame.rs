use crate::kinematics::vec2::Vec2;

/// One sampled instant. Recomputed per frame, never stored by the sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub index: u64,
    /// Simulated time in years.
    pub t: f64,
    /// Heliocentric position of the reference body.
    pub reference: Vec2,
    /// Heliocentric position of the observed body.
    pub observed: Vec2,
    /// `observed - reference`: what an observer on the reference body sees.
    pub relative: Vec2,
}
