// crates/retro-core/src/sampler/engine.rs

use std::iter::FusedIterator;

use crate::error::Result;
use crate::kinematics::{body::OrbitingBody, clock::SimulationClock};
use crate::render::{FrameRenderer, ViewConfig};
use crate::sampler::{frame::FrameState, trajectory::Trajectory};
use crate::scene::scene::Scene;
use crate::validate::validate_scene;

/// Frame-by-frame sampler of the observed body's apparent path.
///
/// Each call to `next()` computes one frame in closed form, appends its
/// relative position to the owned `Trajectory` and yields the frame. After
/// `frame_count` frames the sequence is exhausted for good; only `restart()`
/// starts a new run.
pub struct Sampler {
    reference: OrbitingBody,
    observed: OrbitingBody,
    clock: SimulationClock,
    view: ViewConfig,
    next_index: u64,
    trajectory: Trajectory,
}

impl Sampler {
    pub fn new(scene: Scene) -> Result<Self> {
        validate_scene(&scene)?;

        let clock = scene.clock();
        tracing::debug!(
            reference = scene.reference.name(),
            observed = scene.observed.name(),
            frames = clock.frame_count(),
            time_step = clock.time_step(),
            "sampler ready"
        );

        Ok(Self {
            reference: scene.reference,
            observed: scene.observed,
            clock,
            view: scene.view,
            next_index: 0,
            trajectory: Trajectory::default(),
        })
    }

    pub fn reference(&self) -> &OrbitingBody {
        &self.reference
    }

    pub fn observed(&self) -> &OrbitingBody {
        &self.observed
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Frames emitted so far in this run.
    pub fn frames_emitted(&self) -> u64 {
        self.next_index
    }

    pub fn is_finished(&self) -> bool {
        !self.clock.contains(self.next_index)
    }

    /// Closed-form state of frame `index`; `None` outside `[0, frame_count)`.
    ///
    /// Pure: does not touch the trajectory or the iteration position.
    pub fn frame_state(&self, index: u64) -> Option<FrameState> {
        if !self.clock.contains(index) {
            return None;
        }
        let t = self.clock.time_at(index);
        let reference = self.reference.position_at(t);
        let observed = self.observed.position_at(t);
        Some(FrameState {
            index,
            t,
            reference,
            observed,
            relative: observed - reference,
        })
    }

    /// Discard the trajectory and rewind to frame 0.
    pub fn restart(&mut self) {
        self.trajectory.clear();
        self.next_index = 0;
    }

    /// Animation driver: setup, then update-then-render for every remaining
    /// frame, then finish. Returns the number of frames rendered.
    ///
    /// Stops at the first renderer error, or early when the renderer asks to.
    pub fn drive<R: FrameRenderer>(&mut self, renderer: &mut R) -> std::result::Result<u64, R::Error> {
        renderer.setup(&self.view)?;

        let mut rendered = 0u64;
        while let Some(frame) = self.next() {
            renderer.render_frame(&frame, self.trajectory.points())?;
            rendered += 1;
            if renderer.should_stop() {
                tracing::debug!(frame = frame.index, "renderer requested stop");
                break;
            }
        }

        renderer.finish()?;
        Ok(rendered)
    }
}

impl Iterator for Sampler {
    type Item = FrameState;

    fn next(&mut self) -> Option<FrameState> {
        let frame = self.frame_state(self.next_index)?;
        self.trajectory.push(frame.relative);
        self.next_index += 1;
        tracing::trace!(frame = frame.index, t = frame.t, x = frame.relative.x, y = frame.relative.y);
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.clock.frame_count().saturating_sub(self.next_index);
        let left = usize::try_from(left).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Sampler {}

impl FusedIterator for Sampler {}
