// crates/retro-cli/src/render/rtr.rs

use retro_core::{FrameRenderer, FrameState, Vec2, ViewConfig};

use crate::io::rtr::write_rtr;
use crate::render::sync_trace;

/// Dumps the finished trajectory as a `.rtr` file.
pub struct TrajectoryFileRenderer {
    path: String,
    scene_id: [u8; 16],
    time_step: f64,
    zstd_level: Option<i32>,
    trace: Vec<Vec2>,
}

impl TrajectoryFileRenderer {
    pub fn new(path: &str, scene_id: [u8; 16], time_step: f64, zstd_level: Option<i32>) -> Self {
        Self {
            path: path.to_string(),
            scene_id,
            time_step,
            zstd_level,
            trace: Vec::new(),
        }
    }
}

impl FrameRenderer for TrajectoryFileRenderer {
    type Error = anyhow::Error;

    fn setup(&mut self, _view: &ViewConfig) -> anyhow::Result<()> {
        self.trace.clear();
        Ok(())
    }

    fn render_frame(&mut self, _frame: &FrameState, trace: &[Vec2]) -> anyhow::Result<()> {
        sync_trace(&mut self.trace, trace);
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        write_rtr(&self.path, &self.scene_id, self.time_step, &self.trace, self.zstd_level)?;
        tracing::info!(path = %self.path, points = self.trace.len(), zstd = ?self.zstd_level, "trajectory written");
        Ok(())
    }
}
