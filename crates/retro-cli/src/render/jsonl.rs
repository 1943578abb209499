// crates/retro-cli/src/render/jsonl.rs

use std::io::Write;

use retro_core::{FrameRenderer, FrameState, Vec2};

/// One JSON object per frame:
/// {"frame":N,"t":T,"x":X,"y":Y,"trace_len":N}
pub struct JsonlRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonlRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameRenderer for JsonlRenderer<W> {
    type Error = std::io::Error;

    fn render_frame(&mut self, frame: &FrameState, trace: &[Vec2]) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{{\"frame\":{},\"t\":{},\"x\":{},\"y\":{},\"trace_len\":{}}}",
            frame.index,
            frame.t,
            frame.relative.x,
            frame.relative.y,
            trace.len()
        )
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}
