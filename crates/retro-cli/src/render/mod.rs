// crates/retro-cli/src/render/mod.rs
//
// FrameRenderer back ends for the `retro` command.

pub mod canvas;
pub mod jsonl;
pub mod rtr;
pub mod svg;
pub mod term;

pub use jsonl::JsonlRenderer;
pub use rtr::TrajectoryFileRenderer;
pub use svg::SvgRenderer;
pub use term::TermRenderer;

use retro_core::Vec2;

/// Bring a renderer-owned copy of the trace up to date with the sampler's.
///
/// The trace only ever grows, so only the new tail is copied.
pub(crate) fn sync_trace(own: &mut Vec<Vec2>, trace: &[Vec2]) {
    if trace.len() < own.len() {
        // New run behind our back; start over.
        own.clear();
    }
    own.extend_from_slice(&trace[own.len()..]);
}
