pub mod error;
pub mod validate;

pub mod analysis;
pub mod kinematics;
pub mod render;
pub mod sampler;
pub mod scene;

pub use crate::error::{Result, RetroError};
pub use crate::kinematics::{body::OrbitingBody, clock::SimulationClock, vec2::Vec2};
pub use crate::render::{FrameRenderer, ViewConfig};
pub use crate::sampler::{engine::Sampler, frame::FrameState, trajectory::Trajectory};
pub use crate::scene::scene::Scene;
