// crates/retro-cli/src/cmd/mod.rs

pub mod retro;
pub mod scene;
pub mod scene_args;
pub mod transcode;
