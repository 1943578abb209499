// crates/retro-cli/src/lib.rs

pub mod batch;
pub mod io;
pub mod render;
