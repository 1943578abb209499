// crates/retro-cli/src/io/scene_file.rs

use anyhow::{Context, Result};
use retro_core::scene::format as scene_format;
use retro_core::Scene;

/// Load a .rsc scene file and decode into a Scene.
pub fn load_rsc(path: &str) -> Result<Scene> {
    let bytes = std::fs::read(path).with_context(|| format!("read scene {path}"))?;
    let scene = scene_format::decode(&bytes).with_context(|| format!("decode scene {path}"))?;
    Ok(scene)
}

/// Save a Scene as a .rsc file.
pub fn save_rsc(path: &str, scene: &Scene) -> Result<()> {
    let bytes = scene_format::encode(scene);
    std::fs::write(path, bytes).with_context(|| format!("write scene {path}"))?;
    Ok(())
}
