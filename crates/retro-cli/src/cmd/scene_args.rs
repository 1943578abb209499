// crates/retro-cli/src/cmd/scene_args.rs

use anyhow::Context;
use clap::Args;
use retro_core::scene::defaults::{default_scene, preset, preset_names};
use retro_core::{OrbitingBody, Scene};

use retro_cli::io::scene_file;

/// Scene selection shared by `retro` and `scene write`.
///
/// Precedence: --scene file (else built-in Mars-from-Earth), then presets,
/// then explicit numeric overrides, then --title.
#[derive(Args, Debug, Default)]
pub struct SceneArgs {
    /// Scene path (.rsc). If omitted, uses the built-in scene.
    #[arg(long)]
    pub scene: Option<String>,

    /// Observed body preset (mercury, venus, earth, mars, jupiter, saturn, uranus, neptune)
    #[arg(long)]
    pub observed: Option<String>,

    /// Reference body preset
    #[arg(long)]
    pub reference: Option<String>,

    /// Override observed orbital radius (AU)
    #[arg(long)]
    pub obs_radius: Option<f64>,

    /// Override observed orbital period (years)
    #[arg(long)]
    pub obs_period: Option<f64>,

    /// Override reference orbital radius (AU)
    #[arg(long)]
    pub ref_radius: Option<f64>,

    /// Override reference orbital period (years)
    #[arg(long)]
    pub ref_period: Option<f64>,

    /// Simulated duration (years)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Frames per simulated year
    #[arg(long)]
    pub fps: Option<f64>,

    /// Half-width of the square view (AU)
    #[arg(long)]
    pub view: Option<f64>,

    /// Figure title
    #[arg(long)]
    pub title: Option<String>,
}

impl SceneArgs {
    pub fn resolve(&self) -> anyhow::Result<Scene> {
        let mut scene = match self.scene.as_deref() {
            Some(path) => scene_file::load_rsc(path)?,
            None => default_scene(),
        };

        if let Some(name) = self.reference.as_deref() {
            scene = scene.with_reference(lookup(name).context("--reference")?);
        }
        if let Some(name) = self.observed.as_deref() {
            scene = scene.with_observed(lookup(name).context("--observed")?);
        }

        scene.reference = override_body(&scene.reference, self.ref_radius, self.ref_period);
        scene.observed = override_body(&scene.observed, self.obs_radius, self.obs_period);

        if let Some(v) = self.duration {
            scene.duration = v;
        }
        if let Some(v) = self.fps {
            scene.frame_rate = v;
        }
        if let Some(h) = self.view {
            scene.view.x_range = (-h, h);
            scene.view.y_range = (-h, h);
        }
        if let Some(t) = self.title.as_deref() {
            scene.view.title = t.to_string();
        }
        Ok(scene)
    }
}

fn lookup(name: &str) -> anyhow::Result<OrbitingBody> {
    preset(name).ok_or_else(|| {
        let known: Vec<&str> = preset_names().collect();
        anyhow::anyhow!("unknown body {name:?} (known: {})", known.join(", "))
    })
}

fn override_body(b: &OrbitingBody, radius: Option<f64>, period: Option<f64>) -> OrbitingBody {
    if radius.is_none() && period.is_none() {
        return b.clone();
    }
    OrbitingBody::new(
        b.name(),
        radius.unwrap_or(b.orbital_radius()),
        period.unwrap_or(b.orbital_period()),
    )
}
