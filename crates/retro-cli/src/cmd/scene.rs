// crates/retro-cli/src/cmd/scene.rs

use clap::{Args, Subcommand};
use retro_core::analysis::synodic_period;
use retro_core::scene::defaults::{preset, preset_names};
use retro_core::scene::format::scene_id_hex;
use retro_core::validate::validate_scene;

use retro_cli::io::scene_file;

use crate::cmd::scene_args::SceneArgs;

#[derive(Args)]
pub struct SceneCmdArgs {
    #[command(subcommand)]
    pub cmd: SceneCmd,
}

#[derive(Subcommand)]
pub enum SceneCmd {
    /// Write the effective scene (built-in + overrides) to a .rsc file.
    Write(SceneWriteArgs),

    /// Print a .rsc scene (verifies crc32 + blake3).
    Show(SceneShowArgs),

    /// List body presets.
    Presets,
}

#[derive(Args)]
pub struct SceneWriteArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Output scene path (.rsc)
    #[arg(long)]
    pub out: String,
}

#[derive(Args)]
pub struct SceneShowArgs {
    /// Input scene path (.rsc)
    #[arg(long = "in")]
    pub r#in: String,
}

pub fn run(args: SceneCmdArgs) -> anyhow::Result<()> {
    match args.cmd {
        SceneCmd::Write(a) => cmd_write(a),
        SceneCmd::Show(a) => cmd_show(a),
        SceneCmd::Presets => cmd_presets(),
    }
}

fn cmd_write(a: SceneWriteArgs) -> anyhow::Result<()> {
    let scene = a.scene.resolve()?;
    validate_scene(&scene)?;
    scene_file::save_rsc(&a.out, &scene)?;
    println!("ok scene write: out={} scene_id={}", a.out, scene_id_hex(&scene));
    Ok(())
}

fn cmd_show(a: SceneShowArgs) -> anyhow::Result<()> {
    let s = scene_file::load_rsc(&a.r#in)?;
    let clock = s.clock();

    println!("scene_id    = {}", scene_id_hex(&s));
    println!("version     = {}", s.version);
    println!(
        "reference   = {} r={} AU T={} y",
        s.reference.name(),
        s.reference.orbital_radius(),
        s.reference.orbital_period()
    );
    println!(
        "observed    = {} r={} AU T={} y",
        s.observed.name(),
        s.observed.orbital_radius(),
        s.observed.orbital_period()
    );
    println!("duration    = {} y", s.duration);
    println!("frame_rate  = {} /y", s.frame_rate);
    println!("frames      = {}", clock.frame_count());
    println!("time_step   = {} y", clock.time_step());
    match synodic_period(&s.reference, &s.observed) {
        Some(p) => println!("synodic     = {p:.4} y"),
        None => println!("synodic     = none"),
    }
    println!("view        = x[{}, {}] y[{}, {}]", s.view.x_range.0, s.view.x_range.1, s.view.y_range.0, s.view.y_range.1);
    println!("title       = {}", s.view.title);
    println!("labels      = {} / {}", s.view.x_label, s.view.y_label);

    if let Err(e) = validate_scene(&s) {
        println!("INVALID     = {e}");
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for name in preset_names() {
        if let Some(b) = preset(name) {
            println!("{:<8} r={:>6} AU  T={:>8.4} y", name, b.orbital_radius(), b.orbital_period());
        }
    }
    Ok(())
}
