// crates/retro-cli/src/cmd/retro.rs

use std::io::BufWriter;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, ValueEnum};
use retro_core::analysis::{retrograde_spans, synodic_period};
use retro_core::scene::format::{scene_id_16, scene_id_hex};
use retro_core::validate::validate_scene;
use retro_core::Sampler;

use retro_cli::io::scene_file;
use retro_cli::render::{JsonlRenderer, SvgRenderer, TermRenderer, TrajectoryFileRenderer};

use crate::cmd::scene_args::SceneArgs;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RetroFmt {
    /// Animate in the terminal (reference body fixed at the center)
    Term,
    /// JSON lines, one per frame: {"frame":N,"t":T,"x":X,"y":Y,"trace_len":N}
    Jsonl,
    /// Static SVG figure of the whole run (requires --out)
    Svg,
    /// Binary trajectory dump .rtr (requires --out)
    Rtr,
}

#[derive(Args, Debug)]
pub struct RetroArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = RetroFmt::Term)]
    pub fmt: RetroFmt,

    /// Output path (required for svg / rtr; jsonl defaults to stdout)
    #[arg(long)]
    pub out: Option<String>,

    /// Log retrograde loops found in the trajectory
    #[arg(long)]
    pub stats: bool,

    /// Compress the .rtr payload with zstd at this level
    #[arg(long)]
    pub zstd_level: Option<i32>,

    /// Save the effective scene (after overrides) to this .rsc path
    #[arg(long)]
    pub save_scene: Option<String>,

    /// Terminal playback speed in simulated years per second
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,
}

pub fn run(args: RetroArgs) -> anyhow::Result<()> {
    let scene = args.scene.resolve()?;
    validate_scene(&scene)?;

    if let Some(path) = args.save_scene.as_deref() {
        scene_file::save_rsc(path, &scene)?;
        tracing::info!(path, scene_id = %scene_id_hex(&scene), "saved scene");
    }

    let sid = scene_id_16(&scene);
    tracing::info!(
        scene_id = %scene_id_hex(&scene),
        reference = scene.reference.name(),
        observed = scene.observed.name(),
        duration = scene.duration,
        frame_rate = scene.frame_rate,
        fmt = ?args.fmt,
        "retro"
    );

    let mut sampler = Sampler::new(scene)?;
    let frames = match args.fmt {
        RetroFmt::Jsonl => match args.out.as_deref() {
            Some(path) => {
                let f = std::fs::File::create(path).with_context(|| format!("create {path}"))?;
                let mut r = JsonlRenderer::new(BufWriter::new(f));
                sampler.drive(&mut r).with_context(|| format!("write jsonl: {path}"))?
            }
            None => {
                let stdout = std::io::stdout();
                let mut r = JsonlRenderer::new(stdout.lock());
                sampler.drive(&mut r).context("write jsonl to stdout")?
            }
        },
        RetroFmt::Svg => {
            let path = require_out(&args.out, "svg")?;
            let mut r = SvgRenderer::new(path, sampler.reference().name(), sampler.observed().name());
            sampler.drive(&mut r)?
        }
        RetroFmt::Rtr => {
            let path = require_out(&args.out, "rtr")?;
            let mut r = TrajectoryFileRenderer::new(path, sid, sampler.clock().time_step(), args.zstd_level);
            sampler.drive(&mut r)?
        }
        RetroFmt::Term => {
            let interval = frame_interval(sampler.clock().frame_rate(), args.speed)?;
            let mut r = TermRenderer::new(interval, sampler.clock().frame_count());
            sampler.drive(&mut r).context("terminal render")?
        }
    };

    if args.stats {
        log_stats(&sampler);
    }

    tracing::info!(
        frames,
        of = sampler.clock().frame_count(),
        time_step = sampler.clock().time_step(),
        "retro ok"
    );
    Ok(())
}

fn require_out<'a>(out: &'a Option<String>, fmt: &str) -> anyhow::Result<&'a str> {
    out.as_deref()
        .ok_or_else(|| anyhow::anyhow!("--out is required for --fmt {fmt}"))
}

/// Wall-clock time per frame when playing `speed` simulated years per second.
fn frame_interval(frame_rate: f64, speed: f64) -> anyhow::Result<Duration> {
    if !(speed.is_finite() && speed > 0.0) {
        anyhow::bail!("--speed must be > 0 (got {speed})");
    }
    Duration::try_from_secs_f64(1.0 / (frame_rate * speed))
        .with_context(|| format!("--speed {speed} is too slow to pace frames"))
}

fn log_stats(sampler: &Sampler) {
    let spans = retrograde_spans(sampler.trajectory().points(), sampler.clock().time_step());
    match synodic_period(sampler.reference(), sampler.observed()) {
        Some(p) => tracing::info!(synodic_period = p, loops = spans.len(), "retrograde stats"),
        None => tracing::info!(loops = spans.len(), "retrograde stats (equal periods, no synodic period)"),
    }
    for (k, sp) in spans.iter().enumerate() {
        tracing::info!(
            loop_index = k,
            start_t = sp.start_t,
            end_t = sp.end_t,
            swept_deg = sp.swept.to_degrees(),
            "retrograde"
        );
    }
}
