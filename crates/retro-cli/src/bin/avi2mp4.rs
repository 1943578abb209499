use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use retro_cli::batch::{run_batch, ExternalTool, DEFAULT_DIR, DEFAULT_TOOL};

/// Convert every .avi under DIR to .mp4 in the current directory.
#[derive(Parser, Debug)]
#[command(name = "avi2mp4")]
struct Args {
    #[arg(default_value = DEFAULT_DIR)]
    dir: PathBuf,
}

fn main() -> Result<()> {
    let a = Args::parse();

    let mut tool = ExternalTool::new(DEFAULT_TOOL);
    let rep = run_batch(&a.dir, &PathBuf::from("."), &mut tool, false, &mut std::io::stdout().lock())?;

    if !rep.is_success() {
        eprintln!("FAILED={}", rep.failed.len());
        std::process::exit(1);
    }
    Ok(())
}
