// crates/retro-cli/src/cmd/transcode.rs

use std::path::Path;

use clap::Args;

use retro_cli::batch::{run_batch, ExternalTool, DEFAULT_DIR, DEFAULT_TOOL};

#[derive(Args, Debug)]
pub struct TranscodeArgs {
    /// Directory scanned for .avi files (case-sensitive extension)
    #[arg(long, default_value = DEFAULT_DIR)]
    pub dir: String,

    /// Directory the .mp4 outputs are written to
    #[arg(long, default_value = ".")]
    pub out_dir: String,

    /// External transcoder, invoked as `<tool> -i <input> <output>`
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// List what would be converted without running the tool
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: TranscodeArgs) -> anyhow::Result<()> {
    let mut tool = ExternalTool::new(&args.tool);
    let stdout = std::io::stdout();
    let rep = run_batch(
        Path::new(&args.dir),
        Path::new(&args.out_dir),
        &mut tool,
        args.dry_run,
        &mut stdout.lock(),
    )?;

    if !rep.is_success() {
        let total = rep.failed.len() + rep.converted.len();
        for (job, why) in &rep.failed {
            eprintln!("failed: {} ({why})", job.file_name);
        }
        anyhow::bail!("{} of {} conversions failed", rep.failed.len(), total);
    }
    Ok(())
}
