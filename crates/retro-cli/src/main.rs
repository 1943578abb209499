// crates/retro-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "retro-cli")]
#[command(about = "Retrograde-motion sampler and batch video converter", long_about = None)]
pub struct Cli {
    /// Debug-level logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample the apparent path of one planet seen from another and render it
    Retro(cmd::retro::RetroArgs),

    /// Scene tools (.rsc)
    Scene(cmd::scene::SceneCmdArgs),

    /// Convert every .avi in a directory to .mp4 with an external transcoder
    Transcode(cmd::transcode::TranscodeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Retro(args) => cmd::retro::run(args),
        Commands::Scene(args) => cmd::scene::run(args),
        Commands::Transcode(args) => cmd::transcode::run(args),
    }
}

fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
