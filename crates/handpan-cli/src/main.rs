mod commands;
mod settings;
mod summary;
mod trace;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "handpan", about = "Gesture-driven pan/zoom over still images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and the initial viewport
    Info(commands::info::InfoArgs),
    /// Replay a recorded gesture trace over an image
    Replay(commands::replay::ReplayArgs),
    /// Navigate an image with a string of key presses
    Keys(commands::keys::KeysArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Keys(args) => commands::keys::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
