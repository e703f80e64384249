use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use ride_cli::{load_config, run_file};
use ride_core::engine::EngineConfig;

#[derive(Parser)]
#[command(
    name = "ride-cli",
    about = "Replay a newline-delimited ride-hailing command script"
)]
struct Cli {
    /// Path to the command script
    input: PathBuf,

    /// Optional JSON file overriding the default engine configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load config {}: {err}", path.display());
                exit(2);
            }
        },
        None => EngineConfig::default(),
    };

    match run_file(&cli.input, config) {
        Ok(outputs) => {
            for line in outputs {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("failed to run {}: {err}", cli.input.display());
            exit(1);
        }
    }
}
