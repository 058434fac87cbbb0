//! Gomoku console game
//!
//! Two players, human or random, take turns on a 15x15 board until one makes
//! five in a row or the board fills up.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use gomoku::ui::{Console, ConsoleConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for random players and the first-move coin flip
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "gomoku=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let config = ConsoleConfig { seed: args.seed };
    let mut console = Console::new(stdin.lock(), io::stdout(), config);

    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
