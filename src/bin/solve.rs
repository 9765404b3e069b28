//! Batch solver CLI.
//!
//! Deals random hands, finds the best arrangement of each, and writes one
//! JSON object per hand.
//!
//! Usage:
//!   cargo run --release --bin solve -- [OPTIONS]

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use clap::Parser;
use log::info;

use domino_grid::logging;
use domino_grid::solve::{self, SolveConfig};

#[derive(Parser, Debug)]
#[command(name = "solve", about = "Find the best arrangement of random domino hands")]
struct Args {
    /// Number of hands to deal and solve
    #[arg(long, default_value_t = 10)]
    hands: usize,

    /// Tiles per hand
    #[arg(long, default_value_t = 4)]
    tiles: usize,

    /// Special tiles per hand
    #[arg(long, default_value_t = 1)]
    specials: usize,

    /// Number of parallel threads
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Random seed, 0 for entropy
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,
}

impl From<&Args> for SolveConfig {
    fn from(args: &Args) -> Self {
        SolveConfig {
            hands: args.hands,
            tiles: args.tiles,
            specials: args.specials,
            threads: args.threads,
            seed: args.seed,
            quiet: args.quiet,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logger = logging::init(if args.quiet { "warn" } else { "info" })?;
    let config = SolveConfig::from(&args);

    info!(
        "solve: {} hands of {} tiles ({} special), {} threads",
        config.hands, config.tiles, config.specials, config.threads
    );

    let start = Instant::now();
    let records = solve::run_solve(&config)?;
    info!(
        "solved {} hands in {:.1}s",
        records.len(),
        start.elapsed().as_secs_f64()
    );
    solve::log_summary(&records);

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            solve::write_jsonl(&records, &mut writer)?;
            info!("wrote {} records to {}", records.len(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            solve::write_jsonl(&records, &mut writer)?;
        }
    }
    Ok(())
}
