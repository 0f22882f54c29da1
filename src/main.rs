use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use duckprobe::{logger, RunOptions};

/// duckprobe - Probe sample objects for a callable member and list what they expose
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Member to probe on every sample
    #[arg(short, long, default_value = "sound")]
    member: String,

    /// Print inspector reports as JSON
    #[arg(short = 'j', long)]
    json: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let opts = RunOptions {
        member: cli.member,
        json: cli.json,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    duckprobe::run(&opts, &mut out)?;
    out.flush()?;

    Ok(())
}
