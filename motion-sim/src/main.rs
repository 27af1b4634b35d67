//! Runs the simulation from a configuration file.
//!
//! Run with:
//!   cargo run --release -p motion-sim -- app.config --ticks 500 --seed 7
//!
//! Prints one status line per tick and a summary at the end.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use motion_sim::{Config, Simulation};

#[derive(Debug, Parser)]
#[command(version, about = "Headless particle simulation over a configurable sequence backing")]
struct Cli {
    /// Path to the properties-style configuration file.
    config: PathBuf,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Backing token, overriding the file's `list` entry.
    #[arg(long)]
    list: Option<String>,

    /// Sleep `timer_delay` between ticks.
    #[arg(long)]
    realtime: bool,

    /// Print only the summary.
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(list) = cli.list {
        config.list = list;
    }

    let delay = config.timer_delay;
    let token = config.list.clone();
    let mut sim = match cli.seed {
        Some(seed) => Simulation::with_seed(config, seed),
        None => Simulation::new(config),
    }
    .with_context(|| format!("cannot build body sequence for list = {token:?}"))?;

    if !cli.quiet {
        println!("backing: {}", sim.backing());
    }

    let start = Instant::now();
    let (mut spawned, mut retired, mut peak) = (0, 0, 0);
    for _ in 0..cli.ticks {
        let report = sim.tick();
        spawned += report.spawned;
        retired += report.retired;
        peak = peak.max(report.live);

        if !cli.quiet {
            println!(
                "tick {:>6} | live {:>5} | +{} -{}",
                report.tick, report.live, report.spawned, report.retired
            );
        }
        if cli.realtime {
            std::thread::sleep(delay);
        }
    }

    println!(
        "{} ticks on {} in {:?} | spawned {} | retired {} | peak {} | live {}",
        sim.ticks(),
        sim.backing(),
        start.elapsed(),
        spawned,
        retired,
        peak,
        sim.bodies().size(),
    );

    Ok(())
}
