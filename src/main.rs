use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

use crossing_sim::roster;
use crossing_sim::simulation::{SimConfig, Simulation};

#[derive(Parser)]
#[command(name = "crossing_sim")]
#[command(about = "Single-track railway crossing simulation")]
struct Cli {
    /// Roster file with one "DIRECTION LOADING CROSSING" line per train
    /// (uppercase E/W marks a high-priority station)
    roster: Option<PathBuf>,

    /// Generate a random roster with this many trains instead of reading a file
    #[arg(long, conflicts_with = "roster")]
    random: Option<usize>,

    /// Seed for the random roster generator
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Real-time duration of one simulated tick in milliseconds
    #[arg(long, default_value = "100")]
    tick_millis: u64,
}

fn main() {
    env_logger::init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let trains = match (&cli.roster, cli.random) {
        (Some(path), _) => roster::load_roster(path)?,
        (None, Some(count)) => roster::random_roster(count, cli.seed),
        (None, None) => bail!("provide a roster file or --random <COUNT>"),
    };
    if cli.tick_millis == 0 {
        bail!("--tick-millis must be at least 1");
    }

    println!("Running crossing simulation with {} trains...", trains.len());

    let config = SimConfig {
        tick_interval: Duration::from_millis(cli.tick_millis),
    };
    let report = Simulation::with_config(trains, config).run()?;

    for event in &report.events {
        println!("{}", event);
    }
    println!(
        "All {} trains crossed ({} events).",
        report.trains_run,
        report.events.len()
    );

    Ok(())
}
