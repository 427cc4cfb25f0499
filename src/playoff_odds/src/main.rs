//! Playoff odds CLI
//!
//! Simulate many seasons and print playoff odds by cutoff win total.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use playoff_odds::{Report, Simulation, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "playoff-odds")]
#[command(about = "Monte Carlo playoff odds for a round-robin league", long_about = None)]
struct Cli {
    /// TOML settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Weeks per season
    #[arg(short, long)]
    weeks: Option<usize>,

    /// Teams in the league (must be even)
    #[arg(short, long)]
    teams: Option<usize>,

    /// Standings rank of the last playoff spot
    #[arg(short, long)]
    playoff_spots: Option<usize>,

    /// Seasons to simulate
    #[arg(short = 'n', long)]
    simulations: Option<usize>,

    /// Standard deviation of per-game noise (0 disables noise)
    #[arg(long)]
    noise_scale: Option<f64>,

    /// Master seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulate seasons in parallel
    #[arg(long)]
    parallel: bool,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(weeks) = self.weeks {
            config.weeks = weeks;
        }
        if let Some(teams) = self.teams {
            config.teams = teams;
        }
        if let Some(playoff_spots) = self.playoff_spots {
            config.playoff_spots = playoff_spots;
        }
        if let Some(simulations) = self.simulations {
            config.simulations = simulations;
        }
        if let Some(noise_scale) = self.noise_scale {
            config.noise_scale = noise_scale;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.parallel |= self.parallel;

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let show_progress = cli.progress;
    let config = cli.into_config()?;
    let sim = Simulation::new(config).context("invalid simulation settings")?;

    let results = if show_progress {
        let pb = ProgressBar::new(sim.config().simulations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] {pos}/{len} seasons ({eta})")
                .context("progress bar template")?
                .progress_chars("=> "),
        );
        let results = sim.run_with_progress(|| pb.inc(1));
        pb.finish_and_clear();
        results?
    } else {
        sim.run()?
    };

    print!("{}", Report::new(&results));
    Ok(())
}
