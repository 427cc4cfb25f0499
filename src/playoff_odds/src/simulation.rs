use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::season::simulate_season;
use crate::skill::SkillModel;
use crate::schedule::validate_teams;
use crate::standings::{summarize, validate_cutoff, SeasonSummary};
use crate::team::TeamId;

/// Average playoff odds keyed by the win total at the cutoff rank.
pub type OddsTable = BTreeMap<u32, f64>;

/// One summary row per simulated season, in season order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsTable {
    rows: Vec<SeasonSummary>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: SeasonSummary) {
        self.rows.push(summary);
    }

    pub fn rows(&self) -> &[SeasonSummary] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Playoff odds for each observed cutoff win total.
    pub fn odds_table(&self) -> OddsTable {
        compute_odds(&self.rows)
    }

    /// How many seasons ended with each league-leading win total.
    pub fn max_wins_counts(&self) -> BTreeMap<u32, usize> {
        value_counts(self.rows.iter().map(|r| r.max_wins))
    }

    /// How many seasons ended with each league-worst win total.
    pub fn min_wins_counts(&self) -> BTreeMap<u32, usize> {
        value_counts(self.rows.iter().map(|r| r.min_wins))
    }
}

impl FromIterator<SeasonSummary> for ResultsTable {
    fn from_iter<I: IntoIterator<Item = SeasonSummary>>(iter: I) -> Self {
        ResultsTable {
            rows: iter.into_iter().collect(),
        }
    }
}

fn value_counts(values: impl Iterator<Item = u32>) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Group rows by cutoff win total and average each row's playoff odds.
///
/// Rows with nobody tied at the cutoff carry no odds and are skipped; a
/// win total seen only on such rows does not appear in the table.
pub fn compute_odds(rows: &[SeasonSummary]) -> OddsTable {
    let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

    for row in rows {
        match row.playoff_odds() {
            Some(odds) => {
                let entry = sums.entry(row.cutoff_wins).or_insert((0.0, 0));
                entry.0 += odds;
                entry.1 += 1;
            }
            None => warn!(cutoff_wins = row.cutoff_wins, "skipping season with no teams at cutoff"),
        }
    }

    sums.into_iter()
        .map(|(wins, (total, n))| (wins, total / n as f64))
        .collect()
}

/// Output of a full Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResults {
    /// Master seed; rerunning with it reproduces `results` exactly
    pub seed: u64,
    pub results: ResultsTable,
    pub odds: OddsTable,
}

/// Monte Carlo driver for a fixed league.
///
/// Each season gets its own `ChaCha8Rng`, seeded from a master generator
/// before any season runs, so the sequential and parallel paths produce
/// the same results for the same master seed.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    teams: Vec<TeamId>,
    skills: SkillModel,
}

impl Simulation {
    /// Validate `config` and build the league it describes.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let skills = config.skill_model()?;
        Self::with_skill_model(config, skills)
    }

    /// Use explicit skills instead of the config's linear mapping.
    pub fn with_skill_model(config: SimulationConfig, skills: SkillModel) -> Result<Self> {
        let teams = config.team_ids();
        validate_teams(&teams)?;
        validate_cutoff(config.playoff_spots, teams.len())?;

        Ok(Simulation {
            config,
            teams,
            skills,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn skills(&self) -> &SkillModel {
        &self.skills
    }

    /// Simulate and summarize one season from its own seed.
    pub fn simulate_season(&self, seed: u64) -> Result<SeasonSummary> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let records = simulate_season(&self.teams, self.config.weeks, &self.skills, &mut rng)?;
        summarize(&records, self.config.playoff_spots)
    }

    /// Run every configured season.
    pub fn run(&self) -> Result<SimulationResults> {
        self.run_with_progress(|| {})
    }

    /// Run every configured season, calling `on_season` after each one.
    ///
    /// With `parallel` set, `on_season` is called from rayon worker threads.
    pub fn run_with_progress<F>(&self, on_season: F) -> Result<SimulationResults>
    where
        F: Fn() + Sync,
    {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut master = ChaCha8Rng::seed_from_u64(seed);
        let season_seeds: Vec<u64> = (0..self.config.simulations).map(|_| master.gen()).collect();

        info!(
            seed,
            teams = self.config.teams,
            weeks = self.config.weeks,
            playoff_spots = self.config.playoff_spots,
            simulations = self.config.simulations,
            parallel = self.config.parallel,
            "starting simulation"
        );

        let run_one = |(sim, &season_seed): (usize, &u64)| -> Result<SeasonSummary> {
            let summary = self.simulate_season(season_seed)?;
            debug!(sim, ?summary, "season complete");
            on_season();
            Ok(summary)
        };

        let results: ResultsTable = if self.config.parallel {
            season_seeds
                .par_iter()
                .enumerate()
                .map(run_one)
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .collect()
        } else {
            season_seeds
                .iter()
                .enumerate()
                .map(run_one)
                .collect::<Result<ResultsTable>>()?
        };

        let odds = results.odds_table();
        info!(seasons = results.len(), win_totals = odds.len(), "simulation finished");

        Ok(SimulationResults { seed, results, odds })
    }
}
