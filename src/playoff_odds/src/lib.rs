//! Playoff Odds - Monte Carlo estimate of playoff chances by win total.
//!
//! A league of evenly spaced skill plays a round-robin season with noisy
//! per-game performances. Repeating the season many times shows how often
//! a team finishing with a given number of wins at the playoff cutoff
//! actually made the field. Python bindings are available via PyO3 with
//! the `python` feature.

pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod schedule;
pub mod season;
pub mod simulation;
pub mod skill;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use config::SimulationConfig;
pub use constants::{
    DEFAULT_PLAYOFF_SPOTS, DEFAULT_SIMULATIONS, DEFAULT_TEAMS, DEFAULT_WEEKS, NOISE_SCALE, SKILL_HIGH,
    SKILL_LOW,
};
pub use error::{ConfigurationError, SettingsError};
pub use report::{format_odds, format_value_counts, Report};
pub use schedule::{make_day, make_schedule, make_shuffled_schedule, Game, Schedule, Week};
pub use season::{play_game, run_season, simulate_season};
pub use simulation::{compute_odds, OddsTable, ResultsTable, Simulation, SimulationResults};
pub use skill::{linear_skills, SkillModel};
pub use standings::{summarize, SeasonSummary};
pub use team::{fresh_records, team_ids, Record, Records, TeamId};
