//! Error types for the playoff odds simulator

use thiserror::Error;

use crate::team::TeamId;

/// Invalid simulation parameters.
///
/// These indicate a setup mistake rather than a transient condition, so
/// they abort the run before any season is simulated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("number of teams must be even, got {0}")]
    OddTeamCount(usize),

    #[error("at least two teams are required, got {0}")]
    TooFewTeams(usize),

    #[error("team {0} appears more than once")]
    DuplicateTeam(TeamId),

    #[error("playoff cutoff rank {rank} is outside [1, {teams}]")]
    CutoffOutOfRange { rank: usize, teams: usize },

    #[error("schedule references unknown team {0}")]
    UnknownTeam(TeamId),

    #[error("noise scale must be finite and non-negative, got {0}")]
    InvalidNoiseScale(f64),

    #[error("skill bounds must be finite, got [{low}, {high}]")]
    InvalidSkillBounds { high: f64, low: f64 },
}

/// Errors raised while loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
