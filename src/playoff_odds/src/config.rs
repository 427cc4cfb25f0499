//! Simulation settings

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_PLAYOFF_SPOTS, DEFAULT_SIMULATIONS, DEFAULT_TEAMS, DEFAULT_WEEKS, NOISE_SCALE, SKILL_HIGH,
    SKILL_LOW,
};
use crate::error::{Result, SettingsError};
use crate::schedule::validate_teams;
use crate::skill::SkillModel;
use crate::standings::validate_cutoff;
use crate::team::{team_ids, TeamId};

/// Parameters for a Monte Carlo run.
///
/// Every field has a default, so a settings file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Weeks per season (one game per team per week)
    pub weeks: usize,

    /// Teams in the league (must be even)
    pub teams: usize,

    /// 1-indexed standings rank of the last playoff spot
    pub playoff_spots: usize,

    /// Seasons to simulate
    pub simulations: usize,

    /// Standard deviation of per-game performance noise; 0 disables noise
    pub noise_scale: f64,

    /// Skill of team 1
    pub skill_high: f64,

    /// Skill of team N
    pub skill_low: f64,

    /// Master seed; drawn from entropy when absent
    pub seed: Option<u64>,

    /// Simulate seasons on the rayon thread pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
            teams: DEFAULT_TEAMS,
            playoff_spots: DEFAULT_PLAYOFF_SPOTS,
            simulations: DEFAULT_SIMULATIONS,
            noise_scale: NOISE_SCALE,
            skill_high: SKILL_HIGH,
            skill_low: SKILL_LOW,
            seed: None,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// The four driver parameters with everything else at its default.
    pub fn new(weeks: usize, teams: usize, playoff_spots: usize, simulations: usize) -> Self {
        Self {
            weeks,
            teams,
            playoff_spots,
            simulations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check every parameter that could make a season impossible to run.
    pub fn validate(&self) -> Result<()> {
        let teams = team_ids(self.teams);
        validate_teams(&teams)?;
        validate_cutoff(self.playoff_spots, self.teams)?;
        self.skill_model().map(|_| ())
    }

    /// Team ids `1..=teams`.
    pub fn team_ids(&self) -> Vec<TeamId> {
        team_ids(self.teams)
    }

    /// The league's skill model.
    pub fn skill_model(&self) -> Result<SkillModel> {
        SkillModel::linear(&self.team_ids(), self.skill_high, self.skill_low, self.noise_scale)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, SettingsError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();

        assert_eq!(config.weeks, 14);
        assert_eq!(config.teams, 14);
        assert_eq!(config.playoff_spots, 8);
        assert_eq!(config.simulations, 500);
        assert_eq!(config.noise_scale, 20.0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimulationConfig::from_toml_str("teams = 10\nplayoff_spots = 6\nseed = 3\n").unwrap();

        assert_eq!(config.teams, 10);
        assert_eq!(config.playoff_spots, 6);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.weeks, 14);
        assert_eq!(config.simulations, 500);
    }

    #[test]
    fn test_example_settings_file() {
        let config = SimulationConfig::from_toml_str(include_str!("../settings.example.toml")).unwrap();
        assert_eq!(config, SimulationConfig::default().with_parallel(true));
    }

    #[test]
    fn test_odd_teams_rejected() {
        let err = SimulationConfig::new(14, 13, 8, 10).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::OddTeamCount(13));
    }

    #[test]
    fn test_cutoff_beyond_league_rejected() {
        let err = SimulationConfig::new(14, 6, 7, 10).validate().unwrap_err();
        assert_eq!(err, ConfigurationError::CutoffOutOfRange { rank: 7, teams: 6 });
    }

    #[test]
    fn test_invalid_toml_settings() {
        let err = SimulationConfig::from_toml_str("teams = 7").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Configuration(ConfigurationError::OddTeamCount(7))
        ));

        let err = SimulationConfig::from_toml_str("teams = \"many\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::from_file("/nonexistent/playoff_odds.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
