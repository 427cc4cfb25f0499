use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Normal;
use std::collections::BTreeMap;

use crate::constants::{NOISE_SCALE, SKILL_HIGH, SKILL_LOW};
use crate::error::{ConfigurationError, Result};
use crate::team::TeamId;

/// `n` evenly spaced values from `high` down to `low`, both inclusive.
pub fn linear_skills(n: usize, high: f64, low: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![high],
        _ => {
            let step = (low - high) / (n - 1) as f64;
            let mut skills: Vec<f64> = (0..n).map(|i| high + step * i as f64).collect();
            skills[n - 1] = low;
            skills
        }
    }
}

/// Latent team strength plus per-game performance noise.
///
/// A team's performance in a game is its skill plus an independent draw
/// from `Normal(0, noise_scale)`. A zero noise scale makes every draw
/// equal to the team's skill.
#[derive(Clone, Debug)]
pub struct SkillModel {
    skills: BTreeMap<TeamId, f64>,
    noise: Option<Normal>,
}

impl SkillModel {
    /// Evenly spaced skills from `high` (lowest id) to `low` (highest id).
    pub fn linear(teams: &[TeamId], high: f64, low: f64, noise_scale: f64) -> Result<Self> {
        if !high.is_finite() || !low.is_finite() {
            return Err(ConfigurationError::InvalidSkillBounds { high, low });
        }

        let mut ordered = teams.to_vec();
        ordered.sort_unstable();
        let skills = linear_skills(ordered.len(), high, low);

        Self::with_skills(ordered.into_iter().zip(skills), noise_scale)
    }

    /// Default league: +10 down to -10 with noise scale 20.
    pub fn standard(teams: &[TeamId]) -> Result<Self> {
        Self::linear(teams, SKILL_HIGH, SKILL_LOW, NOISE_SCALE)
    }

    /// Explicit per-team skills.
    pub fn with_skills<I>(skills: I, noise_scale: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (TeamId, f64)>,
    {
        let noise = noise_distribution(noise_scale)?;
        Ok(SkillModel {
            skills: skills.into_iter().collect(),
            noise,
        })
    }

    pub fn skill(&self, team: TeamId) -> Option<f64> {
        self.skills.get(&team).copied()
    }

    pub fn skills(&self) -> &BTreeMap<TeamId, f64> {
        &self.skills
    }

    /// Draw one game performance for `team`.
    pub fn draw<R: Rng + ?Sized>(&self, team: TeamId, rng: &mut R) -> Result<f64> {
        let skill = self
            .skill(team)
            .ok_or(ConfigurationError::UnknownTeam(team))?;

        Ok(match &self.noise {
            Some(normal) => skill + normal.sample(rng),
            None => skill,
        })
    }
}

fn noise_distribution(noise_scale: f64) -> Result<Option<Normal>> {
    if !noise_scale.is_finite() || noise_scale < 0.0 {
        return Err(ConfigurationError::InvalidNoiseScale(noise_scale));
    }
    if noise_scale == 0.0 {
        return Ok(None);
    }
    Normal::new(0.0, noise_scale)
        .map(Some)
        .map_err(|_| ConfigurationError::InvalidNoiseScale(noise_scale))
}
