use crate::error::{ConfigurationError, Result};
use crate::team::Records;

/// Cutoff statistics for one finished season.
///
/// Ranks are taken from the standings sorted by wins, highest first. The
/// team at the cutoff rank itself is counted in `n_above`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonSummary {
    /// Wins of the team sitting exactly at the cutoff rank
    pub cutoff_wins: u32,

    /// Teams inside the playoff field (cutoff team included) with `cutoff_wins`
    pub n_above: u32,

    /// Teams outside the playoff field with `cutoff_wins`
    pub n_below: u32,

    pub max_wins: u32,
    pub min_wins: u32,
}

impl SeasonSummary {
    /// Fraction of teams tied at the cutoff win total that made the field.
    ///
    /// `None` when no team was tied at all, which cannot happen for a
    /// summary built by [`summarize`].
    pub fn playoff_odds(&self) -> Option<f64> {
        let tied = self.n_above + self.n_below;
        if tied == 0 {
            None
        } else {
            Some(self.n_above as f64 / tied as f64)
        }
    }
}

/// Check a 1-indexed cutoff rank against the league size.
pub fn validate_cutoff(cutoff_rank: usize, n_teams: usize) -> Result<()> {
    if cutoff_rank == 0 || cutoff_rank > n_teams {
        return Err(ConfigurationError::CutoffOutOfRange {
            rank: cutoff_rank,
            teams: n_teams,
        });
    }
    Ok(())
}

/// Rank the final records and resolve ties around the playoff cutoff.
///
/// # Arguments
/// * `records` - Final records for every team
/// * `cutoff_rank` - 1-indexed rank of the last playoff spot
pub fn summarize(records: &Records, cutoff_rank: usize) -> Result<SeasonSummary> {
    validate_cutoff(cutoff_rank, records.len())?;

    let mut wins: Vec<u32> = records.values().map(|r| r.wins).collect();
    wins.sort_unstable_by(|a, b| b.cmp(a));

    let cutoff_wins = wins[cutoff_rank - 1];
    let (inside, outside) = wins.split_at(cutoff_rank);
    let n_above = inside.iter().filter(|&&w| w == cutoff_wins).count() as u32;
    let n_below = outside.iter().filter(|&&w| w == cutoff_wins).count() as u32;

    Ok(SeasonSummary {
        cutoff_wins,
        n_above,
        n_below,
        max_wins: wins[0],
        min_wins: wins[wins.len() - 1],
    })
}
