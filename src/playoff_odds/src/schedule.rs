use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::error::{ConfigurationError, Result};
use crate::team::TeamId;

/// A single matchup.
///
/// The pairing is unordered for scheduling purposes; `second` only matters
/// when the two drawn performances tie, in which case it takes the win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub first: TeamId,
    pub second: TeamId,
}

impl Game {
    pub fn new(first: TeamId, second: TeamId) -> Self {
        Game { first, second }
    }

    /// The pairing with the lower id first, for order-insensitive comparison.
    pub fn key(&self) -> (TeamId, TeamId) {
        if self.first < self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

/// One round of games; every team plays exactly once.
pub type Week = Vec<Game>;

/// Round-robin season schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub weeks: Vec<Week>,
}

impl Schedule {
    pub fn n_weeks(&self) -> usize {
        self.weeks.len()
    }

    /// Iterate over all games in play order.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.weeks.iter().flatten()
    }
}

/// Check that `teams` can be scheduled round-robin.
pub fn validate_teams(teams: &[TeamId]) -> Result<()> {
    if teams.len() < 2 {
        return Err(ConfigurationError::TooFewTeams(teams.len()));
    }
    if teams.len() % 2 != 0 {
        return Err(ConfigurationError::OddTeamCount(teams.len()));
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for &team in teams {
        if !seen.insert(team) {
            return Err(ConfigurationError::DuplicateTeam(team));
        }
    }
    Ok(())
}

/// Pairings for a single week of the circle method.
///
/// `teams[0]` stays fixed while the rest rotate right by `day mod (N-1)`;
/// position `i` then plays position `N-1-i`. `teams` must already be
/// validated.
pub fn make_day(teams: &[TeamId], day: usize) -> Week {
    let rest = &teams[1..];
    let shift = day % rest.len();

    let mut rotated = Vec::with_capacity(teams.len());
    rotated.push(teams[0]);
    rotated.extend_from_slice(&rest[rest.len() - shift..]);
    rotated.extend_from_slice(&rest[..rest.len() - shift]);

    let n = rotated.len();
    (0..n / 2)
        .map(|i| Game::new(rotated[i], rotated[n - 1 - i]))
        .collect()
}

/// Build an `n_weeks` schedule using `teams` in the order given.
///
/// Weeks past the first full cycle of `N-1` repeat it.
pub fn make_schedule(teams: &[TeamId], n_weeks: usize) -> Result<Schedule> {
    validate_teams(teams)?;

    let weeks = (0..n_weeks).map(|day| make_day(teams, day)).collect();
    Ok(Schedule { weeks })
}

/// Build an `n_weeks` schedule from a shuffled copy of `teams`.
///
/// The shuffle decides who meets whom in which week; the cycle itself
/// stays a full round-robin.
pub fn make_shuffled_schedule<R: Rng + ?Sized>(
    teams: &[TeamId],
    n_weeks: usize,
    rng: &mut R,
) -> Result<Schedule> {
    validate_teams(teams)?;

    let mut order = teams.to_vec();
    order.shuffle(rng);
    make_schedule(&order, n_weeks)
}
