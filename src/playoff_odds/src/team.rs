use std::collections::BTreeMap;

/// Team identifier, numbered 1..=N.
pub type TeamId = u32;

/// Win/loss record for one team over one season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32) -> Self {
        Record { wins, losses }
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Per-team records, keyed and iterated by team id.
pub type Records = BTreeMap<TeamId, Record>;

/// Team ids `1..=n_teams`.
pub fn team_ids(n_teams: usize) -> Vec<TeamId> {
    (1..=n_teams as TeamId).collect()
}

/// Zeroed records for every team.
pub fn fresh_records(teams: &[TeamId]) -> Records {
    teams.iter().map(|&id| (id, Record::default())).collect()
}
