use rand::Rng;

use crate::error::{ConfigurationError, Result};
use crate::schedule::{make_shuffled_schedule, Game, Schedule};
use crate::skill::SkillModel;
use crate::team::{fresh_records, Records, TeamId};

/// Resolve one game and update both records.
///
/// Both performances are drawn, first team then second. The first team
/// wins only if its performance is strictly greater; an exact tie goes to
/// the second team.
///
/// # Returns
/// The id of the winning team
pub fn play_game<R: Rng + ?Sized>(
    game: &Game,
    skills: &SkillModel,
    records: &mut Records,
    rng: &mut R,
) -> Result<TeamId> {
    let first_perf = skills.draw(game.first, rng)?;
    let second_perf = skills.draw(game.second, rng)?;

    let (winner, loser) = if first_perf > second_perf {
        (game.first, game.second)
    } else {
        (game.second, game.first)
    };

    records
        .get_mut(&winner)
        .ok_or(ConfigurationError::UnknownTeam(winner))?
        .record_win();
    records
        .get_mut(&loser)
        .ok_or(ConfigurationError::UnknownTeam(loser))?
        .record_loss();

    Ok(winner)
}

/// Play every game of `schedule` in week order and return the final records.
///
/// Every team the schedule mentions must have both a record and a skill;
/// this is checked before any game is played.
pub fn run_season<R: Rng + ?Sized>(
    schedule: &Schedule,
    skills: &SkillModel,
    mut records: Records,
    rng: &mut R,
) -> Result<Records> {
    for game in schedule.games() {
        for team in [game.first, game.second] {
            if !records.contains_key(&team) || skills.skill(team).is_none() {
                return Err(ConfigurationError::UnknownTeam(team));
            }
        }
    }

    for game in schedule.games() {
        play_game(game, skills, &mut records, rng)?;
    }

    Ok(records)
}

/// Shuffle a fresh schedule for `teams`, then play it out from zeroed records.
pub fn simulate_season<R: Rng + ?Sized>(
    teams: &[TeamId],
    n_weeks: usize,
    skills: &SkillModel,
    rng: &mut R,
) -> Result<Records> {
    let schedule = make_shuffled_schedule(teams, n_weeks, rng)?;
    run_season(&schedule, skills, fresh_records(teams), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::make_schedule;
    use crate::team::{team_ids, Record};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn noiseless(teams: &[TeamId]) -> SkillModel {
        SkillModel::linear(teams, 10.0, -10.0, 0.0).unwrap()
    }

    #[test]
    fn test_stronger_team_wins_without_noise() {
        let teams = team_ids(2);
        let skills = noiseless(&teams);
        let mut records = fresh_records(&teams);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let winner = play_game(&Game::new(2, 1), &skills, &mut records, &mut rng).unwrap();

        assert_eq!(winner, 1);
        assert_eq!(records[&1], Record::new(1, 0));
        assert_eq!(records[&2], Record::new(0, 1));
    }

    #[test]
    fn test_tie_goes_to_second_team() {
        let skills = SkillModel::with_skills([(1, 0.0), (2, 0.0)], 0.0).unwrap();
        let mut records = fresh_records(&[1, 2]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(play_game(&Game::new(1, 2), &skills, &mut records, &mut rng).unwrap(), 2);
        assert_eq!(play_game(&Game::new(2, 1), &skills, &mut records, &mut rng).unwrap(), 1);
        assert_eq!(records[&1], Record::new(1, 1));
        assert_eq!(records[&2], Record::new(1, 1));
    }

    #[test]
    fn test_noiseless_round_robin_fixture() {
        let teams = team_ids(4);
        let skills = noiseless(&teams);
        let schedule = make_schedule(&teams, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let records = run_season(&schedule, &skills, fresh_records(&teams), &mut rng).unwrap();

        let expected: Vec<(TeamId, Record)> = vec![
            (1, Record::new(3, 0)),
            (2, Record::new(2, 1)),
            (3, Record::new(1, 2)),
            (4, Record::new(0, 3)),
        ];
        assert_eq!(records.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_unknown_team_in_schedule() {
        let skills = noiseless(&team_ids(4));
        let schedule = Schedule {
            weeks: vec![vec![Game::new(1, 2), Game::new(3, 9)]],
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_season(&schedule, &skills, fresh_records(&team_ids(4)), &mut rng);
        assert_eq!(result, Err(ConfigurationError::UnknownTeam(9)));
    }

    #[test]
    fn test_team_without_skill_rejected() {
        let skills = SkillModel::with_skills([(1, 1.0)], 0.0).unwrap();
        let schedule = make_schedule(&[1, 2], 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_season(&schedule, &skills, fresh_records(&[1, 2]), &mut rng);
        assert_eq!(result, Err(ConfigurationError::UnknownTeam(2)));
    }

    #[test]
    fn test_simulate_season_reproducible() {
        let teams = team_ids(14);
        let skills = SkillModel::standard(&teams).unwrap();

        let a = simulate_season(&teams, 14, &skills, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = simulate_season(&teams, 14, &skills, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_records_balance(half in 1usize..9, n_weeks in 0usize..25, seed in any::<u64>()) {
            let teams = team_ids(half * 2);
            let skills = SkillModel::standard(&teams).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let records = simulate_season(&teams, n_weeks, &skills, &mut rng).unwrap();

            for record in records.values() {
                prop_assert_eq!(record.games_played() as usize, n_weeks);
            }
            let wins: usize = records.values().map(|r| r.wins as usize).sum();
            let losses: usize = records.values().map(|r| r.losses as usize).sum();
            prop_assert_eq!(wins, losses);
            prop_assert_eq!(wins, n_weeks * half);
        }
    }
}
