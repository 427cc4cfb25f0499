/// Regular-season length in weeks
pub const DEFAULT_WEEKS: usize = 14;

/// League size (must be even)
pub const DEFAULT_TEAMS: usize = 14;

/// Standings rank of the last team admitted to the playoffs
pub const DEFAULT_PLAYOFF_SPOTS: usize = 8;

/// Simulated seasons per run
pub const DEFAULT_SIMULATIONS: usize = 500;

/// Skill of the strongest team (team 1)
pub const SKILL_HIGH: f64 = 10.0;

/// Skill of the weakest team (team N)
pub const SKILL_LOW: f64 = -10.0;

/// Standard deviation of per-game performance noise.
///
/// Chosen so a single game's noise spans roughly the full skill range.
pub const NOISE_SCALE: f64 = 20.0;
