//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::BTreeMap;

use crate::config::SimulationConfig;
use crate::constants::{
    DEFAULT_PLAYOFF_SPOTS, DEFAULT_SIMULATIONS, DEFAULT_TEAMS, DEFAULT_WEEKS, NOISE_SCALE,
};
use crate::error::ConfigurationError;
use crate::schedule::make_schedule;
use crate::simulation::Simulation;
use crate::team::TeamId;

/// (cutoff_wins, n_above, n_below, max_wins, min_wins)
type SummaryRow = (u32, u32, u32, u32, u32);

fn to_py_err(err: ConfigurationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Run a Monte Carlo simulation.
///
/// Returns (seed, summary rows, odds by cutoff win total).
#[pyfunction]
#[pyo3(signature = (
    n_weeks = DEFAULT_WEEKS,
    n_teams = DEFAULT_TEAMS,
    n_playoffs = DEFAULT_PLAYOFF_SPOTS,
    n_sims = DEFAULT_SIMULATIONS,
    seed = None,
    noise_scale = NOISE_SCALE,
    parallel = false
))]
fn run_simulations(
    py: Python<'_>,
    n_weeks: usize,
    n_teams: usize,
    n_playoffs: usize,
    n_sims: usize,
    seed: Option<u64>,
    noise_scale: f64,
    parallel: bool,
) -> PyResult<(u64, Vec<SummaryRow>, BTreeMap<u32, f64>)> {
    let mut config = SimulationConfig::new(n_weeks, n_teams, n_playoffs, n_sims)
        .with_noise_scale(noise_scale)
        .with_parallel(parallel);
    config.seed = seed;

    let sim = Simulation::new(config).map_err(to_py_err)?;
    let out = py.allow_threads(|| sim.run()).map_err(to_py_err)?;

    let rows = out
        .results
        .rows()
        .iter()
        .map(|r| (r.cutoff_wins, r.n_above, r.n_below, r.max_wins, r.min_wins))
        .collect();

    Ok((out.seed, rows, out.odds))
}

/// Unshuffled round-robin schedule as a list of weeks of (team, team) pairs.
#[pyfunction]
#[pyo3(name = "make_schedule")]
fn py_make_schedule(teams: Vec<TeamId>, n_weeks: usize) -> PyResult<Vec<Vec<(TeamId, TeamId)>>> {
    let schedule = make_schedule(&teams, n_weeks).map_err(to_py_err)?;
    Ok(schedule
        .weeks
        .iter()
        .map(|week| week.iter().map(|g| (g.first, g.second)).collect())
        .collect())
}

/// Python module definition
#[pymodule]
fn playoff_odds(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_simulations, m)?)?;
    m.add_function(wrap_pyfunction!(py_make_schedule, m)?)?;

    m.add("DEFAULT_WEEKS", DEFAULT_WEEKS)?;
    m.add("DEFAULT_TEAMS", DEFAULT_TEAMS)?;
    m.add("DEFAULT_PLAYOFF_SPOTS", DEFAULT_PLAYOFF_SPOTS)?;
    m.add("DEFAULT_SIMULATIONS", DEFAULT_SIMULATIONS)?;
    m.add("NOISE_SCALE", NOISE_SCALE)?;

    Ok(())
}
