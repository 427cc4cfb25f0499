//! Plain-text rendering of simulation results.

use std::collections::BTreeMap;
use std::fmt;

use crate::simulation::{OddsTable, SimulationResults};

/// One `odds with <W> wins: <P>` line per win total, ascending.
pub fn format_odds(odds: &OddsTable) -> String {
    odds.iter()
        .map(|(wins, p)| format!("odds with {} wins: {:.2}\n", wins, p))
        .collect()
}

/// One `<value>: <count>` line per observed value, ascending.
pub fn format_value_counts(counts: &BTreeMap<u32, usize>) -> String {
    counts
        .iter()
        .map(|(value, count)| format!("{}: {}\n", value, count))
        .collect()
}

/// Odds table followed by the league-leader win distribution.
pub struct Report<'a> {
    pub results: &'a SimulationResults,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a SimulationResults) -> Self {
        Report { results }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_odds(&self.results.odds))?;
        writeln!(f)?;
        writeln!(f, "most wins per season ({} seasons):", self.results.results.len())?;
        write!(f, "{}", format_value_counts(&self.results.results.max_wins_counts()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ResultsTable;
    use crate::standings::SeasonSummary;

    #[test]
    fn test_format_odds_rounds_to_two_places() {
        let odds = OddsTable::from([(7, 0.123456), (8, 2.0 / 3.0), (9, 1.0)]);

        assert_eq!(
            format_odds(&odds),
            "odds with 7 wins: 0.12\nodds with 8 wins: 0.67\nodds with 9 wins: 1.00\n"
        );
    }

    #[test]
    fn test_format_value_counts() {
        let counts = BTreeMap::from([(12, 4), (10, 1)]);
        assert_eq!(format_value_counts(&counts), "10: 1\n12: 4\n");
    }

    #[test]
    fn test_report_layout() {
        let row = SeasonSummary {
            cutoff_wins: 2,
            n_above: 1,
            n_below: 0,
            max_wins: 3,
            min_wins: 0,
        };
        let results: ResultsTable = [row, row].into_iter().collect();
        let sim = SimulationResults {
            seed: 1,
            odds: results.odds_table(),
            results,
        };

        assert_eq!(
            Report::new(&sim).to_string(),
            "odds with 2 wins: 1.00\n\nmost wins per season (2 seasons):\n3: 2\n"
        );
    }
}
