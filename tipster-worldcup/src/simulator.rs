//! Scoring of strategies against realised outcomes, using the quote of the realised outcome as
//! the payout for a correct guess.

use thiserror::Error;
use tinyrand::Rand;
use tracing::debug;

use tipster::timed::Timed;

use crate::domain::MatchRecord;
use crate::population::UnknownTeam;
use crate::strategy::{CatalogEntry, Strategy};


#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("{0}")]
    UnknownTeam(#[from] UnknownTeam),

    #[error("no trials configured for {0}")]
    NoTrials(Strategy),
}

/// The result of running a strategy once over every record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Trial {
    pub points: f64,
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Summary {
    Single(Trial),
    /// Averages and maxima taken independently across trials.
    Aggregate {
        avg_points: f64,
        max_points: f64,
        avg_correct: f64,
        max_correct: usize,
    },
}
impl Summary {
    pub fn from_trials(trials: &[Trial]) -> Option<Self> {
        match trials {
            [] => None,
            [trial] => Some(Summary::Single(*trial)),
            _ => {
                let count = trials.len() as f64;
                Some(Summary::Aggregate {
                    avg_points: trials.iter().map(|trial| trial.points).sum::<f64>() / count,
                    max_points: trials
                        .iter()
                        .map(|trial| trial.points)
                        .fold(f64::MIN, f64::max),
                    avg_correct: trials.iter().map(|trial| trial.correct).sum::<usize>() as f64
                        / count,
                    max_correct: trials
                        .iter()
                        .map(|trial| trial.correct)
                        .max()
                        .unwrap_or_default(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub entry: CatalogEntry,
    pub summary: Summary,
}

pub fn simulate_one(
    records: &[MatchRecord],
    strategy: &Strategy,
    rand: &mut impl Rand,
) -> Result<Trial, UnknownTeam> {
    let mut trial = Trial::default();
    for record in records {
        let outcome = record.outcome();
        let predicted = strategy.predict(record, rand)?;
        if record.resolve(&predicted) == record.resolve(&outcome) {
            trial.points += record.payout(&outcome);
            trial.correct += 1;
        }
    }
    Ok(trial)
}

/// Runs the entry's strategy for its configured number of trials.
pub fn evaluate(
    records: &[MatchRecord],
    entry: &CatalogEntry,
    rand: &mut impl Rand,
) -> Result<Evaluation, SimulationError> {
    let timed = Timed::result(|| {
        (0..entry.trials)
            .map(|_| simulate_one(records, &entry.strategy, rand))
            .collect::<Result<Vec<_>, _>>()
    })?;
    debug!(
        "ran {} trial(s) of {} in {}s",
        entry.trials,
        entry.strategy,
        timed.elapsed_secs()
    );
    let summary =
        Summary::from_trials(&timed.value).ok_or(SimulationError::NoTrials(entry.strategy))?;
    Ok(Evaluation {
        entry: *entry,
        summary,
    })
}

/// Evaluates every catalog entry in order, stopping at the first error.
pub fn simulate(
    records: &[MatchRecord],
    catalog: &[CatalogEntry],
    rand: &mut impl Rand,
) -> Result<Vec<Evaluation>, SimulationError> {
    catalog
        .iter()
        .map(|entry| evaluate(records, entry, rand))
        .collect()
}
