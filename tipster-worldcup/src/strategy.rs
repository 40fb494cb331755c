//! The catalog of prediction strategies.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;
use tinyrand::Rand;

use tipster::random;

use crate::domain::{MatchRecord, Outcome, Side};
use crate::population;
use crate::population::UnknownTeam;


pub const DEFAULT_RANDOM_TRIALS: usize = 100;

/// Candidate outcomes for quote-based selection, in tie-breaking order.
const QUOTED_OUTCOMES: [Outcome; 3] = [Outcome::Win(Side::A), Outcome::Win(Side::B), Outcome::Draw];

const ANY_OUTCOME: [Outcome; 3] = [Outcome::Draw, Outcome::Win(Side::A), Outcome::Win(Side::B)];

const WIN_OUTCOME: [Outcome; 2] = [Outcome::Win(Side::A), Outcome::Win(Side::B)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    RandomWinOnly,
    Null,
    BestQuote,
    WorstQuote,
    Alphabetical,
    AlphabeticalReversed,
    Forecast,
    PopulationGreatest,
    PopulationSmallest,
    /// Delegates to [Strategy::BestQuote] with probability `odds / (odds + random)`, and to
    /// [Strategy::Random] otherwise. With both weights at zero it always delegates to
    /// [Strategy::Random].
    MixedOdds { odds: u8, random: u8 },
}

impl Strategy {
    pub const CATALOG: [Strategy; 13] = [
        Strategy::Random,
        Strategy::RandomWinOnly,
        Strategy::Null,
        Strategy::BestQuote,
        Strategy::WorstQuote,
        Strategy::Alphabetical,
        Strategy::AlphabeticalReversed,
        Strategy::Forecast,
        Strategy::PopulationGreatest,
        Strategy::PopulationSmallest,
        Strategy::MixedOdds { odds: 9, random: 1 },
        Strategy::MixedOdds { odds: 8, random: 2 },
        Strategy::MixedOdds { odds: 7, random: 3 },
    ];

    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            Strategy::Random | Strategy::RandomWinOnly | Strategy::MixedOdds { .. }
        )
    }

    pub fn predict(&self, record: &MatchRecord, rand: &mut impl Rand) -> Result<Outcome, UnknownTeam> {
        let outcome = match self {
            Strategy::Random => *random::choose(rand, &ANY_OUTCOME),
            Strategy::RandomWinOnly => *random::choose(rand, &WIN_OUTCOME),
            Strategy::Null => Outcome::Draw,
            Strategy::BestQuote => select_by_quote(record, |candidate, incumbent| candidate < incumbent),
            Strategy::WorstQuote => select_by_quote(record, |candidate, incumbent| candidate > incumbent),
            Strategy::Alphabetical => {
                if record.team_a <= record.team_b {
                    Outcome::Win(Side::A)
                } else {
                    Outcome::Win(Side::B)
                }
            }
            Strategy::AlphabeticalReversed => {
                if record.team_a >= record.team_b {
                    Outcome::Win(Side::A)
                } else {
                    Outcome::Win(Side::B)
                }
            }
            Strategy::Forecast => {
                if record.forecast_a > record.forecast_b {
                    Outcome::Win(Side::A)
                } else if record.forecast_a < record.forecast_b {
                    Outcome::Win(Side::B)
                } else {
                    Outcome::Draw
                }
            }
            Strategy::PopulationGreatest => {
                if population::of(&record.team_a)? > population::of(&record.team_b)? {
                    Outcome::Win(Side::A)
                } else {
                    Outcome::Win(Side::B)
                }
            }
            Strategy::PopulationSmallest => {
                if population::of(&record.team_a)? > population::of(&record.team_b)? {
                    Outcome::Win(Side::B)
                } else {
                    Outcome::Win(Side::A)
                }
            }
            Strategy::MixedOdds { odds, random: rnd } => {
                let total = *odds as u64 + *rnd as u64;
                let delegate = if total > 0 && random::odds(rand, *odds as u64, total) {
                    Strategy::BestQuote
                } else {
                    Strategy::Random
                };
                return delegate.predict(record, rand);
            }
        };
        Ok(outcome)
    }
}

/// Selects the quoted outcome that `supersedes` all others, keeping the earlier candidate on ties.
fn select_by_quote(record: &MatchRecord, supersedes: impl Fn(f64, f64) -> bool) -> Outcome {
    let mut selected = QUOTED_OUTCOMES[0];
    let mut selected_quote = record.payout(&selected);
    for candidate in &QUOTED_OUTCOMES[1..] {
        let quote = record.payout(candidate);
        if supersedes(quote, selected_quote) {
            selected = *candidate;
            selected_quote = quote;
        }
    }
    selected
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Random => write!(f, "Random"),
            Strategy::RandomWinOnly => write!(f, "Random (win only)"),
            Strategy::Null => write!(f, "Null"),
            Strategy::BestQuote => write!(f, "Best quote"),
            Strategy::WorstQuote => write!(f, "Worst quote"),
            Strategy::Alphabetical => write!(f, "Alphabetical"),
            Strategy::AlphabeticalReversed => write!(f, "Alphabetical reversed"),
            Strategy::Forecast => write!(f, "Forecast"),
            Strategy::PopulationGreatest => write!(f, "Population greatest"),
            Strategy::PopulationSmallest => write!(f, "Population smallest"),
            Strategy::MixedOdds { odds, random } => write!(f, "Mixed odds ({odds}:{random})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported strategy {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.to_lowercase();
        let strategy = match lowercase.as_str() {
            "random" => Strategy::Random,
            "random-win" => Strategy::RandomWinOnly,
            "null" => Strategy::Null,
            "best-quote" => Strategy::BestQuote,
            "worst-quote" => Strategy::WorstQuote,
            "alphabetical" => Strategy::Alphabetical,
            "alphabetical-reversed" => Strategy::AlphabeticalReversed,
            "forecast" => Strategy::Forecast,
            "population-greatest" => Strategy::PopulationGreatest,
            "population-smallest" => Strategy::PopulationSmallest,
            other => parse_mixed_odds(other).ok_or_else(|| UnknownStrategy(s.to_string()))?,
        };
        Ok(strategy)
    }
}

fn parse_mixed_odds(s: &str) -> Option<Strategy> {
    let (odds, random) = s.strip_prefix("mixed-odds-")?.split_once('-')?;
    let (odds, random) = (odds.parse::<u8>().ok()?, random.parse::<u8>().ok()?);
    if odds as u16 + random as u16 == 0 {
        return None;
    }
    Some(Strategy::MixedOdds { odds, random })
}

/// A strategy paired with the number of trials to run it for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub strategy: Strategy,
    pub trials: usize,
}

/// The full catalog, running each randomized strategy for `random_trials` and every other
/// strategy once.
pub fn default_catalog(random_trials: usize) -> Vec<CatalogEntry> {
    Strategy::CATALOG
        .into_iter()
        .map(|strategy| CatalogEntry {
            strategy,
            trials: if strategy.is_randomized() { random_trials } else { 1 },
        })
        .collect()
}
