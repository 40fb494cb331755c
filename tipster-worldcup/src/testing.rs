//! Test fixtures.

use crate::domain::MatchRecord;

/// Builds a record from `(team_a, team_b)`, `(quote_a, quote_null, quote_b)`,
/// `(forecast_a, forecast_b)` and `(goals_a, goals_b)`.
pub fn record(
    teams: (&str, &str),
    quotes: (f64, f64, f64),
    forecast: (i64, i64),
    goals: (u16, u16),
) -> MatchRecord {
    MatchRecord {
        team_a: teams.0.into(),
        team_b: teams.1.into(),
        quote_a: quotes.0,
        quote_null: quotes.1,
        quote_b: quotes.2,
        forecast_a: forecast.0,
        forecast_b: forecast.1,
        goals_a: goals.0,
        goals_b: goals.1,
    }
}
