//! Flattening of the nested results/forecast document into [MatchRecord]s, along with per-team
//! goal-share statistics.

use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use tipster::file::ReadJsonFile;
use tipster::lookup::Lookup;

use crate::domain::{MatchRecord, Side};


#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub results: FxHashMap<String, RawResult>,
    pub forecast: RawForecast,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub home: Option<Value>,
    #[serde(default)]
    pub away: Option<Value>,
    #[serde(default)]
    pub quotation: Option<RawQuotation>,
    #[serde(default)]
    pub score: Option<RawScore>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuotation {
    #[serde(default)]
    pub home: Option<Value>,
    #[serde(default)]
    pub away: Option<Value>,
    #[serde(default, rename = "N")]
    pub draw: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScore {
    #[serde(default)]
    pub home: Option<Value>,
    #[serde(default)]
    pub away: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub values: Vec<RawForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastEntry {
    pub id: Value,
    #[serde(default)]
    pub home: Option<Value>,
    #[serde(default)]
    pub away: Option<Value>,
}
impl RawForecastEntry {
    fn key(&self) -> String {
        match &self.id {
            Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

/// Reasons for discarding a candidate record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    #[error("no result for match {0}")]
    MissingResult(String),

    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a number: {value}")]
    NotANumber { field: &'static str, value: String },

    #[error("field {field} is not a string: {value}")]
    NotAString { field: &'static str, value: String },

    #[error("field {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

fn require<'a>(field: &'static str, value: Option<&'a Value>) -> Result<&'a Value, CoercionError> {
    match value {
        None | Some(Value::Null) => Err(CoercionError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn not_a_number(field: &'static str, value: &Value) -> CoercionError {
    CoercionError::NotANumber {
        field,
        value: value.to_string(),
    }
}

fn coerce_team(field: &'static str, value: Option<&Value>) -> Result<String, CoercionError> {
    match require(field, value)? {
        Value::String(team) => Ok(team.clone()),
        other => Err(CoercionError::NotAString {
            field,
            value: other.to_string(),
        }),
    }
}

fn coerce_f64(field: &'static str, value: Option<&Value>) -> Result<f64, CoercionError> {
    let value = require(field, value)?;
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| not_a_number(field, value))
}

fn coerce_i64(field: &'static str, value: Option<&Value>) -> Result<i64, CoercionError> {
    let value = require(field, value)?;
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(|float| float.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| not_a_number(field, value))
}

fn coerce_quote(field: &'static str, value: Option<&Value>) -> Result<f64, CoercionError> {
    let quote = coerce_f64(field, value)?;
    if quote.is_finite() && quote > 0.0 {
        Ok(quote)
    } else {
        Err(CoercionError::OutOfRange {
            field,
            value: quote.to_string(),
        })
    }
}

fn coerce_goals(field: &'static str, value: Option<&Value>) -> Result<u16, CoercionError> {
    let goals = coerce_i64(field, value)?;
    u16::try_from(goals).map_err(|_| CoercionError::OutOfRange {
        field,
        value: goals.to_string(),
    })
}

/// Assembles a record from a forecast entry and its matching result.
pub fn coerce(entry: &RawForecastEntry, result: &RawResult) -> Result<MatchRecord, CoercionError> {
    let quotation = result
        .quotation
        .as_ref()
        .ok_or(CoercionError::MissingField("quotation"))?;
    let score = result
        .score
        .as_ref()
        .ok_or(CoercionError::MissingField("score"))?;
    Ok(MatchRecord {
        team_a: coerce_team("home", result.home.as_ref())?,
        team_b: coerce_team("away", result.away.as_ref())?,
        quote_a: coerce_quote("quotation.home", quotation.home.as_ref())?,
        quote_null: coerce_quote("quotation.N", quotation.draw.as_ref())?,
        quote_b: coerce_quote("quotation.away", quotation.away.as_ref())?,
        forecast_a: coerce_i64("forecast.home", entry.home.as_ref())?,
        forecast_b: coerce_i64("forecast.away", entry.away.as_ref())?,
        goals_a: coerce_goals("score.home", score.home.as_ref())?,
        goals_b: coerce_goals("score.away", score.away.as_ref())?,
    })
}

/// Per-team goal shares, in order of each team's first appearance.
#[derive(Debug, Clone, Default)]
pub struct TeamScores {
    teams: Lookup<String>,
    shares: Vec<Vec<f64>>,
}
impl TeamScores {
    pub fn push(&mut self, team: &str, share: f64) {
        let index = self.teams.index_or_push(team.to_string());
        if index == self.shares.len() {
            self.shares.push(vec![]);
        }
        self.shares[index].push(share);
    }

    /// Records each side's share of the goals, provided at least one goal was scored.
    pub fn push_match(&mut self, record: &MatchRecord) {
        let total = record.total_goals();
        if total > 0 {
            for side in [Side::A, Side::B] {
                let share = record.goals(side) as f64 / total as f64;
                self.push(record.team(side), share);
            }
        }
    }

    pub fn shares(&self, team: &str) -> Option<&[f64]> {
        self.teams
            .index_of(&team.to_string())
            .map(|index| &*self.shares[index])
    }

    /// The mean goal share of each team, as a percentage.
    pub fn averages(&self) -> Vec<(&str, f64)> {
        self.teams
            .iter()
            .zip(&self.shares)
            .map(|(team, shares)| {
                let mean = shares.iter().sum::<f64>() / shares.len() as f64;
                (team.as_str(), 100.0 * mean)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub wins: usize,
    pub draws: usize,
}
impl OutcomeTally {
    pub fn push(&mut self, record: &MatchRecord) {
        if record.is_draw() {
            self.draws += 1;
        } else {
            self.wins += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.draws
    }
}

#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub matches_overall: usize,
    pub records: Vec<MatchRecord>,
    pub team_scores: TeamScores,
    pub tally: OutcomeTally,
}

/// Flattens the document in forecast order, silently skipping entries that cannot be coerced.
pub fn flatten(doc: &RawDocument) -> Flattened {
    let mut flattened = Flattened {
        matches_overall: doc.results.len(),
        records: Vec::with_capacity(doc.forecast.values.len()),
        ..Flattened::default()
    };
    for entry in &doc.forecast.values {
        let key = entry.key();
        let record = doc
            .results
            .get(&key)
            .ok_or_else(|| CoercionError::MissingResult(key.clone()))
            .and_then(|result| coerce(entry, result));
        match record {
            Ok(record) => {
                flattened.team_scores.push_match(&record);
                flattened.tally.push(&record);
                flattened.records.push(record);
            }
            Err(err) => {
                debug!("skipping match {key}: {err}");
            }
        }
    }
    flattened
}

pub fn read_from_file(path: impl AsRef<Path>) -> Result<RawDocument, io::Error> {
    RawDocument::read_json_file(path)
}
