//! CSV export of the flattened records and the team score table.

use std::io;
use std::path::Path;

use ordinalizer::Ordinal;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

use tipster::csv::{CsvWriter, Record};

use crate::domain::MatchRecord;
use crate::flatten::TeamScores;

#[derive(Debug, Clone, PartialEq, Ordinal, EnumCount, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RecordColumn {
    TeamA,
    TeamB,
    QuoteA,
    QuoteNull,
    QuoteB,
    ForecastA,
    ForecastB,
    GoalsA,
    GoalsB,
}

impl From<RecordColumn> for usize {
    fn from(column: RecordColumn) -> Self {
        column.ordinal()
    }
}

#[derive(Debug, Clone, PartialEq, Ordinal, EnumCount, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ScoreColumn {
    Team,
    Score,
}

impl From<ScoreColumn> for usize {
    fn from(column: ScoreColumn) -> Self {
        column.ordinal()
    }
}

pub fn to_record(record: &MatchRecord) -> Record {
    let mut row = Record::with_capacity(RecordColumn::COUNT);
    row.set(RecordColumn::TeamA, &record.team_a);
    row.set(RecordColumn::TeamB, &record.team_b);
    row.set(RecordColumn::QuoteA, record.quote_a);
    row.set(RecordColumn::QuoteNull, record.quote_null);
    row.set(RecordColumn::QuoteB, record.quote_b);
    row.set(RecordColumn::ForecastA, record.forecast_a);
    row.set(RecordColumn::ForecastB, record.forecast_b);
    row.set(RecordColumn::GoalsA, record.goals_a);
    row.set(RecordColumn::GoalsB, record.goals_b);
    row
}

pub fn write_records(path: impl AsRef<Path>, records: &[MatchRecord]) -> Result<(), io::Error> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(Record::with_values(RecordColumn::iter()))?;
    for record in records {
        csv.append(to_record(record))?;
    }
    csv.flush()
}

pub fn write_team_scores(path: impl AsRef<Path>, team_scores: &TeamScores) -> Result<(), io::Error> {
    let mut csv = CsvWriter::create(path)?;
    csv.append(Record::with_values(ScoreColumn::iter()))?;
    for (team, score) in team_scores.averages() {
        let mut row = Record::with_capacity(ScoreColumn::COUNT);
        row.set(ScoreColumn::Team, team);
        row.set(ScoreColumn::Score, score);
        csv.append(row)?;
    }
    csv.flush()
}
