use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::simulator::{Evaluation, Summary};

/// One log line for a single trial, or an average and a maximum line for several.
pub fn describe(summary: &Summary) -> Vec<String> {
    match summary {
        Summary::Single(trial) => {
            vec![format!("guessed {} | {:.2} points", trial.correct, trial.points)]
        }
        Summary::Aggregate {
            avg_points,
            max_points,
            avg_correct,
            max_correct,
        } => vec![
            format!("avg: guessed {avg_correct:.2} | {avg_points:.2} points"),
            format!("max: guessed {max_correct} | {max_points:.2} points"),
        ],
    }
}

pub fn tabulate_evaluations(evaluations: &[Evaluation]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(11)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(11)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Strategy".into(),
                "Trials".into(),
                "Avg guessed".into(),
                "Max guessed".into(),
                "Avg points".into(),
                "Max points".into(),
            ],
        ));
    for evaluation in evaluations {
        let (avg_correct, max_correct, avg_points, max_points) = match evaluation.summary {
            Summary::Single(trial) => (trial.correct as f64, trial.correct, trial.points, trial.points),
            Summary::Aggregate {
                avg_points,
                max_points,
                avg_correct,
                max_correct,
            } => (avg_correct, max_correct, avg_points, max_points),
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", evaluation.entry.strategy).into(),
                format!("{}", evaluation.entry.trials).into(),
                format!("{avg_correct:.2}").into(),
                format!("{max_correct}").into(),
                format!("{avg_points:.2}").into(),
                format!("{max_points:.2}").into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use crate::simulator::Trial;
    use crate::strategy::{CatalogEntry, Strategy};

    use super::*;

    #[test]
    fn describe_single() {
        let summary = Summary::Single(Trial {
            points: 12.3,
            correct: 7,
        });
        assert_eq!(vec!["guessed 7 | 12.30 points".to_string()], describe(&summary));
    }

    #[test]
    fn describe_aggregate() {
        let summary = Summary::Aggregate {
            avg_points: 20.5,
            max_points: 31.0,
            avg_correct: 15.25,
            max_correct: 21,
        };
        assert_eq!(
            vec![
                "avg: guessed 15.25 | 20.50 points".to_string(),
                "max: guessed 21 | 31.00 points".to_string(),
            ],
            describe(&summary)
        );
    }

    #[test]
    fn tabulate_one_row_per_evaluation() {
        let evaluations = vec![
            Evaluation {
                entry: CatalogEntry {
                    strategy: Strategy::Null,
                    trials: 1,
                },
                summary: Summary::Single(Trial {
                    points: 3.0,
                    correct: 1,
                }),
            },
            Evaluation {
                entry: CatalogEntry {
                    strategy: Strategy::Random,
                    trials: 100,
                },
                summary: Summary::Aggregate {
                    avg_points: 2.0,
                    max_points: 4.0,
                    avg_correct: 1.5,
                    max_correct: 3,
                },
            },
        ];
        let table = tabulate_evaluations(&evaluations);
        assert_eq!(6, table.num_cols());
        assert_eq!(3, table.num_rows());
    }
}
