use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use tipster::random;
use tipster_worldcup::strategy::{default_catalog, CatalogEntry, Strategy, DEFAULT_RANDOM_TRIALS};
use tipster_worldcup::{export, flatten, print, simulator};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the results and forecasts from
    #[clap(default_value = "results.json")]
    input: PathBuf,

    /// where to write the flattened records
    #[clap(long, default_value = "flat.csv")]
    flat: PathBuf,

    /// where to write the per-team goal shares
    #[clap(long, default_value = "scores.csv")]
    scores: PathBuf,

    /// number of trials for each randomized strategy
    #[clap(short = 't', long, default_value_t = DEFAULT_RANDOM_TRIALS)]
    trials: usize,

    /// seed for the random source, for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// evaluate only the given strategies (e.g. best-quote, mixed-odds-9-1)
    #[clap(short = 's', long = "strategy", value_parser = parse_strategy)]
    strategies: Vec<Strategy>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.trials == 0 {
            bail!("at least one trial must be run");
        }
        Ok(())
    }

    /// The default catalog, narrowed to the requested strategies. Requested strategies outside
    /// the default catalog are appended.
    fn catalog(&self) -> Vec<CatalogEntry> {
        let mut catalog: Vec<_> = default_catalog(self.trials)
            .into_iter()
            .filter(|entry| self.strategies.is_empty() || self.strategies.contains(&entry.strategy))
            .collect();
        for &strategy in &self.strategies {
            if !catalog.iter().any(|entry| entry.strategy == strategy) {
                catalog.push(CatalogEntry {
                    strategy,
                    trials: if strategy.is_randomized() { self.trials } else { 1 },
                });
            }
        }
        catalog
    }
}
fn parse_strategy(s: &str) -> anyhow::Result<Strategy> {
    Ok(s.parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let doc = flatten::read_from_file(&args.input)?;
    let flattened = flatten::flatten(&doc);
    info!("{} matches overall", flattened.matches_overall);
    info!("{} wins + {} nulls", flattened.tally.wins, flattened.tally.draws);

    export::write_records(&args.flat, &flattened.records)?;
    export::write_team_scores(&args.scores, &flattened.team_scores)?;
    debug!(
        "wrote {} records to {} and {} team scores to {}",
        flattened.records.len(),
        args.flat.display(),
        flattened.team_scores.len(),
        args.scores.display()
    );

    let mut rand = random::seeded(args.seed);
    let catalog = args.catalog();
    let mut evaluations = Vec::with_capacity(catalog.len());
    for entry in &catalog {
        let evaluation = simulator::evaluate(&flattened.records, entry, &mut rand)?;
        info!("---[ {} ]---", entry.strategy);
        for line in print::describe(&evaluation.summary) {
            info!("{line}");
        }
        evaluations.push(evaluation);
    }

    let table = print::tabulate_evaluations(&evaluations);
    info!("evaluations:\n{}", Console::default().render(&table));

    Ok(())
}
