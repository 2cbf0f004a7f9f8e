//! Harness Binary
//!
//! Plays all 24 ground truths with the oracle and a chosen candidate and
//! reports whether the candidate is optimal.
//!
//! Options: --strategy, --verbose, --json, --shuffle

use clap::Parser;
use clap::ValueEnum;
use oddball::*;

#[derive(Parser)]
#[command(author, version, about = "Certify an odd-ball strategy against the optimal tree", long_about = None)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = Candidate::Oracle)]
    strategy: Candidate,
    #[arg(short, long, help = "Log every weighing")]
    verbose: bool,
    #[arg(long, help = "Print the report as JSON")]
    json: bool,
    #[arg(long, help = "Shuffle the universe before evaluating")]
    shuffle: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Candidate {
    Oracle,
    Sequential,
}

impl From<Candidate> for Box<dyn Strategy> {
    fn from(candidate: Candidate) -> Self {
        match candidate {
            Candidate::Oracle => Box::new(Oracle),
            Candidate::Sequential => Box::new(Sequential),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let mut items = Item::universe();
    if args.shuffle {
        use rand::seq::SliceRandom;
        items.shuffle(&mut rand::rng());
        log::info!(
            "universe {}",
            items.iter().map(Item::to_string).collect::<Vec<_>>().join(" ")
        );
    }
    let mut harness = Harness::new(items);
    if args.verbose {
        harness = harness.verbose();
    }
    let mut strategy = Box::<dyn Strategy>::from(args.strategy);
    log::info!("testing {}", strategy.name());
    let report = harness.evaluate(&mut strategy)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
