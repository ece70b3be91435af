//! N-jugs batch runner.
//!
//! Usage:
//!   cargo run --release --bin solve_jugs -- [OPTIONS]
//!
//! Reads a JSON array of `{"name", "capacities", "goal"}` cases, runs every
//! search strategy on each, prints a summary, and writes all results as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use search_games::games::jugs::{cases, load_cases, run_case, CaseReport};
use search_games::search::{Algorithm, SearchConfig, DEFAULT_MAX_DEPTH};
use search_games::Error;

#[derive(Parser, Debug)]
#[command(about = "Solve n-jugs test cases with every search strategy")]
struct Args {
    /// Test-case file
    #[arg(long, short = 'c', default_value = "data/test_cases.json")]
    cases: PathBuf,

    /// Output file for results
    #[arg(long, short = 'o', default_value = "results.json")]
    output: PathBuf,

    /// Print the solution path of every solved case
    #[arg(long)]
    show_paths: bool,

    /// Recursion limit for recursive backtracking
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Stop a strategy once it has explored this many states
    #[arg(long)]
    max_expansions: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("=================================================");
    println!("  N-Jugs Search");
    println!("=================================================");
    println!();

    let mut config = SearchConfig::new().with_max_depth(args.max_depth);
    if let Some(limit) = args.max_expansions {
        config = config.with_max_expansions(limit);
    }
    config.validate().context("invalid search limits")?;

    let test_cases = load_cases(&args.cases)
        .with_context(|| format!("failed to load {}", args.cases.display()))?;
    println!("Loaded {} cases from {}", test_cases.len(), args.cases.display());
    println!("Max depth: {}", config.max_depth);
    match config.max_expansions {
        Some(limit) => println!("Max expansions: {}", limit),
        None => println!("Max expansions: unlimited"),
    }
    println!();

    let pb = ProgressBar::new(test_cases.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} cases ({msg})")
            .context("invalid progress bar template")?
            .progress_chars("=>-"),
    );

    let mut reports = Vec::with_capacity(test_cases.len());
    for case in &test_cases {
        pb.set_message(case.name.clone());
        let report = match run_case(case, &Algorithm::ALL, &config) {
            Ok(report) => report,
            Err(err @ Error::Configuration { .. }) => CaseReport::failed(case, &err),
            Err(err) => {
                pb.abandon();
                return Err(err).with_context(|| format!("case '{}'", case.name));
            }
        };
        reports.push(report);
        pb.inc(1);
    }
    pb.finish_with_message("done");
    println!();

    for report in &reports {
        report.print(args.show_paths);
    }
    println!();

    let failed = reports.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        println!("{} of {} cases could not be run", failed, reports.len());
    }

    println!("Exporting results to {}...", args.output.display());
    cases::save_results(&args.output, &reports)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    println!("Results saved successfully!");

    Ok(())
}
