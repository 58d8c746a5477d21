//! Meshpost CLI - inspect FEM result snapshots

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meshpost::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshpost")]
#[command(
    author,
    version,
    about = "Inspect FEM result snapshots: fields, statistics, user formulas"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a result snapshot
    Info {
        /// Input result file (JSON)
        input: PathBuf,
    },

    /// Print min/avg/max statistics for one result type
    Stats {
        /// Input result file (JSON)
        input: PathBuf,

        /// Result type key (Uabs, U1, U2, U3, Temp, Sabs, MaxPrin, MinPrin, MaxShear)
        #[arg(short, long, default_value = "Sabs")]
        result_type: String,
    },

    /// Evaluate a formula over the result's fields and print its statistics
    Eval {
        /// Input result file (JSON)
        input: PathBuf,

        /// Expression over field names, e.g. "(P1 - P3) / 2"
        expression: String,

        /// Write the per-node values as JSON (default: values are discarded)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Stats { input, result_type } => show_stats(&input, &result_type),
        Commands::Eval {
            input,
            expression,
            output,
        } => eval_formula(&input, &expression, output.as_deref()),
    }
}

fn load_result(input: &PathBuf) -> Result<ResultSet> {
    let file =
        File::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    let result: ResultSet = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse '{}'", input.display()))?;
    result
        .validate()
        .with_context(|| format!("Inconsistent result set in '{}'", input.display()))?;
    Ok(result)
}

fn show_info(input: &PathBuf) -> Result<()> {
    let result = load_result(input)?;

    println!("Nodes: {}", result.node_count());
    let types: Vec<String> = result
        .available_result_types()
        .into_iter()
        .filter(|rt| *rt != ResultType::None)
        .map(|rt| rt.key().to_string())
        .collect();
    println!("Result types: {}", types.join(", "));
    println!(
        "Precomputed stats table: {}",
        if result.stats.is_some() { "yes" } else { "no" }
    );

    let fields = result.field_set()?;
    let mut names: Vec<&str> = fields.names().collect();
    names.sort_unstable();
    println!("Formula fields: {}", names.join(", "));

    Ok(())
}

fn show_stats(input: &PathBuf, type_key: &str) -> Result<()> {
    let result = load_result(input)?;

    let result_type: ResultType = type_key
        .parse()
        .with_context(|| format!("Unknown result type '{type_key}'"))?;

    let values = result
        .scalar_field(result_type)
        .with_context(|| format!("No {type_key} data in '{}'", input.display()))?;
    let stats = SummaryStats::summarize(&values, result_type.unit())?;

    print_stats(&stats);
    Ok(())
}

fn eval_formula(input: &PathBuf, expression: &str, output: Option<&std::path::Path>) -> Result<()> {
    let result = load_result(input)?;
    let fields = result.field_set()?;

    let (values, stats) =
        evaluate_summary(&fields, expression, "").context("Formula evaluation failed")?;

    print_stats(&stats);

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        serde_json::to_writer_pretty(file, &values)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("Wrote {} values to {}", values.len(), path.display());
    }

    Ok(())
}

fn print_stats(stats: &SummaryStats) {
    println!("min: {:.6} {}", stats.min, stats.unit);
    println!("avg: {:.6} {}", stats.avg, stats.unit);
    println!("max: {:.6} {}", stats.max, stats.unit);
}
