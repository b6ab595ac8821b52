use std::io;
use std::path::PathBuf;

use algos::{DEFAULT_BASE, DEFAULT_MODULUS, HashParams};
use bench::{
    BenchConfig, DEFAULT_REPORT_PATH, DEFAULT_TRIALS, Unit, default_corpus, generate_report,
    load_corpus, render_to_file, run_benchmarks, write_summary,
};
use clap::Parser;

/// Example:
/// cargo run --release --bin substring-bench -- --trials 1000 -o substring_search_analysis.md
/// cargo run --release --bin substring-bench -- --corpus corpus.toml --bytes --rk-modulus 1000000007
#[derive(Debug, clap::Parser)]
#[command(
    name = "substring-bench",
    about = "Time Boyer-Moore, KMP and Rabin-Karp over a corpus and write a comparative report"
)]
struct Cli {
    /// Runs per (case, algorithm) pair
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// TOML corpus file; the built-in articles are used when omitted
    #[arg(long, value_name = "CORPUS")]
    corpus: Option<PathBuf>,

    /// Markdown report destination, created or overwritten
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Only print the summary table
    #[arg(long)]
    no_report: bool,

    /// Search UTF-8 bytes instead of characters
    #[arg(long)]
    bytes: bool,

    #[arg(long = "rk-base", default_value_t = DEFAULT_BASE)]
    rk_base: u64,

    #[arg(long = "rk-modulus", default_value_t = DEFAULT_MODULUS)]
    rk_modulus: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = BenchConfig {
        trials: cli.trials,
        hash: HashParams::new(cli.rk_base, cli.rk_modulus)?,
        unit: if cli.bytes { Unit::Bytes } else { Unit::Chars },
    };

    let cases = match cli.corpus {
        Some(ref path) => load_corpus(path)?,
        None => default_corpus(),
    };

    println!("--- Starting Substring Search Benchmark ---");
    println!(
        "> {} cases, {} trials per algorithm, unit={:?}",
        cases.len(),
        config.trials,
        config.unit
    );

    let result = run_benchmarks(&cases, &config)?;
    let report = generate_report(&result)?;

    write_summary(&report, &mut io::stdout().lock())?;

    if !cli.no_report {
        render_to_file(&report, &cli.output)?;
        println!("> Report written to {}", cli.output.display());
    }

    Ok(())
}
