use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use algos::{Algorithm, DEFAULT_BASE, DEFAULT_MODULUS, HashParams, SearchError, to_sentinel};
use clap::Parser;
use log::{debug, info};

/// Example:
/// cargo run --release --bin substring-search -- -t data/article1.txt --pattern "системи ШІ" --measure-time
/// cargo run --release --bin substring-search -- -t data/dna.txt --pattern "GATTACA" -a rk --rk-modulus 1000000007 --bytes
#[derive(Debug, clap::Parser)]
#[command(
    name = "substring-search",
    about = "Run Boyer-Moore, KMP and Rabin-Karp on one pattern and one or more texts"
)]
struct Cli {
    /// Algorithms to run; all three when omitted
    #[arg(short, long = "algo", value_enum)]
    algos: Vec<Algorithm>,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Search raw bytes instead of UTF-8 characters; indices are then byte offsets
    #[arg(long)]
    bytes: bool,

    /// Radix of the Rabin-Karp rolling hash
    #[arg(long = "rk-base", default_value_t = DEFAULT_BASE)]
    rk_base: u64,

    /// Prime modulus of the Rabin-Karp rolling hash
    #[arg(long = "rk-modulus", default_value_t = DEFAULT_MODULUS)]
    rk_modulus: u64,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

/// Text decoded once up front so the timed region only covers the search.
enum Symbols {
    Bytes(Vec<u8>),
    Chars(Vec<char>),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let params = HashParams::new(cli.rk_base, cli.rk_modulus)?;
    let algos = if cli.algos.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algos.clone()
    };

    let raw_pattern = load_pattern(&cli)?;
    if raw_pattern.is_empty() {
        return Err(SearchError::InvalidInput("Pattern must not be empty".to_string()).into());
    }
    let pattern = decode(raw_pattern, cli.bytes, Path::new("<pattern>"))?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithms={:?}, unit={}, rk-base={}, rk-modulus={}",
        algos.iter().map(|a| a.name()).collect::<Vec<_>>(),
        if cli.bytes { "byte" } else { "char" },
        params.base(),
        params.modulus()
    )?;

    for text_path in &cli.texts {
        let text = decode(load_text(text_path)?, cli.bytes, text_path)?;
        info!("searching {:?}", text_path);

        writeln!(out, "text={:?}", text_path)?;

        for &algo in &algos {
            let (result, duration) = run_algorithm(algo, &params, &text, &pattern, cli.measure_time);
            debug!("{} -> {:?}", algo, result);

            writeln!(out, "algorithm={}", algo)?;
            if let Some(d) = duration {
                writeln!(out, "execution_time: {}ns", d.as_nanos())?;
            }
            writeln!(out, "match: {}", to_sentinel(result))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone().into_bytes())
    } else if let Some(ref path) = cli.pattern_file {
        load_text(path)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(path)?)
    }
}

fn decode(raw: Vec<u8>, bytes: bool, origin: &Path) -> Result<Symbols, SearchError> {
    if bytes {
        return Ok(Symbols::Bytes(raw));
    }
    let text = String::from_utf8(raw).map_err(|e| {
        SearchError::InvalidInput(format!(
            "{} is not valid UTF-8 ({}); pass --bytes to search raw bytes",
            origin.display(),
            e
        ))
    })?;
    Ok(Symbols::Chars(text.chars().collect()))
}

fn run_algorithm(
    algo: Algorithm,
    params: &HashParams,
    text: &Symbols,
    pattern: &Symbols,
    measure_time: bool,
) -> (Option<usize>, Option<Duration>) {
    let start = if measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let result = match (text, pattern) {
        (Symbols::Bytes(t), Symbols::Bytes(p)) => algo.find_symbols(params, t, p),
        (Symbols::Chars(t), Symbols::Chars(p)) => algo.find_symbols(params, t, p),
        // both sides are decoded with the same --bytes flag
        _ => unreachable!("text and pattern decoded with different units"),
    };

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
