use std::{
    collections::BTreeMap,
    hint::black_box,
    time::{Duration, Instant},
};

use algos::{Algorithm, HashParams, Symbol, to_sentinel};
use log::{debug, info};

use crate::{
    config::{BenchConfig, Unit},
    corpus::BenchmarkCase,
    error::{BenchError, Result},
};

/// Accumulated wall-clock time per (case, algorithm) pair.
///
/// Cases are addressed by their index in [`BenchmarkResult::cases`].
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    cases: Vec<BenchmarkCase>,
    trials: usize,
    timings: BTreeMap<(usize, Algorithm), Duration>,
    matches: Vec<Option<usize>>,
}

impl BenchmarkResult {
    pub fn new(cases: Vec<BenchmarkCase>, trials: usize) -> Self {
        let matches = vec![None; cases.len()];
        Self {
            cases,
            trials,
            timings: BTreeMap::new(),
            matches,
        }
    }

    /// Add `elapsed` to the total of `(case, algorithm)`.
    pub fn record(&mut self, case: usize, algorithm: Algorithm, elapsed: Duration) {
        *self.timings.entry((case, algorithm)).or_default() += elapsed;
    }

    pub fn set_match(&mut self, case: usize, position: Option<usize>) {
        self.matches[case] = position;
    }

    pub fn cases(&self) -> &[BenchmarkCase] {
        &self.cases
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn duration(&self, case: usize, algorithm: Algorithm) -> Option<Duration> {
        self.timings.get(&(case, algorithm)).copied()
    }

    pub fn match_position(&self, case: usize) -> Option<usize> {
        self.matches.get(case).copied().flatten()
    }
}

/// Time every algorithm on every case, `config.trials` times each.
///
/// The trials of one (case, algorithm) pair run back to back on the calling
/// thread. Before timing, all algorithms must agree on the match position,
/// and every trial must reproduce it.
pub fn run_benchmarks(cases: &[BenchmarkCase], config: &BenchConfig) -> Result<BenchmarkResult> {
    config.validate()?;
    if cases.is_empty() {
        return Err(BenchError::Configuration(
            "benchmark corpus is empty".to_string(),
        ));
    }

    let mut result = BenchmarkResult::new(cases.to_vec(), config.trials);

    for (index, case) in cases.iter().enumerate() {
        match config.unit {
            Unit::Chars => {
                let text: Vec<char> = case.text.chars().collect();
                let pattern: Vec<char> = case.pattern.chars().collect();
                time_case(index, case, &text, &pattern, config, &mut result)?;
            }
            Unit::Bytes => {
                time_case(
                    index,
                    case,
                    case.text.as_bytes(),
                    case.pattern.as_bytes(),
                    config,
                    &mut result,
                )?;
            }
        }
    }

    Ok(result)
}

fn time_case<S: Symbol>(
    index: usize,
    case: &BenchmarkCase,
    text: &[S],
    pattern: &[S],
    config: &BenchConfig,
    result: &mut BenchmarkResult,
) -> Result<()> {
    let expected = Algorithm::ALL[0].find_symbols(&config.hash, text, pattern);
    for algo in &Algorithm::ALL[1..] {
        let actual = algo.find_symbols(&config.hash, text, pattern);
        check(case, *algo, expected, actual)?;
    }
    result.set_match(index, expected);

    for algo in Algorithm::ALL {
        info!("> Benchmarking Algo: [{}] Case: [{}]", algo, case.id());
        let elapsed = time_trials(case, algo, &config.hash, text, pattern, config.trials, expected)?;
        debug!(
            "{} on {}: {:?} for {} trials",
            algo,
            case.id(),
            elapsed,
            config.trials
        );
        result.record(index, algo, elapsed);
    }

    Ok(())
}

fn time_trials<S: Symbol>(
    case: &BenchmarkCase,
    algo: Algorithm,
    params: &HashParams,
    text: &[S],
    pattern: &[S],
    trials: usize,
    expected: Option<usize>,
) -> Result<Duration> {
    let start = Instant::now();
    for _ in 0..trials {
        let actual = black_box(algo.find_symbols(params, black_box(text), black_box(pattern)));
        check(case, algo, expected, actual)?;
    }
    Ok(start.elapsed())
}

fn check(
    case: &BenchmarkCase,
    algorithm: Algorithm,
    expected: Option<usize>,
    actual: Option<usize>,
) -> Result<()> {
    if actual == expected {
        return Ok(());
    }
    Err(BenchError::Inconsistent {
        case: case.id(),
        algorithm,
        expected: to_sentinel(expected),
        actual: to_sentinel(actual),
    })
}
