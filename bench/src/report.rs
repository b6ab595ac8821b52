use std::{
    fmt::Write as _,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use algos::Algorithm;
use log::info;
use tempfile::NamedTempFile;

use crate::{
    corpus::BenchmarkCase,
    error::{BenchError, Result},
    harness::BenchmarkResult,
};

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: BenchmarkCase,
    pub match_position: Option<usize>,
    /// One entry per algorithm, in priority order.
    pub timings: Vec<(Algorithm, Duration)>,
    pub fastest: Algorithm,
    pub fastest_time: Duration,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub trials: usize,
    pub cases: Vec<CaseReport>,
    pub totals: Vec<(Algorithm, Duration)>,
    pub overall: Algorithm,
    pub overall_time: Duration,
    pub narrative: Vec<String>,
}

/// Minimum duration wins; equal durations go to the earlier algorithm.
fn fastest(timings: &[(Algorithm, Duration)]) -> (Algorithm, Duration) {
    timings.iter().fold(
        (Algorithm::ALL[0], Duration::MAX),
        |best, &(algo, time)| {
            if (time, algo) < (best.1, best.0) {
                (algo, time)
            } else {
                best
            }
        },
    )
}

pub fn generate_report(result: &BenchmarkResult) -> Result<Report> {
    let mut cases = Vec::with_capacity(result.cases().len());
    let mut totals: Vec<(Algorithm, Duration)> =
        Algorithm::ALL.iter().map(|&a| (a, Duration::ZERO)).collect();

    for (index, case) in result.cases().iter().enumerate() {
        let mut timings = Vec::with_capacity(Algorithm::ALL.len());
        for (algo, total) in totals.iter_mut() {
            let time = result
                .duration(index, *algo)
                .ok_or_else(|| BenchError::MissingTiming {
                    case: case.id(),
                    algorithm: *algo,
                })?;
            *total += time;
            timings.push((*algo, time));
        }

        let (fastest, fastest_time) = fastest(&timings);
        cases.push(CaseReport {
            case: case.clone(),
            match_position: result.match_position(index),
            timings,
            fastest,
            fastest_time,
        });
    }

    if cases.is_empty() {
        return Err(BenchError::Configuration(
            "cannot report on an empty benchmark".to_string(),
        ));
    }

    let (overall, overall_time) = fastest(&totals);
    let narrative = narrate(&cases, &totals, overall_time);

    Ok(Report {
        trials: result.trials(),
        cases,
        totals,
        overall,
        overall_time,
        narrative,
    })
}

/// Algorithm with the most wins among `cases`, its win count and the number of cases.
fn win_leader<'a>(
    cases: impl Iterator<Item = &'a CaseReport>,
) -> Option<(Algorithm, usize, usize)> {
    let mut wins = [0usize; Algorithm::ALL.len()];
    let mut seen = 0;
    for case in cases {
        seen += 1;
        wins[case.fastest as usize] += 1;
    }
    if seen == 0 {
        return None;
    }
    // max_by_key keeps the last maximum, so walk in reverse priority
    Algorithm::ALL
        .iter()
        .rev()
        .map(|&a| (a, wins[a as usize]))
        .max_by_key(|&(_, count)| count)
        .map(|(a, count)| (a, count, seen))
}

fn narrate(cases: &[CaseReport], totals: &[(Algorithm, Duration)], best_total: Duration) -> Vec<String> {
    let mut lines = Vec::new();

    for &(algo, total) in totals {
        let wins = cases.iter().filter(|c| c.fastest == algo).count();
        let ratio = if best_total.is_zero() {
            1.0
        } else {
            total.as_secs_f64() / best_total.as_secs_f64()
        };
        lines.push(format!(
            "**{}**: fastest in {} of {} cases; total {:.6} s ({:.2}x the fastest total).",
            algo,
            wins,
            cases.len(),
            total.as_secs_f64(),
            ratio
        ));
    }

    if let Some((algo, wins, of)) = win_leader(cases.iter().filter(|c| c.match_position.is_some())) {
        lines.push(format!(
            "For substrings present in the text, {} was fastest in {} of {} cases.",
            algo, wins, of
        ));
    }
    if let Some((algo, wins, of)) = win_leader(cases.iter().filter(|c| c.match_position.is_none())) {
        lines.push(format!(
            "For substrings absent from the text, {} was fastest in {} of {} cases.",
            algo, wins, of
        ));
    }

    lines
}

/// Text labels in first-seen order.
fn text_labels(report: &Report) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for case in &report.cases {
        if !labels.contains(&case.case.text_label.as_str()) {
            labels.push(&case.case.text_label);
        }
    }
    labels
}

fn position(case: &CaseReport) -> String {
    match case.match_position {
        Some(i) => format!("found at {i}"),
        None => "not found".to_string(),
    }
}

pub fn render_markdown(report: &Report) -> String {
    let mut md = String::new();
    let labels = text_labels(report);

    // writing into a String cannot fail
    let _ = writeln!(md, "# Substring search algorithm comparison\n");
    let _ = writeln!(md, "## Task\n");
    let _ = writeln!(
        md,
        "Boyer-Moore, Knuth-Morris-Pratt (KMP) and Rabin-Karp were timed on {} texts \
         with {} (text, substring) cases. Each timing is the total wall-clock time of \
         {} consecutive runs.\n",
        labels.len(),
        report.cases.len(),
        report.trials
    );

    let _ = writeln!(md, "## Results per text\n");
    for label in &labels {
        let _ = writeln!(md, "### {}\n", label);
        for case in report.cases.iter().filter(|c| c.case.text_label == *label) {
            let _ = writeln!(
                md,
                "- Substring '{}' (\"{}\", {}):",
                case.case.pattern_label,
                case.case.pattern,
                position(case)
            );
            for (algo, time) in &case.timings {
                let _ = writeln!(md, "  - {}: {:.6} s", algo, time.as_secs_f64());
            }
        }
        let _ = writeln!(md);
    }

    let _ = writeln!(md, "## Fastest algorithm per substring\n");
    for label in &labels {
        let _ = writeln!(md, "### {}\n", label);
        for case in report.cases.iter().filter(|c| c.case.text_label == *label) {
            let _ = writeln!(
                md,
                "- Substring '{}': {} ({:.6} s)",
                case.case.pattern_label,
                case.fastest,
                case.fastest_time.as_secs_f64()
            );
        }
        let _ = writeln!(md);
    }

    let _ = writeln!(md, "## Overall fastest algorithm\n");
    let _ = writeln!(
        md,
        "- **{}** (total time: {:.6} s)\n",
        report.overall,
        report.overall_time.as_secs_f64()
    );

    let _ = writeln!(md, "## Analysis\n");
    for line in &report.narrative {
        let _ = writeln!(md, "- {}", line);
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Conclusion\n");
    let _ = writeln!(
        md,
        "**{}** is the fastest overall, with a combined {:.6} s across all {} cases.",
        report.overall,
        report.overall_time.as_secs_f64(),
        report.cases.len()
    );

    md
}

/// Write the markdown report to `path`, replacing any existing file.
///
/// The document is staged in a temporary file next to `path` and moved into
/// place only once fully written.
pub fn render_to_file(report: &Report, path: &Path) -> Result<()> {
    let io_err = |source: io::Error| BenchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(io_err)?;
    staged
        .write_all(render_markdown(report).as_bytes())
        .map_err(io_err)?;
    staged.flush().map_err(io_err)?;
    staged.persist(path).map_err(|e| io_err(e.error))?;

    info!("report written to {}", path.display());
    Ok(())
}

/// Console table of every timing, one row per (case, algorithm).
pub fn write_summary(report: &Report, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{:=^80}", " RESULTS SUMMARY ")?;
    writeln!(
        out,
        "{:<14} | {:<14} | {:<12} | {:>12} | {:>12}",
        "Text", "Substring", "Algorithm", "Total (ms)", "Match"
    )?;
    writeln!(out, "{:-^80}", "")?;

    for case in &report.cases {
        for (algo, time) in &case.timings {
            let marker = if *algo == case.fastest { "*" } else { "" };
            writeln!(
                out,
                "{:<14} | {:<14} | {:<12} | {:>12.3} | {:>12}",
                case.case.text_label.chars().take(14).collect::<String>(),
                case.case.pattern_label.chars().take(14).collect::<String>(),
                format!("{}{}", algo, marker),
                time.as_secs_f64() * 1000.0,
                algos::to_sentinel(case.match_position)
            )?;
        }
    }

    writeln!(out, "{:-^80}", "")?;
    writeln!(
        out,
        "Overall fastest: {} ({:.6} s over {} trials per case)",
        report.overall,
        report.overall_time.as_secs_f64(),
        report.trials
    )?;
    writeln!(out, "{:=^80}", " END ")?;
    Ok(())
}
