pub mod config;
pub mod corpus;
pub mod error;
pub mod harness;
pub mod report;

pub use config::{BenchConfig, DEFAULT_REPORT_PATH, DEFAULT_TRIALS, Unit};
pub use corpus::{BenchmarkCase, default_corpus, load_corpus, parse_corpus};
pub use error::{BenchError, Result};
pub use harness::{BenchmarkResult, run_benchmarks};
pub use report::{CaseReport, Report, generate_report, render_markdown, render_to_file, write_summary};
