use std::io;
use std::path::PathBuf;

use algos::{Algorithm, SearchError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: no timing recorded for case '{case}' with {algorithm}")]
    MissingTiming { case: String, algorithm: Algorithm },

    #[error("{algorithm} returned {actual} for case '{case}', expected {expected}")]
    Inconsistent {
        case: String,
        algorithm: Algorithm,
        expected: i64,
        actual: i64,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid corpus file '{path}': {source}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, BenchError>;
