use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
