use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{count} sites exceed the enumeration limit of {limit}")]
    TooManySites { count: usize, limit: usize },

    #[error("Solver unavailable: {0}")]
    Solver(#[from] reqwest::Error),

    #[error("Solver returned HTTP {0}")]
    SolverStatus(u16),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
