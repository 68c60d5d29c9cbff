use thiserror::Error;

/// Failures at the edges of the crate: reading files, parsing input formats
/// and loading configuration. Scoring itself never fails.
#[derive(Error, Debug)]
pub enum FaceDvError {
    /// A measurement, batch or config file could not be opened or read.
    #[error("Cannot read file: {0}")]
    Io(#[from] std::io::Error),

    /// Batch input is not well-formed CSV.
    #[error("Bad batch CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Measurement or config input is not a JSON object of the expected shape.
    #[error("Bad JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Scoring parameters or standards that would break the arithmetic.
    #[error("Invalid scoring config: {0}")]
    Config(String),

    /// Input that parsed but holds nothing to score, such as an empty batch.
    #[error("Nothing to score: {0}")]
    Validation(String),
}

pub type FdResult<T> = Result<T, FaceDvError>;
