use thiserror::Error;

/// Application-level error type.
/// Boundary failures resolve to `InvalidInput` before the matching core runs;
/// the core itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Synonym table error: {0}")]
    SynonymTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
