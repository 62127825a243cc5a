use thiserror::Error;

/// Scheduler errors
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid scheduling discipline selector: {0}")]
    InvalidDiscipline(u32),

    #[error("Unknown scheduling discipline: {0}")]
    UnknownDiscipline(String),

    #[error("Invalid time quantum: {0} (must be positive)")]
    InvalidQuantum(i64),

    #[error("Round-Robin requires a time quantum")]
    MissingQuantum,

    #[error("Invalid process P{id}: {reason}")]
    InvalidProcess { id: usize, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type SchedulerResult<T> = Result<T, SchedulerError>;
