use thiserror::Error;

/// Signals that a container was asked for its value while holding none.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("value is absent")]
pub struct AbsentError;

#[derive(Error, Debug)]
pub enum OptionalError {
    #[error(transparent)]
    Absent(#[from] AbsentError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, OptionalError>;

// Helper conversions
impl From<config::ConfigError> for OptionalError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
