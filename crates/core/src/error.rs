use thiserror::Error;

/// Errors raised while interpreting domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid lead source: {0}")]
    InvalidSource(String),

    #[error("invalid lead status: {0}")]
    InvalidStatus(String),

    #[error("invalid lead stage: {0}")]
    InvalidStage(String),

    #[error("invalid lead priority: {0}")]
    InvalidPriority(String),

    #[error("invalid message role: {0}")]
    InvalidRole(String),
}
