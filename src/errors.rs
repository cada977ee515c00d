use thiserror::Error;

use crate::domain::errors::{FetchError, ValidationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status: 2 for rejected input, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }
}
