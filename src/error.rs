//! Errors surfaced by roster operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("player '{0}' already exists")]
    DuplicateName(String),

    #[error("player '{0}' not found")]
    NotFound(String),
}

impl RosterError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
