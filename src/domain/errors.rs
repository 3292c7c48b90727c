// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A single value that breaks more than one constraint.
    #[error("validation error: {}", .0.join(" "))]
    InvalidValue(Vec<String>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Collapses to [`DomainError::Validation`] when there is one message.
    pub fn invalid(mut messages: Vec<String>) -> Self {
        if messages.len() == 1 {
            Self::Validation(messages.remove(0))
        } else {
            Self::InvalidValue(messages)
        }
    }

    /// Messages carried by the error, without the category prefix.
    pub fn messages(&self) -> Vec<&str> {
        match self {
            Self::InvalidValue(messages) => messages.iter().map(String::as_str).collect(),
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::Persistence(msg) => vec![msg.as_str()],
        }
    }

    pub fn message(&self) -> String {
        self.messages().join(" ")
    }
}
