use std::fmt::Display;

use cqrs_es::AggregateError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Entity not found: {entity}")]
    NotFound { entity: String },

    #[error("Uniqueness conflict: {field}")]
    Uniqueness { field: String },

    #[error("Forbidden action")]
    Forbidden,

    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl Error {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn store(err: impl Display) -> Self {
        Self::Store {
            message: err.to_string(),
        }
    }
}

impl From<AggregateError<Error>> for Error {
    fn from(err: AggregateError<Error>) -> Self {
        match err {
            AggregateError::UserError(err) => err,
            AggregateError::AggregateConflict => Self::Uniqueness {
                field: "version".to_string(),
            },
            other => Self::store(other),
        }
    }
}
