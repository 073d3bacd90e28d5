//! Error types for presence-tracker

use thiserror::Error;

use crate::PersonId;

/// Core error type for roster operations
#[derive(Debug, Error)]
pub enum PresenceError {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PresenceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedData(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PresenceError>;
