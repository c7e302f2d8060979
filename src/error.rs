// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Validation failures are the only domain error and are always recoverable.
//! Storage errors only cover the backend failing to read or write; content
//! that cannot be parsed is treated as "no prior data" by the loader.

/// Message shown to the user when numeric form input is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";

/// Application error type surfaced to the UI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("No location selected for the new workout")]
    NoPendingLocation,
}

impl AppError {
    /// Text suitable for an alert shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.user_message().to_string(),
            AppError::NoPendingLocation => "Click on the map to choose a location first".to_string(),
            AppError::Storage(_) => self.to_string(),
        }
    }
}

/// Rejected workout input. No data is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("{field} is missing")]
    MissingField { field: &'static str },

    #[error("Unknown workout type: {0:?}")]
    UnknownKind(String),
}

impl ValidationError {
    /// Text suitable for an alert shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::UnknownKind(_) => "Choose either running or cycling",
            _ => INVALID_INPUT_MESSAGE,
        }
    }

    /// Name of the constraint's field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::NotPositive { field }
            | ValidationError::MissingField { field } => Some(field),
            ValidationError::UnknownKind(_) => None,
        }
    }
}

/// Failure of the key-value storage backend itself.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to open storage directory {path:?}: {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read key {key:?}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write key {key:?}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize workouts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for collection and controller operations.
pub type Result<T> = std::result::Result<T, AppError>;
