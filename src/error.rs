//! Error types for taskboard
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (unknown identifier, bad args)
//! - 4: Operation failed (output serialization)

use thiserror::Error;

use crate::model::TaskId;

/// Exit codes for the taskboard CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskboard operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Epic not found: {0}")]
    EpicNotFound(TaskId),

    #[error("Subtask not found: {0}")]
    SubtaskNotFound(TaskId),

    // Operation failures (exit code 4)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::TaskNotFound(_)
            | Error::EpicNotFound(_)
            | Error::SubtaskNotFound(_) => exit_codes::USER_ERROR,

            // Operation failures
            Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
        }
    }
}
