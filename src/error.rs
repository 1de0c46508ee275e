//! Error handling for the quickstart application.
//! Defines custom error types and results used throughout the application.

use thiserror::Error;

/// Custom error types for quickstart operations.
///
/// The placeholder engine in [`crate::template`] never fails; every variant here
/// belongs to the surrounding generation steps.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Represents validation failures of the project identifiers
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("file or directory with the name '{path}' already exists")]
    PathExistsError { path: String },

    #[error("failed to create directory {path}: {e}")]
    CreateDirectoryError { path: String, e: std::io::Error },
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("[ERROR] {}", err);
    std::process::exit(1);
}
