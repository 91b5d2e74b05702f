//! Error types for the Cost & Reward Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation pipeline itself is total (every division is guarded and
//! always produces a numeric result), so these errors only arise at the
//! boundary: loading configuration files and validating input snapshots.

use thiserror::Error;

/// The main error type for the Cost & Reward Allocation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use settlement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured work-hours or lunch window was inconsistent.
    #[error("Invalid work-hours window: {message}")]
    InvalidWorkWindow {
        /// A description of what made the window invalid.
        message: String,
    },

    /// A project in the snapshot contained invalid data.
    #[error("Invalid project '{project_id}': {message}")]
    InvalidProject {
        /// The ID of the invalid project.
        project_id: String,
        /// A description of what made the project invalid.
        message: String,
    },

    /// An allocation in the snapshot contained invalid data.
    #[error("Invalid allocation for member '{member_id}' on project '{project_id}': {message}")]
    InvalidAllocation {
        /// The project the allocation belongs to.
        project_id: String,
        /// The member the allocation assigns.
        member_id: String,
        /// A description of what made the allocation invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
