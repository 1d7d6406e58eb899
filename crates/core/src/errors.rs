//! Error types and handling
//!
//! This module provides domain-specific error types for the two stages of a
//! packaging run: reading the manifest and dispatching the external tool.
//! The domain enums are wrapped in the main `NwpackError` enum for unified
//! error handling. Every error here is fatal to the wrapper process; there is
//! no recoverable category and no default substitution for missing data.

use thiserror::Error;

/// Manifest (`package.json`) reading errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file I/O error
    #[error("Failed to read manifest {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest exists but is not valid JSON
    #[error("Failed to parse {path}: {message}")]
    Parsing { path: String, message: String },

    /// Required field missing from an otherwise valid manifest
    #[error("Can't find \"{field}\" in {path}")]
    MissingField { field: String, path: String },
}

/// Dispatch errors: precondition checks and external tool execution
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The package path argument does not resolve to an existing directory
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    /// No manifest file inside the package directory
    #[error("Unable to find \"{path}\" file")]
    MissingManifest { path: String },

    /// The packaging tool's location could not be determined
    #[error("Unable to locate the packaging tool")]
    ToolResolution {
        #[source]
        source: std::io::Error,
    },

    /// The packaging tool could not be launched at all
    #[error("Failed to launch the packaging tool")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// The packaging tool ran but reported failure
    #[error("Something went wrong in running the command: {command}")]
    SubprocessFailure { command: String, code: i32 },
}

/// Main error enum wrapping all domain-specific errors
#[derive(Error, Debug)]
pub enum NwpackError {
    /// Manifest reading errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Convenience type alias for Results with NwpackError
pub type Result<T> = std::result::Result<T, NwpackError>;
