//! Error types for the prompttoquery bridge

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, QueryError>;

/// Error type for every stage of the bridge
///
/// Each variant is a distinct outcome a caller can act on: retrying,
/// reconfiguring, or aborting. None of them are retried internally.
#[derive(Error, Debug)]
pub enum QueryError {
    /// No artifact can be named for this os/arch
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// No candidate file exists in any search directory
    #[error(
        "library not found: searched in [{}], looking for [{}]",
        display_paths(searched),
        names.join(", ")
    )]
    LibraryNotFound {
        searched: Vec<PathBuf>,
        names: Vec<String>,
    },

    /// The file exists but the platform loader rejected it
    #[error("failed to load library {}: {reason}", path.display())]
    LibraryLoadFailed { path: PathBuf, reason: String },

    /// A required entry point is absent from the library
    #[error("symbol not found: {symbol}: {reason}")]
    MissingSymbol { symbol: String, reason: String },

    /// The native side reported an error from `InitSDK`
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// The native side reported an error from `GenerateQuery`
    #[error("query generation failed: {0}")]
    QueryGenerationFailed(String),

    /// Malformed or unparseable data at any decode step
    #[error("protocol error: {0}")]
    ProtocolError(String),

    /// The client is not in a valid state for the requested operation
    #[error("invalid client state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// Caller input cannot cross the boundary (e.g. an interior NUL byte)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl QueryError {
    /// Returns a stable numeric code for this error
    ///
    /// The command-line front end uses it as the process exit status.
    pub fn error_code(&self) -> u8 {
        match self {
            QueryError::UnsupportedPlatform(_) => 1,
            QueryError::LibraryNotFound { .. } => 2,
            QueryError::LibraryLoadFailed { .. } => 3,
            QueryError::MissingSymbol { .. } => 4,
            QueryError::InitializationFailed(_) => 5,
            QueryError::QueryGenerationFailed(_) => 6,
            QueryError::ProtocolError(_) => 7,
            QueryError::InvalidState { .. } => 8,
            QueryError::InvalidInput(_) => 9,
        }
    }

    /// Check whether the native side itself reported this error
    ///
    /// Boundary errors carry the component's own message; every other
    /// variant originates in the bridge.
    pub fn is_boundary_error(&self) -> bool {
        matches!(
            self,
            QueryError::InitializationFailed(_) | QueryError::QueryGenerationFailed(_)
        )
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::ProtocolError(err.to_string())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
