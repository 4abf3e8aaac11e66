use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the inspection core.
///
/// Unsupported store operations that callers are expected to branch on
/// (e.g. adding to a read-only store) are reported through
/// [`AddResult::NotSupported`](crate::issue::store::AddResult) instead.
#[derive(Debug, Error)]
pub enum InspectError {
    /// A required input was empty
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// The operation is not allowed for the given store capabilities
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Snapshot referenced a control type id we do not know
    #[error("unknown control type id {0}")]
    UnknownControlType(i32),

    /// Flat snapshot whose ids or parent links do not describe a tree
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type Result<T> = std::result::Result<T, InspectError>;
