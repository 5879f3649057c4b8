use std::fmt;
use thiserror::Error;

/// How a lookup that expected exactly one match went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    None,
    Duplicate,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::None => write!(f, "none"),
            Cardinality::Duplicate => write!(f, "duplicate"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BoardEditorError {
    #[error("Configuration error: no usable value for '{key}' in {sources}")]
    Configuration { key: String, sources: String },

    #[error("Configuration error: invalid value for '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("Configuration error: cannot parse config file {path}: {message}")]
    ConfigFile { path: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Lookup error ({cardinality}): expected exactly one entry with {key}=={value} in {response}")]
    LookupCardinality {
        cardinality: Cardinality,
        key: String,
        value: String,
        response: String,
    },

    #[error("{operation} failed with status {status}: {body}")]
    RemoteOperation {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Could not decode {context} as JSON ({message}): {body}")]
    Decode {
        context: String,
        body: String,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoardEditorError {
    pub fn remote(operation: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::RemoteOperation {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by a failed remote call, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteOperation { status, .. } => Some(*status),
            _ => None,
        }
    }
}
