use thiserror::Error;

/// Result type alias using KbError
pub type Result<T> = std::result::Result<T, KbError>;

/// Canonical error taxonomy for kbase operations
///
/// Each variant maps to a stable error code that can be used for
/// programmatic handling and test assertions. The taxonomy is small
/// by design: storage-unavailable failures terminate the command,
/// remote failures are logged and survivable on the init path only,
/// and invalid input is rejected before any write happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KbError {
    /// The underlying SQLite store is unreachable or rejected the operation
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// The remote query engine was unreachable or returned a non-2xx response
    #[error("Remote query engine error: {message}")]
    Remote { message: String },

    /// Input rejected before reaching the store
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Filesystem error (e.g. creating the database directory)
    #[error("I/O error in {operation}: {message}")]
    Io { operation: String, message: String },
}

impl KbError {
    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        KbError::Storage {
            message: message.into(),
        }
    }

    /// Create a remote engine error
    pub fn remote(message: impl Into<String>) -> Self {
        KbError::Remote {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        KbError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        KbError::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error with operation context
    pub fn io(operation: impl Into<String>, err: std::io::Error) -> Self {
        KbError::Io {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            KbError::Storage { .. } => "ERR_STORAGE",
            KbError::Remote { .. } => "ERR_REMOTE",
            KbError::InvalidInput { .. } => "ERR_INVALID_INPUT",
            KbError::Serialization { .. } => "ERR_SERIALIZATION",
            KbError::Io { .. } => "ERR_IO",
        }
    }
}
