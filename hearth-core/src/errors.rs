use thiserror::Error;

/// Result type for Hearth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the marketplace core.
///
/// Lookups by id are not errors: `get`-style operations return
/// `Ok(None)` for a missing record. `NotFound` is reserved for a
/// referenced record that must exist (e.g. the owner on commit).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    #[error("Record not found: {id}")]
    NotFound { id: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Transfer failed: {reason}")]
    Transfer { reason: String },

    #[error("Collaborator error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create a validation error.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error for a required reference.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a forbidden error.
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a transfer error (byte upload against a slot failed).
    pub fn transfer<S: Into<String>>(reason: S) -> Self {
        Self::Transfer {
            reason: reason.into(),
        }
    }

    /// Wrap a collaborator failure without suppressing it.
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }
}
