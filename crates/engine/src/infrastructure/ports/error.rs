//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Unique key already taken - the store is the final authority on this.
    #[error("{entity_type} already exists: {id}")]
    Conflict {
        entity_type: &'static str,
        id: String,
    },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored data could not be mapped back into a domain value.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a Conflict error with entity type and ID context.
    pub fn conflict(entity_type: &'static str, id: impl ToString) -> Self {
        Self::Conflict {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a Conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to write asset {path}: {message}")]
    Write { path: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Relay access key is not configured")]
    NotConfigured,
    #[error("Relay request failed: {0}")]
    RequestFailed(String),
    #[error("Relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
