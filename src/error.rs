use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("{field} cannot be negative")]
    Negative { field: String },

    #[error("Invalid date for {field}: '{value}'")]
    InvalidDate { field: String, value: String },

    #[error("{field} ends before it starts")]
    InvertedRange { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data access error: {0}")]
    DataAccess(String),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input; rejected before any data access.
    Validation,
    /// The subject record does not exist.
    NotFound,
    /// The record store failed.
    DataAccess,
}

impl RelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelError::BlankField { .. }
            | RelError::NonPositive { .. }
            | RelError::Negative { .. }
            | RelError::InvalidDate { .. }
            | RelError::InvertedRange { .. } => ErrorKind::Validation,
            RelError::NotFound { .. } => ErrorKind::NotFound,
            RelError::Database(_)
            | RelError::Io(_)
            | RelError::Json(_)
            | RelError::DataAccess(_) => ErrorKind::DataAccess,
        }
    }

    pub fn person_not_found(id: impl ToString) -> Self {
        RelError::NotFound {
            entity_type: "Person".into(),
            id: id.to_string(),
        }
    }
}

pub type RelResult<T> = Result<T, RelError>;
