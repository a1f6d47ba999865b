//! Validation errors for binding templates.

use procbind_types::FieldError;
use thiserror::Error;

/// Result type for template validation.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors raised by [`crate::BindTemplate::validate`].
///
/// Validation is first-failure-wins: the first offending row aborts the
/// pass, and `path` pinpoints it as `"<container>[<index>].<field>"`.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A row lacks its standard field block entirely.
    #[error("{path}: standard binding fields are missing")]
    MissingValue { path: String },

    /// A standard field failed its domain rules.
    #[error("{path}: {source}")]
    Field {
        path: String,
        #[source]
        source: FieldError,
    },

    /// An extension field failed the rules of the active schema.
    #[error("{path}: {message}")]
    Extension { path: String, message: String },
}

impl ValidateError {
    /// The field path the error points at.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            ValidateError::MissingValue { path }
            | ValidateError::Field { path, .. }
            | ValidateError::Extension { path, .. } => path,
        }
    }
}
