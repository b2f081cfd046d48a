//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::FieldCategory;

/// Crate result alias
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Generator error type
///
/// A declined overwrite is deliberately absent: it is reported as
/// [`crate::output::WriteOutcome::Skipped`] and never aborts a run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No entity name was supplied
    #[error("Please enter an entity name using the -t option.")]
    MissingRequiredInput,

    /// The overwrite prompt received more than one character
    #[error("Invalid input: only input a single character (received {0:?})")]
    InvalidConfirmationInput(String),

    /// A category already holds its maximum number of fields
    ///
    /// Only raised under [`crate::config::CapacityPolicy::Reject`].
    #[error("{category} fields are limited to {max}; '{field}' was rejected")]
    CapacityExceeded {
        /// Category that is full
        category: FieldCategory,
        /// Field that did not fit
        field: String,
        /// Configured maximum
        max: usize,
    },

    /// A field definition could not be parsed
    #[error("Invalid field definition '{input}': {reason}")]
    InvalidFieldSpec {
        /// Raw input as supplied
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A record referenced a field the schema does not declare
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// A record value does not belong to the field's category
    #[error("Field '{field}' holds {expected} values, got {actual}")]
    ValueMismatch {
        /// Field name
        field: String,
        /// Category declared by the schema
        expected: FieldCategory,
        /// Category of the supplied value
        actual: FieldCategory,
    },

    /// A record was built for a schema with a different field count
    #[error("Record has {actual} fields, the schema declares {expected}")]
    RecordShape {
        /// Field count of the repository's schema
        expected: usize,
        /// Field count of the supplied record
        actual: usize,
    },

    /// A template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// A template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    /// Filesystem failure at an artifact destination
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The confirmation prompt itself failed
    #[error("Confirmation prompt failed: {0}")]
    Prompt(String),
}
