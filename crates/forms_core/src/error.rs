//! Error types for schema construction.

use thiserror::Error;

/// Result type for schema construction.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors detected while building a [`Schema`](crate::Schema).
///
/// These represent programmer errors in the schema definition, not bad form
/// input. A schema that fails to build must be fixed at its definition site;
/// there is no runtime recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The same field name was declared twice
    #[error("duplicate field '{0}' in schema")]
    DuplicateField(String),

    /// A cross-field rule references a field absent from the schema
    #[error("rule on field '{field}' references unknown field '{target}'")]
    DanglingReference {
        /// Field carrying the offending rule
        field: String,
        /// The referenced field that does not exist
        target: String,
    },
}
