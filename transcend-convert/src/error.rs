//! Conversion error types.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised at the configuration/schema boundary.
///
/// These indicate a broken contract between the resource declaration and the
/// converter, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("field `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ConvertError {
    pub(crate) fn mismatch(field: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
            found,
        }
    }
}
