//! Error types for the model store.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while decoding, coercing or configuring models.
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON text could not be parsed.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A model load was handed JSON whose root is not an object.
    #[error("decode error: expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A value cannot be converted to the declared field type.
    #[error("cannot coerce {found} into {expected}")]
    Coercion {
        expected: &'static str,
        found: String,
    },

    /// A string does not name any member of the declared enum.
    #[error("unknown {enum_name} member: {value:?}")]
    UnknownEnumMember {
        enum_name: &'static str,
        value: String,
    },

    /// The process-wide default service was already initialised.
    #[error("default service already initialised")]
    DefaultServiceAlreadySet,
}

impl ModelError {
    /// Returns true if this error came from a failed type coercion.
    pub fn is_coercion(&self) -> bool {
        matches!(
            self,
            ModelError::Coercion { .. } | ModelError::UnknownEnumMember { .. }
        )
    }
}
