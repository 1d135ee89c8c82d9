//! Error types for the SDK layer.

use pagarme_model::ModelError;
use thiserror::Error;

/// Result type for SDK operations.
pub type PagarMeResult<T> = Result<T, PagarMeError>;

/// Errors that can occur while talking to Pagar.me.
#[derive(Debug, Error)]
pub enum PagarMeError {
    /// Decoding or coercing a model failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The query executor could not complete the request.
    #[error("executor error: {0}")]
    Executor(String),

    /// The API answered with an error payload.
    #[error("API error: {0}")]
    Api(String),

    /// The operation needs a resource that was already persisted.
    #[error("{0} has no id")]
    MissingId(&'static str),

    /// The API answered with something other than the expected object.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
