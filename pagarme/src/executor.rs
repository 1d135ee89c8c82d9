//! The seam between the SDK and whatever performs HTTP requests.

use crate::error::PagarMeResult;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performs a request against the Pagar.me API and returns the raw body.
///
/// `path` is relative to the service endpoint (e.g. `transactions/1234`).
/// Implementations should return the body of error responses as well; the
/// SDK turns `{"errors": [...]}` payloads into [`crate::PagarMeError::Api`].
pub trait QueryExecutor: Send + Sync {
    fn execute(
        &self,
        method: Method,
        path: &str,
        parameters: &BTreeMap<String, String>,
    ) -> PagarMeResult<String>;
}

impl<F> QueryExecutor for F
where
    F: Fn(Method, &str, &BTreeMap<String, String>) -> PagarMeResult<String> + Send + Sync,
{
    fn execute(
        &self,
        method: Method,
        path: &str,
        parameters: &BTreeMap<String, String>,
    ) -> PagarMeResult<String> {
        self(method, path, parameters)
    }
}
