//! Query builder.

use crate::error::{PagarMeError, PagarMeResult};
use crate::executor::{Method, QueryExecutor};
use crate::params::flatten;
use pagarme_model::Service;
use serde_json::Map;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A single API request: method, path and form parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    method: Method,
    path: String,
    parameters: BTreeMap<String, String>,
}

impl Query {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.insert(key.into(), value.to_string());
        self
    }

    /// Adds every exported model field as form parameters.
    #[must_use]
    pub fn with_fields(mut self, fields: &Map<String, serde_json::Value>) -> Self {
        self.parameters.extend(flatten(fields));
        self
    }

    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.with_parameter("page", page)
    }

    #[must_use]
    pub fn count(self, count: u32) -> Self {
        self.with_parameter("count", count)
    }

    /// Runs the query with the service's API key and returns the body.
    ///
    /// # Errors
    ///
    /// Returns executor failures unchanged and [`PagarMeError::Api`] when the
    /// body is an error payload.
    pub fn execute(&self, service: &Service, executor: &dyn QueryExecutor) -> PagarMeResult<String> {
        let mut parameters = self.parameters.clone();
        parameters.insert("api_key".to_string(), service.config().api_key.clone());

        debug!(
            method = %self.method,
            path = %self.path,
            parameters = self.parameters.len(),
            "Executing query"
        );
        let body = executor.execute(self.method, &self.path, &parameters)?;

        if let Some(message) = api_error(&body) {
            warn!(method = %self.method, path = %self.path, error = %message, "API returned errors");
            return Err(PagarMeError::Api(message));
        }
        Ok(body)
    }
}

/// Extracts the messages of an `{"errors": [...]}` payload.
fn api_error(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let errors = parsed.get("errors")?.as_array()?;

    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
        .collect();

    if messages.is_empty() {
        Some("request failed".to_string())
    } else {
        Some(messages.join("; "))
    }
}
