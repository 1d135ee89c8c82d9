//! Shared helpers for model tests.

#![allow(dead_code)]

use pagarme_model::{Model, ModelKind, Service, ServiceConfig};

/// A service bound to test credentials.
pub fn test_service() -> Service {
    Service::new(ServiceConfig::new("ak_test_123", "ek_test_123"))
}

/// Loads `json` into a fresh model of `kind`.
pub fn load(kind: ModelKind, service: &Service, json: &str) -> Model {
    Model::from_json(kind, Some(service.clone()), json).unwrap()
}

/// Loads `json` into a fresh base model.
pub fn load_base(service: &Service, json: &str) -> Model {
    load(ModelKind::Base, service, json)
}
