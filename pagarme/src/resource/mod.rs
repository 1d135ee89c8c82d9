//! Typed views over models of each kind.

mod card;
mod customer;
mod plan;
mod subscription;
mod transaction;

pub use card::Card;
pub use customer::Customer;
pub use plan::Plan;
pub use subscription::Subscription;
pub use transaction::Transaction;

use crate::error::PagarMeResult;
use pagarme_model::{FieldType, Model, ModelEnum, ModelKind, Service, Value};
use std::sync::Arc;

static OPTIONAL_INTEGER: FieldType = FieldType::Optional(&FieldType::INTEGER);
static OPTIONAL_FLOAT: FieldType = FieldType::Optional(&FieldType::FLOAT);
static OPTIONAL_STRING: FieldType = FieldType::Optional(&FieldType::STRING);

/// A Pagar.me object with its own API collection.
pub trait Resource: Sized {
    const KIND: ModelKind;
    /// Collection path, relative to the service endpoint.
    const ENDPOINT: &'static str;

    /// Wraps a model. The model should already be of [`Self::KIND`]; use
    /// [`Resource::from_any`] otherwise.
    fn from_model(model: Model) -> Self;

    fn model(&self) -> &Model;

    fn model_mut(&mut self) -> &mut Model;

    fn into_model(self) -> Model;

    /// Creates an unsaved resource bound to `service`, or to the default
    /// service when `None`.
    fn new(service: Option<Service>) -> Self {
        Self::from_model(Model::new(Self::KIND, service))
    }

    /// Wraps a model of any kind, re-typing it from a snapshot copy when
    /// needed.
    fn from_any(model: Model) -> PagarMeResult<Self> {
        if model.kind() == Self::KIND {
            return Ok(Self::from_model(model));
        }
        let mut typed = Model::new(Self::KIND, Some(model.service().clone()));
        typed.load_from_model(&model)?;
        Ok(Self::from_model(typed))
    }

    /// The id as used in resource paths.
    fn id(&self) -> Option<String> {
        match self.model().id()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

macro_rules! resource {
    ($name:ident, $kind:expr, $endpoint:literal) => {
        impl $crate::resource::Resource for $name {
            const KIND: pagarme_model::ModelKind = $kind;
            const ENDPOINT: &'static str = $endpoint;

            fn from_model(model: pagarme_model::Model) -> Self {
                Self { model }
            }

            fn model(&self) -> &pagarme_model::Model {
                &self.model
            }

            fn model_mut(&mut self) -> &mut pagarme_model::Model {
                &mut self.model
            }

            fn into_model(self) -> pagarme_model::Model {
                self.model
            }
        }
    };
}

pub(crate) use resource;

// ── Typed field readers ──────────────────────────────────────────
//
// Required readers treat a missing field as the type default and a null one
// as a coercion error. Optional readers give `None` for both.

pub(crate) fn integer(model: &Model, name: &str) -> PagarMeResult<i64> {
    Ok(model
        .get_as(name, &FieldType::INTEGER)?
        .as_i64()
        .unwrap_or_default())
}

pub(crate) fn optional_integer(model: &Model, name: &str) -> PagarMeResult<Option<i64>> {
    Ok(model.get_as(name, &OPTIONAL_INTEGER)?.as_i64())
}

pub(crate) fn optional_float(model: &Model, name: &str) -> PagarMeResult<Option<f64>> {
    Ok(model.get_as(name, &OPTIONAL_FLOAT)?.as_f64())
}

pub(crate) fn boolean(model: &Model, name: &str) -> PagarMeResult<bool> {
    Ok(model
        .get_as(name, &FieldType::BOOL)?
        .as_bool()
        .unwrap_or_default())
}

pub(crate) fn string(model: &Model, name: &str) -> PagarMeResult<Option<String>> {
    Ok(model
        .get_as(name, &OPTIONAL_STRING)?
        .as_str()
        .map(str::to_string))
}

pub(crate) fn enumeration<E: ModelEnum>(model: &Model, name: &str) -> PagarMeResult<Option<E>> {
    let value = model.get_as(name, &FieldType::Enum(E::TABLE))?;
    Ok(E::from_value(&value)?)
}

pub(crate) fn nested<R: Resource>(model: &Model, name: &str) -> PagarMeResult<Option<R>> {
    match model.get_as(name, &FieldType::Model(R::KIND))? {
        Value::Model(nested) => Ok(Some(R::from_model(Arc::unwrap_or_clone(nested)))),
        _ => Ok(None),
    }
}
