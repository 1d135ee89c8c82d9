use super::{resource, string};
use crate::error::PagarMeResult;
use pagarme_model::{Model, ModelKind, Value};

/// The buyer behind transactions and subscriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    model: Model,
}

resource!(Customer, ModelKind::Customer, "customers");

impl Customer {
    pub fn name(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "name")
    }

    pub fn email(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "email")
    }

    /// CPF or CNPJ digits.
    pub fn document_number(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "document_number")
    }

    pub fn document_type(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "document_type")
    }

    pub fn gender(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "gender")
    }

    pub fn born_at(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "born_at")
    }

    /// Untyped address object, if any.
    pub fn address(&self) -> Option<&Model> {
        self.model.get("address").and_then(Value::as_model).map(|m| &**m)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.model.set("name", name.into());
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.model.set("email", email.into());
    }

    pub fn set_document_number(&mut self, document: impl Into<String>) {
        self.model.set("document_number", document.into());
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.model.set("gender", gender.into());
    }

    pub fn set_born_at(&mut self, born_at: impl Into<String>) {
        self.model.set("born_at", born_at.into());
    }

    /// Replaces the address with an embedded object.
    pub fn set_address(&mut self, address: Model) {
        self.model.set("address", address);
    }
}
