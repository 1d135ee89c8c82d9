use super::{boolean, enumeration, nested, resource, string};
use super::{Customer, Resource};
use crate::error::PagarMeResult;
use pagarme_model::{CardBrand, Model, ModelKind};

/// A stored credit card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    model: Model,
}

resource!(Card, ModelKind::Card, "cards");

impl Card {
    pub fn brand(&self) -> PagarMeResult<Option<CardBrand>> {
        enumeration(&self.model, "brand")
    }

    pub fn holder_name(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "holder_name")
    }

    pub fn first_digits(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "first_digits")
    }

    pub fn last_digits(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "last_digits")
    }

    pub fn fingerprint(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "fingerprint")
    }

    pub fn country(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "country")
    }

    pub fn expiration_date(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "expiration_date")
    }

    pub fn valid(&self) -> PagarMeResult<bool> {
        boolean(&self.model, "valid")
    }

    pub fn customer(&self) -> PagarMeResult<Option<Customer>> {
        nested(&self.model, "customer")
    }

    pub fn set_card_hash(&mut self, card_hash: impl Into<String>) {
        self.model.set("card_hash", card_hash.into());
    }

    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.model.set("holder_name", name.into());
    }

    /// Expiration as `MMYY`.
    pub fn set_expiration_date(&mut self, mmyy: impl Into<String>) {
        self.model.set("expiration_date", mmyy.into());
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.model.set("customer", customer.into_model());
    }
}
