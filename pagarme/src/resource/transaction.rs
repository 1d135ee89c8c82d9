use super::{
    boolean, enumeration, integer, nested, optional_float, optional_integer, resource, string,
};
use super::{Card, Customer, Resource};
use crate::error::PagarMeResult;
use pagarme_model::{Model, ModelKind, PaymentMethod, TransactionStatus};

/// A payment attempt, by credit card or boleto.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    model: Model,
}

resource!(Transaction, ModelKind::Transaction, "transactions");

impl Transaction {
    pub fn status(&self) -> PagarMeResult<Option<TransactionStatus>> {
        enumeration(&self.model, "status")
    }

    pub fn payment_method(&self) -> PagarMeResult<Option<PaymentMethod>> {
        enumeration(&self.model, "payment_method")
    }

    /// Amount in cents.
    pub fn amount(&self) -> PagarMeResult<i64> {
        integer(&self.model, "amount")
    }

    pub fn paid_amount(&self) -> PagarMeResult<i64> {
        integer(&self.model, "paid_amount")
    }

    pub fn refunded_amount(&self) -> PagarMeResult<i64> {
        integer(&self.model, "refunded_amount")
    }

    pub fn installments(&self) -> PagarMeResult<i64> {
        integer(&self.model, "installments")
    }

    pub fn cost(&self) -> PagarMeResult<Option<f64>> {
        optional_float(&self.model, "cost")
    }

    pub fn antifraud_score(&self) -> PagarMeResult<Option<f64>> {
        optional_float(&self.model, "antifraud_score")
    }

    pub fn subscription_id(&self) -> PagarMeResult<Option<i64>> {
        optional_integer(&self.model, "subscription_id")
    }

    pub fn card(&self) -> PagarMeResult<Option<Card>> {
        nested(&self.model, "card")
    }

    pub fn customer(&self) -> PagarMeResult<Option<Customer>> {
        nested(&self.model, "customer")
    }

    pub fn boleto_url(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "boleto_url")
    }

    pub fn boleto_barcode(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "boleto_barcode")
    }

    pub fn postback_url(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "postback_url")
    }

    pub fn refuse_reason(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "refuse_reason")
    }

    pub fn tid(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "tid")
    }

    pub fn capture(&self) -> PagarMeResult<bool> {
        boolean(&self.model, "capture")
    }

    pub fn set_amount(&mut self, cents: i64) {
        self.model.set("amount", cents);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.model.set("payment_method", method);
    }

    pub fn set_installments(&mut self, installments: i64) {
        self.model.set("installments", installments);
    }

    /// Card data encrypted client-side with the encryption key.
    pub fn set_card_hash(&mut self, card_hash: impl Into<String>) {
        self.model.set("card_hash", card_hash.into());
    }

    /// Charges a stored card. Written as `card_id`.
    pub fn set_card(&mut self, card: Card) {
        self.model.set("card", card.into_model());
    }

    /// Customer data is sent embedded.
    pub fn set_customer(&mut self, customer: Customer) {
        self.model.set("customer", customer.into_model());
    }

    pub fn set_postback_url(&mut self, url: impl Into<String>) {
        self.model.set("postback_url", url.into());
    }

    pub fn set_soft_descriptor(&mut self, descriptor: impl Into<String>) {
        self.model.set("soft_descriptor", descriptor.into());
    }

    /// Authorize only; capture later with [`crate::PagarMe::capture`].
    pub fn set_capture(&mut self, capture: bool) {
        self.model.set("capture", capture);
    }
}
