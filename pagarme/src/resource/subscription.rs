use super::{enumeration, integer, nested, resource, string};
use super::{Card, Customer, Plan, Resource, Transaction};
use crate::error::PagarMeResult;
use pagarme_model::{Model, ModelKind, PaymentMethod, SubscriptionStatus};

/// A customer's recurring charge against a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    model: Model,
}

resource!(Subscription, ModelKind::Subscription, "subscriptions");

impl Subscription {
    pub fn status(&self) -> PagarMeResult<Option<SubscriptionStatus>> {
        enumeration(&self.model, "status")
    }

    pub fn payment_method(&self) -> PagarMeResult<Option<PaymentMethod>> {
        enumeration(&self.model, "payment_method")
    }

    /// Charges made so far.
    pub fn charges(&self) -> PagarMeResult<i64> {
        integer(&self.model, "charges")
    }

    pub fn plan(&self) -> PagarMeResult<Option<Plan>> {
        nested(&self.model, "plan")
    }

    pub fn card(&self) -> PagarMeResult<Option<Card>> {
        nested(&self.model, "card")
    }

    pub fn customer(&self) -> PagarMeResult<Option<Customer>> {
        nested(&self.model, "customer")
    }

    pub fn current_transaction(&self) -> PagarMeResult<Option<Transaction>> {
        nested(&self.model, "current_transaction")
    }

    pub fn current_period_start(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "current_period_start")
    }

    pub fn current_period_end(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "current_period_end")
    }

    pub fn postback_url(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "postback_url")
    }

    /// Written as `plan_id`.
    pub fn set_plan(&mut self, plan: Plan) {
        self.model.set("plan", plan.into_model());
    }

    /// Written as `card_id`.
    pub fn set_card(&mut self, card: Card) {
        self.model.set("card", card.into_model());
    }

    pub fn set_card_hash(&mut self, card_hash: impl Into<String>) {
        self.model.set("card_hash", card_hash.into());
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.model.set("customer", customer.into_model());
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.model.set("payment_method", method);
    }

    pub fn set_postback_url(&mut self, url: impl Into<String>) {
        self.model.set("postback_url", url.into());
    }
}
