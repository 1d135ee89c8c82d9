use super::{integer, optional_integer, resource, string};
use crate::error::PagarMeResult;
use pagarme_model::{Model, ModelEnum, ModelKind, PaymentMethod, Value};

/// A recurring billing plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    model: Model,
}

resource!(Plan, ModelKind::Plan, "plans");

impl Plan {
    pub fn name(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "name")
    }

    /// Amount in cents charged every period.
    pub fn amount(&self) -> PagarMeResult<i64> {
        integer(&self.model, "amount")
    }

    /// Billing period length in days.
    pub fn days(&self) -> PagarMeResult<i64> {
        integer(&self.model, "days")
    }

    pub fn trial_days(&self) -> PagarMeResult<i64> {
        integer(&self.model, "trial_days")
    }

    pub fn installments(&self) -> PagarMeResult<i64> {
        integer(&self.model, "installments")
    }

    /// Number of charges, `None` for unlimited.
    pub fn charges(&self) -> PagarMeResult<Option<i64>> {
        optional_integer(&self.model, "charges")
    }

    pub fn color(&self) -> PagarMeResult<Option<String>> {
        string(&self.model, "color")
    }

    pub fn payment_methods(&self) -> PagarMeResult<Vec<PaymentMethod>> {
        let value = self.model.get_declared("payment_methods")?;
        let mut methods = Vec::new();
        for item in value.as_array().unwrap_or_default() {
            if let Some(method) = PaymentMethod::from_value(item)? {
                methods.push(method);
            }
        }
        Ok(methods)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.model.set("name", name.into());
    }

    pub fn set_amount(&mut self, cents: i64) {
        self.model.set("amount", cents);
    }

    pub fn set_days(&mut self, days: i64) {
        self.model.set("days", days);
    }

    pub fn set_trial_days(&mut self, days: i64) {
        self.model.set("trial_days", days);
    }

    pub fn set_charges(&mut self, charges: Option<i64>) {
        self.model.set("charges", charges);
    }

    pub fn set_payment_methods(&mut self, methods: &[PaymentMethod]) {
        let values: Vec<Value> = methods.iter().map(|m| m.to_value()).collect();
        self.model.set("payment_methods", values);
    }
}
