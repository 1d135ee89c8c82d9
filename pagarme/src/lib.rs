//! Client SDK for the Pagar.me payment gateway.
//!
//! Resources ([`Transaction`], [`Card`], [`Customer`], [`Plan`],
//! [`Subscription`]) are thin typed views over a [`pagarme_model::Model`].
//! The [`PagarMe`] client builds [`Query`]s, hands them to a caller-supplied
//! [`QueryExecutor`] and loads the JSON it returns back into resources.
//!
//! Writes send only the fields changed since the last load:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use pagarme::{PagarMe, PaymentMethod, QueryExecutor, Resource, ServiceConfig, Transaction};
//! # fn run(executor: Arc<dyn QueryExecutor>) -> pagarme::PagarMeResult<()> {
//! let client = PagarMe::new(ServiceConfig::from_env(), executor);
//! let mut transaction = Transaction::new(Some(client.service().clone()));
//! transaction.set_amount(1000);
//! transaction.set_payment_method(PaymentMethod::Boleto);
//! client.save(&mut transaction)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod executor;
mod params;
mod query;
mod resource;

pub use client::PagarMe;
pub use error::{PagarMeError, PagarMeResult};
pub use executor::{Method, QueryExecutor};
pub use params::flatten;
pub use query::Query;
pub use resource::{Card, Customer, Plan, Resource, Subscription, Transaction};

pub use pagarme_model::{
    CardBrand, Model, ModelEnum, ModelError, ModelKind, PaymentMethod, Service, ServiceConfig,
    SubscriptionStatus, TransactionStatus, Value,
};
