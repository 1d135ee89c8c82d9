//! Model store for the Pagar.me SDK.
//!
//! Every object returned by the Pagar.me API flows through [`Model`]:
//! - [`Value`] — the loosely-typed value tree a model stores per field
//! - [`FieldType`] — per-field type descriptors declared by each [`ModelKind`]
//! - [`coerce`] — converts a loose value into a declared field type
//! - [`Model`] — snapshot/dirty field stores, JSON decoding and encoding
//! - [`Service`] — the session context shared by every model in a graph
//!
//! Decoding picks the concrete kind of each nested object from its
//! `"object"` discriminator. Encoding exports either the dirty fields only
//! (the patch view sent on updates) or the merged snapshot and dirty fields.

mod catalog;
mod coerce;
mod enums;
mod error;
mod model;
mod naming;
mod schema;
mod service;
mod value;

pub use catalog::{kind_for_discriminator, REGISTRY};
pub use coerce::coerce;
pub use enums::{CardBrand, ModelEnum, PaymentMethod, SubscriptionStatus, TransactionStatus};
pub use error::{ModelError, ModelResult};
pub use model::{decode, decode_models, Fields, Model};
pub use naming::friendly_to_key;
pub use schema::{EnumTable, FieldType, ModelKind, ModelSchema, Primitive, SerializationRule};
pub use service::{Service, ServiceConfig, DEFAULT_ENDPOINT};
pub use value::{EnumValue, Value};
