//! Field declarations of every model kind and the discriminator registry.

use crate::enums::{CARD_BRAND, PAYMENT_METHOD, SUBSCRIPTION_STATUS, TRANSACTION_STATUS};
use crate::schema::{FieldType, ModelKind, ModelSchema, SerializationRule};

/// Discriminator string to model kind. Fixed at compile time.
pub static REGISTRY: &[(&str, ModelKind)] = &[
    ("object", ModelKind::Base),
    ("transaction", ModelKind::Transaction),
    ("card", ModelKind::Card),
    ("customer", ModelKind::Customer),
    ("plan", ModelKind::Plan),
    ("subscription", ModelKind::Subscription),
];

/// Looks up the kind registered for a discriminator.
///
/// Unregistered discriminators resolve to [`ModelKind::Base`].
pub fn kind_for_discriminator(discriminator: &str) -> ModelKind {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == discriminator)
        .map_or(ModelKind::Base, |(_, kind)| *kind)
}

static PAYMENT_METHOD_FIELD: FieldType = FieldType::Enum(&PAYMENT_METHOD);

static BASE: ModelSchema = ModelSchema {
    kind: ModelKind::Base,
    fields: &[],
    rules: &[],
};

static TRANSACTION: ModelSchema = ModelSchema {
    kind: ModelKind::Transaction,
    fields: &[
        ("id", FieldType::INTEGER),
        ("status", FieldType::Enum(&TRANSACTION_STATUS)),
        ("payment_method", FieldType::Enum(&PAYMENT_METHOD)),
        ("amount", FieldType::INTEGER),
        ("paid_amount", FieldType::INTEGER),
        ("refunded_amount", FieldType::INTEGER),
        ("installments", FieldType::INTEGER),
        ("cost", FieldType::Optional(&FieldType::FLOAT)),
        ("antifraud_score", FieldType::Optional(&FieldType::FLOAT)),
        ("subscription_id", FieldType::Optional(&FieldType::INTEGER)),
        ("card", FieldType::Model(ModelKind::Card)),
        ("customer", FieldType::Model(ModelKind::Customer)),
    ],
    rules: &[("customer", SerializationRule::Embed)],
};

static CARD: ModelSchema = ModelSchema {
    kind: ModelKind::Card,
    fields: &[
        ("brand", FieldType::Enum(&CARD_BRAND)),
        ("valid", FieldType::BOOL),
        ("customer", FieldType::Model(ModelKind::Customer)),
    ],
    rules: &[("customer", SerializationRule::Embed)],
};

static CUSTOMER: ModelSchema = ModelSchema {
    kind: ModelKind::Customer,
    fields: &[("id", FieldType::INTEGER)],
    rules: &[],
};

static PLAN: ModelSchema = ModelSchema {
    kind: ModelKind::Plan,
    fields: &[
        ("id", FieldType::INTEGER),
        ("amount", FieldType::INTEGER),
        ("days", FieldType::INTEGER),
        ("trial_days", FieldType::INTEGER),
        ("installments", FieldType::INTEGER),
        ("charges", FieldType::Optional(&FieldType::INTEGER)),
        ("payment_methods", FieldType::Array(&PAYMENT_METHOD_FIELD)),
    ],
    rules: &[],
};

static SUBSCRIPTION: ModelSchema = ModelSchema {
    kind: ModelKind::Subscription,
    fields: &[
        ("id", FieldType::INTEGER),
        ("status", FieldType::Enum(&SUBSCRIPTION_STATUS)),
        ("payment_method", FieldType::Enum(&PAYMENT_METHOD)),
        ("charges", FieldType::INTEGER),
        ("plan", FieldType::Model(ModelKind::Plan)),
        ("card", FieldType::Model(ModelKind::Card)),
        ("customer", FieldType::Model(ModelKind::Customer)),
        ("current_transaction", FieldType::Model(ModelKind::Transaction)),
    ],
    rules: &[
        ("customer", SerializationRule::Embed),
        ("current_transaction", SerializationRule::Embed),
    ],
};

pub(crate) fn schema_for(kind: ModelKind) -> &'static ModelSchema {
    match kind {
        ModelKind::Base => &BASE,
        ModelKind::Transaction => &TRANSACTION,
        ModelKind::Card => &CARD,
        ModelKind::Customer => &CUSTOMER,
        ModelKind::Plan => &PLAN,
        ModelKind::Subscription => &SUBSCRIPTION,
    }
}
