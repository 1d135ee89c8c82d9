//! Field type descriptors and per-kind model schemas.

use crate::value::Value;

/// Scalar field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Integer,
    Float,
    String,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

/// Declared string members of an enum field.
///
/// Members are matched case-sensitively and exactly.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumTable {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl EnumTable {
    /// Returns the declared member equal to `raw`, if any.
    pub fn member(&'static self, raw: &str) -> Option<&'static str> {
        self.members.iter().copied().find(|m| *m == raw)
    }
}

/// The declared type of a model field.
///
/// Kinds declare these once per field in their [`ModelSchema`]; coercion
/// switches on the descriptor instead of inspecting values at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// No coercion: the stored value is returned as-is.
    Any,
    Primitive(Primitive),
    Enum(&'static EnumTable),
    Array(&'static FieldType),
    /// Null stays null; anything else is coerced to the inner type.
    Optional(&'static FieldType),
    Model(ModelKind),
}

impl FieldType {
    pub const BOOL: FieldType = FieldType::Primitive(Primitive::Bool);
    pub const INTEGER: FieldType = FieldType::Primitive(Primitive::Integer);
    pub const FLOAT: FieldType = FieldType::Primitive(Primitive::Float);
    pub const STRING: FieldType = FieldType::Primitive(Primitive::String);

    /// Human readable name, used in coercion errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Primitive(p) => p.name(),
            Self::Enum(table) => table.name,
            Self::Array(_) => "array",
            Self::Optional(_) => "optional",
            Self::Model(kind) => kind.discriminator(),
        }
    }

    /// Value returned when a field is absent from both stores.
    ///
    /// Numbers and booleans read as zero/false; everything else reads as
    /// null.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Primitive(Primitive::Bool) => Value::Bool(false),
            Self::Primitive(Primitive::Integer) => Value::from(0_i64),
            Self::Primitive(Primitive::Float) => Value::from(0.0_f64),
            _ => Value::Null,
        }
    }
}

/// How a nested model is written when its parent is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationRule {
    /// Write `<field>_id` with the nested model's id.
    Reference,
    /// Write the nested model's own exported fields.
    Embed,
}

/// Closed set of model variants the decoder can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Untyped model used for unregistered or missing discriminators.
    Base,
    Transaction,
    Card,
    Customer,
    Plan,
    Subscription,
}

impl ModelKind {
    /// The `"object"` discriminator value for this kind.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Base => "object",
            Self::Transaction => "transaction",
            Self::Card => "card",
            Self::Customer => "customer",
            Self::Plan => "plan",
            Self::Subscription => "subscription",
        }
    }

    /// Typed kinds carry an `id` and may be written by reference.
    pub fn has_identity(&self) -> bool {
        !matches!(self, Self::Base)
    }

    pub fn schema(&self) -> &'static ModelSchema {
        crate::catalog::schema_for(*self)
    }
}

/// Declarations a kind makes about its fields.
#[derive(Debug)]
pub struct ModelSchema {
    pub kind: ModelKind,
    /// Fields coerced to a declared type whenever the model is loaded.
    pub fields: &'static [(&'static str, FieldType)],
    /// Per-field overrides of the default [`SerializationRule::Reference`].
    pub rules: &'static [(&'static str, SerializationRule)],
}

impl ModelSchema {
    /// Declared type of `field`, or [`FieldType::Any`] if undeclared.
    pub fn field_type(&self, field: &str) -> FieldType {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(FieldType::Any, |(_, ty)| *ty)
    }

    /// Serialization rule for a nested model stored under `field`.
    pub fn rule_for(&self, field: &str) -> SerializationRule {
        self.rules
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(SerializationRule::Reference, |(_, rule)| *rule)
    }
}
