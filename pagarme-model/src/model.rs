//! The model store: snapshot and dirty field maps, decoding and encoding.

use crate::catalog::kind_for_discriminator;
use crate::coerce::coerce;
use crate::error::{ModelError, ModelResult};
use crate::naming::friendly_to_key;
use crate::schema::{FieldType, ModelKind, SerializationRule};
use crate::service::Service;
use crate::value::Value;
use serde_json::Map;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Field name to value.
pub type Fields = BTreeMap<String, Value>;

/// JSON field carrying the model kind.
const DISCRIMINATOR: &str = "object";

/// A Pagar.me object.
///
/// Holds two stores: the snapshot last loaded from the API and the dirty
/// fields written locally since. Reads consult the dirty store first.
/// Loading replaces the snapshot wholesale and clears the dirty store.
#[derive(Debug, Clone)]
pub struct Model {
    kind: ModelKind,
    service: Service,
    base: Fields,
    dirty: Fields,
    loaded: bool,
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.loaded == other.loaded
            && self.base == other.base
            && self.dirty == other.dirty
    }
}

impl Model {
    /// Creates an empty model bound to `service`, or to the process-wide
    /// default service when `None`.
    pub fn new(kind: ModelKind, service: Option<Service>) -> Self {
        Self {
            kind,
            service: Service::or_default(service),
            base: Fields::new(),
            dirty: Fields::new(),
            loaded: false,
        }
    }

    /// Creates a model of `kind` and loads it from JSON text.
    pub fn from_json(kind: ModelKind, service: Option<Service>, json: &str) -> ModelResult<Self> {
        let mut model = Self::new(kind, service);
        model.load_json(json)?;
        Ok(model)
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn service(&self) -> &Service {
        &self.service
    }

    /// True once data has been loaded from a response or another model.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_keys(&self) -> impl Iterator<Item = &str> {
        self.dirty.keys().map(String::as_str)
    }

    /// Fields as last loaded.
    pub fn snapshot(&self) -> &Fields {
        &self.base
    }

    /// Fields written since the last load.
    pub fn changes(&self) -> &Fields {
        &self.dirty
    }

    // ── Loading ──────────────────────────────────────────────────

    /// Parses `json` and loads its root object.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a non-object root, or a declared field
    /// that cannot be coerced. The model is left untouched on failure.
    pub fn load_json(&mut self, json: &str) -> ModelResult<()> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        self.load_json_value(&parsed)
    }

    pub fn load_json_value(&mut self, json: &serde_json::Value) -> ModelResult<()> {
        let object = json
            .as_object()
            .ok_or_else(|| ModelError::NotAnObject(json_type_name(json)))?;
        self.load_object(object)
    }

    /// Loads a JSON object, decoding every property recursively.
    pub fn load_object(&mut self, object: &Map<String, serde_json::Value>) -> ModelResult<()> {
        let fields = object
            .iter()
            .map(|(key, value)| decode(value, &self.service).map(|value| (key.clone(), value)))
            .collect::<ModelResult<Fields>>()?;
        self.load_fields(fields)
    }

    /// Copies another model's snapshot. Nested models stay shared.
    pub fn load_from_model(&mut self, source: &Model) -> ModelResult<()> {
        self.load_fields(source.base.clone())
    }

    /// Replaces the snapshot with `fields` and clears the dirty store.
    ///
    /// Declared fields are coerced to their schema type first.
    pub fn load_fields(&mut self, mut fields: Fields) -> ModelResult<()> {
        for (name, ty) in self.kind.schema().fields {
            if let Some(value) = fields.get_mut(*name) {
                *value = coerce(ty, std::mem::take(value), &self.service)?;
            }
        }

        self.base = fields;
        self.dirty.clear();
        self.loaded = true;

        debug!(
            kind = self.kind.discriminator(),
            fields = self.base.len(),
            "Model loaded"
        );
        Ok(())
    }

    /// Drops every local change, leaving the snapshot as loaded.
    pub fn discard_changes(&mut self) {
        self.dirty.clear();
    }

    // ── Field access ─────────────────────────────────────────────

    /// Raw value of `name`, dirty store first.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.dirty.get(name).or_else(|| self.base.get(name))
    }

    /// Value of `name` coerced to `ty`, or `ty`'s default when absent.
    pub fn get_as(&self, name: &str, ty: &FieldType) -> ModelResult<Value> {
        match self.get(name) {
            Some(value) => coerce(ty, value.clone(), &self.service),
            None => Ok(ty.default_value()),
        }
    }

    /// Value of `name` coerced to the type this model's kind declares for it.
    pub fn get_declared(&self, name: &str) -> ModelResult<Value> {
        let ty = self.kind.schema().field_type(name);
        self.get_as(name, &ty)
    }

    /// Writes `name` to the dirty store.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.dirty.insert(name.into(), value.into());
    }

    /// Reads a field by friendly name (`CardHash` reads `card_hash`).
    pub fn attribute(&self, friendly: &str) -> Option<&Value> {
        self.get(&friendly_to_key(friendly))
    }

    /// Writes a field by friendly name.
    pub fn set_attribute(&mut self, friendly: &str, value: impl Into<Value>) {
        self.set(friendly_to_key(friendly), value);
    }

    /// The `id` field, when present and not null.
    pub fn id(&self) -> Option<&Value> {
        self.get("id").filter(|id| !id.is_null())
    }

    // ── Encoding ─────────────────────────────────────────────────

    /// Exports fields as a JSON map.
    ///
    /// With `include_all` false only dirty fields are exported (the patch
    /// view). Otherwise snapshot and dirty fields are merged and dirty
    /// values win for keys present in both.
    pub fn fields(&self, include_all: bool) -> Map<String, serde_json::Value> {
        let mut exported = Map::new();

        if include_all {
            for (key, value) in &self.base {
                if !self.dirty.contains_key(key) {
                    self.export(key, value, include_all, &mut exported);
                }
            }
        }
        for (key, value) in &self.dirty {
            self.export(key, value, include_all, &mut exported);
        }

        exported
    }

    /// Exported fields as JSON text.
    pub fn to_json(&self, include_all: bool) -> ModelResult<String> {
        Ok(serde_json::to_string(&self.fields(include_all))?)
    }

    fn export(
        &self,
        key: &str,
        value: &Value,
        include_all: bool,
        out: &mut Map<String, serde_json::Value>,
    ) {
        let (referenced, json) = self.encode(key, value, include_all);
        let key = if referenced {
            format!("{key}_id")
        } else {
            key.to_string()
        };
        out.insert(key, json);
    }

    /// Encodes one value of `field`. Returns true when a nested model was
    /// written as its id.
    fn encode(&self, field: &str, value: &Value, include_all: bool) -> (bool, serde_json::Value) {
        let json = match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Enum(e) => serde_json::Value::String(e.member.to_string()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| self.encode(field, item, include_all).1)
                    .collect(),
            ),
            Value::Model(nested) => {
                let rule = self.kind.schema().rule_for(field);
                // Untyped models are always embedded, id or not.
                if nested.kind.has_identity() && rule == SerializationRule::Reference {
                    let id = nested
                        .id()
                        .map_or(serde_json::Value::Null, |id| nested.encode("id", id, include_all).1);
                    return (true, id);
                }
                serde_json::Value::Object(nested.fields(include_all))
            }
        };
        (false, json)
    }
}

/// Decodes a JSON tree into a value.
///
/// Objects become models whose kind comes from their `"object"`
/// discriminator; missing or unregistered discriminators give
/// [`ModelKind::Base`]. Every model is bound to `service`.
pub fn decode(json: &serde_json::Value, service: &Service) -> ModelResult<Value> {
    let value = match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.clone()),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| decode(item, service))
                .collect::<ModelResult<_>>()?,
        ),
        serde_json::Value::Object(object) => {
            let kind = match object.get(DISCRIMINATOR) {
                Some(serde_json::Value::String(name)) => {
                    let kind = kind_for_discriminator(name);
                    if kind == ModelKind::Base {
                        debug!(discriminator = %name, "Unregistered discriminator, using base model");
                    }
                    kind
                }
                _ => {
                    debug!("Object without discriminator, using base model");
                    ModelKind::Base
                }
            };

            let mut model = Model::new(kind, Some(service.clone()));
            model.load_object(object)?;
            Value::Model(Arc::new(model))
        }
    };
    Ok(value)
}

/// Decodes a response body holding one object or an array of objects.
///
/// # Errors
///
/// Fails on malformed JSON or when the root (or any array element) is not
/// an object.
pub fn decode_models(json: &str, service: &Service) -> ModelResult<Vec<Model>> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    let roots: Vec<&serde_json::Value> = match &parsed {
        serde_json::Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    roots
        .into_iter()
        .map(|root| match decode(root, service)? {
            Value::Model(model) => Ok(Arc::unwrap_or_clone(model)),
            _ => Err(ModelError::NotAnObject(json_type_name(root))),
        })
        .collect()
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
