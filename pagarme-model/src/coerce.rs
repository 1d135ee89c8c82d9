//! Conversion of loose values into declared field types.

use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::schema::{EnumTable, FieldType, ModelKind, Primitive};
use crate::service::Service;
use crate::value::{EnumValue, Value};

/// Coerces `raw` into the `target` field type.
///
/// Values that already have the target shape come back unchanged. Models of
/// another kind are rebuilt as `target`'s kind from a snapshot copy, bound to
/// `service`. Values no rule applies to (e.g. a string declared as a model)
/// are returned unchanged.
///
/// # Errors
///
/// Returns [`ModelError::UnknownEnumMember`] for strings outside an enum's
/// table and [`ModelError::Coercion`] for values that cannot be converted,
/// including null for a non-optional primitive.
pub fn coerce(target: &FieldType, raw: Value, service: &Service) -> ModelResult<Value> {
    match target {
        FieldType::Any => Ok(raw),
        FieldType::Primitive(primitive) => coerce_primitive(*primitive, raw),
        FieldType::Enum(table) => coerce_enum(table, raw),
        FieldType::Array(element) => match raw {
            Value::Array(items) => items
                .into_iter()
                .map(|item| coerce(element, item, service))
                .collect::<ModelResult<Vec<_>>>()
                .map(Value::Array),
            Value::Null => Ok(Value::Null),
            other => Err(mismatch(target, &other)),
        },
        FieldType::Optional(inner) => {
            if raw.is_null() {
                Ok(Value::Null)
            } else {
                coerce(inner, raw, service)
            }
        }
        FieldType::Model(kind) => coerce_model(*kind, raw, service),
    }
}

fn mismatch(target: &FieldType, found: &Value) -> ModelError {
    ModelError::Coercion {
        expected: target.name(),
        found: found.to_string(),
    }
}

pub(crate) fn coerce_enum(table: &'static EnumTable, raw: Value) -> ModelResult<Value> {
    let member = match &raw {
        Value::Null => return Ok(Value::Null),
        Value::Enum(e) if e.table == table => return Ok(Value::Enum(*e)),
        Value::Enum(e) => e.member,
        Value::String(s) => s.as_str(),
        other => return Err(mismatch(&FieldType::Enum(table), other)),
    };

    table
        .member(member)
        .map(|member| Value::Enum(EnumValue { table, member }))
        .ok_or_else(|| ModelError::UnknownEnumMember {
            enum_name: table.name,
            value: member.to_string(),
        })
}

fn coerce_model(kind: ModelKind, raw: Value, service: &Service) -> ModelResult<Value> {
    match raw {
        Value::Model(model) if model.kind() == kind => Ok(Value::Model(model)),
        Value::Model(source) => {
            let mut model = Model::new(kind, Some(service.clone()));
            model.load_from_model(&source)?;
            Ok(model.into())
        }
        other => Ok(other),
    }
}

fn coerce_primitive(primitive: Primitive, raw: Value) -> ModelResult<Value> {
    let target = FieldType::Primitive(primitive);
    let coerced = match (primitive, &raw) {
        (Primitive::Bool, Value::Bool(_)) => Some(raw.clone()),
        (Primitive::Bool, Value::Number(n)) => n.as_f64().map(|f| Value::Bool(f != 0.0)),
        (Primitive::Bool, Value::String(s)) => parse_bool(s).map(Value::Bool),

        (Primitive::Integer, Value::Number(n)) => match n.as_i64() {
            Some(i) => Some(Value::from(i)),
            None => n.as_f64().and_then(integral).map(Value::from),
        },
        (Primitive::Integer, Value::Bool(b)) => Some(Value::from(i64::from(*b))),
        (Primitive::Integer, Value::String(s)) => {
            s.trim().parse::<i64>().ok().map(Value::from)
        }

        (Primitive::Float, Value::Number(_)) => Some(raw.clone()),
        (Primitive::Float, Value::Bool(b)) => Some(Value::from(if *b { 1.0 } else { 0.0 })),
        (Primitive::Float, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::from),

        (Primitive::String, Value::String(_)) => Some(raw.clone()),
        (Primitive::String, Value::Number(n)) => Some(Value::String(n.to_string())),
        (Primitive::String, Value::Bool(b)) => Some(Value::String(b.to_string())),
        (Primitive::String, Value::Enum(e)) => Some(Value::from(e.member)),

        _ => None,
    };

    coerced.ok_or_else(|| mismatch(&target, &raw))
}

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Whole floats that fit an `i64`.
fn integral(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}
