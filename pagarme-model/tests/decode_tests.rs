mod common;

use common::{load, load_base, test_service};
use pagarme_model::{
    decode, decode_models, CardBrand, Model, ModelEnum, ModelError, ModelKind, TransactionStatus,
    Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

const TRANSACTION_JSON: &str = r#"{
    "object": "transaction",
    "id": 1234,
    "status": "paid",
    "amount": "1000",
    "installments": 3,
    "card": {"object": "card", "id": "card_ci6y", "brand": "visa", "valid": true},
    "metadata": {"order": "A-17"}
}"#;

// ── Polymorphic decoding ─────────────────────────────────────────

#[test]
fn decodes_registered_discriminator_into_typed_kind() {
    let service = test_service();
    let value = decode(&json!({"object": "customer", "name": "Maria"}), &service).unwrap();

    let model = value.as_model().unwrap();
    assert_eq!(model.kind(), ModelKind::Customer);
    assert_eq!(model.get("name"), Some(&Value::from("Maria")));
}

#[test]
fn unknown_discriminator_falls_back_to_base() {
    let service = test_service();
    let value = decode(&json!({"object": "unknown_type", "x": 1}), &service).unwrap();

    let model = value.as_model().unwrap();
    assert_eq!(model.kind(), ModelKind::Base);
    assert_eq!(model.get("x"), Some(&Value::from(1_i64)));
    assert_eq!(model.get("object"), Some(&Value::from("unknown_type")));
}

#[test]
fn missing_discriminator_decodes_as_base() {
    let service = test_service();
    let value = decode(&json!({"street": "Rua Fidalga"}), &service).unwrap();
    assert_eq!(value.as_model().unwrap().kind(), ModelKind::Base);
}

#[test]
fn non_string_discriminator_decodes_as_base() {
    let service = test_service();
    let value = decode(&json!({"object": 7}), &service).unwrap();
    assert_eq!(value.as_model().unwrap().kind(), ModelKind::Base);
}

#[test]
fn scalars_decode_unchanged() {
    let service = test_service();
    assert_eq!(decode(&json!(null), &service).unwrap(), Value::Null);
    assert_eq!(decode(&json!(true), &service).unwrap(), Value::Bool(true));
    assert_eq!(decode(&json!(12), &service).unwrap(), Value::from(12_i64));
    assert_eq!(decode(&json!("abc"), &service).unwrap(), Value::from("abc"));
}

#[test]
fn arrays_decode_element_by_element() {
    let service = test_service();
    let value = decode(&json!([1, "two", {"object": "plan", "id": 3}]), &service).unwrap();

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from(1_i64));
    assert_eq!(items[1], Value::from("two"));
    assert_eq!(items[2].as_model().unwrap().kind(), ModelKind::Plan);
}

// ── Declared coercion on load ────────────────────────────────────

#[test]
fn typed_kind_coerces_declared_fields_on_load() {
    let service = test_service();
    let model = load(ModelKind::Transaction, &service, TRANSACTION_JSON);

    assert_eq!(model.get("status"), Some(&TransactionStatus::Paid.to_value()));
    assert_eq!(model.get("amount"), Some(&Value::from(1000_i64)));
    assert_eq!(model.get("installments"), Some(&Value::from(3_i64)));

    let card = model.get("card").and_then(Value::as_model).unwrap();
    assert_eq!(card.kind(), ModelKind::Card);
    assert_eq!(card.get("brand"), Some(&CardBrand::Visa.to_value()));
}

#[test]
fn undeclared_nested_objects_stay_generic() {
    let service = test_service();
    let model = load(ModelKind::Transaction, &service, TRANSACTION_JSON);

    let metadata = model.get("metadata").and_then(Value::as_model).unwrap();
    assert_eq!(metadata.kind(), ModelKind::Base);
    assert_eq!(metadata.get("order"), Some(&Value::from("A-17")));
}

#[test]
fn nested_models_share_the_parent_service() {
    let service = test_service();
    let model = load(ModelKind::Transaction, &service, TRANSACTION_JSON);

    let card = model.get("card").and_then(Value::as_model).unwrap();
    assert!(card.service().ptr_eq(&service));
    assert!(model.service().ptr_eq(&service));
}

#[test]
fn untyped_nested_model_is_retyped_by_declaration() {
    let service = test_service();
    let model = load(
        ModelKind::Subscription,
        &service,
        r#"{"id": 9, "plan": {"id": 31, "name": "Gold"}}"#,
    );

    let plan = model.get("plan").and_then(Value::as_model).unwrap();
    assert_eq!(plan.kind(), ModelKind::Plan);
    assert_eq!(plan.get("name"), Some(&Value::from("Gold")));
}

#[test]
fn failed_coercion_leaves_model_untouched() {
    let service = test_service();
    let mut model = load(ModelKind::Transaction, &service, r#"{"id": 1, "status": "paid"}"#);
    model.set("amount", 500_i64);

    let err = model
        .load_json(r#"{"id": 1, "status": "teleported"}"#)
        .unwrap_err();

    assert!(matches!(err, ModelError::UnknownEnumMember { .. }));
    assert_eq!(model.get("status"), Some(&TransactionStatus::Paid.to_value()));
    assert!(model.is_dirty());
}

// ── Load lifecycle ───────────────────────────────────────────────

#[test]
fn new_model_is_not_loaded() {
    let model = Model::new(ModelKind::Card, Some(test_service()));
    assert!(!model.is_loaded());
    assert!(model.snapshot().is_empty());
}

#[test]
fn load_marks_loaded_and_clears_dirty() {
    let service = test_service();
    let mut model = Model::new(ModelKind::Base, Some(service));
    model.set("name", "draft");

    model.load_json(r#"{"name": "saved"}"#).unwrap();

    assert!(model.is_loaded());
    assert!(!model.is_dirty());
    assert_eq!(model.get("name"), Some(&Value::from("saved")));
}

#[test]
fn second_load_replaces_snapshot() {
    let service = test_service();
    let mut model = load_base(&service, r#"{"a": 1, "b": 2}"#);

    model.load_json(r#"{"c": 3}"#).unwrap();

    assert_eq!(model.get("a"), None);
    assert_eq!(model.get("b"), None);
    assert_eq!(model.snapshot().len(), 1);
    assert_eq!(model.get("c"), Some(&Value::from(3_i64)));
}

#[test]
fn load_from_model_copies_snapshot_and_shares_nested_models() {
    let service = test_service();
    let source = load(ModelKind::Transaction, &service, TRANSACTION_JSON);

    let mut copy = Model::new(ModelKind::Base, Some(service));
    copy.load_from_model(&source).unwrap();

    assert_eq!(copy.snapshot(), source.snapshot());
    let original_card = source.get("card").and_then(Value::as_model).unwrap();
    let copied_card = copy.get("card").and_then(Value::as_model).unwrap();
    assert!(Arc::ptr_eq(original_card, copied_card));
}

#[test]
fn load_from_model_ignores_source_dirty_fields() {
    let service = test_service();
    let mut source = load_base(&service, r#"{"a": 1}"#);
    source.set("b", 2_i64);

    let mut copy = Model::new(ModelKind::Base, Some(service));
    copy.load_from_model(&source).unwrap();

    assert_eq!(copy.get("b"), None);
    assert!(!copy.is_dirty());
}

#[test]
fn discard_changes_restores_snapshot_view() {
    let service = test_service();
    let mut model = load_base(&service, r#"{"name": "saved"}"#);
    model.set("name", "edited");
    assert_eq!(model.get("name"), Some(&Value::from("edited")));

    model.discard_changes();

    assert_eq!(model.get("name"), Some(&Value::from("saved")));
    assert!(!model.is_dirty());
}

// ── Failures ─────────────────────────────────────────────────────

#[test]
fn malformed_json_is_a_decode_error() {
    let mut model = Model::new(ModelKind::Base, Some(test_service()));
    let err = model.load_json(r#"{"id": 1,"#).unwrap_err();
    assert!(matches!(err, ModelError::Decode(_)));
    assert!(!model.is_loaded());
}

#[test]
fn non_object_root_is_rejected() {
    let mut model = Model::new(ModelKind::Base, Some(test_service()));
    let err = model.load_json("[1, 2]").unwrap_err();
    assert!(matches!(err, ModelError::NotAnObject("array")));
}

// ── Response bodies ──────────────────────────────────────────────

#[test]
fn decode_models_accepts_single_object() {
    let models = decode_models(r#"{"object": "plan", "id": 1}"#, &test_service()).unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].kind(), ModelKind::Plan);
}

#[test]
fn decode_models_accepts_array_of_objects() {
    let json = r#"[{"object": "card", "id": "card_1"}, {"object": "card", "id": "card_2"}]"#;
    let models = decode_models(json, &test_service()).unwrap();

    let ids: Vec<_> = models.iter().map(|m| m.id().cloned()).collect();
    assert_eq!(ids, vec![Some(Value::from("card_1")), Some(Value::from("card_2"))]);
    assert!(models.iter().all(Model::is_loaded));
}

#[test]
fn decode_models_rejects_scalar_elements() {
    let err = decode_models("[1]", &test_service()).unwrap_err();
    assert!(matches!(err, ModelError::NotAnObject("number")));
}

// ── Field access ─────────────────────────────────────────────────

#[test]
fn dirty_value_shadows_snapshot() {
    let service = test_service();
    let mut model = load_base(&service, r#"{"amount": 100}"#);
    model.set("amount", 250_i64);

    assert_eq!(model.get("amount"), Some(&Value::from(250_i64)));
    assert_eq!(model.snapshot().get("amount"), Some(&Value::from(100_i64)));
}

#[test]
fn friendly_names_map_to_snake_case_keys() {
    let service = test_service();
    let mut model = load_base(&service, r#"{"card_hash": "abc"}"#);

    assert_eq!(model.attribute("CardHash"), Some(&Value::from("abc")));

    model.set_attribute("PostbackUrl", "https://example.com/hook");
    assert_eq!(
        model.get("postback_url"),
        Some(&Value::from("https://example.com/hook"))
    );
    assert_eq!(model.dirty_keys().collect::<Vec<_>>(), vec!["postback_url"]);
}

#[test]
fn missing_field_reads_as_type_default() {
    let service = test_service();
    let model = load(ModelKind::Transaction, &service, r#"{"id": 1}"#);

    assert_eq!(model.get_declared("amount").unwrap(), Value::from(0_i64));
    assert_eq!(model.get_declared("status").unwrap(), Value::Null);
    assert_eq!(model.get_declared("anything").unwrap(), Value::Null);
}

#[test]
fn present_null_in_required_field_fails_load() {
    let service = test_service();
    let mut model = load(ModelKind::Transaction, &service, r#"{"id": 1, "amount": 500}"#);

    let err = model.load_json(r#"{"id": 1, "amount": null}"#).unwrap_err();

    assert!(err.is_coercion());
    assert_eq!(model.get("amount"), Some(&Value::from(500_i64)));
}

#[test]
fn present_null_in_optional_field_loads_as_null() {
    let service = test_service();
    let model = load(ModelKind::Transaction, &service, r#"{"id": 1, "antifraud_score": null}"#);
    assert_eq!(model.get_declared("antifraud_score").unwrap(), Value::Null);
}

#[test]
fn id_ignores_null() {
    let service = test_service();
    let model = load_base(&service, r#"{"id": null}"#);
    assert_eq!(model.id(), None);
}
