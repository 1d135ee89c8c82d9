use pagarme::{ModelError, PagarMeError};

#[test]
fn model_errors_display_transparently() {
    let err = PagarMeError::from(ModelError::NotAnObject("array"));
    assert_eq!(format!("{err}"), format!("{}", ModelError::NotAnObject("array")));
}

#[test]
fn api_error_display() {
    let err = PagarMeError::Api("amount inválido".into());
    let msg = format!("{err}");
    assert!(msg.contains("API error"));
    assert!(msg.contains("amount inválido"));
}

#[test]
fn missing_id_names_the_kind() {
    let err = PagarMeError::MissingId("subscription");
    assert_eq!(format!("{err}"), "subscription has no id");
}

#[test]
fn executor_error_display() {
    let err = PagarMeError::Executor("connection reset".into());
    assert!(format!("{err}").contains("connection reset"));
}

#[test]
fn json_errors_surface_through_the_model_layer() {
    let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
    let err = PagarMeError::from(ModelError::from(source));
    assert!(matches!(err, PagarMeError::Model(ModelError::Decode(_))));
}
