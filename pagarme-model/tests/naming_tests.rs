use pagarme_model::friendly_to_key;

#[test]
fn pascal_case_becomes_snake_case() {
    assert_eq!(friendly_to_key("CardHash"), "card_hash");
    assert_eq!(friendly_to_key("PaymentMethod"), "payment_method");
    assert_eq!(friendly_to_key("SoftDescriptor"), "soft_descriptor");
}

#[test]
fn leading_uppercase_gets_no_underscore() {
    assert_eq!(friendly_to_key("Id"), "id");
    assert_eq!(friendly_to_key("Amount"), "amount");
}

#[test]
fn camel_case_becomes_snake_case() {
    assert_eq!(friendly_to_key("postbackUrl"), "postback_url");
}

#[test]
fn every_inner_capital_is_a_boundary() {
    assert_eq!(friendly_to_key("CardID"), "card_i_d");
}

#[test]
fn snake_case_is_unchanged() {
    assert_eq!(friendly_to_key("card_hash"), "card_hash");
}

#[test]
fn empty_name_stays_empty() {
    assert_eq!(friendly_to_key(""), "");
}
