/// Converts a friendly field name into its storage key.
///
/// Every uppercase letter after the first character starts a new word and is
/// prefixed with an underscore, then the whole name is lowercased:
/// `CardHash` becomes `card_hash`, `PaymentMethod` becomes `payment_method`.
pub fn friendly_to_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            key.push('_');
        }
        key.extend(c.to_lowercase());
    }

    key
}
