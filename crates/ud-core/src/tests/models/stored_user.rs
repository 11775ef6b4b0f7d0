use crate::tests::user;
use crate::{PLACEHOLDER, StoredUser, User};

use serde_json::json;

#[test]
fn given_flat_wizard_record_when_loaded_then_address_is_nested() {
    let raw = json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "+1 555-1234",
        "street": "1 Main St",
        "city": "Springfield",
        "zip": "00001",
        "id": 1_700_000_000_000_i64
    });

    let user = User::from(serde_json::from_value::<StoredUser>(raw).unwrap());

    assert_eq!(user.address.street, "1 Main St");
    assert_eq!(user.address.city, "Springfield");
    assert_eq!(user.address.zipcode, "00001");
    assert_eq!(user.phone, "+1 555-1234");
}

#[test]
fn given_nested_and_flat_values_when_loaded_then_nested_wins() {
    let raw = json!({
        "id": 1_700_000_000_001_i64,
        "name": "A",
        "email": "a@b.co",
        "city": "Flatville",
        "address": { "city": "Nestedtown" }
    });

    let user = User::from(serde_json::from_value::<StoredUser>(raw).unwrap());

    assert_eq!(user.address.city, "Nestedtown");
}

#[test]
fn given_empty_nested_value_when_loaded_then_falls_back_to_flat() {
    let raw = json!({
        "id": 1_700_000_000_002_i64,
        "name": "A",
        "email": "a@b.co",
        "zip": "99999",
        "address": { "zipcode": "" }
    });

    let user = User::from(serde_json::from_value::<StoredUser>(raw).unwrap());

    assert_eq!(user.address.zipcode, "99999");
}

#[test]
fn given_missing_fields_when_loaded_then_placeholders() {
    let raw = json!({ "id": 1_700_000_000_003_i64, "name": "A", "email": "a@b.co" });

    let user = User::from(serde_json::from_value::<StoredUser>(raw).unwrap());

    assert_eq!(user.phone, PLACEHOLDER);
    assert_eq!(user.address.street, PLACEHOLDER);
    assert_eq!(user.address.city, PLACEHOLDER);
    assert_eq!(user.address.zipcode, PLACEHOLDER);
}

#[test]
fn given_record_without_name_or_email_when_loaded_then_placeholders() {
    let raw = json!({ "id": 1_700_000_000_000_i64, "city": "X" });

    let user = User::from(serde_json::from_value::<StoredUser>(raw).unwrap());

    assert_eq!(user.name, PLACEHOLDER);
    assert_eq!(user.email, PLACEHOLDER);
    assert_eq!(user.address.city, "X");
}

#[test]
fn given_user_when_stored_then_flat_and_nested_forms_agree() {
    let u = user(1_700_000_000_004, "Jane Doe", "Springfield");

    let json = serde_json::to_value(StoredUser::from(&u)).unwrap();

    assert_eq!(json["city"], "Springfield");
    assert_eq!(json["address"]["city"], "Springfield");
    assert_eq!(json["zip"], json["address"]["zipcode"]);
    assert_eq!(json["street"], json["address"]["street"]);
}

#[test]
fn given_unknown_keys_when_applied_then_preserved() {
    let raw = json!({
        "id": 1_700_000_000_005_i64,
        "name": "Old",
        "email": "old@x.com",
        "nickname": "oldie"
    });
    let mut stored: StoredUser = serde_json::from_value(raw).unwrap();
    let mut edited = User::from(stored.clone());
    edited.name = "New".to_string();

    stored.apply(&edited);
    let json = serde_json::to_value(&stored).unwrap();

    assert_eq!(json["name"], "New");
    assert_eq!(json["nickname"], "oldie");
}
