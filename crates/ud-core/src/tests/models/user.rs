use crate::tests::{jane_draft, user};
use crate::{FormField, Provenance, User};

#[test]
fn test_user_from_draft_copies_every_field() {
    let draft = jane_draft();
    let user = User::from_draft(1_700_000_000_000, &draft);

    assert_eq!(user.id, 1_700_000_000_000);
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@x.com");
    assert_eq!(user.phone, "+1 555-1234");
    assert_eq!(user.address.street, "1 Main St");
    assert_eq!(user.address.city, "Springfield");
    assert_eq!(user.address.zipcode, "00001");
    assert_eq!(user.provenance(), Provenance::Local);
}

#[test]
fn test_user_set_field_writes_address_fields() {
    let mut u = user(3, "Clementine Bauch", "McKenziehaven");

    u.set_field(FormField::City, "Gotham");
    u.set_field(FormField::Zip, "12345");
    u.set_field(FormField::Name, "Clem");

    assert_eq!(u.address.city, "Gotham");
    assert_eq!(u.field(FormField::Zip), "12345");
    assert_eq!(u.field(FormField::Name), "Clem");
}

#[test]
fn test_user_json_uses_nested_address() {
    let u = user(1, "Leanne Graham", "Gwenborough");
    let json = serde_json::to_value(&u).unwrap();

    assert_eq!(json["address"]["city"], "Gwenborough");
    assert!(json.get("city").is_none());
}
