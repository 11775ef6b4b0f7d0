use crate::{PLACEHOLDER, RemoteUser, User};

use serde_json::json;

#[test]
fn given_directory_payload_when_deserialized_then_extra_fields_ignored() {
    let payload = json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona" }
    });

    let remote: RemoteUser = serde_json::from_value(payload).unwrap();
    let user = User::from(remote);

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.phone, "1-770-736-8031 x56442");
    assert_eq!(user.address.street, "Kulas Light");
    assert_eq!(user.address.city, "Gwenborough");
    assert_eq!(user.address.zipcode, "92998-3874");
}

#[test]
fn given_minimal_payload_when_converted_then_missing_fields_are_placeholders() {
    let payload = json!({
        "id": 2,
        "name": "Ervin Howell",
        "email": "Shanna@melissa.tv",
        "address": { "city": "Wisokyburgh" }
    });

    let user = User::from(serde_json::from_value::<RemoteUser>(payload).unwrap());

    assert_eq!(user.phone, PLACEHOLDER);
    assert_eq!(user.address.street, PLACEHOLDER);
    assert_eq!(user.address.zipcode, PLACEHOLDER);
    assert_eq!(user.address.city, "Wisokyburgh");
}

#[test]
fn given_payload_without_city_when_deserialized_then_error() {
    let payload = json!({ "id": 3, "name": "X", "email": "x@y.z", "address": {} });
    assert!(serde_json::from_value::<RemoteUser>(payload).is_err());
}
