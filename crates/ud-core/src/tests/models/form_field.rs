use crate::FormField;

use std::str::FromStr;

#[test]
fn test_form_field_round_trips_through_str() {
    for field in FormField::ALL {
        assert_eq!(FormField::from_str(field.as_str()).unwrap(), field);
    }
}

#[test]
fn test_form_field_accepts_zipcode_alias() {
    assert_eq!(FormField::from_str("zipcode").unwrap(), FormField::Zip);
}

#[test]
fn test_form_field_rejects_unknown() {
    let err = FormField::from_str("website").unwrap_err();
    assert!(err.to_string().contains("website"));
}

#[test]
fn test_form_field_groups_cover_all_fields() {
    let mut grouped: Vec<FormField> = FormField::CONTACT.to_vec();
    grouped.extend(FormField::ADDRESS);
    assert_eq!(grouped, FormField::ALL.to_vec());
}

#[test]
fn test_form_field_labels() {
    assert_eq!(FormField::Zip.label(), "Zip");
    assert_eq!(FormField::Email.label(), "Email");
}
