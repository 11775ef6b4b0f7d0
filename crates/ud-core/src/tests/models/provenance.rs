use crate::{LOCAL_ID_THRESHOLD, Provenance};

#[test]
fn given_small_id_when_classified_then_remote() {
    assert_eq!(Provenance::from_id(1), Provenance::Remote);
    assert_eq!(Provenance::from_id(10), Provenance::Remote);
}

#[test]
fn given_threshold_id_when_classified_then_remote() {
    assert_eq!(Provenance::from_id(LOCAL_ID_THRESHOLD), Provenance::Remote);
}

#[test]
fn given_timestamp_id_when_classified_then_local() {
    assert_eq!(Provenance::from_id(1_717_171_717_171), Provenance::Local);
    assert_eq!(Provenance::from_id(LOCAL_ID_THRESHOLD + 1), Provenance::Local);
}

#[test]
fn test_provenance_is_persisted() {
    assert!(Provenance::Local.is_persisted());
    assert!(!Provenance::Remote.is_persisted());
}

#[test]
fn test_provenance_as_str() {
    assert_eq!(Provenance::Remote.as_str(), "remote");
    assert_eq!(Provenance::Local.to_string(), "local");
}
