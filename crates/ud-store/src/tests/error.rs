use crate::StoreError;

use std::path::PathBuf;

#[test]
fn given_corrupted_error_when_is_corruption_then_true() {
    let err = StoreError::corrupted("localUsers", "expected value at line 1");
    assert!(err.is_corruption());
    assert!(err.to_string().contains("localUsers"));
}

#[test]
fn given_io_error_when_is_corruption_then_false() {
    let err = StoreError::file_read(
        PathBuf::from("/test"),
        std::io::Error::other("test"),
    );
    assert!(!err.is_corruption());
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StoreError::corrupted("k", "bad"),
        StoreError::file_write(PathBuf::from("/test"), std::io::Error::other("test")),
        StoreError::dir_creation(PathBuf::from("/test"), std::io::Error::other("test")),
    ];

    for err in errors {
        assert!(
            !err.recovery_hint().is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_corrupted_error_when_recovery_hint_then_mentions_reset() {
    let err = StoreError::corrupted("k", "bad");
    assert!(err.recovery_hint().contains("storage reset"));
}

#[test]
fn given_serde_error_when_converted_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err: StoreError = json_err.into();
    assert!(matches!(err, StoreError::Serialization { .. }));
}
