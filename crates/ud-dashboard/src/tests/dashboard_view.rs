use crate::tests::{FakeDirectory, NOW, remote_users, storage, store_with, user};
use crate::{DashboardError, DashboardView, NotificationKind, ViewState};

use ud_core::{FormField, Provenance};
use ud_client::FETCH_FAILED_MESSAGE;
use ud_store::{KeyValueStorage, LocalRecordStore};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

async fn mounted(store: LocalRecordStore) -> DashboardView {
    let mut view = DashboardView::new(store);
    view.mount(&FakeDirectory::with_users(remote_users())).await;
    view
}

fn names(view: &DashboardView) -> Vec<&str> {
    view.filtered().iter().map(|u| u.name.as_str()).collect()
}

// =========================================================================
// Mount
// =========================================================================

#[test]
fn given_new_view_then_loading() {
    let view = DashboardView::new(store_with(&storage(), &[]));
    assert_that!(view.state(), eq(&ViewState::Loading));
    assert_that!(view.status_message(), some(eq("Loading users...")));
}

#[tokio::test]
async fn given_directory_when_mount_then_loaded_with_merged_list() {
    let storage = storage();
    let view = mounted(store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")])).await;

    assert_that!(view.state(), eq(&ViewState::Loaded));
    assert_that!(
        names(&view),
        eq(&vec!["Leanne Graham", "Ervin Howell", "Jane Doe"])
    );
}

#[tokio::test]
async fn given_server_error_when_mount_then_error_and_no_rows() {
    let storage = storage();
    let mut view = DashboardView::new(store_with(
        &storage,
        &[user(NOW, "Jane Doe", "Springfield")],
    ));

    view.mount(&FakeDirectory::failing(500)).await;

    assert_that!(
        view.state(),
        eq(&ViewState::Error(FETCH_FAILED_MESSAGE.to_string()))
    );
    assert_that!(view.filtered().len(), eq(0));
}

#[tokio::test]
async fn given_corrupted_storage_when_mount_then_error_with_reset_hint() {
    let storage = storage();
    storage.set_item("localUsers", "{broken").unwrap();
    let view = mounted(store_with(&storage, &[])).await;

    match view.state() {
        ViewState::Error(message) => assert!(message.contains("ud storage reset")),
        other => panic!("expected error state, got {other:?}"),
    }
}

// =========================================================================
// Search and hover
// =========================================================================

#[tokio::test]
async fn given_query_when_set_search_then_matches_name_or_city() {
    let storage = storage();
    let mut view = mounted(store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")])).await;

    view.set_search("spring");
    assert_that!(names(&view), eq(&vec!["Jane Doe"]));

    view.set_search("ERVIN");
    assert_that!(names(&view), eq(&vec!["Ervin Howell"]));

    view.set_search("");
    assert_that!(view.filtered().len(), eq(3));
    assert_that!(view.repository().entries().len(), eq(3));
}

#[tokio::test]
async fn given_no_match_when_set_search_then_empty() {
    let mut view = mounted(store_with(&storage(), &[])).await;
    assert_that!(view.status_message(), none());

    view.set_search("zzz");
    assert_that!(view.filtered().len(), eq(0));
    assert_that!(view.status_message(), some(eq("No users found.")));
}

#[tokio::test]
async fn given_hovered_row_then_only_its_actions_visible() {
    let mut view = mounted(store_with(&storage(), &[])).await;

    view.hover(1);
    assert!(view.actions_visible(1));
    assert!(!view.actions_visible(2));

    view.unhover();
    assert!(!view.actions_visible(1));
}

// =========================================================================
// Detail and edit
// =========================================================================

#[tokio::test]
async fn given_row_when_select_then_detail_open_read_only() {
    let mut view = mounted(store_with(&storage(), &[])).await;

    view.select(2).unwrap();

    assert!(view.detail().is_open());
    assert!(!view.detail().is_editing());
    assert_that!(view.detail().title(), some(eq("Ervin Howell")));
}

#[tokio::test]
async fn given_unknown_id_when_select_then_not_found() {
    let mut view = mounted(store_with(&storage(), &[])).await;
    let result = view.select(99);
    assert!(matches!(result, Err(DashboardError::UserNotFound { id: 99, .. })));
}

#[tokio::test]
async fn given_local_user_when_save_edit_then_list_and_storage_updated() {
    let storage = storage();
    let store = store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")]);
    let mut view = mounted(store.clone()).await;

    view.begin_edit(NOW).unwrap();
    view.edit_field(FormField::Name, "Jane Smith").unwrap();
    let provenance = view.save_edit().unwrap();

    assert_that!(provenance, eq(Provenance::Local));
    assert!(!view.detail().is_open());
    assert!(names(&view).contains(&"Jane Smith"));
    assert_that!(store.load().unwrap()[0].name.as_str(), eq("Jane Smith"));

    view.select(NOW).unwrap();
    assert_that!(view.detail().title(), some(eq("Jane Smith")));

    let notifications = view.take_notifications();
    assert_that!(notifications.len(), eq(1));
    assert_that!(notifications[0].kind, eq(NotificationKind::Success));
    assert_that!(
        notifications[0].message.as_str(),
        eq("User updated successfully!")
    );
}

#[tokio::test]
async fn given_storage_corrupted_after_mount_when_save_edit_then_error_notification() {
    let storage = storage();
    let store = store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")]);
    let mut view = mounted(store).await;
    storage.set_item("localUsers", "not json").unwrap();

    view.begin_edit(NOW).unwrap();
    let result = view.save_edit();

    assert!(matches!(result, Err(DashboardError::Store { .. })));
    let notifications = view.take_notifications();
    assert_that!(notifications.len(), eq(1));
    assert_that!(notifications[0].kind, eq(NotificationKind::Error));
    assert!(notifications[0].message.contains("storage reset"));
}

#[tokio::test]
async fn given_remote_user_when_save_edit_then_lost_on_remount() {
    let storage = storage();
    let store = store_with(&storage, &[]);
    let mut view = mounted(store.clone()).await;

    view.begin_edit(1).unwrap();
    view.edit_field(FormField::City, "Elsewhere").unwrap();
    view.save_edit().unwrap();
    assert_that!(view.filtered()[0].address.city.as_str(), eq("Elsewhere"));

    let view = mounted(store).await;
    assert_that!(view.filtered()[0].address.city.as_str(), eq("Gwenborough"));
}

#[tokio::test]
async fn given_edit_in_progress_when_cancel_then_nothing_changes() {
    let mut view = mounted(store_with(&storage(), &[])).await;

    view.begin_edit(1).unwrap();
    view.edit_field(FormField::Name, "Changed").unwrap();
    view.cancel_edit();

    assert!(!view.detail().is_open());
    assert_that!(view.filtered()[0].name.as_str(), eq("Leanne Graham"));
    assert_that!(view.take_notifications().len(), eq(0));
}

#[tokio::test]
async fn given_read_only_detail_when_edit_field_then_invalid_state() {
    let mut view = mounted(store_with(&storage(), &[])).await;
    view.select(1).unwrap();

    let result = view.edit_field(FormField::Name, "Changed");

    assert!(matches!(result, Err(DashboardError::InvalidState { .. })));
}

#[tokio::test]
async fn given_open_modal_when_close_then_reset() {
    let mut view = mounted(store_with(&storage(), &[])).await;
    view.begin_edit(1).unwrap();

    view.close_modal();

    assert!(!view.detail().is_open());
    assert!(!view.detail().is_editing());
    assert_that!(view.detail().draft(), none());
}

// =========================================================================
// Delete
// =========================================================================

#[tokio::test]
async fn given_request_delete_then_confirmation_names_user() {
    let mut view = mounted(store_with(&storage(), &[])).await;

    view.request_delete(2).unwrap();

    let message = view.delete_confirmation().message();
    assert_that!(
        message.as_deref(),
        some(eq("Are you sure you want to permanently delete user: Ervin Howell?"))
    );
}

#[tokio::test]
async fn given_local_user_when_confirm_delete_then_removed_everywhere() {
    let storage = storage();
    let store = store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")]);
    let mut view = mounted(store.clone()).await;

    view.request_delete(NOW).unwrap();
    let deleted = view.confirm_delete().unwrap();

    assert_that!(deleted.id, eq(NOW));
    assert!(!names(&view).contains(&"Jane Doe"));
    assert_that!(store.load().unwrap().len(), eq(0));
    assert!(!view.delete_confirmation().is_open());
}

#[tokio::test]
async fn given_storage_corrupted_after_mount_when_confirm_delete_then_user_kept() {
    let storage = storage();
    let store = store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")]);
    let mut view = mounted(store).await;
    storage.set_item("localUsers", "not json").unwrap();

    view.request_delete(NOW).unwrap();
    let result = view.confirm_delete();

    assert!(matches!(result, Err(DashboardError::Store { .. })));
    assert!(names(&view).contains(&"Jane Doe"));
    let notifications = view.take_notifications();
    assert_that!(notifications[0].kind, eq(NotificationKind::Error));
}

#[tokio::test]
async fn given_remote_user_when_confirm_delete_then_storage_unchanged() {
    let storage = storage();
    let store = store_with(&storage, &[user(NOW, "Jane Doe", "Springfield")]);
    let mut view = mounted(store.clone()).await;
    let before = storage.get_item("localUsers").unwrap();

    view.request_delete(1).unwrap();
    view.confirm_delete().unwrap();

    assert!(!names(&view).contains(&"Leanne Graham"));
    assert_that!(storage.get_item("localUsers").unwrap(), eq(&before));

    let view = mounted(store).await;
    assert!(names(&view).contains(&"Leanne Graham"));
}

#[tokio::test]
async fn given_pending_delete_when_cancel_then_nothing_removed() {
    let mut view = mounted(store_with(&storage(), &[])).await;

    view.request_delete(1).unwrap();
    view.cancel_delete();

    assert!(!view.delete_confirmation().is_open());
    assert_that!(view.filtered().len(), eq(2));
    assert!(matches!(
        view.confirm_delete(),
        Err(DashboardError::InvalidState { .. })
    ));
}
