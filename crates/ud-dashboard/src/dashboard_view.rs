use crate::{
    DashboardError, DashboardResult, DeleteConfirmation, DetailModal, Notification, UserDirectory,
    UserRepository,
};

use ud_core::{FormField, Provenance, User, UserId, matches_query};
use ud_store::LocalRecordStore;

use log::{debug, info, warn};

pub const LOADING_MESSAGE: &str = "Loading users...";
pub const NO_USERS_MESSAGE: &str = "No users found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded,
}

/// The user list page.
///
/// Starts in `Loading`; [`mount`](Self::mount) settles it into `Loaded` or
/// `Error`. The filtered list is derived from the repository and the
/// search text and is recomputed whenever either changes.
pub struct DashboardView {
    repository: UserRepository,
    state: ViewState,
    search: String,
    filtered: Vec<User>,
    hovered: Option<UserId>,
    detail: DetailModal,
    delete: DeleteConfirmation,
    notifications: Vec<Notification>,
}

impl DashboardView {
    pub fn new(store: LocalRecordStore) -> Self {
        Self {
            repository: UserRepository::new(store),
            state: ViewState::Loading,
            search: String::new(),
            filtered: Vec::new(),
            hovered: None,
            detail: DetailModal::default(),
            delete: DeleteConfirmation::default(),
            notifications: Vec::new(),
        }
    }

    pub async fn mount<D>(&mut self, directory: &D)
    where
        D: UserDirectory + ?Sized,
    {
        self.state = ViewState::Loading;
        self.state = match self.repository.load(directory).await {
            Ok(()) => ViewState::Loaded,
            Err(e) => ViewState::Error(e.user_message()),
        };
        self.refresh();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Text shown in place of the table, if any.
    pub fn status_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Loading => Some(LOADING_MESSAGE),
            ViewState::Error(message) => Some(message.as_str()),
            ViewState::Loaded if self.filtered.is_empty() => Some(NO_USERS_MESSAGE),
            ViewState::Loaded => None,
        }
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }

    pub(crate) fn repository_mut(&mut self) -> &mut UserRepository {
        &mut self.repository
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.refresh();
    }

    /// Users matching the current search, in list order.
    pub fn filtered(&self) -> &[User] {
        &self.filtered
    }

    pub fn hover(&mut self, id: UserId) {
        self.hovered = Some(id);
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    /// Edit/delete affordances are shown only on the hovered row.
    pub fn actions_visible(&self, id: UserId) -> bool {
        self.hovered == Some(id)
    }

    pub fn detail(&self) -> &DetailModal {
        &self.detail
    }

    /// Row click: open the read-only detail modal.
    pub fn select(&mut self, id: UserId) -> DashboardResult<()> {
        let user = self.find(id)?;
        self.detail.open(user);
        Ok(())
    }

    /// Edit affordance: open the modal in edit mode with a draft copy.
    pub fn begin_edit(&mut self, id: UserId) -> DashboardResult<()> {
        let user = self.find(id)?;
        self.detail.open_edit(user);
        Ok(())
    }

    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) -> DashboardResult<()> {
        let draft = self
            .detail
            .draft_mut()
            .ok_or_else(|| DashboardError::invalid_state("No user is being edited"))?;
        draft.set_field(field, value);
        Ok(())
    }

    /// Commit the draft and close the modal.
    pub fn save_edit(&mut self) -> DashboardResult<Provenance> {
        let draft = self
            .detail
            .take_draft()
            .ok_or_else(|| DashboardError::invalid_state("No user is being edited"))?;
        let result = self.repository.update(draft);
        self.detail.close();

        let provenance = self.notify_failure(result)?;
        self.refresh();
        self.notify(Notification::success("User updated successfully!"));
        Ok(provenance)
    }

    pub fn cancel_edit(&mut self) {
        debug!("Edit cancelled");
        self.detail.close();
    }

    pub fn close_modal(&mut self) {
        self.detail.close();
    }

    pub fn delete_confirmation(&self) -> &DeleteConfirmation {
        &self.delete
    }

    pub fn request_delete(&mut self, id: UserId) -> DashboardResult<()> {
        let user = self.find(id)?;
        self.delete.open(user);
        Ok(())
    }

    /// Remove the pending user; local storage is touched only for local users.
    pub fn confirm_delete(&mut self) -> DashboardResult<User> {
        let pending = self
            .delete
            .take()
            .ok_or_else(|| DashboardError::invalid_state("No delete is pending"))?;
        let result = self.repository.delete(pending.id);
        let entry = self.notify_failure(result)?;
        self.refresh();
        self.notify(Notification::success("User deleted successfully!"));
        Ok(entry.user)
    }

    pub fn cancel_delete(&mut self) {
        self.delete.take();
    }

    /// Drain notifications queued since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        info!("{}", notification.message);
        self.notifications.push(notification);
    }

    fn notify_failure<T>(&mut self, result: DashboardResult<T>) -> DashboardResult<T> {
        if let Err(e) = &result {
            warn!("{e}");
            self.notifications.push(Notification::error(e.user_message()));
        }
        result
    }

    fn find(&self, id: UserId) -> DashboardResult<User> {
        self.repository
            .get(id)
            .map(|e| e.user.clone())
            .ok_or_else(|| DashboardError::user_not_found(id))
    }

    fn refresh(&mut self) {
        self.filtered = self
            .repository
            .list()
            .into_iter()
            .filter(|u| matches_query(u, &self.search))
            .collect();
    }
}
